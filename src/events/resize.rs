use crate::dom;
use crate::frame::SharedApp;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_resize(app: &SharedApp) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        let size = dom::viewport_size(&w);
        let dpr = dom::device_pixel_ratio(&w);
        app.borrow_mut().restart_after_resize(size, dpr);
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
