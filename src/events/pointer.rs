use crate::frame::SharedApp;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(app: &SharedApp) {
    wire_pointermove(app);
    wire_pointerleave(app);
}

fn wire_pointermove(app: &SharedApp) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        app.borrow_mut()
            .engine
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerleave(app: &SharedApp) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        app.borrow_mut().engine.on_pointer_leave();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
