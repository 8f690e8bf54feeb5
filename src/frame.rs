use crate::canvas::CanvasSurface;
use crate::constants::START_DELAY_MS;
use crate::dom;
use starfield_core::{FrameHandle, FrameScheduler, RenderLoop, StarfieldEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` / `cancelAnimationFrame` behind the core scheduler trait.
pub struct RafScheduler {
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let window = web::window()?;
        let callback = self.callback.borrow();
        let cb = callback.as_ref()?;
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("request_animation_frame error: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.0);
        }
    }
}

pub struct App {
    pub engine: StarfieldEngine<CanvasSurface>,
    pub render_loop: RenderLoop,
    pub scheduler: RafScheduler,
}

pub type SharedApp = Rc<RefCell<App>>;

impl App {
    /// Cancel the pending frame, rebuild surfaces for the new size and restart.
    pub fn restart_after_resize(&mut self, size: (f32, f32), device_pixel_ratio: f32) {
        let App {
            engine,
            render_loop,
            scheduler,
        } = self;
        render_loop.restart_after_resize(engine, scheduler, size, device_pixel_ratio, dom::now_ms());
    }

    pub fn start(&mut self) {
        let App {
            engine,
            render_loop,
            scheduler,
        } = self;
        render_loop.start(engine, scheduler, dom::now_ms());
    }

    pub fn stop(&mut self) {
        self.render_loop.cancel(&mut self.scheduler);
    }
}

/// Build the shared app and install the frame callback it schedules.
pub fn create_app(engine: StarfieldEngine<CanvasSurface>, render_loop: RenderLoop) -> SharedApp {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let app = Rc::new(RefCell::new(App {
        engine,
        render_loop,
        scheduler: RafScheduler {
            callback: callback.clone(),
        },
    }));
    let app_tick = app.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let mut app = app_tick.borrow_mut();
        let App {
            engine,
            render_loop,
            scheduler,
        } = &mut *app;
        render_loop.on_frame(engine, scheduler, dom::now_ms());
    }) as Box<dyn FnMut(f64)>));
    app
}

/// Start the loop (or the static frame) once the start delay has passed.
pub fn start_after_delay(app: &SharedApp) {
    let app = app.clone();
    let cb = Closure::once_into_js(move || app.borrow_mut().start());
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            START_DELAY_MS,
        );
    }
}
