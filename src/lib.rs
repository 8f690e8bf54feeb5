#![cfg(target_arch = "wasm32")]
use starfield_core::{RenderLoop, StarfieldConfig, StarfieldEngine, Surfaces, Theme};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod css;
mod dom;
mod events;
mod frame;

use canvas::CanvasSurface;
use constants::{NEBULA_CANVAS_ID, STAR_CANVAS_IDS};
use frame::SharedApp;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web starting");
    Ok(())
}

/// Handle returned to the page's UI layer; theme toggles are forwarded here.
#[wasm_bindgen]
pub struct Starfield {
    app: SharedApp,
}

#[wasm_bindgen]
impl Starfield {
    /// Repaint the nebula and rescale star alpha for the new theme.
    pub fn apply_theme(&self, is_dark: bool) {
        self.app
            .borrow_mut()
            .engine
            .apply_theme(Theme::from_is_dark(is_dark), dom::now_ms());
    }

    /// Cancel the pending frame. Resizes after this restart the loop.
    pub fn stop(&self) {
        self.app.borrow_mut().stop();
    }
}

/// Attach the engine to the page's four canvases and start animating.
#[wasm_bindgen]
pub fn mount_starfield(is_dark: bool) -> Result<Starfield, JsValue> {
    mount(Theme::from_is_dark(is_dark)).map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&e.to_string())
    })
}

fn mount(theme: Theme) -> anyhow::Result<Starfield> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let background = CanvasSurface::new(dom::canvas_by_id(&document, NEBULA_CANVAS_ID)?)?;
    let [back, mid, front] = STAR_CANVAS_IDS;
    let layers = [
        CanvasSurface::new(dom::canvas_by_id(&document, back)?)?,
        CanvasSurface::new(dom::canvas_by_id(&document, mid)?)?,
        CanvasSurface::new(dom::canvas_by_id(&document, front)?)?,
    ];

    let reduced_motion = dom::prefers_reduced_motion(&window);
    let seed: u64 = rand::random();
    let mut engine = StarfieldEngine::new(
        StarfieldConfig::default(),
        Surfaces { background, layers },
        theme,
        reduced_motion,
        seed,
    );
    let (width, height) = dom::viewport_size(&window);
    engine.resize(width, height, dom::device_pixel_ratio(&window));
    log::info!(
        "[mount] {}x{} particles={} reduced_motion={} theme={:?}",
        width,
        height,
        engine.particle_count(),
        reduced_motion,
        theme
    );

    let app = frame::create_app(engine, RenderLoop::new(reduced_motion));
    events::wire_pointer_handlers(&app);
    events::wire_resize(&app);
    frame::start_after_delay(&app);

    Ok(Starfield { app })
}
