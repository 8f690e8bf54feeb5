use crate::constants::REDUCED_MOTION_QUERY;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

/// Window inner size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

#[inline]
pub fn device_pixel_ratio(window: &web::Window) -> f32 {
    window.device_pixel_ratio() as f32
}

/// Read once at mount; later changes to the preference are not observed.
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(mql)) => mql.matches(),
        _ => false,
    }
}

#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
