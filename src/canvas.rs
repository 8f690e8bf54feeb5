//! [`DrawSurface`] backed by an `HtmlCanvasElement` and its 2D context.

use crate::css;
use glam::Vec2;
use starfield_core::{
    BlendMode, DrawSurface, PostFilter, RadialGradient, Rect, Rgba, SurfaceError,
};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    // Lazily created copy target for the filter pass
    scratch: Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)>,
    scale: f32,
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn set_ctx_prop(ctx: &web::CanvasRenderingContext2d, key: &str, value: &JsValue) -> bool {
    js_sys::Reflect::set(ctx.as_ref(), &JsValue::from_str(key), value).unwrap_or(false)
}

fn backend(e: JsValue) -> SurfaceError {
    SurfaceError::Backend(format!("{:?}", e))
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = context_2d(&canvas)?;
        Ok(Self {
            canvas,
            ctx,
            scratch: None,
            scale: 1.0,
        })
    }

    fn set_fill_style(&self, value: &JsValue) {
        set_ctx_prop(&self.ctx, "fillStyle", value);
    }

    fn scratch(&mut self) -> Result<&(web::HtmlCanvasElement, web::CanvasRenderingContext2d), SurfaceError> {
        if self.scratch.is_none() {
            let document = self
                .canvas
                .owner_document()
                .ok_or_else(|| SurfaceError::Backend("canvas has no document".into()))?;
            let el = document
                .create_element("canvas")
                .map_err(backend)?
                .dyn_into::<web::HtmlCanvasElement>()
                .map_err(|e| backend(e.into()))?;
            let ctx = context_2d(&el).map_err(|e| SurfaceError::Backend(e.to_string()))?;
            self.scratch = Some((el, ctx));
        }
        self.scratch
            .as_ref()
            .ok_or_else(|| SurfaceError::Backend("scratch canvas missing".into()))
    }
}

impl DrawSurface for CanvasSurface {
    fn resize(&mut self, backing: (u32, u32), logical: (f32, f32)) {
        self.canvas.set_width(backing.0);
        self.canvas.set_height(backing.1);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", logical.0));
        _ = style.set_property("height", &format!("{}px", logical.1));
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        let s = scale as f64;
        _ = self.ctx.set_transform(s, 0.0, 0.0, s, 0.0, 0.0);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn set_blend(&mut self, blend: BlendMode) {
        _ = self
            .ctx
            .set_global_composite_operation(css::composite_operation(blend));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        self.set_fill_style(&JsValue::from_str(&css::rgba(color)));
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, rect: Rect) {
        let (cx, cy) = (gradient.center.x as f64, gradient.center.y as f64);
        let g = match self.ctx.create_radial_gradient(
            cx,
            cy,
            gradient.inner_radius as f64,
            cx,
            cy,
            gradient.outer_radius as f64,
        ) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("[canvas] create_radial_gradient failed: {:?}", e);
                return;
            }
        };
        for stop in &gradient.stops {
            _ = g.add_color_stop(stop.offset, &css::rgba(stop.color));
        }
        self.set_fill_style(g.as_ref());
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn apply_filter(
        &mut self,
        filter: &PostFilter,
        _width: f32,
        _height: f32,
    ) -> Result<(), SurfaceError> {
        let has_filter =
            js_sys::Reflect::has(self.ctx.as_ref(), &JsValue::from_str("filter")).unwrap_or(false);
        if !has_filter {
            return Err(SurfaceError::FilterUnsupported);
        }
        let (bw, bh) = (self.canvas.width(), self.canvas.height());
        if bw == 0 || bh == 0 {
            return Ok(());
        }
        let filter_css = css::filter(filter, self.scale);
        let canvas = self.canvas.clone();
        let (scratch, scratch_ctx) = self.scratch()?.clone();
        scratch.set_width(bw);
        scratch.set_height(bh);
        scratch_ctx
            .draw_image_with_html_canvas_element(&canvas, 0.0, 0.0)
            .map_err(backend)?;

        // Redraw the copy through the filter in backing pixel space
        self.ctx.save();
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        set_ctx_prop(&self.ctx, "filter", &JsValue::from_str(&filter_css));
        let applied = js_sys::Reflect::get(self.ctx.as_ref(), &JsValue::from_str("filter"))
            .ok()
            .and_then(|v| v.as_string())
            .map(|v| v != "none")
            .unwrap_or(false);
        if !applied {
            self.ctx.restore();
            return Err(SurfaceError::FilterUnsupported);
        }
        self.ctx.clear_rect(0.0, 0.0, bw as f64, bh as f64);
        let drawn = self
            .ctx
            .draw_image_with_html_canvas_element(&scratch, 0.0, 0.0);
        self.ctx.restore();
        if let Err(e) = drawn {
            // Put the unfiltered pixels back
            self.ctx.save();
            _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
            _ = self
                .ctx
                .draw_image_with_html_canvas_element(&scratch, 0.0, 0.0);
            self.ctx.restore();
            return Err(backend(e));
        }
        Ok(())
    }
}
