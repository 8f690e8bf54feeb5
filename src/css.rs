use starfield_core::{BlendMode, PostFilter, Rgba};

/// CSS `rgba()` string; alpha is clamped to [0, 1].
pub fn rgba(c: Rgba) -> String {
    format!("rgba({},{},{},{})", c.r, c.g, c.b, c.a.clamp(0.0, 1.0))
}

/// CSS filter string. `scale` converts the blur radius to backing pixels.
pub fn filter(f: &PostFilter, scale: f32) -> String {
    format!("blur({}px) saturate({}%)", f.blur_px * scale, f.saturate_pct)
}

#[inline]
pub fn composite_operation(blend: BlendMode) -> &'static str {
    match blend {
        BlendMode::SourceOver => "source-over",
        BlendMode::Lighter => "lighter",
    }
}
