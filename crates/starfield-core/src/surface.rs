//! Drawing surface abstraction used by the nebula and star renderers.
//!
//! All coordinates are logical (CSS) pixels. Implementations apply the device
//! pixel ratio through the transform installed by [`DrawSurface::set_scale`].

use glam::Vec2;
use smallvec::SmallVec;
use thiserror::Error;

/// Straight-alpha color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn from_rgb(rgb: [u8; 3], a: f32) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    SourceOver,
    /// Additive: overlapping fills brighten instead of occluding.
    Lighter,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Two-circle radial gradient sharing one center.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: SmallVec<[ColorStop; 3]>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Square of side `2 * half` centered on `center`.
    pub fn around(center: Vec2, half: f32) -> Self {
        Self {
            x: center.x - half,
            y: center.y - half,
            width: half * 2.0,
            height: half * 2.0,
        }
    }
}

/// Full-surface blur + saturation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PostFilter {
    pub blur_px: f32,
    pub saturate_pct: f32,
}

#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("post-process filter is not supported by this surface")]
    FilterUnsupported,
    #[error("surface backend error: {0}")]
    Backend(String),
}

pub trait DrawSurface {
    /// Set the backing store to `backing` physical pixels while keeping the
    /// displayed size at `logical` pixels.
    fn resize(&mut self, backing: (u32, u32), logical: (f32, f32));
    /// Install a uniform scale so later calls can use logical coordinates.
    fn set_scale(&mut self, scale: f32);
    fn clear(&mut self, width: f32, height: f32);
    fn set_blend(&mut self, blend: BlendMode);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, rect: Rect);
    /// Apply `filter` over the `width` x `height` logical area. Surfaces that
    /// cannot filter return an error and must leave the pixels untouched.
    fn apply_filter(
        &mut self,
        filter: &PostFilter,
        width: f32,
        height: f32,
    ) -> Result<(), SurfaceError>;
}
