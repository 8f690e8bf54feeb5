use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use glam::Vec2;

/// Logical viewport size and the (clamped) device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            device_pixel_ratio: clamp_device_pixel_ratio(device_pixel_ratio),
        }
    }

    /// Physical backing size, floored like the canvas width/height attributes.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.device_pixel_ratio).floor() as u32,
            (self.height * self.device_pixel_ratio).floor() as u32,
        )
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn max_dimension(&self) -> f32 {
        self.width.max(self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// Missing or non-positive ratios fall back to 1; dense displays are capped.
#[inline]
pub fn clamp_device_pixel_ratio(dpr: f32) -> f32 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}
