//! Raw and smoothed pointer position, and the parallax offsets derived from it.

use crate::constants::{DEPTH_BASE, DEPTH_STEP};
use glam::Vec2;

const CENTER: Vec2 = Vec2::new(0.5, 0.5);

#[derive(Clone, Debug)]
pub struct PointerTracker {
    raw: Vec2,
    smoothed: Vec2,
    lag: f32,
    reduced_motion: bool,
}

impl PointerTracker {
    /// Both positions start at the viewport center.
    pub fn new(lag: f32, reduced_motion: bool) -> Self {
        Self {
            raw: CENTER,
            smoothed: CENTER,
            lag,
            reduced_motion,
        }
    }

    /// Store the normalized, clamped pointer position. Events reported against
    /// an empty viewport are dropped.
    pub fn on_pointer_move(
        &mut self,
        client_x: f32,
        client_y: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) {
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            return;
        }
        let x = client_x / viewport_width;
        let y = client_y / viewport_height;
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        self.raw = Vec2::new(x.clamp(0.0, 1.0), y.clamp(0.0, 1.0));
    }

    pub fn on_pointer_leave(&mut self) {}

    /// Move the smoothed position toward the raw one; snaps under reduced motion.
    pub fn tick(&mut self) {
        if self.reduced_motion {
            self.smoothed = self.raw;
        } else {
            self.smoothed += (self.raw - self.smoothed) * self.lag;
        }
    }

    #[inline]
    pub fn effective_lag(&self) -> f32 {
        if self.reduced_motion {
            1.0
        } else {
            self.lag
        }
    }

    #[inline]
    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    /// Signed offset of the smoothed pointer from center, each axis in [-0.5, 0.5].
    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.smoothed - CENTER
    }

    pub fn parallax_offset(&self, layer_index: usize, max_parallax: f32) -> Vec2 {
        self.delta() * max_parallax * depth_factor(layer_index)
    }

    pub fn parallax_offsets(&self, max_parallax: f32) -> [Vec2; 3] {
        [0, 1, 2].map(|i| self.parallax_offset(i, max_parallax))
    }
}

/// Back layer (0) moves least, front layer moves most.
#[inline]
pub fn depth_factor(layer_index: usize) -> f32 {
    DEPTH_BASE + DEPTH_STEP * layer_index as f32
}
