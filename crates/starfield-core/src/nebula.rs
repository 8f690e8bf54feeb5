//! Soft radial-gradient blobs composited additively onto the background surface.

use crate::constants::*;
use crate::surface::{
    BlendMode, ColorStop, DrawSurface, PostFilter, RadialGradient, Rect, Rgba,
};
use crate::theme::Theme;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::{smallvec, SmallVec};

pub const NEBULA_FILTER: PostFilter = PostFilter {
    blur_px: NEBULA_BLUR_PX,
    saturate_pct: NEBULA_SATURATE_PCT,
};

/// One planned blob, ready to be painted.
#[derive(Clone, Debug, PartialEq)]
pub struct NebulaBlob {
    pub gradient: RadialGradient,
    pub bounds: Rect,
}

pub type NebulaPlan = SmallVec<[NebulaBlob; 4]>;

/// What happened to the post-process on the last draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOutcome {
    Applied,
    Skipped,
}

pub struct NebulaRenderer {
    blob_count: usize,
    rng: StdRng,
}

impl NebulaRenderer {
    pub fn new(blob_count: usize, seed: u64) -> Self {
        Self {
            blob_count,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn blob_count(&self) -> usize {
        self.blob_count
    }

    /// Pick fresh blob placements for `viewport` using `theme`'s palette.
    pub fn plan(&mut self, viewport: &Viewport, theme: Theme) -> NebulaPlan {
        let palette = theme.nebula_palette();
        let (w, h) = (viewport.width, viewport.height);
        let max_dim = viewport.max_dimension();
        (0..self.blob_count)
            .map(|i| {
                let center = Vec2::new(
                    overshoot_sample(&mut self.rng, w),
                    overshoot_sample(&mut self.rng, h),
                );
                let radius =
                    max_dim * (NEBULA_RADIUS_MIN + self.rng.gen::<f32>() * NEBULA_RADIUS_SPAN);
                let gradient = RadialGradient {
                    center,
                    inner_radius: radius * NEBULA_INNER_RADIUS_FRACTION,
                    outer_radius: radius,
                    stops: smallvec![
                        ColorStop {
                            offset: 0.0,
                            color: palette.inner_for(i),
                        },
                        ColorStop {
                            offset: NEBULA_MID_STOP,
                            color: palette.mid,
                        },
                        ColorStop {
                            offset: 1.0,
                            color: Rgba::TRANSPARENT,
                        },
                    ],
                };
                NebulaBlob {
                    gradient,
                    bounds: Rect::around(center, radius),
                }
            })
            .collect()
    }

    /// Clear `surface` and repaint the nebula. The blur pass is optional: when
    /// the surface cannot filter, the unblurred gradients are kept.
    pub fn draw<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        viewport: &Viewport,
        theme: Theme,
    ) -> FilterOutcome {
        surface.clear(viewport.width, viewport.height);
        let plan = self.plan(viewport, theme);
        for blob in &plan {
            surface.set_blend(BlendMode::Lighter);
            surface.fill_radial_gradient(&blob.gradient, blob.bounds);
            surface.set_blend(BlendMode::SourceOver);
        }
        match surface.apply_filter(&NEBULA_FILTER, viewport.width, viewport.height) {
            Ok(()) => FilterOutcome::Applied,
            Err(e) => {
                log::debug!("[nebula] post filter skipped: {}", e);
                FilterOutcome::Skipped
            }
        }
    }
}

/// Uniform over `[-overshoot * extent, (1 + overshoot) * extent]`.
#[inline]
fn overshoot_sample<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    let lo = -NEBULA_EDGE_OVERSHOOT * extent;
    let hi = (1.0 + NEBULA_EDGE_OVERSHOOT) * extent;
    lo + rng.gen::<f32>() * (hi - lo)
}
