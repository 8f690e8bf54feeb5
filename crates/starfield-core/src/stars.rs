//! Star particles: generation, drift with wrap-around, and per-frame drawing.

use crate::config::{AlphaRescale, LayerConfig};
use crate::constants::*;
use crate::surface::{DrawSurface, Rgba};
use crate::theme::rescale_alpha;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub size: f32,
    pub speed: f32,
    /// Alpha used for drawing; rescaled on theme changes.
    pub alpha: f32,
    /// Alpha drawn at creation. Only read by [`AlphaRescale::FromOrigin`].
    pub origin_alpha: f32,
    /// 0 never twinkles; otherwise the twinkle amplitude.
    pub twinkle: f32,
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &LayerConfig, viewport: &Viewport) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        let size = lerp(config.size[0], config.size[1], rng.gen());
        let speed = lerp(config.speed, config.speed * config.speed_jitter, rng.gen());
        let alpha = lerp(config.alpha[0], config.alpha[1], rng.gen());
        let twinkle = if rng.gen::<f32>() < TWINKLE_PROBABILITY {
            lerp(TWINKLE_AMPLITUDE_MIN, TWINKLE_AMPLITUDE_MAX, rng.gen())
        } else {
            0.0
        };
        Self {
            position,
            size,
            speed,
            alpha,
            origin_alpha: alpha,
            twinkle,
        }
    }

    /// Drift by `speed * pointer_delta` (damped), then wrap to the far edge.
    pub fn advance(&mut self, pointer_delta: Vec2, bounds: Vec2) {
        self.position += self.speed * pointer_delta * DRIFT_DAMPING;
        self.position.x = wrap_coordinate(self.position.x, bounds.x);
        self.position.y = wrap_coordinate(self.position.y, bounds.y);
    }

    pub fn rescale_alpha(&mut self, factor: f32, mode: AlphaRescale) {
        let from = match mode {
            AlphaRescale::Cumulative => self.alpha,
            AlphaRescale::FromOrigin => self.origin_alpha,
        };
        self.alpha = rescale_alpha(from, factor);
    }

    /// Glow, core and (for twinkling stars) a flickering extra dot.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, offset: Vec2, now_ms: f64) {
        let at = self.position + offset;
        surface.fill_circle(
            at,
            self.size * GLOW_RADIUS_SCALE,
            star_color(self.alpha * GLOW_ALPHA_SCALE),
        );
        surface.fill_circle(at, self.size * CORE_RADIUS_SCALE, star_color(self.alpha));
        if self.twinkle != 0.0 {
            let phase = now_ms / TWINKLE_ALPHA_PERIOD_MS + (self.size * TWINKLE_SIZE_PHASE) as f64;
            let t = ((phase.sin() + 1.0) / 2.0) as f32;
            let jitter = (now_ms / TWINKLE_JITTER_PERIOD_MS + self.position.x as f64).sin() as f32
                * TWINKLE_JITTER_PX;
            surface.fill_circle(
                Vec2::new(at.x + jitter, at.y),
                self.size * TWINKLE_RADIUS_SCALE,
                star_color(self.alpha * (TWINKLE_ALPHA_BASE + TWINKLE_ALPHA_SPAN * t)),
            );
        }
    }
}

#[inline]
fn star_color(alpha: f32) -> Rgba {
    Rgba::from_rgb(STAR_RGB, alpha)
}

/// Wrap a coordinate that left `[-margin, extent + margin]` to the opposite edge.
#[inline]
pub fn wrap_coordinate(v: f32, extent: f32) -> f32 {
    if v < -WRAP_MARGIN_PX {
        extent + WRAP_MARGIN_PX
    } else if v > extent + WRAP_MARGIN_PX {
        -WRAP_MARGIN_PX
    } else {
        v
    }
}

/// One depth layer: its configuration, its particles and the surface it draws to.
pub struct Layer<S> {
    pub config: LayerConfig,
    pub particles: Vec<Particle>,
    pub surface: S,
}

impl<S: DrawSurface> Layer<S> {
    pub fn new(config: LayerConfig, surface: S) -> Self {
        Self {
            config,
            particles: Vec::new(),
            surface,
        }
    }

    /// Replace the whole population with `config.count` fresh particles.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: &Viewport) {
        self.particles.clear();
        self.particles.reserve(self.config.count);
        for _ in 0..self.config.count {
            self.particles.push(Particle::spawn(rng, &self.config, viewport));
        }
    }

    pub fn advance_and_draw(
        &mut self,
        offset: Vec2,
        pointer_delta: Vec2,
        viewport: &Viewport,
        now_ms: f64,
    ) {
        self.surface.clear(viewport.width, viewport.height);
        let bounds = viewport.size();
        for p in &mut self.particles {
            p.advance(pointer_delta, bounds);
            p.draw(&mut self.surface, offset, now_ms);
        }
    }

    pub fn rescale_alpha(&mut self, factor: f32, mode: AlphaRescale) {
        for p in &mut self.particles {
            p.rescale_alpha(factor, mode);
        }
    }
}

/// Advance every layer one tick and redraw it at its parallax offset.
pub fn advance_and_draw<S: DrawSurface>(
    layers: &mut [Layer<S>],
    parallax: &[Vec2; 3],
    pointer_delta: Vec2,
    viewport: &Viewport,
    now_ms: f64,
) {
    for (layer, offset) in layers.iter_mut().zip(parallax.iter()) {
        layer.advance_and_draw(*offset, pointer_delta, viewport, now_ms);
    }
}
