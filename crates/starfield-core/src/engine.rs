//! The starfield engine: owns the surfaces, particle layers, pointer state and
//! nebula renderer, and exposes the resize / tick / theme entry points.

use crate::config::{AlphaRescale, StarfieldConfig};
use crate::nebula::{FilterOutcome, NebulaRenderer};
use crate::pointer::PointerTracker;
use crate::render_loop::FrameTarget;
use crate::stars::{self, Layer};
use crate::surface::DrawSurface;
use crate::theme::Theme;
use crate::viewport::Viewport;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The four drawing surfaces the engine renders into.
pub struct Surfaces<S> {
    pub background: S,
    /// Back, mid, front.
    pub layers: [S; 3],
}

pub struct StarfieldEngine<S> {
    config: StarfieldConfig,
    viewport: Viewport,
    background: S,
    layers: [Layer<S>; 3],
    pointer: PointerTracker,
    nebula: NebulaRenderer,
    rng: StdRng,
    theme: Theme,
}

impl<S: DrawSurface> StarfieldEngine<S> {
    /// Layers start empty; call [`StarfieldEngine::resize`] before the first frame.
    pub fn new(
        config: StarfieldConfig,
        surfaces: Surfaces<S>,
        theme: Theme,
        reduced_motion: bool,
        seed: u64,
    ) -> Self {
        let Surfaces {
            background,
            layers: [back, mid, front],
        } = surfaces;
        let [back_cfg, mid_cfg, front_cfg] = config.stars.to_array();
        let layers = [
            Layer::new(back_cfg, back),
            Layer::new(mid_cfg, mid),
            Layer::new(front_cfg, front),
        ];
        // Separate streams so nebula redraws do not perturb star generation
        let nebula_seed = seed ^ 0x9E37_79B9_7F4A_7C15;
        Self {
            pointer: PointerTracker::new(config.cursor_lag, reduced_motion),
            nebula: NebulaRenderer::new(config.nebula.blobs, nebula_seed),
            rng: StdRng::seed_from_u64(seed),
            viewport: Viewport::default(),
            background,
            layers,
            theme,
            config,
        }
    }

    /// Resize every surface to the new viewport, regenerate all particles and
    /// redraw the nebula once.
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        self.viewport = Viewport::new(width, height, device_pixel_ratio);
        let backing = self.viewport.backing_size();
        let logical = (self.viewport.width, self.viewport.height);
        let scale = self.viewport.device_pixel_ratio;

        self.background.resize(backing, logical);
        self.background.set_scale(scale);
        for layer in &mut self.layers {
            layer.surface.resize(backing, logical);
            layer.surface.set_scale(scale);
            layer.regenerate(&mut self.rng, &self.viewport);
            // Fresh particles carry their creation alpha; derive the themed value
            if self.config.alpha_rescale == AlphaRescale::FromOrigin {
                layer.rescale_alpha(self.theme.alpha_factor(), AlphaRescale::FromOrigin);
            }
        }
        log::debug!(
            "[resize] {}x{} dpr={:.2} backing={}x{} particles={}",
            self.viewport.width,
            self.viewport.height,
            scale,
            backing.0,
            backing.1,
            self.particle_count()
        );
        self.draw_nebula();
    }

    pub fn draw_nebula(&mut self) -> FilterOutcome {
        self.nebula
            .draw(&mut self.background, &self.viewport, self.theme)
    }

    /// One star pass using the current smoothed pointer, without smoothing.
    pub fn advance_and_draw(&mut self, now_ms: f64) {
        let parallax = self.pointer.parallax_offsets(self.config.max_parallax);
        let delta = self.pointer.delta();
        stars::advance_and_draw(&mut self.layers, &parallax, delta, &self.viewport, now_ms);
    }

    /// Theme bridge: repaint the nebula, rescale star alpha, redraw once.
    pub fn apply_theme(&mut self, theme: Theme, now_ms: f64) {
        self.theme = theme;
        log::info!("[theme] {:?}", theme);
        self.draw_nebula();
        let factor = theme.alpha_factor();
        for layer in &mut self.layers {
            layer.rescale_alpha(factor, self.config.alpha_rescale);
        }
        self.advance_and_draw(now_ms);
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.pointer.on_pointer_move(
            client_x,
            client_y,
            self.viewport.width,
            self.viewport.height,
        );
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.on_pointer_leave();
    }

    pub fn particle_count(&self) -> usize {
        self.layers.iter().map(|l| l.particles.len()).sum()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn layers(&self) -> &[Layer<S>; 3] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer<S>; 3] {
        &mut self.layers
    }

    pub fn background(&self) -> &S {
        &self.background
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }
}

impl<S: DrawSurface> FrameTarget for StarfieldEngine<S> {
    fn tick(&mut self, now_ms: f64) {
        self.pointer.tick();
        self.advance_and_draw(now_ms);
    }

    fn render_static(&mut self, now_ms: f64) {
        self.advance_and_draw(now_ms);
    }

    fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        StarfieldEngine::resize(self, width, height, device_pixel_ratio);
    }
}
