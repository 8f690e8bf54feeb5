//! Headless frame-cost probe: drives the engine with recording surfaces and
//! logs how long the star pass takes at the default population.
//!
//! Usage: `starfield-native [frames] [width] [height]`

use anyhow::Context;
use instant::Instant;
use starfield_core::{
    FrameHandle, FrameScheduler, RecordingSurface, RenderLoop, StarfieldConfig,
    StarfieldEngine, Surfaces, Theme,
};
use std::time::Duration;

const FRAME_BUDGET: Duration = Duration::from_micros(16_667);
const FRAME_MS: f64 = 1000.0 / 60.0;

/// Fires requested frames one at a time, in order.
#[derive(Default)]
struct ManualScheduler {
    next: i32,
    pending: Option<FrameHandle>,
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending = Some(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

fn arg_or<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match args.get(index) {
        Some(s) => s
            .parse::<T>()
            .with_context(|| format!("invalid argument #{index}: {s:?}")),
        None => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let frames: usize = arg_or(&args, 1, 600)?;
    let width: f32 = arg_or(&args, 2, 1920.0)?;
    let height: f32 = arg_or(&args, 3, 1080.0)?;

    let surfaces = Surfaces {
        background: RecordingSurface::new(),
        layers: [
            RecordingSurface::new(),
            RecordingSurface::new(),
            RecordingSurface::new(),
        ],
    };
    let mut engine =
        StarfieldEngine::new(StarfieldConfig::default(), surfaces, Theme::Dark, false, 42);
    let mut scheduler = ManualScheduler::default();
    let mut render_loop = RenderLoop::new(false);

    render_loop.restart_after_resize(&mut engine, &mut scheduler, (width, height), 1.0, 0.0);
    log::info!(
        "[probe] {}x{} particles={} frames={}",
        width,
        height,
        engine.particle_count(),
        frames
    );

    let mut worst = Duration::ZERO;
    let mut total = Duration::ZERO;
    let mut over_budget = 0usize;
    let mut commands = 0usize;
    for i in 0..frames {
        if scheduler.pending.take().is_none() {
            break;
        }
        // Sweep the pointer so every drift direction is exercised
        let phase = i as f32 / frames.max(1) as f32 * std::f32::consts::TAU;
        engine.on_pointer_move(
            width * (0.5 + 0.5 * phase.cos()),
            height * (0.5 + 0.5 * phase.sin()),
        );

        let t0 = Instant::now();
        render_loop.on_frame(&mut engine, &mut scheduler, i as f64 * FRAME_MS);
        let dt = t0.elapsed();

        total += dt;
        worst = worst.max(dt);
        if dt > FRAME_BUDGET {
            over_budget += 1;
        }
        for layer in engine.layers_mut().iter_mut() {
            commands += layer.surface.take().len();
        }
    }

    // Exercise the theme bridge once so its cost shows up too
    let t0 = Instant::now();
    engine.apply_theme(Theme::Light, frames as f64 * FRAME_MS);
    let theme_cost = t0.elapsed();
    render_loop.cancel(&mut scheduler);

    let avg = total / frames.max(1) as u32;
    log::info!(
        "[probe] avg={:?} worst={:?} over_budget={} draw_calls/frame={} theme_switch={:?}",
        avg,
        worst,
        over_budget,
        commands / frames.max(1),
        theme_cost
    );
    if worst > FRAME_BUDGET {
        log::warn!("[probe] worst frame exceeded the 60Hz budget");
    }
    Ok(())
}
