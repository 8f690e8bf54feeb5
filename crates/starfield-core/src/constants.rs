// Shared tuning constants for the starfield and nebula.

// Viewport
pub const MAX_DEVICE_PIXEL_RATIO: f32 = 2.0; // caps backing store size on dense displays

// Star motion
pub const WRAP_MARGIN_PX: f32 = 10.0; // particles wrap once this far outside the viewport
pub const DRIFT_DAMPING: f32 = 0.9; // scales pointer offset into per-tick drift
pub const DEFAULT_SPEED_JITTER: f32 = 1.6; // speed is drawn from [speed, speed * jitter]

// Parallax depth factor: DEPTH_BASE + DEPTH_STEP * layer_index
pub const DEPTH_BASE: f32 = 0.2;
pub const DEPTH_STEP: f32 = 0.45;

// Star appearance
pub const GLOW_RADIUS_SCALE: f32 = 0.9;
pub const GLOW_ALPHA_SCALE: f32 = 0.45;
pub const CORE_RADIUS_SCALE: f32 = 0.45;
pub const STAR_RGB: [u8; 3] = [255, 255, 255];

// Twinkle
pub const TWINKLE_PROBABILITY: f32 = 0.08;
pub const TWINKLE_AMPLITUDE_MIN: f32 = 0.4;
pub const TWINKLE_AMPLITUDE_MAX: f32 = 1.0;
pub const TWINKLE_ALPHA_PERIOD_MS: f64 = 420.0;
pub const TWINKLE_JITTER_PERIOD_MS: f64 = 320.0;
pub const TWINKLE_SIZE_PHASE: f32 = 10.0; // size-dependent phase offset
pub const TWINKLE_ALPHA_BASE: f32 = 0.25;
pub const TWINKLE_ALPHA_SPAN: f32 = 0.7;
pub const TWINKLE_JITTER_PX: f32 = 0.2;
pub const TWINKLE_RADIUS_SCALE: f32 = 0.55;

// Theme
pub const ALPHA_FLOOR: f32 = 0.05;
pub const DARK_ALPHA_FACTOR: f32 = 1.0;
pub const LIGHT_ALPHA_FACTOR: f32 = 0.45;

// Nebula layout
pub const DEFAULT_NEBULA_BLOBS: usize = 3;
pub const NEBULA_EDGE_OVERSHOOT: f32 = 0.2; // blob centers may sit this fraction past each edge
pub const NEBULA_RADIUS_MIN: f32 = 0.6; // fraction of max(width, height)
pub const NEBULA_RADIUS_SPAN: f32 = 0.6;
pub const NEBULA_INNER_RADIUS_FRACTION: f32 = 0.08;
pub const NEBULA_MID_STOP: f32 = 0.35;

// Nebula post-process
pub const NEBULA_BLUR_PX: f32 = 26.0;
pub const NEBULA_SATURATE_PCT: f32 = 120.0;

// Pointer
pub const DEFAULT_CURSOR_LAG: f32 = 0.08;
pub const DEFAULT_MAX_PARALLAX_PX: f32 = 36.0;
