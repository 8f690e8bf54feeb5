// Front-end wiring constants: element ids, media queries, timing.

// Canvas element ids, background first then back/mid/front star layers
pub const NEBULA_CANVAS_ID: &str = "nebula-canvas";
pub const STAR_CANVAS_IDS: [&str; 3] = ["star-canvas-back", "star-canvas-mid", "star-canvas-front"];

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Delay between mounting and the first frame, lets page layout settle
pub const START_DELAY_MS: i32 = 80;
