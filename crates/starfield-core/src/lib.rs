pub mod config;
pub mod constants;
pub mod engine;
pub mod nebula;
pub mod pointer;
pub mod recording;
pub mod render_loop;
pub mod stars;
pub mod surface;
pub mod theme;
pub mod viewport;

pub use config::*;
pub use engine::*;
pub use nebula::{FilterOutcome, NebulaBlob, NebulaRenderer};
pub use pointer::PointerTracker;
pub use recording::{DrawCommand, RecordingSurface};
pub use render_loop::*;
pub use stars::{Layer, Particle};
pub use surface::*;
pub use theme::Theme;
pub use viewport::Viewport;
