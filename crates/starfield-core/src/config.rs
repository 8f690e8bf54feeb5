//! Static engine configuration supplied at construction.
//!
//! Nothing here is validated. Inverted ranges are sampled with a plain lerp and
//! therefore produce a reversed but valid distribution; a zero count yields an
//! empty layer.

use crate::constants::*;

/// Population parameters for one depth layer.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerConfig {
    pub count: usize,
    pub size: [f32; 2],
    pub speed: f32,
    pub speed_jitter: f32,
    pub alpha: [f32; 2],
}

impl LayerConfig {
    pub const fn new(count: usize, size: [f32; 2], speed: f32, alpha: [f32; 2]) -> Self {
        Self {
            count,
            size,
            speed,
            speed_jitter: DEFAULT_SPEED_JITTER,
            alpha,
        }
    }
}

/// The three depth layers, back to front.
#[derive(Clone, Debug, PartialEq)]
pub struct StarLayers {
    pub back: LayerConfig,
    pub mid: LayerConfig,
    pub front: LayerConfig,
}

impl StarLayers {
    pub fn to_array(&self) -> [LayerConfig; 3] {
        [self.back.clone(), self.mid.clone(), self.front.clone()]
    }
}

impl Default for StarLayers {
    fn default() -> Self {
        Self {
            back: LayerConfig::new(220, [0.3, 1.1], 0.02, [0.06, 0.25]),
            mid: LayerConfig::new(160, [0.6, 1.6], 0.06, [0.12, 0.42]),
            front: LayerConfig::new(100, [0.9, 2.4], 0.14, [0.2, 0.95]),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NebulaConfig {
    pub blobs: usize,
}

impl Default for NebulaConfig {
    fn default() -> Self {
        Self {
            blobs: DEFAULT_NEBULA_BLOBS,
        }
    }
}

/// How a theme change rescales particle alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlphaRescale {
    /// Multiply the current alpha. Repeated toggles compound and do not
    /// restore the original value.
    #[default]
    Cumulative,
    /// Derive alpha from the value drawn at creation, so toggles are reversible.
    FromOrigin,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub stars: StarLayers,
    pub nebula: NebulaConfig,
    pub cursor_lag: f32,
    pub max_parallax: f32,
    pub alpha_rescale: AlphaRescale,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            stars: StarLayers::default(),
            nebula: NebulaConfig::default(),
            cursor_lag: DEFAULT_CURSOR_LAG,
            max_parallax: DEFAULT_MAX_PARALLAX_PX,
            alpha_rescale: AlphaRescale::default(),
        }
    }
}
