//! Theme selection and the colors/alpha scaling each theme implies.

use crate::constants::{ALPHA_FLOOR, DARK_ALPHA_FACTOR, LIGHT_ALPHA_FACTOR};
use crate::surface::Rgba;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Nebula colors for one theme: inner stops cycle by blob index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NebulaPalette {
    pub inner: [Rgba; 3],
    pub mid: Rgba,
}

const DARK_PALETTE: NebulaPalette = NebulaPalette {
    inner: [
        Rgba::new(12, 28, 64, 0.14),
        Rgba::new(30, 60, 110, 0.12),
        Rgba::new(46, 160, 255, 0.10),
    ],
    mid: Rgba::new(6, 12, 30, 0.03),
};

const LIGHT_PALETTE: NebulaPalette = NebulaPalette {
    inner: [
        Rgba::new(220, 235, 255, 0.22),
        Rgba::new(190, 215, 255, 0.18),
        Rgba::new(120, 170, 230, 0.10),
    ],
    mid: Rgba::new(240, 250, 255, 0.05),
};

impl Theme {
    #[inline]
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn nebula_palette(self) -> &'static NebulaPalette {
        match self {
            Theme::Dark => &DARK_PALETTE,
            Theme::Light => &LIGHT_PALETTE,
        }
    }

    /// Multiplier applied to star alpha when this theme is activated.
    pub fn alpha_factor(self) -> f32 {
        match self {
            Theme::Dark => DARK_ALPHA_FACTOR,
            Theme::Light => LIGHT_ALPHA_FACTOR,
        }
    }
}

impl NebulaPalette {
    #[inline]
    pub fn inner_for(&self, blob_index: usize) -> Rgba {
        self.inner[blob_index % self.inner.len()]
    }
}

#[inline]
pub fn rescale_alpha(alpha: f32, factor: f32) -> f32 {
    (alpha * factor).max(ALPHA_FLOOR)
}
