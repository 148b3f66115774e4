//! Overlays drawn on top of the primary effect
//!
//! An overlay runs after the effect has filled the buffer. It writes live
//! pixels only and reads the effect output through the shadow copy.

mod sparkle;

pub use sparkle::{
    CAPTURE_SATURATION, FALL_DIM, FIRST_FALLING_STEP, LAST_RISING_STEP, MAX_DELAY, MIN_DELAY,
    SparkleOverlay, SparklePhase, SparkleSlot,
};

use crate::pixels::PixelBuffer;

const OVERLAY_NAME_NONE: &str = "none";
const OVERLAY_NAME_SPARKLE: &str = "sparkle";

pub trait Overlay {
    /// Apply the overlay to a rendered frame
    fn apply<const N: usize>(&mut self, pixels: &mut PixelBuffer<N>);

    /// Drop any in-flight animation
    fn reset(&mut self) {}
}

/// Overlay selector, independent of the primary effect
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayMode {
    #[default]
    None,
    Sparkle,
}

impl OverlayMode {
    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::None => Self::Sparkle,
            Self::Sparkle => Self::None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => OVERLAY_NAME_NONE,
            Self::Sparkle => OVERLAY_NAME_SPARKLE,
        }
    }
}
