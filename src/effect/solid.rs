//! Static color fill
//!
//! Ignores the spectrum and beat entirely. `Off` renders through this effect
//! with [`OFF_COLOR`].

use super::{Effect, FrameContext};
use crate::{color::Hsv, pixels::PixelBuffer};

/// Color drawn while the strip is off
pub const OFF_COLOR: Hsv = Hsv::new(0, 255, 0);

#[derive(Debug, Clone, Copy)]
pub struct SolidEffect {
    color: Hsv,
}

impl SolidEffect {
    pub const fn new(color: Hsv) -> Self {
        Self { color }
    }

    pub const fn off() -> Self {
        Self::new(OFF_COLOR)
    }
}

impl Default for SolidEffect {
    fn default() -> Self {
        Self::off()
    }
}

impl Effect for SolidEffect {
    fn render<const N: usize>(&self, _frame: &FrameContext<'_>, pixels: &mut PixelBuffer<N>) {
        pixels.fill(self.color);
    }
}
