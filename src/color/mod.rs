//! Pixel color types
//!
//! The engine works in 8-bit HSV end to end. RGB only appears at the driver
//! boundary, where [`to_rgb`] converts through `smart_leds`.

use smart_leds::hsv::{Hsv as LedHsv, hsv2rgb};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// 8-bit hue/saturation/value triple
///
/// Hue is a 0-255 color wheel and wraps; saturation and value saturate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hsv {
    pub hue: u8,
    pub sat: u8,
    pub val: u8,
}

impl Hsv {
    /// Fully dark pixel
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(hue: u8, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }
}

impl From<Hsv> for LedHsv {
    fn from(color: Hsv) -> Self {
        LedHsv {
            hue: color.hue,
            sat: color.sat,
            val: color.val,
        }
    }
}

/// Convert a single HSV pixel to RGB
pub fn to_rgb(color: Hsv) -> Rgb {
    hsv2rgb(color.into())
}

/// Convert a rendered frame into an RGB buffer
///
/// Converts `min(frame.len(), out.len())` pixels and returns that count.
pub fn frame_to_rgb(frame: &[Hsv], out: &mut [Rgb]) -> usize {
    let count = frame.len().min(out.len());
    for (dst, src) in out.iter_mut().zip(frame) {
        *dst = to_rgb(*src);
    }
    count
}
