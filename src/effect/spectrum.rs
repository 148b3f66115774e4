//! Frequency mapped rainbow
//!
//! Bands run from the bass pixels inward, lowest band outermost, with the hue
//! climbing one gradient step per pixel pair. Both halves are mirror images.

use super::{Effect, FULL_SATURATION, FrameContext, render_bass};
use crate::{color::Hsv, pixels::PixelBuffer};

/// Hue range spread across all band pixels of one half
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: u8,
    pub end: u8,
}

impl Gradient {
    pub const DEFAULT: Self = Self {
        start: 30,
        end: 210,
    };
}

impl Default for Gradient {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SpectrumEffect {
    gradient: Gradient,
}

impl SpectrumEffect {
    pub const fn new(gradient: Gradient) -> Self {
        Self { gradient }
    }
}

impl Effect for SpectrumEffect {
    const USES_BASS: bool = true;

    fn render<const N: usize>(&self, frame: &FrameContext<'_>, pixels: &mut PixelBuffer<N>) {
        let geometry = frame.geometry;
        let mut index = render_bass(frame, pixels);

        let step = geometry.color_step(self.gradient.start, self.gradient.end);
        let mut hue = self.gradient.start;
        let mut last = Hsv::new(hue, FULL_SATURATION, frame.last_band());

        for band in 0..geometry.bands() {
            let val = frame.band(band);
            for _ in 0..geometry.leds_per_band() {
                last = Hsv::new(hue, FULL_SATURATION, val);
                pixels.write_mirrored(index, last);
                hue = hue.wrapping_add(step);
                index += 1;
            }
        }

        if let Some(center) = geometry.center() {
            pixels.write(center, last);
        }
    }
}
