//! Primary effects
//!
//! Exactly one primary effect draws each frame. Effects are small `Copy`
//! values rebuilt from [`EffectState`](crate::state::EffectState) whenever a
//! frame starts, and are dispatched through [`EffectSlot`] to avoid trait
//! objects.

mod solid;
mod spectrum;
mod two_tone;

pub use solid::{OFF_COLOR, SolidEffect};
pub use spectrum::{Gradient, SpectrumEffect};
pub use two_tone::{PalettePreset, Tone, TwoToneEffect, TwoTonePalette};

use crate::color::Hsv;
use crate::geometry::StripGeometry;
use crate::pixels::PixelBuffer;

const EFFECT_NAME_SPECTRUM: &str = "spectrum";
const EFFECT_NAME_TWO_TONE: &str = "two_tone";
const EFFECT_NAME_SOLID: &str = "solid";
const EFFECT_NAME_OFF: &str = "off";

/// Saturation of band and bass pixels
pub(crate) const FULL_SATURATION: u8 = 255;

/// Per-frame inputs shared by all effects
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub geometry: &'a StripGeometry,
    pub spectrum: &'a [u8],
    pub beat_intensity: u8,
    pub beat_phase: bool,
    pub bass_hue: u8,
}

impl FrameContext<'_> {
    /// Magnitude of `band`, or 0 if the spectrum frame is too short
    pub fn band(&self, band: usize) -> u8 {
        self.spectrum.get(band).copied().unwrap_or(0)
    }

    /// Magnitude of the centermost band
    pub fn last_band(&self) -> u8 {
        self.band(self.geometry.bands().saturating_sub(1))
    }
}

pub trait Effect {
    /// Set if the effect draws the beat pixels at both ends
    ///
    /// The rolling bass hue only advances while such an effect is active.
    const USES_BASS: bool = false;

    /// Render a single frame
    fn render<const N: usize>(&self, frame: &FrameContext<'_>, pixels: &mut PixelBuffer<N>);
}

/// Draw the beat pixels at both ends of the strip
///
/// Returns the index of the first pixel after the bass run.
pub(crate) fn render_bass<const N: usize>(
    frame: &FrameContext<'_>,
    pixels: &mut PixelBuffer<N>,
) -> usize {
    let color = Hsv::new(frame.bass_hue, FULL_SATURATION, frame.beat_intensity);
    let bass_leds = frame.geometry.bass_leds();
    for index in 0..bass_leds {
        pixels.write_mirrored(index, color);
    }
    bass_leds
}

/// Primary effect selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EffectMode {
    /// Frequency mapped rainbow bands
    #[default]
    Spectrum,
    /// Two alternating hues swapped every few beats
    TwoTone,
    /// One color on every pixel
    Solid,
    /// All pixels dark
    Off,
}

impl EffectMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spectrum => EFFECT_NAME_SPECTRUM,
            Self::TwoTone => EFFECT_NAME_TWO_TONE,
            Self::Solid => EFFECT_NAME_SOLID,
            Self::Off => EFFECT_NAME_OFF,
        }
    }
}

/// Effect slot - enum containing all renderable effects
#[derive(Debug, Clone, Copy)]
pub enum EffectSlot {
    Spectrum(SpectrumEffect),
    TwoTone(TwoToneEffect),
    Solid(SolidEffect),
}

impl EffectSlot {
    /// Returns if the effect draws the beat pixels
    ///
    /// Derived from each effect's `Effect::USES_BASS` constant.
    pub fn uses_bass(&self) -> bool {
        match self {
            Self::Spectrum(_) => SpectrumEffect::USES_BASS,
            Self::TwoTone(_) => TwoToneEffect::USES_BASS,
            Self::Solid(_) => SolidEffect::USES_BASS,
        }
    }

    /// Render the current effect
    pub fn render<const N: usize>(&self, frame: &FrameContext<'_>, pixels: &mut PixelBuffer<N>) {
        match self {
            Self::Spectrum(effect) => effect.render(frame, pixels),
            Self::TwoTone(effect) => effect.render(frame, pixels),
            Self::Solid(effect) => effect.render(frame, pixels),
        }
    }
}
