//! Two-tone palette effect
//!
//! Bands are grouped in runs of five. Runs alternate between the two tones of
//! the palette, and the tones trade places whenever the beat phase flips.

use super::{Effect, FrameContext, render_bass};
use crate::{color::Hsv, pixels::PixelBuffer};

const PALETTE_NAME_CHRISTMAS: &str = "christmas";
const PALETTE_NAME_HALLOWEEN: &str = "halloween";
const PALETTE_NAME_OCEAN: &str = "ocean";

/// Band interval that starts a run of tone one
const TONE_ONE_EVERY: usize = 10;
/// Band interval that starts a run of tone two
const TONE_TWO_EVERY: usize = 5;

/// Hue and saturation pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub hue: u8,
    pub sat: u8,
}

impl Tone {
    pub const fn new(hue: u8, sat: u8) -> Self {
        Self { hue, sat }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoTonePalette {
    pub one: Tone,
    pub two: Tone,
    /// Bass hue the strip restarts from when the palette is selected
    pub base_hue: u8,
    /// Hue increment per pixel within a run
    pub step: u8,
}

impl Default for TwoTonePalette {
    fn default() -> Self {
        PalettePreset::Christmas.palette()
    }
}

/// Named two-tone palettes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PalettePreset {
    /// Red and green
    Christmas,
    /// Orange and purple
    Halloween,
    /// Aqua and deep blue, slow hue drift
    Ocean,
}

impl PalettePreset {
    pub const fn palette(self) -> TwoTonePalette {
        match self {
            Self::Christmas => TwoTonePalette {
                one: Tone::new(0, 255),
                two: Tone::new(96, 255),
                base_hue: 0,
                step: 2,
            },
            Self::Halloween => TwoTonePalette {
                one: Tone::new(24, 255),
                two: Tone::new(192, 255),
                base_hue: 24,
                step: 2,
            },
            Self::Ocean => TwoTonePalette {
                one: Tone::new(128, 255),
                two: Tone::new(160, 200),
                base_hue: 140,
                step: 1,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Christmas => PALETTE_NAME_CHRISTMAS,
            Self::Halloween => PALETTE_NAME_HALLOWEEN,
            Self::Ocean => PALETTE_NAME_OCEAN,
        }
    }

    /// Case-insensitive lookup by name
    pub fn parse_from_str(s: &str) -> Option<Self> {
        [Self::Christmas, Self::Halloween, Self::Ocean]
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TwoToneEffect {
    palette: TwoTonePalette,
}

impl TwoToneEffect {
    pub const fn new(palette: TwoTonePalette) -> Self {
        Self { palette }
    }

    /// Tones in drawing order for the given beat phase
    const fn tones(&self, flipped: bool) -> (Tone, Tone) {
        if flipped {
            (self.palette.two, self.palette.one)
        } else {
            (self.palette.one, self.palette.two)
        }
    }
}

impl Effect for TwoToneEffect {
    const USES_BASS: bool = true;

    fn render<const N: usize>(&self, frame: &FrameContext<'_>, pixels: &mut PixelBuffer<N>) {
        let geometry = frame.geometry;
        let mut index = render_bass(frame, pixels);

        let (one, two) = self.tones(frame.beat_phase);
        let mut tone = one;
        let mut hue = tone.hue;
        let mut last = Hsv::new(hue, tone.sat, frame.last_band());

        for band in 0..geometry.bands() {
            if band % TONE_ONE_EVERY == 0 {
                tone = one;
                hue = tone.hue;
            } else if band % TONE_TWO_EVERY == 0 {
                tone = two;
                hue = tone.hue;
            }

            let val = frame.band(band);
            for _ in 0..geometry.leds_per_band() {
                last = Hsv::new(hue, tone.sat, val);
                pixels.write_mirrored(index, last);
                hue = hue.wrapping_add(self.palette.step);
                index += 1;
            }
        }

        if let Some(center) = geometry.center() {
            pixels.write(center, last);
        }
    }
}
