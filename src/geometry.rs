//! Strip layout
//!
//! The strip is split into two mirrored halves. Each half starts with the bass
//! pixels at the physical end, followed by one run of `leds_per_band` pixels
//! per frequency band, lowest band outermost. An odd strip has one extra pixel
//! in the exact center.

/// Derived strip layout, computed once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripGeometry {
    len: usize,
    bands: usize,
    leds_per_band: usize,
    bass_leds: usize,
    extra_leds: usize,
}

impl StripGeometry {
    /// Compute the layout for `len` pixels and `bands` frequency bands
    pub const fn new(len: usize, bands: usize) -> Self {
        let half = len / 2;
        let leds_per_band = half / (bands + 1);
        let bass_leds = half - bands * leds_per_band;
        let extra_leds = len - 2 * (bands * leds_per_band + bass_leds);

        Self {
            len,
            bands,
            leds_per_band,
            bass_leds,
            extra_leds,
        }
    }

    /// Total number of pixels
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of frequency bands
    pub const fn bands(&self) -> usize {
        self.bands
    }

    /// Pixels per band on each half
    pub const fn leds_per_band(&self) -> usize {
        self.leds_per_band
    }

    /// Beat pixels at each physical end
    pub const fn bass_leds(&self) -> usize {
        self.bass_leds
    }

    /// 0 for even strips, 1 for odd strips
    pub const fn extra_leds(&self) -> usize {
        self.extra_leds
    }

    /// Number of pixels in one mirrored half (center pixel excluded)
    pub const fn half(&self) -> usize {
        self.len / 2
    }

    /// Index of the unpaired center pixel, if the strip has one
    pub const fn center(&self) -> Option<usize> {
        if self.extra_leds == 1 {
            Some(self.half())
        } else {
            None
        }
    }

    /// Index of the pixel mirroring `index` on the other half
    pub const fn mirror_of(&self, index: usize) -> usize {
        self.len.saturating_sub(1).saturating_sub(index)
    }

    /// Hue increment per pixel pair spreading `start..end` over all band pixels
    pub fn color_step(&self, start: u8, end: u8) -> u8 {
        let pixels = self.leds_per_band * self.bands;
        if pixels == 0 {
            return 0;
        }
        let span = usize::from(end.saturating_sub(start));
        u8::try_from(span / pixels).unwrap_or(u8::MAX)
    }
}

/// Pixel position that can never leave `[0, len - 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelIndex {
    value: usize,
    last: usize,
}

impl PixelIndex {
    /// Clamp `value` into a strip of `len` pixels
    pub const fn clamped(value: usize, len: usize) -> Self {
        let last = len.saturating_sub(1);
        let value = if value > last { last } else { value };
        Self { value, last }
    }

    pub const fn get(self) -> usize {
        self.value
    }

    /// Left neighbor, saturating at the first pixel
    #[must_use]
    pub const fn prev(self) -> Self {
        Self {
            value: self.value.saturating_sub(1),
            last: self.last,
        }
    }

    /// Right neighbor, saturating at the last pixel
    #[must_use]
    pub const fn next(self) -> Self {
        let value = if self.value >= self.last {
            self.last
        } else {
            self.value + 1
        };
        Self {
            value,
            last: self.last,
        }
    }
}
