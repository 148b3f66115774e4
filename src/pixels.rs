use crate::color::Hsv;
use crate::geometry::PixelIndex;

/// Frame buffer with a shadow copy of the primary effect output
///
/// Effects draw through [`PixelBuffer::write`], which updates both copies.
/// Overlays draw through [`PixelBuffer::overlay`] and read back through
/// [`PixelBuffer::shadow`], so they always see what the effect rendered
/// rather than their own previous output.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const MAX_LEDS: usize> {
    live: [Hsv; MAX_LEDS],
    shadow: [Hsv; MAX_LEDS],
    len: usize,
}

impl<const MAX_LEDS: usize> PixelBuffer<MAX_LEDS> {
    /// Create a dark buffer of `len` pixels (capped at `MAX_LEDS`)
    pub const fn new(len: usize) -> Self {
        let len = if len > MAX_LEDS { MAX_LEDS } else { len };
        Self {
            live: [Hsv::BLACK; MAX_LEDS],
            shadow: [Hsv::BLACK; MAX_LEDS],
            len,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Write a pixel from the primary effect. Out of range writes are dropped.
    pub fn write(&mut self, index: usize, color: Hsv) {
        if index >= self.len {
            return;
        }
        self.live[index] = color;
        self.shadow[index] = color;
    }

    /// Write `color` to `index` and to its mirror on the other half
    pub fn write_mirrored(&mut self, index: usize, color: Hsv) {
        self.write(index, color);
        self.write(self.len.saturating_sub(1).saturating_sub(index), color);
    }

    /// Fill every pixel from the primary effect
    pub fn fill(&mut self, color: Hsv) {
        let len = self.len;
        self.live[..len].fill(color);
        self.shadow[..len].fill(color);
    }

    /// Write a pixel from an overlay; the shadow copy is left untouched
    pub fn overlay(&mut self, index: PixelIndex, color: Hsv) {
        if let Some(pixel) = self.live[..self.len].get_mut(index.get()) {
            *pixel = color;
        }
    }

    /// Last color the primary effect wrote at `index`
    pub fn shadow(&self, index: PixelIndex) -> Hsv {
        self.shadow[..self.len]
            .get(index.get())
            .copied()
            .unwrap_or_default()
    }

    /// Finished frame, as handed to the strip driver
    pub fn as_slice(&self) -> &[Hsv] {
        &self.live[..self.len]
    }

    /// Primary effect output before any overlay
    pub fn shadow_slice(&self) -> &[Hsv] {
        &self.shadow[..self.len]
    }
}
