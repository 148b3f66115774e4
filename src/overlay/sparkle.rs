//! Sparkle overlay
//!
//! A fixed set of slots, each cycling through
//! `Idle -> Arming -> Rising -> Falling -> Idle`. A slot waits a random number
//! of frames, grabs the color the effect drew under a random pixel, flares it
//! towards white over three pixels and then fades it back out.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::Overlay;
use crate::color::Hsv;
use crate::geometry::PixelIndex;
use crate::pixels::PixelBuffer;

/// Shortest wait before a slot fires (inclusive)
pub const MIN_DELAY: u8 = 25;
/// Longest wait before a slot fires (exclusive)
pub const MAX_DELAY: u8 = 75;
/// Saturation of the captured color on the first rising step
pub const CAPTURE_SATURATION: u8 = 200;
/// Last step of the rising phase
pub const LAST_RISING_STEP: u8 = 11;
/// Step number the falling phase starts at
pub const FIRST_FALLING_STEP: u8 = 12;
/// Value below which a falling sparkle goes idle
pub const FALL_DIM: u8 = 50;

const RISE_BRIGHTEN: u8 = 50;
const RISE_DESATURATE: u8 = 50;
const FALL_DARKEN: u8 = 20;
const FALL_SATURATE: u8 = 5;
const NEIGHBOR_SATURATION_BOOST: u8 = 100;

/// Lifecycle of one sparkle slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SparklePhase {
    #[default]
    Idle,
    /// Waiting `delay` more frames
    Arming { delay: u8 },
    /// Flaring up; step 1 captures the base color
    Rising { step: u8 },
    /// Fading out
    Falling { step: u8 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SparkleSlot {
    phase: SparklePhase,
    position: PixelIndex,
    color: Hsv,
}

impl SparkleSlot {
    pub const fn phase(&self) -> SparklePhase {
        self.phase
    }

    pub const fn position(&self) -> PixelIndex {
        self.position
    }

    /// Working color of the sparkle
    pub const fn color(&self) -> Hsv {
        self.color
    }

    /// Advance by one frame
    fn tick<const N: usize, R: Rng>(&mut self, pixels: &mut PixelBuffer<N>, rng: &mut R) {
        match self.phase {
            SparklePhase::Idle => {
                self.arm(pixels.len(), rng);
                return;
            }
            SparklePhase::Arming { delay } => {
                let delay = delay.saturating_sub(1);
                if delay > 0 {
                    self.phase = SparklePhase::Arming { delay };
                    return;
                }
                self.phase = SparklePhase::Rising { step: 1 };
            }
            SparklePhase::Rising { .. } | SparklePhase::Falling { .. } => {}
        }

        match self.phase {
            SparklePhase::Rising { step: 1 } => {
                let base = pixels.shadow(self.position);
                self.color = Hsv::new(base.hue, CAPTURE_SATURATION, base.val);
                pixels.overlay(self.position, self.color);
                self.phase = SparklePhase::Rising { step: 2 };
            }
            SparklePhase::Rising { step } => {
                self.color.val = if self.color.val > u8::MAX - RISE_BRIGHTEN {
                    u8::MAX
                } else {
                    self.color.val + RISE_BRIGHTEN
                };
                self.color.sat = self.color.sat.saturating_sub(RISE_DESATURATE);
                self.draw(pixels);

                self.phase = if self.color.sat == 0 || step >= LAST_RISING_STEP {
                    SparklePhase::Falling {
                        step: FIRST_FALLING_STEP,
                    }
                } else {
                    SparklePhase::Rising { step: step + 1 }
                };
            }
            SparklePhase::Falling { step } => {
                self.color.val = self.color.val.saturating_sub(FALL_DARKEN);
                self.color.sat = self.color.sat.saturating_add(FALL_SATURATE);
                self.draw(pixels);

                self.phase = if self.color.val < FALL_DIM {
                    SparklePhase::Idle
                } else {
                    SparklePhase::Falling {
                        step: step.saturating_add(1),
                    }
                };
            }
            SparklePhase::Idle | SparklePhase::Arming { .. } => {}
        }
    }

    /// Pick a delay and a pixel away from the strip ends
    fn arm<R: Rng>(&mut self, len: usize, rng: &mut R) {
        let delay = rng.random_range(MIN_DELAY..MAX_DELAY);
        let last_inner = len.saturating_sub(2).max(1);
        self.position = PixelIndex::clamped(rng.random_range(1..=last_inner), len);
        self.phase = SparklePhase::Arming { delay };
    }

    /// Draw the sparkle and its two neighbors
    fn draw<const N: usize>(&self, pixels: &mut PixelBuffer<N>) {
        let neighbor = Hsv {
            sat: self.color.sat.saturating_add(NEIGHBOR_SATURATION_BOOST),
            ..self.color
        };
        pixels.overlay(self.position.prev(), neighbor);
        pixels.overlay(self.position.next(), neighbor);
        pixels.overlay(self.position, self.color);
    }
}

/// Sparkle overlay with `SLOTS` independent slots
#[derive(Debug, Clone)]
pub struct SparkleOverlay<const SLOTS: usize> {
    slots: [SparkleSlot; SLOTS],
    rng: SmallRng,
}

impl<const SLOTS: usize> SparkleOverlay<SLOTS> {
    /// Create an idle overlay with a generator seeded from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            slots: [SparkleSlot::default(); SLOTS],
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn slots(&self) -> &[SparkleSlot] {
        &self.slots
    }
}

impl<const SLOTS: usize> Overlay for SparkleOverlay<SLOTS> {
    fn apply<const N: usize>(&mut self, pixels: &mut PixelBuffer<N>) {
        if pixels.is_empty() {
            return;
        }
        for slot in &mut self.slots {
            slot.tick(pixels, &mut self.rng);
        }
    }

    fn reset(&mut self) {
        self.slots = [SparkleSlot::default(); SLOTS];
    }
}
