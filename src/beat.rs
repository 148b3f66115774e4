//! Beat intensity and phase tracking

/// Intensity set on a detected beat
pub const BEAT_PEAK: u8 = 250;
/// Intensity lost on every frame without a beat
pub const BEAT_DECAY: u8 = 25;
/// Intensity that counts a beat when the decay lands on it
pub const BEAT_MARK: u8 = 150;
/// Counted beats per phase flip
pub const BEATS_PER_PHASE: u8 = 8;

/// Derived beat signal
///
/// `intensity` jumps to [`BEAT_PEAK`] on a hit and decays linearly. Every
/// decay that lands on [`BEAT_MARK`] counts one beat; every
/// [`BEATS_PER_PHASE`] counted beats flip `phase`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeatTracker {
    intensity: u8,
    counter: u8,
    phase: bool,
}

impl BeatTracker {
    pub const fn new() -> Self {
        Self {
            intensity: 0,
            counter: 0,
            phase: false,
        }
    }

    /// Advance by one frame
    pub fn update(&mut self, beat_hit: bool) {
        if beat_hit {
            self.intensity = BEAT_PEAK;
            return;
        }
        if self.intensity == 0 {
            return;
        }

        self.intensity = self.intensity.saturating_sub(BEAT_DECAY);
        if self.intensity == BEAT_MARK {
            self.counter += 1;
            if self.counter >= BEATS_PER_PHASE {
                self.phase = !self.phase;
                self.counter = 0;
            }
        }
    }

    pub const fn intensity(&self) -> u8 {
        self.intensity
    }

    /// Beats counted since the last phase flip
    pub const fn counter(&self) -> u8 {
        self.counter
    }

    pub const fn phase(&self) -> bool {
        self.phase
    }
}
