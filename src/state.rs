//! Persistent display state

use crate::beat::BeatTracker;
use crate::color::Hsv;
use crate::command::Command;
use crate::effect::{
    EffectMode, EffectSlot, Gradient, SolidEffect, SpectrumEffect, TwoToneEffect, TwoTonePalette,
};
use crate::overlay::OverlayMode;

/// Bass hue the strip starts from after power-up
pub const INITIAL_BASS_HUE: u8 = 250;

/// Everything a command can change, plus the rolling per-frame counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectState {
    mode: EffectMode,
    overlay: OverlayMode,
    solid: Hsv,
    gradient: Gradient,
    two_tone: TwoTonePalette,
    bass_hue: u8,
    beat: BeatTracker,
}

impl Default for EffectState {
    fn default() -> Self {
        Self::new(EffectMode::default(), OverlayMode::default())
    }
}

impl EffectState {
    pub fn new(mode: EffectMode, overlay: OverlayMode) -> Self {
        Self {
            mode,
            overlay,
            solid: Hsv::BLACK,
            gradient: Gradient::DEFAULT,
            two_tone: TwoTonePalette::default(),
            bass_hue: INITIAL_BASS_HUE,
            beat: BeatTracker::new(),
        }
    }

    /// Apply a parsed command
    ///
    /// Replaces only the fields the command names. Returns `true` if the
    /// sparkle overlay was switched on by this command.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Default => {
                self.mode = EffectMode::Spectrum;
                self.gradient = Gradient::DEFAULT;
            }
            Command::Palette(preset) => {
                self.mode = EffectMode::TwoTone;
                self.two_tone = preset.palette();
                self.bass_hue = self.two_tone.base_hue;
            }
            Command::Off => {
                self.mode = EffectMode::Off;
            }
            Command::ToggleSparkle => {
                self.overlay = self.overlay.toggled();
                return self.overlay == OverlayMode::Sparkle;
            }
            Command::Solid(color) => {
                self.mode = EffectMode::Solid;
                self.solid = color;
            }
        }
        false
    }

    /// Advance the beat tracker and, for bass-drawing effects, the bass hue
    pub fn advance_frame(&mut self, beat_hit: bool) {
        self.beat.update(beat_hit);
        if self.effect().uses_bass() {
            self.bass_hue = self.bass_hue.wrapping_add(1);
        }
    }

    /// Build the effect for the current mode
    pub fn effect(&self) -> EffectSlot {
        match self.mode {
            EffectMode::Spectrum => EffectSlot::Spectrum(SpectrumEffect::new(self.gradient)),
            EffectMode::TwoTone => EffectSlot::TwoTone(TwoToneEffect::new(self.two_tone)),
            EffectMode::Solid => EffectSlot::Solid(SolidEffect::new(self.solid)),
            EffectMode::Off => EffectSlot::Solid(SolidEffect::off()),
        }
    }

    pub const fn mode(&self) -> EffectMode {
        self.mode
    }

    pub const fn overlay(&self) -> OverlayMode {
        self.overlay
    }

    pub const fn solid(&self) -> Hsv {
        self.solid
    }

    pub const fn gradient(&self) -> Gradient {
        self.gradient
    }

    pub const fn two_tone(&self) -> TwoTonePalette {
        self.two_tone
    }

    pub const fn bass_hue(&self) -> u8 {
        self.bass_hue
    }

    pub const fn beat(&self) -> &BeatTracker {
        &self.beat
    }
}
