#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Hsv;
use crate::command::{Command, ParseError};
use crate::config::{ConfigError, EngineConfig, PowerLimits};
use crate::effect::FrameContext;
use crate::geometry::StripGeometry;
use crate::overlay::{Overlay, OverlayMode, SparkleOverlay};
use crate::pixels::PixelBuffer;
use crate::state::EffectState;

/// Number of sparkle slots in the reference build
pub const DEFAULT_SPARKLE_SLOTS: usize = 3;

/// Pixel shown on the first LED while waiting for the first audio frame
pub const BOOT_PIXEL: Hsv = Hsv::new(60, 255, 255);

/// Effect engine - owns the display state and the frame buffer
///
/// `MAX_LEDS` is the buffer capacity, `SLOTS` the number of sparkle slots.
#[derive(Debug, Clone)]
pub struct EffectEngine<const MAX_LEDS: usize, const SLOTS: usize = DEFAULT_SPARKLE_SLOTS> {
    // Fixed at startup
    geometry: StripGeometry,
    power: PowerLimits,

    // Internal state
    state: EffectState,
    pixels: PixelBuffer<MAX_LEDS>,

    // Overlays
    sparkle: SparkleOverlay<SLOTS>,
}

impl<const MAX_LEDS: usize, const SLOTS: usize> EffectEngine<MAX_LEDS, SLOTS> {
    /// Create a new engine
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate(MAX_LEDS)?;

        let geometry = StripGeometry::new(config.strip_len, config.band_count);

        #[cfg(feature = "esp32-log")]
        println!(
            "engine: {} leds, {} per band, {} bass, {} extra",
            geometry.len(),
            geometry.leds_per_band(),
            geometry.bass_leds(),
            geometry.extra_leds()
        );

        Ok(Self {
            geometry,
            power: config.power,
            state: EffectState::new(config.mode, config.overlay),
            pixels: PixelBuffer::new(config.strip_len),
            sparkle: SparkleOverlay::new(config.seed),
        })
    }

    /// Process one frame
    ///
    /// Applies `command` (if any), renders the primary effect, runs the
    /// overlay and returns the finished frame for the strip driver.
    pub fn render_frame(
        &mut self,
        command: Option<&str>,
        spectrum: &[u8],
        beat_hit: bool,
    ) -> &[Hsv] {
        if let Some(text) = command.filter(|text| !text.trim().is_empty()) {
            // Rejected lines are logged by apply_command and leave the state as is
            self.apply_command(text).ok();
        }

        self.state.advance_frame(beat_hit);

        let frame = FrameContext {
            geometry: &self.geometry,
            spectrum,
            beat_intensity: self.state.beat().intensity(),
            beat_phase: self.state.beat().phase(),
            bass_hue: self.state.bass_hue(),
        };
        self.state.effect().render(&frame, &mut self.pixels);

        if self.state.overlay() == OverlayMode::Sparkle {
            self.sparkle.apply(&mut self.pixels);
        }

        self.pixels.as_slice()
    }

    /// Parse and apply a command
    ///
    /// Rejected commands leave the state untouched.
    pub fn apply_command(&mut self, text: &str) -> Result<Command, ParseError> {
        let command = match Command::parse(text) {
            Ok(command) => command,
            Err(err) => {
                #[cfg(feature = "esp32-log")]
                println!("engine: ignoring command {:?}: {}", text, err);
                return Err(err);
            }
        };

        if self.state.apply(command) {
            self.sparkle.reset();
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "engine: {:?} -> mode={}, overlay={}",
            command,
            self.state.mode().as_str(),
            self.state.overlay().as_str()
        );

        Ok(command)
    }

    /// Frame to show before the first audio frame arrives
    pub fn boot_frame(&mut self) -> &[Hsv] {
        self.pixels.fill(Hsv::BLACK);
        self.pixels.write(0, BOOT_PIXEL);
        self.pixels.as_slice()
    }

    /// Last finished frame
    pub fn frame(&self) -> &[Hsv] {
        self.pixels.as_slice()
    }

    pub const fn pixels(&self) -> &PixelBuffer<MAX_LEDS> {
        &self.pixels
    }

    pub const fn state(&self) -> &EffectState {
        &self.state
    }

    pub const fn geometry(&self) -> &StripGeometry {
        &self.geometry
    }

    /// Limits the strip driver should enforce
    pub const fn power_limits(&self) -> PowerLimits {
        self.power
    }

    pub const fn sparkle(&self) -> &SparkleOverlay<SLOTS> {
        &self.sparkle
    }
}
