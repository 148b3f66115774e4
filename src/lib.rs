#![no_std]

pub mod beat;
pub mod channel;
pub mod color;
pub mod command;
pub mod config;
pub mod effect;
pub mod engine;
pub mod frame_scheduler;
pub mod geometry;
pub mod overlay;
pub mod pixels;
pub mod state;

pub use beat::BeatTracker;
pub use channel::{CommandMailbox, CommandReceiver, CommandSender, CommandText, PostError};
pub use command::{Command, ParseError};
pub use config::{ConfigError, EngineConfig, PowerLimits};
pub use effect::{EffectMode, PalettePreset};
pub use engine::{DEFAULT_SPARKLE_SLOTS, EffectEngine};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use geometry::{PixelIndex, StripGeometry};
pub use overlay::{OverlayMode, SparkleOverlay, SparklePhase};
pub use pixels::PixelBuffer;
pub use state::EffectState;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver
///
/// Implement this trait to push finished frames to hardware. The driver owns
/// the HSV to signal conversion and must keep the strip within `limits`.
pub trait OutputDriver {
    /// Write one frame to the strip
    fn write(&mut self, pixels: &[Hsv], limits: PowerLimits);
}

/// One frame of analysed audio
#[derive(Debug, Clone, Copy)]
pub struct AudioFrame<'a> {
    /// Per-band magnitudes, one per configured band
    pub spectrum: &'a [u8],
    /// Whether a beat was detected since the previous frame
    pub beat_hit: bool,
}

/// Abstract audio analyser
///
/// Produces the spectrum and beat signal for each frame.
pub trait AudioSource {
    fn frame(&mut self) -> AudioFrame<'_>;
}
