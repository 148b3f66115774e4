use crate::effect::EffectMode;
use crate::overlay::OverlayMode;

/// Strip length of the reference build
pub const DEFAULT_STRIP_LEN: usize = 139;
/// Band count of the reference spectrum analyser
pub const DEFAULT_BAND_COUNT: usize = 20;

/// Brightness and current ceiling forwarded to the strip driver
///
/// The engine never enforces these itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerLimits {
    /// Global brightness scale (0-255)
    pub brightness: u8,
    /// Supply voltage of the strip
    pub volts: u8,
    /// Maximum current the driver may draw
    pub max_milliamps: u32,
}

impl Default for PowerLimits {
    fn default() -> Self {
        Self {
            brightness: 255,
            volts: 12,
            max_milliamps: 2500,
        }
    }
}

/// Configuration for the effect engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of pixels on the strip
    pub strip_len: usize,
    /// Number of spectrum bands per frame
    pub band_count: usize,
    /// Primary effect at startup
    pub mode: EffectMode,
    /// Overlay at startup
    pub overlay: OverlayMode,
    pub power: PowerLimits,
    /// Seed for the sparkle generator
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strip_len: DEFAULT_STRIP_LEN,
            band_count: DEFAULT_BAND_COUNT,
            mode: EffectMode::Spectrum,
            overlay: OverlayMode::None,
            power: PowerLimits::default(),
            seed: 0,
        }
    }
}

/// Reason an [`EngineConfig`] was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `strip_len` is zero
    EmptyStrip,
    /// `strip_len` exceeds the buffer capacity
    StripTooLong { capacity: usize },
    /// `band_count` is zero
    NoBands,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyStrip => f.write_str("strip has no pixels"),
            Self::StripTooLong { capacity } => {
                write!(f, "strip is longer than the buffer capacity of {}", capacity)
            }
            Self::NoBands => f.write_str("spectrum has no bands"),
        }
    }
}

impl EngineConfig {
    /// Check the config against a buffer of `capacity` pixels
    pub fn validate(&self, capacity: usize) -> Result<(), ConfigError> {
        if self.strip_len == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        if self.strip_len > capacity {
            return Err(ConfigError::StripTooLong { capacity });
        }
        if self.band_count == 0 {
            return Err(ConfigError::NoBands);
        }
        Ok(())
    }
}
