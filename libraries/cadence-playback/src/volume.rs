//! Volume control with logarithmic scaling
//!
//! The level is a linear slider position in [0, 1]. `gain()` maps it onto
//! -60 dB..0 dB so the slider feels even to the ear.

use tracing::trace;

/// Level used by `Volume::default` and when a NaN level is supplied
pub const DEFAULT_LEVEL: f32 = 0.8;

/// Volume controller
#[derive(Debug, Clone)]
pub struct Volume {
    /// Slider position (0.0-1.0)
    level: f32,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume controller, clamping `level` into range
    ///
    /// A NaN level falls back to [`DEFAULT_LEVEL`].
    pub fn new(level: f32) -> Self {
        let mut volume = Self {
            level: DEFAULT_LEVEL,
            muted: false,
        };
        volume.set_level(level);
        volume
    }

    /// Set volume level
    ///
    /// Values outside [0, 1] are clamped; NaN is ignored.
    pub fn set_level(&mut self, level: f32) {
        if level.is_nan() {
            trace!("ignoring NaN volume");
            return;
        }
        self.level = level.clamp(0.0, 1.0);
    }

    /// Get current volume level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Mute audio (preserves volume level)
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute audio (restores previous volume)
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Linear gain multiplier for the media surface
    ///
    /// Formula: gain = 10^((level - 1) * 60 / 20)
    /// - 0.0 -> silence
    /// - 0.5 -> -30 dB -> 0.0316
    /// - 1.0 ->   0 dB -> 1.0
    pub fn gain(&self) -> f32 {
        if self.muted || self.level == 0.0 {
            return 0.0;
        }
        let db = (self.level - 1.0) * 60.0;
        10.0_f32.powf(db / 20.0)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_volume_level_clamps() {
        let mut vol = Volume::new(0.5);
        assert_eq!(vol.level(), 0.5);

        vol.set_level(1.7);
        assert_eq!(vol.level(), 1.0);

        vol.set_level(-0.2);
        assert_eq!(vol.level(), 0.0);
    }

    #[test]
    fn nan_is_ignored() {
        let mut vol = Volume::new(0.4);
        vol.set_level(f32::NAN);
        assert_eq!(vol.level(), 0.4);

        assert_eq!(Volume::new(f32::NAN).level(), DEFAULT_LEVEL);
    }

    #[test]
    fn mute_unmute() {
        let mut vol = Volume::new(0.8);
        vol.mute();
        assert!(vol.is_muted());
        assert_eq!(vol.level(), 0.8);
        assert_eq!(vol.gain(), 0.0);

        vol.unmute();
        assert!(!vol.is_muted());
        assert!(vol.gain() > 0.0);
    }

    #[test]
    fn toggle_mute() {
        let mut vol = Volume::default();
        vol.toggle_mute();
        assert!(vol.is_muted());
        vol.toggle_mute();
        assert!(!vol.is_muted());
    }

    #[test]
    fn gain_calculation() {
        assert_eq!(Volume::new(0.0).gain(), 0.0);
        assert!((Volume::new(1.0).gain() - 1.0).abs() < 0.001);
        assert!((Volume::new(0.5).gain() - 0.0316).abs() < 0.001);
    }
}
