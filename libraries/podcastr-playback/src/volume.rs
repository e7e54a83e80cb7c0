//! Output volume
//!
//! Volume range is 0-100%, mapped to -60 dB..0 dB so that slider steps sound
//! even. The resulting linear gain is what the audio output receives.

/// Volume state with logarithmic scaling
#[derive(Debug, Clone)]
pub struct Volume {
    level: u8,
    muted: bool,
}

/// Attenuation at 1% in dB; 0% is true silence
const FLOOR_DB: f32 = -60.0;

impl Volume {
    /// Create volume at `level` (clamped to 100)
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Set volume level (clamped to 100)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Mute, keeping the level
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute back to the kept level
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Flip mute
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Linear gain for the output
    ///
    /// gain = 10^(dB / 20), with dB = (level - 100) * 0.6
    pub fn gain(&self) -> f32 {
        if self.muted || self.level == 0 {
            return 0.0;
        }

        let db = (f32::from(self.level) - 100.0) * (-FLOOR_DB / 100.0);
        10.0_f32.powf(db / 20.0)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_clamped() {
        let mut vol = Volume::new(180);
        assert_eq!(vol.level(), 100);

        vol.set_level(101);
        assert_eq!(vol.level(), 100);

        vol.set_level(35);
        assert_eq!(vol.level(), 35);
    }

    #[test]
    fn full_volume_is_unity() {
        assert!((Volume::default().gain() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_is_silent() {
        assert_eq!(Volume::new(0).gain(), 0.0);
    }

    #[test]
    fn half_is_minus_thirty_db() {
        assert!((Volume::new(50).gain() - 0.0316).abs() < 0.001);
    }

    #[test]
    fn gain_grows_with_level() {
        let gains: Vec<f32> = (0..=100).map(|level| Volume::new(level).gain()).collect();
        assert!(gains.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn mute_keeps_level() {
        let mut vol = Volume::new(70);
        vol.mute();
        assert!(vol.is_muted());
        assert_eq!(vol.gain(), 0.0);
        assert_eq!(vol.level(), 70);

        vol.toggle_mute();
        assert!(!vol.is_muted());
        assert!(vol.gain() > 0.0);

        vol.mute();
        vol.unmute();
        assert!(!vol.is_muted());
    }
}
