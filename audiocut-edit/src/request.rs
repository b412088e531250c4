//! Edit request definitions.

use serde::{Deserialize, Serialize};

use audiocut_core::{OutputFormat, TimeRange};

/// What to do with the selected time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Keep only the selection.
    Extract,
    /// Keep everything outside the selection, concatenated.
    Delete,
}

/// An equalizer band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqBand {
    Bass,
    Mid,
    Treble,
}

impl EqBand {
    /// Center frequency of the band in Hz.
    pub fn center_hz(&self) -> u32 {
        match self {
            EqBand::Bass => 100,
            EqBand::Mid => 1000,
            EqBand::Treble => 10_000,
        }
    }
}

/// Per-band EQ gains in dB. Domain [-10, 10], 0 = no change.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EqGains {
    pub bass: f64,
    pub mid: f64,
    pub treble: f64,
}

impl EqGains {
    /// Gain for a specific band.
    pub fn gain(&self, band: EqBand) -> f64 {
        match band {
            EqBand::Bass => self.bass,
            EqBand::Mid => self.mid,
            EqBand::Treble => self.treble,
        }
    }

    /// Mutable gain for a specific band.
    pub fn gain_mut(&mut self, band: EqBand) -> &mut f64 {
        match band {
            EqBand::Bass => &mut self.bass,
            EqBand::Mid => &mut self.mid,
            EqBand::Treble => &mut self.treble,
        }
    }

    /// Check whether all bands are at 0 dB.
    pub fn is_flat(&self) -> bool {
        self.bass == 0.0 && self.mid == 0.0 && self.treble == 0.0
    }
}

/// Fade configuration for a request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FadeSpec {
    pub fade_in: bool,
    pub fade_out: bool,
    /// Requested fade length in seconds. The compiler clamps the
    /// effective window to half of the output duration.
    pub duration_secs: f64,
}

impl FadeSpec {
    /// Default fade length in seconds.
    pub const DEFAULT_DURATION: f64 = 3.0;

    /// No fades.
    pub fn none() -> Self {
        Self {
            fade_in: false,
            fade_out: false,
            duration_secs: Self::DEFAULT_DURATION,
        }
    }

    /// Fades with the default duration.
    pub fn new(fade_in: bool, fade_out: bool) -> Self {
        Self {
            fade_in,
            fade_out,
            duration_secs: Self::DEFAULT_DURATION,
        }
    }

    /// Set a custom fade duration.
    #[must_use]
    pub fn duration(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Whether any fade is enabled.
    pub fn is_active(&self) -> bool {
        self.fade_in || self.fade_out
    }
}

impl Default for FadeSpec {
    fn default() -> Self {
        Self::none()
    }
}

/// The complete, immutable description of one transformation job.
///
/// Constructed fresh per export from [`crate::SelectionModel`] state and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRequest {
    /// Total duration of the source media in seconds.
    pub source_duration: f64,
    /// Selected time range, `[start, end)`.
    pub selection: TimeRange,
    /// Extract or delete the selection.
    pub mode: EditMode,
    /// Volume in percent, [0, 200]. 100 = unity gain.
    pub volume_percent: u16,
    /// Playback speed multiplier, [0.5, 2.0]. 1.0 = unchanged.
    pub speed_factor: f64,
    /// Three-band EQ gains.
    pub eq: EqGains,
    /// Fade configuration.
    pub fade: FadeSpec,
    /// Output codec selection.
    pub output_format: OutputFormat,
}

impl EditRequest {
    /// Length of the selection in seconds.
    pub fn selection_duration(&self) -> f64 {
        self.selection.duration()
    }

    /// Whether any effect filter (volume, speed, EQ) is active.
    pub fn has_effects(&self) -> bool {
        self.volume_percent != 100 || self.speed_factor != 1.0 || !self.eq.is_flat()
    }

    /// Validate the structural invariants of the request.
    ///
    /// The selection model only produces valid requests; this is the
    /// contract check the compiler applies defensively.
    pub fn validate(&self) -> Result<(), audiocut_core::Error> {
        use audiocut_core::Error;

        if !self.source_duration.is_finite() || self.source_duration <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Source duration must be positive, got {}",
                self.source_duration
            )));
        }
        self.selection.validate(self.source_duration)?;
        if self.volume_percent > 200 {
            return Err(Error::InvalidParameter(format!(
                "Volume {}% exceeds 200%",
                self.volume_percent
            )));
        }
        if !(0.5..=2.0).contains(&self.speed_factor) {
            return Err(Error::InvalidParameter(format!(
                "Speed factor {} outside [0.5, 2.0]",
                self.speed_factor
            )));
        }
        for band in [EqBand::Bass, EqBand::Mid, EqBand::Treble] {
            let gain = self.eq.gain(band);
            if !(-10.0..=10.0).contains(&gain) {
                return Err(Error::InvalidParameter(format!(
                    "EQ gain {gain} dB for {band:?} outside [-10, 10]"
                )));
            }
        }
        if !self.fade.duration_secs.is_finite() || self.fade.duration_secs < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Fade duration must be non-negative, got {}",
                self.fade.duration_secs
            )));
        }
        Ok(())
    }
}
