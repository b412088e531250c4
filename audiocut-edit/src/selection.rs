//! Mutable selection state backing the editor UI.

use serde::{Deserialize, Serialize};

use audiocut_core::{OutputFormat, TimeRange};

use crate::error::{Error, Result};
use crate::request::{EditMode, EditRequest, EqBand, EqGains, FadeSpec};

/// Minimal positive gap between selection start and end, in seconds.
/// Keeps the output from ever being zero-length.
const MIN_SELECTION_GAP: f64 = 0.01;

/// UI-facing editing state.
///
/// Tracks the current selection and effect parameters, clamping every
/// mutation to its documented domain, and snapshots them into an
/// [`EditRequest`] on export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionModel {
    source_duration: Option<f64>,
    start: f64,
    end: f64,
    volume_percent: u16,
    speed_factor: f64,
    eq: EqGains,
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionModel {
    /// Create an empty model with no source loaded.
    pub fn new() -> Self {
        Self {
            source_duration: None,
            start: 0.0,
            end: 0.0,
            volume_percent: 100,
            speed_factor: 1.0,
            eq: EqGains::default(),
        }
    }

    /// Register the decoded source and select it in full.
    pub fn load_source(&mut self, duration: f64) {
        if !duration.is_finite() || duration <= 0.0 {
            return;
        }
        self.source_duration = Some(duration);
        self.start = 0.0;
        self.end = duration;
    }

    /// Source duration, if a source has been loaded.
    pub fn source_duration(&self) -> Option<f64> {
        self.source_duration
    }

    /// Current selection bounds.
    pub fn selection(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }

    /// Set the selection, clamping both bounds into range.
    ///
    /// `start` is clamped to `[0, end - gap]` and `end` to
    /// `[start + gap, source_duration]`. NaN inputs are ignored, as is
    /// any call before a source is loaded.
    pub fn set_selection(&mut self, start: f64, end: f64) {
        let Some(duration) = self.source_duration else {
            return;
        };
        if start.is_nan() || end.is_nan() {
            return;
        }

        // A source shorter than the minimal gap stays fully selected.
        if duration <= MIN_SELECTION_GAP {
            self.start = 0.0;
            self.end = duration;
            return;
        }

        let end = end.clamp(MIN_SELECTION_GAP, duration);
        let start = start.clamp(0.0, end - MIN_SELECTION_GAP);
        self.start = start;
        self.end = end;
    }

    /// Set the volume percentage, clamped to [0, 200].
    pub fn set_volume(&mut self, percent: u16) {
        self.volume_percent = percent.min(200);
    }

    /// Current volume percentage.
    pub fn volume(&self) -> u16 {
        self.volume_percent
    }

    /// Set the playback speed, clamped to [0.5, 2.0]. NaN is ignored.
    pub fn set_speed(&mut self, factor: f64) {
        if factor.is_nan() {
            return;
        }
        self.speed_factor = factor.clamp(0.5, 2.0);
    }

    /// Current speed factor.
    pub fn speed(&self) -> f64 {
        self.speed_factor
    }

    /// Set one EQ band's gain in dB, clamped to [-10, 10]. NaN is ignored.
    pub fn set_eq(&mut self, band: EqBand, gain_db: f64) {
        if gain_db.is_nan() {
            return;
        }
        *self.eq.gain_mut(band) = gain_db.clamp(-10.0, 10.0);
    }

    /// Current EQ gains.
    pub fn eq(&self) -> EqGains {
        self.eq
    }

    /// Snapshot the current state into an immutable [`EditRequest`].
    pub fn build_request(
        &self,
        mode: EditMode,
        format: OutputFormat,
        fade: FadeSpec,
    ) -> Result<EditRequest> {
        let source_duration = self.source_duration.ok_or(Error::SourceNotLoaded)?;
        if self.end <= self.start {
            return Err(Error::InvalidSelection {
                start: self.start,
                end: self.end,
            });
        }

        Ok(EditRequest {
            source_duration,
            selection: TimeRange::new(self.start, self.end),
            mode,
            volume_percent: self.volume_percent,
            speed_factor: self.speed_factor,
            eq: self.eq,
            fade,
            output_format: format,
        })
    }
}
