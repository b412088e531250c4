//! Time range handling in seconds.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A half-open time range `[start, end)` in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    /// Create a new time range.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the range in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Check whether the range is empty or inverted.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Validate the range against a known source duration.
    ///
    /// Requires `0 <= start < end <= source_duration` with finite bounds.
    pub fn validate(&self, source_duration: f64) -> Result<(), Error> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(Error::InvalidParameter(
                "Time range bounds must be finite".to_string(),
            ));
        }
        if self.start < 0.0 || self.is_empty() || self.end > source_duration {
            return Err(Error::InvalidParameter(format!(
                "Time range {}s..{}s out of bounds for {}s source",
                self.start, self.end, source_duration
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let range = TimeRange::new(10.0, 20.0);
        assert!((range.duration() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate_ok() {
        assert!(TimeRange::new(0.0, 100.0).validate(100.0).is_ok());
        assert!(TimeRange::new(10.0, 20.0).validate(100.0).is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted() {
        assert!(TimeRange::new(20.0, 10.0).validate(100.0).is_err());
        assert!(TimeRange::new(5.0, 5.0).validate(100.0).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_bounds() {
        assert!(TimeRange::new(-1.0, 10.0).validate(100.0).is_err());
        assert!(TimeRange::new(0.0, 101.0).validate(100.0).is_err());
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(TimeRange::new(f64::NAN, 10.0).validate(100.0).is_err());
        assert!(TimeRange::new(0.0, f64::INFINITY).validate(100.0).is_err());
    }
}
