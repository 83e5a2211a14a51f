use std::fmt::Display;

use crate::error::RescaleError;

/// Closed interval `[min, max]` used as the source or target of a rescale.
///
/// `min` is not required to be smaller than `max`: an inverted target range
/// flips the orientation of the mapped values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Result<Self, RescaleError> {
        for bound in [min, max] {
            if !bound.is_finite() {
                return Err(RescaleError::NonFiniteBound(bound));
            }
        }

        Ok(Range { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Signed width, `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
