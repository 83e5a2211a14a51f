use crate::{error::RescaleError, range::Range};

/// Linear mapping of the `source` range onto the `target` range.
///
/// `source.min` maps to exactly `target.min` and `source.max` to exactly
/// `target.max`. Values outside of the source range are extrapolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap {
    source: Range,
    target: Range,
}

impl AffineMap {
    pub fn new(source: Range, target: Range) -> Result<Self, RescaleError> {
        if source.is_degenerate() {
            return Err(RescaleError::DegenerateRange(source.min()));
        }

        for range in [source, target] {
            if !range.span().is_finite() {
                return Err(RescaleError::SpanOverflow(range));
            }
        }

        Ok(AffineMap { source, target })
    }

    pub fn source(&self) -> Range {
        self.source
    }

    pub fn target(&self) -> Range {
        self.target
    }

    /// Relative position of `value` inside the source range, 0 at `min`, 1 at `max`.
    #[inline]
    pub fn position(&self, value: f64) -> f64 {
        (value - self.source.min()) / self.source.span()
    }

    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        let t = self.position(value);
        (1.0 - t) * self.target.min() + t * self.target.max()
    }

    /// `(a, b)` such that `apply(v) == a * v + b` up to rounding.
    pub fn coefficients(&self) -> (f64, f64) {
        let a = self.target.span() / self.source.span();
        let b = self.target.min() - a * self.source.min();
        (a, b)
    }

    /// Fails when the target range is degenerate, since every value collapses
    /// onto a single point.
    pub fn inverse(&self) -> Result<AffineMap, RescaleError> {
        AffineMap::new(self.target, self.source)
    }
}
