use std::fmt::Display;

/// Observed minimum and maximum of a set of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn extend(bounds: Option<Bounds>, value: f64) -> Bounds {
        match bounds {
            Some(Bounds { min, max }) => Bounds {
                min: min.min(value),
                max: max.max(value),
            },
            None => Bounds {
                min: value,
                max: value,
            },
        }
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RescaleSummary {
    pub records: usize,
    pub rescaled: usize,
    pub skipped: usize,
    /// `None` when no record carried the field.
    pub before: Option<Bounds>,
    pub after: Option<Bounds>,
}

impl RescaleSummary {
    pub(crate) fn record_rescaled(&mut self, before: f64, after: f64) {
        self.records += 1;
        self.rescaled += 1;
        self.before = Some(Bounds::extend(self.before, before));
        self.after = Some(Bounds::extend(self.after, after));
    }

    pub(crate) fn record_skipped(&mut self) {
        self.records += 1;
        self.skipped += 1;
    }
}
