use std::path::PathBuf;

use thiserror::Error;

use crate::range::Range;

#[derive(Debug, Error)]
pub enum RescaleError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {} as an array of objects: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Degenerate source range: min and max are both {0}")]
    DegenerateRange(f64),

    #[error("Range bound must be finite, got {0}")]
    NonFiniteBound(f64),

    #[error("Range {0} is too wide, its span overflows")]
    SpanOverflow(Range),

    #[error("Record {index}: rescaling {value} produced a non-finite value")]
    NonFiniteResult { index: usize, value: f64 },

    #[error("Record {index}: field `{field}` must be a number, found {found}")]
    NotNumeric {
        index: usize,
        field: &'static str,
        found: &'static str,
    },

    #[error("Failed to serialize dataset: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
