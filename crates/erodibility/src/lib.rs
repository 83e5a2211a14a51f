//! Linear rescaling of the `erodibility` field of terrain node datasets.
//!
//! A dataset is a JSON array of objects. Every object carrying an
//! `erodibility` number gets it mapped from a source [`Range`] onto a target
//! [`Range`]; everything else is written back untouched.

pub mod affine_map;
pub mod dataset;
pub mod error;
pub mod range;
pub mod record;
pub mod rescale;
pub mod summary;

pub use affine_map::AffineMap;
pub use dataset::Dataset;
pub use error::RescaleError;
pub use range::Range;
pub use record::{ERODIBILITY_FIELD, Record};
pub use rescale::{WriteOptions, rescale, rescale_file};
pub use summary::{Bounds, RescaleSummary};
