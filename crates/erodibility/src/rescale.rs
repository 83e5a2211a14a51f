use std::path::Path;

use tracing::{debug, info};

use crate::{
    affine_map::AffineMap, dataset::Dataset, error::RescaleError, summary::RescaleSummary,
};

/// Rescales the erodibility of every record carrying the field. Records
/// without it are passed through untouched.
///
/// The dataset is consumed: on error nothing of it is returned, so a caller
/// can never observe a half-rescaled dataset.
pub fn rescale(
    mut dataset: Dataset,
    map: &AffineMap,
) -> Result<(Dataset, RescaleSummary), RescaleError> {
    let mut summary = RescaleSummary::default();

    for (index, record) in dataset.iter_mut().enumerate() {
        match record.erodibility(index)? {
            Some(value) => {
                let rescaled = map.apply(value);
                record.set_erodibility(index, rescaled)?;
                summary.record_rescaled(value, rescaled);
            }
            None => summary.record_skipped(),
        }
    }

    debug!(
        "Rescaled {}/{} records from {} to {}",
        summary.rescaled,
        summary.records,
        map.source(),
        map.target()
    );

    Ok((dataset, summary))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    pub pretty: bool,
    /// Transform and report without writing anything.
    pub dry_run: bool,
}

/// Loads `input`, rescales it with `map` and writes it to `output`.
///
/// The output file is only created once every record has been rescaled.
pub fn rescale_file<I: AsRef<Path>, O: AsRef<Path>>(
    input: I,
    output: O,
    map: &AffineMap,
    options: WriteOptions,
) -> Result<RescaleSummary, RescaleError> {
    let dataset = Dataset::from_file(&input)?;
    let (dataset, summary) = rescale(dataset, map)?;

    if options.dry_run {
        info!("Dry run, skipping write to {:?}", output.as_ref());
    } else {
        dataset.write_file(&output, options.pretty)?;
        info!(
            "Wrote {} records to {:?} ({} rescaled, {} without erodibility)",
            summary.records,
            output.as_ref(),
            summary.rescaled,
            summary.skipped
        );
    }

    Ok(summary)
}
