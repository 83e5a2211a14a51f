use std::path::PathBuf;

use clap::Args;
use erodibility::{AffineMap, Range, WriteOptions, rescale_file};
use tracing::{debug, info};

use crate::{parsers, report};

#[derive(Args, Debug)]
pub struct RescaleArgs {
    /// Path to the input JSON file (an array of objects)
    pub input_file: PathBuf,

    /// Path to the output JSON file
    pub output_file: PathBuf,

    /// Minimum value of the old range
    #[arg(value_parser = parsers::parse_bound)]
    pub old_min: f64,

    /// Maximum value of the old range
    #[arg(value_parser = parsers::parse_bound)]
    pub old_max: f64,

    /// Minimum value of the new range
    #[arg(value_parser = parsers::parse_bound)]
    pub new_min: f64,

    /// Maximum value of the new range
    #[arg(value_parser = parsers::parse_bound)]
    pub new_max: f64,

    /// Pretty-print the output JSON
    #[arg(short, long)]
    pub pretty: bool,

    /// Print a summary table once done
    #[arg(short, long)]
    pub summary: bool,

    /// Rescale without writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: RescaleArgs) -> Result<(), anyhow::Error> {
    let old = Range::new(args.old_min, args.old_max)?;
    let new = Range::new(args.new_min, args.new_max)?;
    let map = AffineMap::new(old, new)?;

    info!("Rescaling {:?} from {} to {}", args.input_file, old, new);
    let (a, b) = map.coefficients();
    debug!("erodibility' = {} * erodibility + {}", a, b);

    let summary = rescale_file(
        &args.input_file,
        &args.output_file,
        &map,
        WriteOptions {
            pretty: args.pretty,
            dry_run: args.dry_run,
        },
    )?;

    if args.summary {
        println!("{}", report::summary_table(&map, &summary));
    }

    Ok(())
}
