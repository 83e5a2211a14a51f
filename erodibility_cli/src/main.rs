use clap::Parser;

use mimalloc::MiMalloc;

use crate::rescale::RescaleArgs;

mod parsers;
mod report;
mod rescale;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Rescale erodibility values in a JSON file.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    #[command(flatten)]
    args: RescaleArgs,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    rescale::run(cli.args)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_positional_arguments() {
        let cli = Cli::try_parse_from([
            "rescale-erodibility",
            "../public/template1_old.json",
            "../public/template1.json",
            "0.2",
            "0.9",
            "0.1",
            "1.5",
        ])
        .unwrap();

        assert_eq!(cli.args.input_file, PathBuf::from("../public/template1_old.json"));
        assert_eq!(cli.args.output_file, PathBuf::from("../public/template1.json"));
        assert_eq!(
            (cli.args.old_min, cli.args.old_max, cli.args.new_min, cli.args.new_max),
            (0.2, 0.9, 0.1, 1.5)
        );
        assert!(!cli.debug);
        assert!(!cli.args.pretty);
    }

    #[test]
    fn test_parse_negative_bounds_and_flags() {
        let cli = Cli::try_parse_from([
            "rescale-erodibility",
            "--debug",
            "in.json",
            "out.json",
            "-1",
            "1",
            "-0.5",
            "0.5",
            "--pretty",
            "--summary",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.args.old_min, -1.0);
        assert_eq!(cli.args.new_min, -0.5);
        assert!(cli.debug && cli.args.pretty && cli.args.summary && cli.args.dry_run);
    }

    #[test]
    fn test_parse_rejects_missing_and_invalid_bounds() {
        assert!(Cli::try_parse_from(["rescale-erodibility", "in.json", "out.json", "0.2"]).is_err());
        assert!(
            Cli::try_parse_from([
                "rescale-erodibility",
                "in.json",
                "out.json",
                "0.2",
                "nan",
                "0.1",
                "1.5",
            ])
            .is_err()
        );
    }

    #[test]
    fn test_run_writes_rescaled_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.json");
        let output = dir.path().join("out.json");

        std::fs::write(
            &input,
            r#"[{"erodibility": 0.2}, {"erodibility": 0.9}, {"name": "x"}]"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "rescale-erodibility",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "0.2",
            "0.9",
            "0.1",
            "1.5",
        ])
        .unwrap();
        rescale::run(cli.args).unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&output).unwrap()).unwrap();
        assert_eq!(
            written,
            json!([{ "erodibility": 0.1 }, { "erodibility": 1.5 }, { "name": "x" }])
        );
    }

    #[test]
    fn test_run_fails_on_degenerate_range() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flat.json");
        let output = dir.path().join("flat-out.json");
        std::fs::write(&input, r#"[{"erodibility": 0.5}]"#).unwrap();

        let cli = Cli::try_parse_from([
            "rescale-erodibility",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "0.5",
            "0.5",
            "0.1",
            "1.5",
        ])
        .unwrap();

        let err = rescale::run(cli.args).unwrap_err();
        assert!(err.to_string().contains("Degenerate"));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_fails_on_overflowing_span() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("wide.json");
        let output = dir.path().join("wide-out.json");
        std::fs::write(&input, r#"[{"erodibility": 0.0}, {"erodibility": 1e307}]"#).unwrap();

        let cli = Cli::try_parse_from([
            "rescale-erodibility",
            "--",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "-1e308",
            "1e308",
            "0",
            "1",
        ])
        .unwrap();

        let err = rescale::run(cli.args).unwrap_err();
        assert!(err.to_string().contains("too wide"));
        assert!(!output.exists());
    }
}
