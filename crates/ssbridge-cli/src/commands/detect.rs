use crate::cli::DetectArgs;
use crate::config;
use crate::error::{CliError, Result};
use ssbridge::core::io::report::write_report;
use ssbridge::core::io::{pdb::PdbFile, traits::StructureFile};
use ssbridge::workflows::detect::{self, DetectionOutcome};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: DetectArgs) -> Result<()> {
    let config = config::resolve(&args)?;

    info!("Loading input structure from {:?}", &args.input);
    let (system, metadata) =
        PdbFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
            path: args.input.clone(),
            source: e.into(),
        })?;
    if metadata.skipped_altloc_atoms > 0 {
        info!(
            "Skipped {} alternate-location atom record(s).",
            metadata.skipped_altloc_atoms
        );
    }

    info!("Invoking the detection workflow...");
    match detect::run(&system, &config) {
        DetectionOutcome::Report(bridges) => {
            let output_path = args
                .output
                .clone()
                .unwrap_or_else(|| default_report_path(&args.input));

            let file = File::create(&output_path)?;
            write_report(&bridges, &mut BufWriter::new(file)).map_err(|e| {
                CliError::FileParsing {
                    path: output_path.clone(),
                    source: e.into(),
                }
            })?;

            println!(
                "Found {} bridge(s). Report written to: {}",
                bridges.len(),
                output_path.display()
            );
        }
        DetectionOutcome::NothingToReport { survivors } => {
            info!(survivors, "Not enough surviving candidates for a report.");
            println!("No report produced: not enough bridge candidates were detected.");
        }
    }

    Ok(())
}

fn default_report_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "structure".to_string());
    input.with_file_name(format!("{}_bridges.csv", stem))
}
