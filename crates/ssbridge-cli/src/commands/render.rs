use crate::cli::RenderArgs;
use crate::error::{CliError, Result};
use ssbridge::core::io::pymol::write_script;
use ssbridge::core::io::report::read_report;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: RenderArgs) -> Result<()> {
    info!("Reading bridge report from {:?}", &args.bridges);
    let file = File::open(&args.bridges)?;
    let records = read_report(file).map_err(|e| CliError::FileParsing {
        path: args.bridges.clone(),
        source: e.into(),
    })?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_script_path(&args.structure));

    info!("Writing PyMOL script to {:?}", &output_path);
    let file = File::create(&output_path)?;
    write_script(&args.structure, &records, &mut BufWriter::new(file))?;

    println!(
        "Visualization script for {} bridge(s) written to: {}",
        records.len(),
        output_path.display()
    );
    Ok(())
}

fn default_script_path(structure: &Path) -> PathBuf {
    let stem = structure
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "structure".to_string());
    structure.with_file_name(format!("{}.pml", stem))
}
