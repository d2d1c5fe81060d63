use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ssbridge - Detects candidate disulfide bridges in protein structures and renders them as PyMOL scripts.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Parses the command line, exiting the process with code 1 on usage errors
/// (missing or invalid arguments). Help and version output keep exit code 0.
pub fn parse_or_exit() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        std::process::exit(code);
    })
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect disulfide bridge candidates in a PDB structure and write the CSV report.
    Detect(DetectArgs),
    /// Render a previously written bridge report as a PyMOL visualization script.
    Render(RenderArgs),
}

/// Arguments for the `detect` subcommand.
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Path to the input structure file in PDB format.
    #[arg(value_name = "STRUCTURE")]
    pub input: PathBuf,

    /// Path for the CSV bridge report. Defaults to `<input stem>_bridges.csv`
    /// next to the input file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a TOML file overriding detection thresholds. Any subset of the
    /// threshold keys may be set; the rest keep their defaults.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the B-factor ceiling for experimental structures.
    #[arg(long, value_name = "FLOAT")]
    pub max_bfactor: Option<f64>,

    /// Override the pLDDT floor for predicted models.
    #[arg(long, value_name = "FLOAT")]
    pub min_plddt: Option<f64>,
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the structure file the report was produced from.
    #[arg(value_name = "STRUCTURE")]
    pub structure: PathBuf,

    /// Path to the CSV bridge report written by `detect`.
    #[arg(value_name = "BRIDGES")]
    pub bridges: PathBuf,

    /// Path for the PyMOL script. Defaults to `<structure stem>.pml` next to
    /// the structure file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
