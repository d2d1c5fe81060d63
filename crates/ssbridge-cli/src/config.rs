use crate::cli::DetectArgs;
use crate::error::{CliError, Result};
use ssbridge::detection::config::DetectionConfig;
use std::fs;

/// Resolves the effective detection configuration: defaults, overlaid by an
/// optional TOML file, overlaid by individual CLI flags.
pub fn resolve(args: &DetectArgs) -> Result<DetectionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                CliError::Config(format!("cannot read '{}': {}", path.display(), e))
            })?;
            toml::from_str(&content).map_err(|e| {
                CliError::Config(format!("invalid config '{}': {}", path.display(), e))
            })?
        }
        None => DetectionConfig::default(),
    };

    if let Some(max_bfactor) = args.max_bfactor {
        config.max_bfactor = max_bfactor;
    }
    if let Some(min_plddt) = args.min_plddt {
        config.min_plddt = min_plddt;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn detect_args(config: Option<PathBuf>) -> DetectArgs {
        DetectArgs {
            input: PathBuf::from("model.pdb"),
            output: None,
            config,
            max_bfactor: None,
            min_plddt: None,
        }
    }

    #[test]
    fn defaults_without_config_file() {
        let config = resolve(&detect_args(None)).unwrap();
        assert_eq!(config, DetectionConfig::default());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_bfactor = 25.0\nmin_plddt = 60.0").unwrap();

        let config = resolve(&detect_args(Some(file.path().to_path_buf()))).unwrap();
        assert_eq!(config.max_bfactor, 25.0);
        assert_eq!(config.min_plddt, 60.0);
        assert_eq!(config.min_bond_distance, 1.5);
    }

    #[test]
    fn cli_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_bfactor = 25.0").unwrap();

        let mut args = detect_args(Some(file.path().to_path_buf()));
        args.max_bfactor = Some(50.0);

        let config = resolve(&args).unwrap();
        assert_eq!(config.max_bfactor, 50.0);
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let args = detect_args(Some(PathBuf::from("/nonexistent/thresholds.toml")));
        assert!(matches!(resolve(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_bfactor = \"high\"").unwrap();

        let args = detect_args(Some(file.path().to_path_buf()));
        assert!(matches!(resolve(&args), Err(CliError::Config(_))));
    }
}
