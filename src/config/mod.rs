mod schema;
mod settings;
mod validation;

pub use schema::RunConfig;
pub use settings::{
    RunSettings, DEFAULT_FIRST_PLACE_POINTS, DEFAULT_OUTPUT_PATH, DEFAULT_STANDINGS_PATH,
    DEFAULT_TEMPLATE_PATH, MAX_FIRST_PLACE_POINTS,
};
pub use validation::validate_run_config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/region-ranker/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("region-ranker"))
}

/// Get the default config file path (~/.config/region-ranker/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to an empty config when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<RunConfig> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => match get_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(RunConfig::default()),
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: RunConfig = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_missing_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(dir.path().join("config.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "score: 15\nmsi_start: 2017\n").unwrap();

        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.score, Some(15));
        assert_eq!(config.msi_start, Some(2017));
        assert!(config.worlds_start.is_none());
    }

    #[test]
    fn test_invalid_yaml_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "score: [not a number\n").unwrap();
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));
    }
}
