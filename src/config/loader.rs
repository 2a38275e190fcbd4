// Configuration loader
// Loads settings from ~/.typefinder/config.toml, falling back to defaults

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::settings::Config;
use crate::errors;

/// Load configuration from the user's config file, or defaults when it
/// does not exist. The result is not validated yet; see [`finalize_config`].
pub fn load_config() -> Result<Config> {
    match default_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => {
            tracing::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&contents).map_err(|e| {
        anyhow::anyhow!(errors::wrap_error_with_suggestion(
            format!("Failed to parse {}: {}", path.display(), e),
            "Check the file against the documented keys:\n  \
             output_dir, history_file, profiles_file, [display]"
        ))
    })?;

    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// `~/.typefinder/config.toml`, if a home directory is known
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Replace `output_dir` with a non-empty override value
pub fn apply_output_dir_override(mut config: Config, value: Option<String>) -> Config {
    if let Some(dir) = value.filter(|v| !v.trim().is_empty()) {
        config.output_dir = PathBuf::from(dir);
    }
    config
}

/// Apply the output directory override (the `--output-dir` flag, which
/// also reads `TYPEFINDER_OUTPUT_DIR`) and validate the result
pub fn finalize_config(config: Config, output_dir: Option<String>) -> Result<Config> {
    let config = apply_output_dir_override(config, output_dir);
    config
        .validate()
        .context("Configuration validation failed")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "history_file = \"runs.log\"\n\n[display]\nchart = false\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.history_file, PathBuf::from("runs.log"));
        assert_eq!(config.profiles_file, PathBuf::from("profiles.csv"));
        assert!(!config.display.chart);
        assert!(config.display.color);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_load_malformed_file_fails_with_hint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "display = 3\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("documented keys"));
    }

    #[test]
    fn test_finalize_applies_override_then_validates() {
        let config = finalize_config(Config::default(), Some("/srv/results".into())).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/srv/results"));

        let broken = Config {
            output_dir: PathBuf::new(),
            ..Config::default()
        };
        let err = finalize_config(broken.clone(), None).unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));

        let fixed = finalize_config(broken, Some("out".into())).unwrap();
        assert_eq!(fixed.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_load_does_not_validate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output_dir = \"\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert!(config.output_dir.as_os_str().is_empty());
        assert!(finalize_config(config, None).is_err());
    }

    #[test]
    fn test_output_dir_override() {
        let config = apply_output_dir_override(Config::default(), Some("/srv/results".into()));
        assert_eq!(config.output_dir, PathBuf::from("/srv/results"));

        let config = apply_output_dir_override(Config::default(), Some("  ".into()));
        assert_eq!(config.output_dir, PathBuf::from("."));
    }
}
