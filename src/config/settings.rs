// Configuration structs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::constants::{DEFAULT_HISTORY_FILE, DEFAULT_PROFILES_FILE};
use crate::errors;

/// Terminal presentation toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// ANSI colors in terminal output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Progress bar above each question
    #[serde(default = "default_true")]
    pub progress_bar: bool,

    /// ASCII bar chart of trait scores in the on-screen report
    #[serde(default = "default_true")]
    pub chart: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            progress_bar: true,
            chart: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_history_file() -> PathBuf {
    PathBuf::from(DEFAULT_HISTORY_FILE)
}

fn default_profiles_file() -> PathBuf {
    PathBuf::from(DEFAULT_PROFILES_FILE)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory for report files, the history log and the profile registry
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// History log; relative paths resolve against `output_dir`
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,

    /// Profile registry; relative paths resolve against `output_dir`
    #[serde(default = "default_profiles_file")]
    pub profiles_file: PathBuf,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            history_file: default_history_file(),
            profiles_file: default_profiles_file(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    pub fn history_path(&self) -> PathBuf {
        self.resolve(&self.history_file)
    }

    pub fn profiles_path(&self) -> PathBuf {
        self.resolve(&self.profiles_file)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.output_dir.join(path)
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            anyhow::bail!(errors::wrap_error_with_suggestion(
                "output_dir must not be empty",
                "Use \".\" for the current directory\n\n\
                 Update your config:\n  \
                 Edit ~/.typefinder/config.toml"
            ));
        }

        for (field, path) in [
            ("history_file", &self.history_file),
            ("profiles_file", &self.profiles_file),
        ] {
            if path.file_name().is_none() {
                anyhow::bail!(errors::wrap_error_with_suggestion(
                    format!("{} must name a file, got '{}'", field, path.display()),
                    "Example:\n  \
                     history_file = \"personality_history.log\""
                ));
            }
        }

        if self.history_path() == self.profiles_path() {
            anyhow::bail!(
                "history_file and profiles_file both point to '{}'",
                self.history_path().display()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.history_path(), PathBuf::from("./personality_history.log"));
        assert_eq!(config.profiles_path(), PathBuf::from("./profiles.csv"));
        assert!(config.display.color);
    }

    #[test]
    fn test_absolute_paths_ignore_output_dir() {
        let config = Config {
            output_dir: PathBuf::from("/tmp/out"),
            history_file: PathBuf::from("/var/log/history.log"),
            ..Config::default()
        };
        assert_eq!(config.history_path(), PathBuf::from("/var/log/history.log"));
        assert_eq!(config.profiles_path(), PathBuf::from("/tmp/out/profiles.csv"));
    }

    #[test]
    fn test_validate_rejects_directory_like_paths() {
        let config = Config {
            history_file: PathBuf::from(".."),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("history_file must name a file"));
    }

    #[test]
    fn test_validate_rejects_shared_file() {
        let config = Config {
            profiles_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
