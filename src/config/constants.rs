// Project-wide constants
//
// Centralised here so file names and other magic values have one
// source of truth. Import via `use crate::config::constants::*;`.

/// Directory under $HOME holding `config.toml`
pub const CONFIG_DIR_NAME: &str = ".typefinder";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding `output_dir`
pub const OUTPUT_DIR_ENV: &str = "TYPEFINDER_OUTPUT_DIR";

/// Default history log, relative to `output_dir`
pub const DEFAULT_HISTORY_FILE: &str = "personality_history.log";

/// Default profile registry, relative to `output_dir`
pub const DEFAULT_PROFILES_FILE: &str = "profiles.csv";

/// Appended to the sanitized user name to form the report file name
pub const REPORT_FILE_SUFFIX: &str = "_personality.txt";

/// Width of the progress bar in columns, excluding brackets
pub const PROGRESS_BAR_WIDTH: usize = 50;
