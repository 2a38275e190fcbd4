// Configuration module
// Public interface for configuration loading

pub mod constants;
mod loader;
mod settings;

pub use loader::{
    apply_output_dir_override, default_config_path, finalize_config, load_config, load_config_from,
};
pub use settings::{Config, DisplayConfig};
