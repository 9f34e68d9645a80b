//! Configuration loading and management.

mod file;
mod types;
mod validate;

pub use file::{
    config_file_path, load_config_file, load_default_config, save_config, save_default_config,
};
pub use types::{Config, DefaultsConfig, ExportFormat, OutputMode};
pub use validate::{validate_config, validate_separator};
