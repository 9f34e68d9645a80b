//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_separator(&config.defaults.separator)
}

/// Validate an identifier separator.
///
/// The separator ends up in clip file names, so it must not introduce
/// path components.
pub fn validate_separator(separator: &str) -> Result<()> {
    if separator.contains(['/', '\\']) || separator.contains("..") {
        return Err(Error::ConfigValidation {
            message: format!("separator must not contain path separators, got '{separator}'"),
        });
    }

    Ok(())
}
