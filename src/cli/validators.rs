//! CLI argument validators.

use crate::config::{ExportFormat, validate_separator};

/// Parse a clip export format.
pub fn parse_export_format(s: &str) -> Result<ExportFormat, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

/// Parse and validate an identifier separator.
pub fn parse_separator(s: &str) -> Result<String, String> {
    validate_separator(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}
