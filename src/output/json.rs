//! JSON output for CLI results.

use serde::Serialize;

use crate::error::{Error, Result};

/// Current version of the JSON envelope format.
pub const SPEC_VERSION: &str = "1.0";

/// Result type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    /// Clip extraction run.
    ClipExtraction,
    /// Listing of the texts in an annotation file.
    TextList,
}

/// JSON envelope wrapping a command result.
#[derive(Debug, Serialize)]
pub struct JsonEnvelope<'a, T> {
    /// Envelope format version.
    pub spec_version: &'static str,
    /// What kind of result the payload is.
    pub result_type: ResultType,
    /// Command-specific payload.
    pub payload: &'a T,
}

/// Serialize a result into its JSON envelope.
pub fn to_json_result<T: Serialize>(result_type: ResultType, payload: &T) -> Result<String> {
    let envelope = JsonEnvelope {
        spec_version: SPEC_VERSION,
        result_type,
        payload,
    };
    serde_json::to_string(&envelope).map_err(|e| Error::JsonSerialize { source: e })
}

/// Print a result envelope to stdout.
#[allow(clippy::print_stdout)]
pub fn emit_json_result<T: Serialize>(result_type: ResultType, payload: &T) -> Result<()> {
    println!("{}", to_json_result(result_type, payload)?);
    Ok(())
}
