//! Configuration type definitions.

use crate::constants::{DEFAULT_OUT_DIR, DEFAULT_SEPARATOR};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default extraction settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default extraction settings, overridden by command-line options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Directory clips are written to.
    pub out_dir: PathBuf,

    /// Clip file format.
    pub export_format: ExportFormat,

    /// Separator between text abbreviation and phrase number.
    pub separator: String,

    /// Slugify text abbreviations before matching and naming.
    pub slugify_abbr: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            export_format: ExportFormat::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            slugify_abbr: false,
        }
    }
}

/// Supported clip export formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// RIFF WAVE, written in the source recording's encoding.
    #[default]
    Wav,
}

impl ExportFormat {
    /// File extension for clips in this format.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Wav => "wav",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wav" | "wave" => Ok(Self::Wav),
            _ => Err(Error::UnsupportedExportFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// How results are reported on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// Log lines and progress bars for people.
    #[default]
    Human,
    /// A single JSON document for scripts.
    Json,
}

impl OutputMode {
    /// Whether output is machine-readable.
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}
