//! Error types for flexclip.

use std::path::PathBuf;

/// Result type alias for flexclip operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for flexclip.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Annotation file does not exist.
    #[error("annotation file does not exist: {path} (expected a valid .flextext file)")]
    AnnotationNotFound {
        /// Path that was given.
        path: PathBuf,
    },

    /// Failed to read annotation file.
    #[error("failed to read annotation file '{path}'")]
    AnnotationRead {
        /// Path to the annotation file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Annotation file is not well-formed XML.
    #[error("failed to parse annotation file '{path}'")]
    AnnotationParse {
        /// Path to the annotation file.
        path: PathBuf,
        /// Underlying XML error.
        #[source]
        source: roxmltree::Error,
    },

    /// Annotation file type is not supported.
    #[error("unsupported annotation format: '{extension}' files are not supported")]
    UnsupportedAnnotationFormat {
        /// Extension of the rejected file.
        extension: String,
    },

    /// No text in the document carries the requested abbreviation.
    #[error("no text with abbreviation '{abbreviation}' found in file '{path}'")]
    NoMatchingText {
        /// Requested title abbreviation.
        abbreviation: String,
        /// Path to the annotation file.
        path: PathBuf,
    },

    /// A phrase lacks a required time offset attribute.
    #[error("phrase {phrase_id} in {text_abbr} in '{path}' has no [{attribute}] value")]
    MissingTimeOffset {
        /// Name of the missing attribute.
        attribute: &'static str,
        /// Identifier derived for the phrase.
        phrase_id: String,
        /// Abbreviation of the selected text.
        text_abbr: String,
        /// Path to the annotation file.
        path: PathBuf,
    },

    /// A phrase time offset is not a non-negative integer.
    #[error(
        "phrase {phrase_id} in {text_abbr} in '{path}' has invalid [{attribute}] value '{value}'"
    )]
    InvalidTimeOffset {
        /// Name of the offending attribute.
        attribute: &'static str,
        /// Raw attribute value.
        value: String,
        /// Identifier derived for the phrase.
        phrase_id: String,
        /// Abbreviation of the selected text.
        text_abbr: String,
        /// Path to the annotation file.
        path: PathBuf,
    },

    /// Audio file does not exist.
    #[error("audio file does not exist: {path} (expected a valid .wav file)")]
    AudioNotFound {
        /// Path that was given.
        path: PathBuf,
    },

    /// Failed to open audio file.
    #[error("failed to open audio file '{path}'")]
    AudioOpen {
        /// Path to the audio file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Unsupported audio format.
    #[error("unsupported audio format: {format} files are not yet supported")]
    UnsupportedAudioFormat {
        /// The unsupported format.
        format: String,
    },

    /// Unsupported clip export format.
    #[error("unsupported export format: {format}")]
    UnsupportedExportFormat {
        /// The unsupported format.
        format: String,
    },

    /// Failed to decode audio.
    #[error("failed to decode audio from '{path}'")]
    AudioDecode {
        /// Path to the audio file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No audio tracks found.
    #[error("no audio tracks found in '{path}'")]
    NoAudioTracks {
        /// Path to the audio file.
        path: PathBuf,
    },

    /// Failed to write WAV file.
    #[error("failed to write WAV file '{path}'")]
    WavWriteFailed {
        /// Path to the WAV file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON output")]
    JsonSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
