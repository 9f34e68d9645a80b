//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "flexclip";

/// Default output directory for clips.
pub const DEFAULT_OUT_DIR: &str = ".";

/// Default separator between text abbreviation and phrase number.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Element and attribute names of the FLEx interlinear export.
pub mod flextext {
    /// File extension of FLEx interlinear exports.
    pub const EXTENSION: &str = "flextext";

    /// One transcribed text.
    pub const TEXT_TAG: &str = "interlinear-text";

    /// One time-aligned utterance.
    pub const PHRASE_TAG: &str = "phrase";

    /// Metadata item element.
    pub const ITEM_TAG: &str = "item";

    /// Attribute holding the item kind.
    pub const ITEM_TYPE_ATTR: &str = "type";

    /// Item type of a text's short code.
    pub const TITLE_ABBREVIATION: &str = "title-abbreviation";

    /// Item type of a text's full title.
    pub const TITLE: &str = "title";

    /// Item type of a phrase's segment number.
    pub const SEGNUM: &str = "segnum";

    /// Phrase start offset in milliseconds.
    pub const BEGIN_OFFSET_ATTR: &str = "begin-time-offset";

    /// Phrase end offset in milliseconds.
    pub const END_OFFSET_ATTR: &str = "end-time-offset";

    /// Element identifier attribute.
    pub const GUID_ATTR: &str = "guid";
}

/// Audio input constants.
pub mod audio {
    /// File extensions accepted as waveform input.
    pub const WAV_EXTENSIONS: &[&str] = &["wav", "wave"];

    /// Bit depth assumed when the container does not report one.
    pub const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

    /// Milliseconds per second, for offset to frame conversion.
    pub const MS_PER_SECOND: u64 = 1000;
}
