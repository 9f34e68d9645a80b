//! Output type definitions.

use std::path::PathBuf;

use serde::Serialize;

/// Whether a clip was produced by this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipStatus {
    /// Clip file was written.
    Written,
    /// Clip file already existed.
    Skipped,
}

/// One phrase clip handled during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClipEntry {
    /// Identifier the clip is named after.
    pub identifier: String,
    /// Phrase start in milliseconds.
    pub start_ms: u64,
    /// Phrase end in milliseconds.
    pub end_ms: u64,
    /// Path of the clip file.
    pub output_file: PathBuf,
    /// Outcome for this clip.
    pub status: ClipStatus,
}

/// Summary of one extraction run.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    /// Annotation file the text was read from.
    pub annotation_file: PathBuf,
    /// Recording the clips were cut from.
    pub audio_file: PathBuf,
    /// Abbreviation of the processed text.
    pub text_abbreviation: String,
    /// Directory clips were written to.
    pub output_dir: PathBuf,
    /// Clips in phrase order.
    pub clips: Vec<ClipEntry>,
}

impl ExtractionReport {
    /// Number of clips written by this run.
    pub fn written(&self) -> usize {
        self.count(ClipStatus::Written)
    }

    /// Number of clips skipped because they already existed.
    pub fn skipped(&self) -> usize {
        self.count(ClipStatus::Skipped)
    }

    fn count(&self, status: ClipStatus) -> usize {
        self.clips.iter().filter(|c| c.status == status).count()
    }
}
