//! Extraction event observers.
//!
//! The pipeline reports what it does through [`ExtractionObserver`] instead
//! of printing directly, so callers decide how (and whether) to show it.

use indicatif::ProgressBar;
use tracing::info;

use crate::config::OutputMode;

use super::progress::{create_phrase_progress, finish_progress, inc_progress};
use super::{ClipEntry, ClipStatus, ExtractionReport};

/// Receives events from a running extraction.
pub trait ExtractionObserver {
    /// A text was selected and is about to be iterated.
    fn text_selected(&mut self, abbreviation: &str, phrase_count: usize);

    /// A phrase clip was written or skipped.
    fn clip_exported(&mut self, clip: &ClipEntry);

    /// The run finished successfully.
    fn finished(&mut self, report: &ExtractionReport);
}

/// Observer that ignores all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ExtractionObserver for NullObserver {
    fn text_selected(&mut self, _abbreviation: &str, _phrase_count: usize) {}
    fn clip_exported(&mut self, _clip: &ClipEntry) {}
    fn finished(&mut self, _report: &ExtractionReport) {}
}

/// Observer that drives a terminal progress bar and logs a summary.
#[derive(Default)]
pub struct ProgressObserver {
    enabled: bool,
    pb: Option<ProgressBar>,
}

impl ProgressObserver {
    /// Create an observer; the bar is only drawn when `enabled`.
    pub fn new(enabled: bool) -> Self {
        Self { enabled, pb: None }
    }
}

impl ExtractionObserver for ProgressObserver {
    fn text_selected(&mut self, abbreviation: &str, phrase_count: usize) {
        info!("Extracting {phrase_count} phrase(s) from text '{abbreviation}'");
        self.pb = create_phrase_progress(phrase_count, abbreviation, self.enabled);
    }

    fn clip_exported(&mut self, clip: &ClipEntry) {
        if let (Some(pb), ClipStatus::Written) = (self.pb.as_ref(), clip.status) {
            pb.println(format!(
                "  {}: {}ms-{}ms -> {}",
                clip.identifier,
                clip.start_ms,
                clip.end_ms,
                clip.output_file.display()
            ));
        }
        inc_progress(self.pb.as_ref(), &clip.identifier);
    }

    fn finished(&mut self, report: &ExtractionReport) {
        finish_progress(self.pb.take(), "done");
        info!(
            "Extracted {} clip(s) to {} ({} already present)",
            report.written(),
            report.output_dir.display(),
            report.skipped()
        );
    }
}

/// Create an observer for the given output mode.
pub fn create_observer(mode: OutputMode, progress: bool) -> Box<dyn ExtractionObserver> {
    match mode {
        OutputMode::Human => Box::new(ProgressObserver::new(progress)),
        OutputMode::Json => Box::new(NullObserver),
    }
}
