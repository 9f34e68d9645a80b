//! Progress bar utilities for phrase extraction.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for the phrases of one text.
pub fn create_phrase_progress(
    total_phrases: usize,
    text_abbr: &str,
    enabled: bool,
) -> Option<ProgressBar> {
    if !enabled || total_phrases == 0 {
        return None;
    }

    let pb = ProgressBar::new(total_phrases as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos}}/{{len}} phrases - {text_abbr} ({{msg}})"
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ "),
    );
    Some(pb)
}

/// Finish a progress bar with a message.
pub fn finish_progress(pb: Option<ProgressBar>, message: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(message.to_string());
    }
}

/// Increment a progress bar and show the current clip.
pub fn inc_progress(pb: Option<&ProgressBar>, message: &str) {
    if let Some(pb) = pb {
        pb.set_message(message.to_string());
        pb.inc(1);
    }
}
