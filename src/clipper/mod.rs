//! Phrase clip extraction.
//!
//! This module selects a text from an annotation document, names each of
//! its phrases and writes the matching slice of the recording to a file.

pub mod command;
mod identifier;
mod selector;
mod writer;

pub use command::{ExtractOptions, PhraseExtractor, process_file};
pub use identifier::{PhraseIdentifier, SegnumIdentifier, sanitize_identifier};
pub use selector::{SelectedText, select_text, slugify};
pub use writer::{ExportOutcome, clip_path, export_slice};
