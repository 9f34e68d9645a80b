//! FLEx interlinear text (`.flextext`) parsing.
//!
//! The document is parsed once into a borrowed XML tree; texts and phrases
//! are lightweight views over its nodes and are produced lazily in document
//! order.

mod document;
mod text;

pub use document::{AnnotationDocument, AnnotationSource, TextSummary, list_texts};
pub use text::{Phrase, Text};
