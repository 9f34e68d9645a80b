//! Annotation document loading.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::constants::flextext;
use crate::error::{Error, Result};

use super::Text;

/// Raw contents of an annotation file.
///
/// The parsed [`AnnotationDocument`] borrows from this, so the source must
/// outlive every text and phrase view taken from the document.
#[derive(Debug)]
pub struct AnnotationSource {
    path: PathBuf,
    contents: String,
}

impl AnnotationSource {
    /// Read an annotation file into memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnnotationNotFound`] if `path` is not an existing
    /// file, or [`Error::AnnotationRead`] if it cannot be read.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::AnnotationNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|e| Error::AnnotationRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            contents,
        })
    }

    /// Parse the XML tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnnotationParse`] if the contents are not well-formed XML.
    pub fn parse(&self) -> Result<AnnotationDocument<'_>> {
        debug!("Loading XML from {}", self.path.display());
        let tree = roxmltree::Document::parse(&self.contents).map_err(|e| {
            Error::AnnotationParse {
                path: self.path.clone(),
                source: e,
            }
        })?;

        Ok(AnnotationDocument {
            path: &self.path,
            tree,
        })
    }
}

/// A parsed interlinear text export.
#[derive(Debug)]
pub struct AnnotationDocument<'input> {
    path: &'input Path,
    tree: roxmltree::Document<'input>,
}

impl<'input> AnnotationDocument<'input> {
    /// Path of the file this document was parsed from.
    pub fn path(&self) -> &Path {
        self.path
    }

    /// Iterate over all `interlinear-text` elements in document order.
    pub fn texts(&self) -> impl Iterator<Item = Text<'_, 'input>> + '_ {
        self.tree
            .descendants()
            .filter(|node| node.has_tag_name(flextext::TEXT_TAG))
            .map(Text::new)
    }
}

/// Overview of one text, as shown by the `texts` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSummary {
    /// 0-based position of the text in the document.
    pub index: usize,
    /// Title abbreviation, if present.
    pub abbreviation: Option<String>,
    /// Full title, if present.
    pub title: Option<String>,
    /// Number of phrases in the text.
    pub phrase_count: usize,
}

/// Summarize every text in an annotation file.
pub fn list_texts(path: &Path) -> Result<Vec<TextSummary>> {
    let source = AnnotationSource::read(path)?;
    let document = source.parse()?;

    Ok(document
        .texts()
        .enumerate()
        .map(|(index, text)| TextSummary {
            index,
            abbreviation: text.title_abbreviation().map(str::to_string),
            title: text.title().map(str::to_string),
            phrase_count: text.phrases().count(),
        })
        .collect())
}
