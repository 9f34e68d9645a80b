//! Phrase extraction pipeline.
//!
//! Validates the inputs, selects one text, loads the recording once and
//! writes a clip per phrase. The run ends after the selected text, even if
//! the document holds more texts.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::Error;
use crate::annotation::AnnotationSource;
use crate::audio::load_audio;
use crate::config::{DefaultsConfig, ExportFormat};
use crate::constants::{DEFAULT_OUT_DIR, DEFAULT_SEPARATOR, flextext};
use crate::output::{ClipEntry, ClipStatus, ExtractionObserver, ExtractionReport};

use super::{
    ExportOutcome, PhraseIdentifier, SegnumIdentifier, clip_path, export_slice, select_text,
};

/// Options for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Directory clips are written to.
    pub out_dir: PathBuf,
    /// Title abbreviation of the text to extract (first text if `None`).
    pub text_abbr: Option<String>,
    /// Slugify abbreviations before matching and naming.
    pub slugify_abbr: bool,
    /// Clip file format.
    pub export_format: ExportFormat,
    /// Separator between abbreviation and phrase number.
    pub separator: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            text_abbr: None,
            slugify_abbr: false,
            export_format: ExportFormat::Wav,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl From<&DefaultsConfig> for ExtractOptions {
    fn from(defaults: &DefaultsConfig) -> Self {
        Self {
            out_dir: defaults.out_dir.clone(),
            text_abbr: None,
            slugify_abbr: defaults.slugify_abbr,
            export_format: defaults.export_format,
            separator: defaults.separator.clone(),
        }
    }
}

/// Cuts the phrases of one text out of its recording.
#[derive(Debug, Clone)]
pub struct PhraseExtractor<I = SegnumIdentifier> {
    options: ExtractOptions,
    identifier: I,
}

impl PhraseExtractor {
    /// Create an extractor using the default segnum-or-position identifiers.
    #[must_use]
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            identifier: SegnumIdentifier,
        }
    }
}

impl<I: PhraseIdentifier> PhraseExtractor<I> {
    /// Replace the identifier strategy.
    #[must_use]
    pub fn with_identifier<J: PhraseIdentifier>(self, identifier: J) -> PhraseExtractor<J> {
        PhraseExtractor {
            options: self.options,
            identifier,
        }
    }

    /// Options this extractor runs with.
    #[must_use]
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract every phrase of the selected text in `flextext_file`.
    ///
    /// # Errors
    ///
    /// Fails, without writing anything further, if:
    /// - the annotation or audio file does not exist
    /// - the annotation is not well-formed XML
    /// - no text matches the requested abbreviation
    /// - the audio is not a WAV file or cannot be decoded
    /// - a phrase lacks or has a malformed time offset
    /// - a clip cannot be written
    ///
    /// Clips that already exist are skipped, not treated as errors.
    pub fn from_flextext(
        &self,
        flextext_file: &Path,
        audio_file: &Path,
        observer: &mut dyn ExtractionObserver,
    ) -> Result<ExtractionReport, Error> {
        debug!("{}", flextext_file.display());
        debug!("{}", audio_file.display());
        let options = &self.options;

        let source = AnnotationSource::read(flextext_file)?;
        let document = source.parse()?;
        let annotation_path = document.path();

        debug!("Iterating texts");
        let requested = options.text_abbr.as_deref().filter(|a| !a.is_empty());
        if requested.is_none() {
            info!(
                "Parsing file {}, using first text in {}",
                audio_file.display(),
                flextext_file.display()
            );
        }

        let selected = select_text(document.texts(), requested, options.slugify_abbr)
            .ok_or_else(|| Error::NoMatchingText {
                abbreviation: requested.unwrap_or_default().to_string(),
                path: annotation_path.to_path_buf(),
            })?;
        let abbr = selected.abbreviation.as_str();
        debug!("{abbr}: {}", audio_file.display());

        if !audio_file.is_file() {
            return Err(Error::AudioNotFound {
                path: audio_file.to_path_buf(),
            });
        }
        let audio = load_audio(audio_file)?;

        std::fs::create_dir_all(&options.out_dir).map_err(|e| Error::OutputDirCreateFailed {
            path: options.out_dir.clone(),
            source: e,
        })?;

        let phrase_count = selected.text.phrases().count();
        observer.text_selected(abbr, phrase_count);

        let mut clips = Vec::with_capacity(phrase_count);
        for (i, phrase) in selected.text.phrases().enumerate() {
            let phrase_id = self
                .identifier
                .identify(&phrase, abbr, &options.separator, i + 1);
            let context = PhraseContext {
                phrase_id: &phrase_id,
                text_abbr: abbr,
                path: annotation_path,
            };

            let start_ms = context.offset(flextext::BEGIN_OFFSET_ATTR, phrase.begin_offset())?;
            let end_ms = context.offset(flextext::END_OFFSET_ATTR, phrase.end_offset())?;
            if end_ms <= start_ms {
                warn!("Phrase {phrase_id} ends at {end_ms}ms, before it starts at {start_ms}ms");
            }

            let target = clip_path(&options.out_dir, &phrase_id, options.export_format);
            let outcome = export_slice(&audio, &target, start_ms, end_ms, options.export_format)?;
            let status = match outcome {
                ExportOutcome::Written(_) => ClipStatus::Written,
                ExportOutcome::Skipped(_) => ClipStatus::Skipped,
            };

            let clip = ClipEntry {
                identifier: phrase_id,
                start_ms,
                end_ms,
                output_file: target,
                status,
            };
            observer.clip_exported(&clip);
            clips.push(clip);
        }

        let report = ExtractionReport {
            annotation_file: annotation_path.to_path_buf(),
            audio_file: audio_file.to_path_buf(),
            text_abbreviation: selected.abbreviation.clone(),
            output_dir: options.out_dir.clone(),
            clips,
        };
        observer.finished(&report);

        Ok(report)
    }
}

/// Run the extractor matching the annotation file's type.
///
/// # Errors
///
/// Returns [`Error::UnsupportedAnnotationFormat`] for anything but
/// `.flextext`, otherwise whatever the extraction returns.
pub fn process_file<I: PhraseIdentifier>(
    annotation_file: &Path,
    audio_file: &Path,
    extractor: &PhraseExtractor<I>,
    observer: &mut dyn ExtractionObserver,
) -> Result<ExtractionReport, Error> {
    let extension = annotation_file
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    if extension.eq_ignore_ascii_case(flextext::EXTENSION) {
        extractor.from_flextext(annotation_file, audio_file, observer)
    } else {
        Err(Error::UnsupportedAnnotationFormat {
            extension: format!(".{extension}"),
        })
    }
}

/// Where a phrase sits, for error messages.
struct PhraseContext<'a> {
    phrase_id: &'a str,
    text_abbr: &'a str,
    path: &'a Path,
}

impl PhraseContext<'_> {
    /// Parse a required millisecond offset attribute.
    fn offset(&self, attribute: &'static str, raw: Option<&str>) -> Result<u64, Error> {
        let raw = raw.ok_or_else(|| Error::MissingTimeOffset {
            attribute,
            phrase_id: self.phrase_id.to_string(),
            text_abbr: self.text_abbr.to_string(),
            path: self.path.to_path_buf(),
        })?;

        raw.trim()
            .parse::<u64>()
            .map_err(|_| Error::InvalidTimeOffset {
                attribute,
                value: raw.to_string(),
                phrase_id: self.phrase_id.to_string(),
                text_abbr: self.text_abbr.to_string(),
                path: self.path.to_path_buf(),
            })
    }
}
