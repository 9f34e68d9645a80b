//! Output identifiers for phrases.

use crate::annotation::Phrase;

/// Strategy for naming the clip of a phrase.
///
/// `backup_index` is the 1-based position of the phrase in its text. It is
/// derived from the loop position, so a phrase keeps the same fallback
/// number regardless of how many earlier phrases had a segment number.
///
/// Any function or closure with the matching signature is a strategy:
///
/// ```
/// use flexclip::annotation::Phrase;
/// use flexclip::clipper::PhraseIdentifier;
///
/// fn by_position(_: &Phrase<'_, '_>, abbr: &str, sep: &str, index: usize) -> String {
///     format!("{abbr}{sep}{index:03}")
/// }
///
/// fn accepts(_: &impl PhraseIdentifier) {}
/// accepts(&by_position);
/// ```
pub trait PhraseIdentifier {
    /// Build the identifier (file stem) for `phrase`.
    fn identify(
        &self,
        phrase: &Phrase<'_, '_>,
        abbreviation: &str,
        separator: &str,
        backup_index: usize,
    ) -> String;
}

impl<F> PhraseIdentifier for F
where
    F: Fn(&Phrase<'_, '_>, &str, &str, usize) -> String,
{
    fn identify(
        &self,
        phrase: &Phrase<'_, '_>,
        abbreviation: &str,
        separator: &str,
        backup_index: usize,
    ) -> String {
        self(phrase, abbreviation, separator, backup_index)
    }
}

/// Default strategy: `abbr + sep + segnum`, or `abbr + sep + backup_index`
/// when the phrase has no segment number.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegnumIdentifier;

impl PhraseIdentifier for SegnumIdentifier {
    fn identify(
        &self,
        phrase: &Phrase<'_, '_>,
        abbreviation: &str,
        separator: &str,
        backup_index: usize,
    ) -> String {
        phrase.segnum().map_or_else(
            || format!("{abbreviation}{separator}{backup_index}"),
            |segnum| format!("{abbreviation}{separator}{segnum}"),
        )
    }
}

/// Sanitize an identifier for use as a file stem.
///
/// Replaces characters that are invalid in filenames across platforms
/// and prevents path traversal.
pub fn sanitize_identifier(identifier: &str) -> String {
    let sanitized: String = identifier
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect();

    sanitized.replace("..", "__")
}
