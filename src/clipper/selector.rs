//! Target text selection.

use tracing::{debug, warn};

use crate::annotation::Text;

/// A text chosen for extraction, with the abbreviation used for its clips.
#[derive(Debug, Clone)]
pub struct SelectedText<'a, 'input> {
    /// The chosen text.
    pub text: Text<'a, 'input>,
    /// Abbreviation to prefix identifiers with (slugified if requested).
    pub abbreviation: String,
}

/// Normalize an abbreviation into a lowercase, dash-joined token.
pub fn slugify(value: &str) -> String {
    slug::slugify(value)
}

/// Pick the text to extract.
///
/// Without a requested abbreviation (or with an empty one) the first text
/// is used. Otherwise the first text whose title abbreviation equals the
/// request is used; the comparison is exact unless `slugify_abbr` is set,
/// in which case both sides are slugified first.
///
/// Returns `None` when nothing matches.
pub fn select_text<'a, 'input, I>(
    mut texts: I,
    requested: Option<&str>,
    slugify_abbr: bool,
) -> Option<SelectedText<'a, 'input>>
where
    I: Iterator<Item = Text<'a, 'input>>,
{
    let normalize = |abbr: &str| {
        if slugify_abbr {
            slugify(abbr)
        } else {
            abbr.to_string()
        }
    };

    let Some(requested) = requested.filter(|r| !r.is_empty()) else {
        let text = texts.next()?;
        let abbreviation = text.title_abbreviation().unwrap_or_else(|| {
            warn!("Found text with no title-abbreviation.");
            ""
        });
        return Some(SelectedText {
            text,
            abbreviation: normalize(abbreviation),
        });
    };

    let wanted = normalize(requested);
    texts.find_map(|text| {
        let Some(candidate) = text.title_abbreviation() else {
            debug!("Skipping text with no title-abbreviation");
            return None;
        };
        let candidate = normalize(candidate);
        debug!("Candidate text: {candidate}");
        (candidate == wanted).then(|| {
            debug!("Hit: {wanted}");
            SelectedText {
                text,
                abbreviation: candidate,
            }
        })
    })
}
