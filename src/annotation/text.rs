//! Text and phrase views over the annotation tree.

use roxmltree::Node;

use crate::constants::flextext;

/// One `interlinear-text` element.
#[derive(Debug, Clone, Copy)]
pub struct Text<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> Text<'a, 'input> {
    pub(crate) fn new(node: Node<'a, 'input>) -> Self {
        Self { node }
    }

    /// The text's `guid` attribute.
    pub fn guid(&self) -> Option<&'a str> {
        self.node.attribute(flextext::GUID_ATTR)
    }

    /// Text of the first `title-abbreviation` item, if any.
    pub fn title_abbreviation(&self) -> Option<&'a str> {
        first_item_text(self.node, flextext::TITLE_ABBREVIATION)
    }

    /// Text of the first `title` item, if any.
    pub fn title(&self) -> Option<&'a str> {
        first_item_text(self.node, flextext::TITLE)
    }

    /// Iterate over the text's phrases in document order.
    pub fn phrases(&self) -> impl Iterator<Item = Phrase<'a, 'input>> + use<'a, 'input> {
        self.node
            .descendants()
            .filter(|node| node.has_tag_name(flextext::PHRASE_TAG))
            .map(|node| Phrase { node })
    }
}

/// One `phrase` element.
#[derive(Debug, Clone, Copy)]
pub struct Phrase<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a> Phrase<'a, '_> {
    /// The phrase's `guid` attribute.
    pub fn guid(&self) -> Option<&'a str> {
        self.node.attribute(flextext::GUID_ATTR)
    }

    /// Raw `begin-time-offset` attribute.
    pub fn begin_offset(&self) -> Option<&'a str> {
        self.node.attribute(flextext::BEGIN_OFFSET_ATTR)
    }

    /// Raw `end-time-offset` attribute.
    pub fn end_offset(&self) -> Option<&'a str> {
        self.node.attribute(flextext::END_OFFSET_ATTR)
    }

    /// Segment number assigned by FLEx, if present and non-empty.
    pub fn segnum(&self) -> Option<&'a str> {
        first_item_text(self.node, flextext::SEGNUM).filter(|s| !s.is_empty())
    }
}

/// Find the first descendant `item` with the given `type` and return its text.
fn first_item_text<'a>(node: Node<'a, '_>, item_type: &str) -> Option<&'a str> {
    node.descendants()
        .find(|n| {
            n.has_tag_name(flextext::ITEM_TAG)
                && n.attribute(flextext::ITEM_TYPE_ATTR) == Some(item_type)
        })
        .map(|n| n.text().unwrap_or(""))
}
