use dom::{Attribute, ElementKind};
use style::Color;

use crate::names::AttrName;

/// One unit of parsed markup, queued between the scanner and the tree
/// builder. Tokens own their data so they can sit in the queue across
/// ingest calls.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    /// An element word without a terminal marker: `<div`.
    ElementOpen(ElementKind),
    /// An element word under a terminal marker: `</div` or `<br/`.
    /// Closing is name-blind; the builder pops whatever is open.
    ElementClose,
    /// An attribute word that expects a following value.
    Attribute(AttrName),
    /// The value word (or quoted string) for the preceding attribute.
    /// `position` is the byte offset of the value in the whole stream
    /// the session has ingested, for error reporting.
    AttributeValue { value: String, position: usize },
    /// An attribute word complete in itself, e.g. `block` or `center`.
    AttributeSimple(Attribute),
    /// A color word used as a tag: `<blue>` opens an implicit text run.
    Color(Color),
    /// A run of document text between tags.
    Text(String),
}
