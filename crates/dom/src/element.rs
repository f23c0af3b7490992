use crate::attr::{AttrKind, Attribute, Payload};
use crate::events::{EventKind, Listener, ListenerId};
use std::collections::HashMap;

/// Opaque handle to an element owned by a [`Document`](crate::Document).
///
/// Keys are allocated monotonically and never reused for the lifetime of
/// their document, so a stale key simply stops resolving. The raw value has
/// no meaning beyond identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementKey(u64);

impl ElementKey {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

/// The closed set of element types the engine builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Document root. One per document, created with it, never destroyed.
    View,
    Div,
    Span,
    Paragraph,
    H1,
    H2,
    H3,
    OrderedList,
    UnorderedList,
    ListItem,
    Image,
    Break,
    /// Anonymous text/color run produced by markup ingestion.
    Text,
}

impl ElementKind {
    /// Canonical lowercase markup name, as the outline prints it.
    pub const fn tag_name(self) -> &'static str {
        match self {
            ElementKind::View => "view",
            ElementKind::Div => "div",
            ElementKind::Span => "span",
            ElementKind::Paragraph => "p",
            ElementKind::H1 => "h1",
            ElementKind::H2 => "h2",
            ElementKind::H3 => "h3",
            ElementKind::OrderedList => "ol",
            ElementKind::UnorderedList => "ul",
            ElementKind::ListItem => "li",
            ElementKind::Image => "image",
            ElementKind::Break => "br",
            ElementKind::Text => "text",
        }
    }
}

/// One element record in the registry.
///
/// Invariants (maintained by `Document`, which owns all link rewiring):
/// - sibling links are mutually consistent with the parent's
///   `first_child`/`last_child`,
/// - `child_count` equals the length of the forward child walk,
/// - a detached element has `parent == None` and no sibling links.
pub(crate) struct Element {
    pub(crate) kind: ElementKind,
    pub(crate) parent: Option<ElementKey>,
    pub(crate) first_child: Option<ElementKey>,
    pub(crate) last_child: Option<ElementKey>,
    pub(crate) prev_sibling: Option<ElementKey>,
    pub(crate) next_sibling: Option<ElementKey>,
    pub(crate) child_count: usize,
    pub(crate) attrs: HashMap<AttrKind, Attribute>,
    pub(crate) payload: Payload,
    pub(crate) listeners: HashMap<EventKind, Vec<(ListenerId, Listener)>>,
}

impl Element {
    pub(crate) fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            child_count: 0,
            attrs: HashMap::new(),
            payload: Payload::default(),
            listeners: HashMap::new(),
        }
    }

    /// The stored index id. An empty id means "not indexed": setting
    /// `IndexBy("")` clears an element's index entry.
    pub(crate) fn indexed_id(&self) -> Option<&str> {
        match self.attrs.get(&AttrKind::IndexBy) {
            Some(Attribute::IndexBy(id)) if !id.is_empty() => Some(id.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_key_round_trip() {
        let key = ElementKey::from_raw(7);
        assert_eq!(key.as_raw(), 7);
    }

    #[test]
    fn tag_names_are_lowercase_markup_words() {
        assert_eq!(ElementKind::Paragraph.tag_name(), "p");
        assert_eq!(ElementKind::OrderedList.tag_name(), "ol");
        assert_eq!(ElementKind::UnorderedList.tag_name(), "ul");
        assert_eq!(ElementKind::Break.tag_name(), "br");
        assert_eq!(ElementKind::View.tag_name(), "view");
    }

    #[test]
    fn new_element_is_fully_detached() {
        let el = Element::new(ElementKind::Div);
        assert!(el.parent.is_none());
        assert!(el.first_child.is_none());
        assert!(el.last_child.is_none());
        assert_eq!(el.child_count, 0);
        assert!(el.payload.is_empty());
    }
}
