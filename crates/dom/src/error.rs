use crate::attr::AttrKind;
use crate::element::ElementKey;
use crate::events::{EventKind, ListenerId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentError {
    /// The key does not resolve to a live element.
    NoSuchElement(ElementKey),
    /// No element is indexed under this id.
    NoSuchId(String),
    /// The element is not a child of the given parent.
    NotAChild {
        child: ElementKey,
        parent: ElementKey,
    },
    /// The element already has a parent; detach it first.
    AlreadyAttached(ElementKey),
    /// The operation needs an attached element, but this one has no parent.
    Detached(ElementKey),
    /// Linking would make an element its own ancestor.
    CycleDetected {
        parent: ElementKey,
        child: ElementKey,
    },
    CannotAttachRoot,
    CannotDestroyRoot,
    /// Attribute read on a slot the element never set.
    AttributeNotSet { key: ElementKey, kind: AttrKind },
    NoSuchListener {
        key: ElementKey,
        kind: EventKind,
        id: ListenerId,
    },
    /// Query pattern failed to compile.
    BadPattern { pattern: String, reason: String },
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::NoSuchElement(key) => write!(f, "no such element: {key:?}"),
            DocumentError::NoSuchId(id) => write!(f, "no element indexed as {id:?}"),
            DocumentError::NotAChild { child, parent } => {
                write!(f, "{child:?} is not a child of {parent:?}")
            }
            DocumentError::AlreadyAttached(key) => {
                write!(f, "{key:?} is already attached to a parent")
            }
            DocumentError::Detached(key) => write!(f, "{key:?} has no parent"),
            DocumentError::CycleDetected { parent, child } => {
                write!(f, "linking {child:?} under {parent:?} would form a cycle")
            }
            DocumentError::CannotAttachRoot => write!(f, "the root element cannot be attached"),
            DocumentError::CannotDestroyRoot => write!(f, "the root element cannot be destroyed"),
            DocumentError::AttributeNotSet { key, kind } => {
                write!(f, "attribute {kind:?} not set on {key:?}")
            }
            DocumentError::NoSuchListener { key, kind, id } => {
                write!(f, "no {kind:?} listener {id:?} on {key:?}")
            }
            DocumentError::BadPattern { pattern, reason } => {
                write!(f, "bad query pattern {pattern:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for DocumentError {}
