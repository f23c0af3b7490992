//! Retained element tree with typed attributes, string-id queries, event
//! listeners, and a renderer-facing outline.
//!
//! Invariants:
//! - the registry is the single source of truth for element liveness,
//! - element keys and listener ids are monotonic and never reused within a
//!   document,
//! - destruction is always subtree-deep (no orphaned descendants survive),
//! - forward and backward child walks are exact reverses of each other.

mod attr;
mod document;
mod element;
mod error;
mod events;
mod outline;

pub use crate::attr::{AttrKind, Attribute, Content, Payload};
pub use crate::document::{Children, Descendants, Document};
pub use crate::element::{ElementKey, ElementKind};
pub use crate::error::DocumentError;
pub use crate::events::{Event, EventKind, Listener, ListenerId};
pub use crate::outline::{outline, outline_root};
