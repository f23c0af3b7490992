//! Applies queued tokens to the document tree.

use dom::{Attribute, Document, ElementKind};

use crate::error::IngestError;
use crate::session::ParserSession;
use crate::token::Token;

/// Drain the pending queue into `doc`.
///
/// A token that needs a partner not yet scanned (an attribute waiting
/// for its value at the end of a fragment) goes back on the queue for
/// the next call. A token with no sensible target is dropped with a
/// debug log, never an error; errors are reserved for rejected values
/// and dead tree keys.
pub(crate) fn drain(session: &mut ParserSession, doc: &mut Document) -> Result<(), IngestError> {
    while let Some(token) = session.pending.pop_front() {
        let top = session.stack.last().copied().unwrap_or(session.target);
        match token {
            Token::ElementOpen(kind) => {
                let child = doc.create_element(kind);
                if let Err(source) = doc.append_child(top, child) {
                    let _ = doc.remove(child);
                    return Err(IngestError::Tree { source });
                }
                session.stack.push(child);
            }
            Token::ElementClose => {
                if session.stack.len() > 1 {
                    session.stack.pop();
                } else {
                    log::debug!(
                        target: "markup.builder",
                        "ignoring a close with nothing open above the target"
                    );
                }
            }
            Token::Attribute(name) => match session.pending.pop_front() {
                Some(Token::AttributeValue { value, position }) => {
                    name.apply(doc, top, &value)
                        .map_err(|err| err.at(position))?;
                }
                Some(other) => {
                    log::debug!(
                        target: "markup.builder",
                        "dropping attribute {:?}: no value followed",
                        name.name()
                    );
                    session.pending.push_front(other);
                }
                None => {
                    // The value may still be in flight; retry next call.
                    session.pending.push_front(Token::Attribute(name));
                    break;
                }
            },
            Token::AttributeSimple(attr) => {
                if let Err(source) = doc.set_attribute(top, attr) {
                    return Err(IngestError::Tree { source });
                }
            }
            Token::AttributeValue { value, .. } => {
                log::debug!(target: "markup.builder", "dropping stray value {value:?}");
            }
            Token::Color(color) => {
                let child = doc.create_element(ElementKind::Text);
                if let Err(source) = doc.append_child(top, child) {
                    let _ = doc.remove(child);
                    return Err(IngestError::Tree { source });
                }
                if let Err(source) = doc.set_attribute(child, Attribute::TextColor(color)) {
                    return Err(IngestError::Tree { source });
                }
                session.stack.push(child);
            }
            Token::Text(run) => {
                if let Err(source) = doc.append_text(top, &run) {
                    return Err(IngestError::Tree { source });
                }
            }
        }
    }
    Ok(())
}
