//! Byte scanner: splits markup fragments into tokens, resuming cleanly
//! at fragment boundaries.

use memchr::memchr;
use style::Color;

use crate::names::{self, AttrEntry};
use crate::session::ParserSession;
use crate::token::Token;

/// Scan one fragment, appending completed tokens to the session queue.
///
/// Three modes: document text (outside tags), quoted value, and in-tag
/// words. Every delimiter is a single ASCII byte, so slicing at one
/// always lands on a char boundary and multi-byte text passes through
/// untouched.
pub(crate) fn scan(session: &mut ParserSession, input: &str) {
    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if let Some(q) = session.quote {
            // Everything up to the closing quote is the value, verbatim.
            match memchr(q, &bytes[pos..]) {
                Some(rel) => {
                    session.capture.push_str(&input[pos..pos + rel]);
                    let value = std::mem::take(&mut session.capture);
                    session.pending.push_back(Token::AttributeValue {
                        value,
                        position: session.capture_start,
                    });
                    session.quote = None;
                    session.expecting_value = false;
                    pos += rel + 1;
                }
                None => {
                    session.capture.push_str(&input[pos..]);
                    pos = bytes.len();
                }
            }
            continue;
        }

        if !session.in_tag {
            // Document text runs to the next tag opener.
            match memchr(b'<', &bytes[pos..]) {
                Some(rel) => {
                    session.text.push_str(&input[pos..pos + rel]);
                    session.flush_text();
                    session.in_tag = true;
                    session.terminal = false;
                    pos += rel + 1;
                }
                None => {
                    session.text.push_str(&input[pos..]);
                    pos = bytes.len();
                }
            }
            continue;
        }

        // In-tag: accumulate a word up to the next delimiter.
        let word_end = bytes[pos..]
            .iter()
            .position(|&b| is_delimiter(b))
            .map_or(bytes.len(), |rel| pos + rel);
        push_capture(session, session.consumed + pos, &input[pos..word_end]);
        let Some(&delim) = bytes.get(word_end) else {
            // The word may continue in the next fragment.
            break;
        };
        pos = word_end + 1;

        match delim {
            b'<' => {
                // A stray opener restarts the tag; the captured word
                // survives in case the previous `<` was document text.
                session.terminal = false;
            }
            b'>' => {
                classify(session);
                session.in_tag = false;
                session.in_attributes = false;
                session.expecting_value = false;
                session.terminal = false;
            }
            b'/' => {
                session.terminal = true;
            }
            b'=' => {
                if session.in_attributes {
                    classify(session);
                } else {
                    push_capture(session, session.consumed + pos - 1, "=");
                }
            }
            b'"' | b'\'' => {
                if session.expecting_value && session.capture.is_empty() {
                    session.quote = Some(delim);
                    session.capture_start = session.consumed + pos - 1;
                } else if delim == b'"' {
                    push_capture(session, session.consumed + pos - 1, "\"");
                } else {
                    push_capture(session, session.consumed + pos - 1, "'");
                }
            }
            _ => {
                // Whitespace ends the word.
                classify(session);
            }
        }
    }

    // A call boundary ends the current text run but never a word; a tag
    // split mid-word resumes in the next fragment.
    session.flush_text();
    session.consumed += input.len();
}

fn is_delimiter(b: u8) -> bool {
    matches!(b, b'<' | b'>' | b'/' | b'=' | b'"' | b'\'') || b.is_ascii_whitespace()
}

fn push_capture(session: &mut ParserSession, start: usize, chunk: &str) {
    if session.capture.is_empty() && !chunk.is_empty() {
        session.capture_start = start;
    }
    session.capture.push_str(chunk);
}

/// Turn the captured word into a token. Lookups see the lowercased word;
/// a word emitted as a value keeps its original spelling.
///
/// Order matters: inside an attribute list a recognized attribute word
/// always wins, so an unquoted value spelled like one (`id=width`)
/// starts a new attribute instead of completing the old, exactly like a
/// value was never supplied.
fn classify(session: &mut ParserSession) {
    if session.capture.is_empty() {
        return;
    }
    let word = session.capture.to_ascii_lowercase();

    if session.in_attributes {
        if let Some(entry) = names::attribute_for(&word) {
            match entry {
                AttrEntry::Valued(name) => {
                    session.pending.push_back(Token::Attribute(name));
                    session.expecting_value = true;
                }
                AttrEntry::Simple(attr) => {
                    session.pending.push_back(Token::AttributeSimple(attr));
                    session.expecting_value = false;
                }
            }
            session.capture.clear();
            return;
        }
    }

    if session.expecting_value {
        let value = std::mem::take(&mut session.capture);
        session.pending.push_back(Token::AttributeValue {
            value,
            position: session.capture_start,
        });
        session.expecting_value = false;
        return;
    }

    if let Some(kind) = names::element_for(&word) {
        if session.terminal {
            session.pending.push_back(Token::ElementClose);
            session.terminal = false;
            session.in_attributes = false;
            session.expecting_value = false;
        } else {
            session.pending.push_back(Token::ElementOpen(kind));
            session.in_attributes = true;
        }
        session.capture.clear();
        return;
    }

    if let Some(color) = Color::named(&word) {
        if session.terminal {
            session.pending.push_back(Token::ElementClose);
            session.terminal = false;
            session.in_attributes = false;
        } else {
            session.pending.push_back(Token::Color(color));
        }
        session.capture.clear();
        return;
    }

    log::debug!(target: "markup.tokenizer", "dropping unmatched word: {word:?}");
    session.capture.clear();
}
