use std::collections::VecDeque;
use std::fmt;

use dom::{Document, ElementKey};

use crate::builder;
use crate::error::IngestError;
use crate::token::Token;
use crate::tokenizer;

/// Incremental markup parser bound to one target element.
///
/// A session owns everything that may straddle ingest calls: the open
/// element stack, a partially captured word, queued tokens still waiting
/// for a partner, and the byte count of everything ingested so far. Any
/// fragmentation of a markup stream builds the same tree as feeding the
/// whole string at once; only the grouping of text runs differs, because
/// a run ends where the call does.
pub struct ParserSession {
    pub(crate) target: ElementKey,
    /// Open elements. `stack[0]` is the target and is never popped.
    pub(crate) stack: Vec<ElementKey>,
    pub(crate) pending: VecDeque<Token>,
    /// Between `<` and the `>` that ends the tag.
    pub(crate) in_tag: bool,
    /// A `/` was seen in the current tag; the next element or color word
    /// closes instead of opening.
    pub(crate) terminal: bool,
    /// An element word has been classified in the current tag, so further
    /// words are attribute material.
    pub(crate) in_attributes: bool,
    /// A valued attribute word has been classified; the next word is its
    /// value.
    pub(crate) expecting_value: bool,
    /// The quote byte if scanning is inside a quoted value.
    pub(crate) quote: Option<u8>,
    /// The word being accumulated, possibly across calls.
    pub(crate) capture: String,
    /// Stream offset of the first byte of `capture`.
    pub(crate) capture_start: usize,
    /// The text run being accumulated, flushed at `<` and at call end.
    pub(crate) text: String,
    /// Total bytes ingested by completed calls.
    pub(crate) consumed: usize,
}

impl ParserSession {
    pub fn new(target: ElementKey) -> Self {
        Self {
            target,
            stack: vec![target],
            pending: VecDeque::new(),
            in_tag: false,
            terminal: false,
            in_attributes: false,
            expecting_value: false,
            quote: None,
            capture: String::new(),
            capture_start: 0,
            text: String::new(),
            consumed: 0,
        }
    }

    /// The element this session appends under.
    pub fn target(&self) -> ElementKey {
        self.target
    }

    /// Scan one fragment and apply every completed token to `doc`.
    ///
    /// Returns the innermost open element, i.e. where the next text run
    /// would land. On a `Value` error the offending attribute and value
    /// are consumed and the session stays usable; on a `Tree` error the
    /// target (or an open ancestor) is gone and later calls will keep
    /// failing.
    pub fn ingest(&mut self, doc: &mut Document, markup: &str) -> Result<ElementKey, IngestError> {
        tokenizer::scan(self, markup);
        builder::drain(self, doc)?;
        Ok(self.stack.last().copied().unwrap_or(self.target))
    }

    /// Move the accumulated text run into the token queue.
    pub(crate) fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let run = std::mem::take(&mut self.text);
            self.pending.push_back(Token::Text(run));
        }
    }
}

/// `fmt::Write` adapter over a session, so markup can be streamed in
/// with `write!`.
///
/// `fmt::Write` cannot carry a payload error, so the first ingest
/// failure is stashed, the failing `write!` returns `fmt::Error`, later
/// writes are refused, and [`MarkupStream::finish`] surfaces the cause.
pub struct MarkupStream<'d> {
    doc: &'d mut Document,
    session: ParserSession,
    error: Option<IngestError>,
}

impl<'d> MarkupStream<'d> {
    pub fn new(doc: &'d mut Document, target: ElementKey) -> Self {
        Self {
            doc,
            session: ParserSession::new(target),
            error: None,
        }
    }

    /// The innermost open element, or the error that stopped the stream.
    pub fn finish(self) -> Result<ElementKey, IngestError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self
                .session
                .stack
                .last()
                .copied()
                .unwrap_or(self.session.target)),
        }
    }
}

impl fmt::Write for MarkupStream<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }
        match self.session.ingest(self.doc, s) {
            Ok(_) => Ok(()),
            Err(err) => {
                self.error = Some(err);
                Err(fmt::Error)
            }
        }
    }
}

/// Parse `markup` in one shot under a throwaway session.
pub fn append_markup(
    doc: &mut Document,
    target: ElementKey,
    markup: &str,
) -> Result<ElementKey, IngestError> {
    ParserSession::new(target).ingest(doc, markup)
}
