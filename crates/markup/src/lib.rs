//! Streaming markup ingestion: turns fragments of element/attribute/color
//! markup into edits on a [`dom::Document`].
//!
//! The parser is a two-phase pipeline behind one call. A byte scanner
//! splits fragments into words at tag delimiters and classifies each
//! completed word against the vocabulary tables (element, attribute,
//! color); a builder applies the resulting tokens to the tree under an
//! open-element stack. All per-stream state lives in a [`ParserSession`],
//! so a stream may arrive in arbitrary fragments: a tag, word, or quoted
//! value split across calls resumes where it stopped.
//!
//! The grammar is deliberately forgiving: unknown words vanish, a close
//! with nothing open is ignored, and only loud vocabularies (exact
//! keyword sets, quad shorthands) and dead tree keys produce an
//! [`IngestError`].

mod builder;
mod error;
mod names;
mod session;
mod token;
mod tokenizer;

pub mod golden_corpus;
pub mod perf_fixtures;

pub use crate::error::IngestError;
pub use crate::session::{MarkupStream, ParserSession, append_markup};
