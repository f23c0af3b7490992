use dom::DocumentError;
use style::ParseError;

/// Why an ingest call failed.
///
/// Scanning never fails; errors come from applying a completed token to
/// the tree. Unknown words and unmatched tokens are dropped silently, so
/// the only `Value` sources are the loud vocabularies: keyword sets and
/// quad shorthands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IngestError {
    /// An attribute value was rejected by its parser. `position` is the
    /// byte offset of the value in the whole stream ingested so far.
    Value { position: usize, source: ParseError },
    /// The tree rejected an edit, e.g. the session target was destroyed
    /// under a live session.
    Tree { source: DocumentError },
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::Value { position, source } => {
                write!(f, "bad attribute value at byte {position}: {source}")
            }
            IngestError::Tree { source } => write!(f, "tree edit rejected: {source}"),
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::Value { source, .. } => Some(source),
            IngestError::Tree { source } => Some(source),
        }
    }
}

/// Error from applying one attribute, before the stream position is
/// known. The builder attaches the position via [`ApplyError::at`].
#[derive(Debug)]
pub(crate) enum ApplyError {
    Value(ParseError),
    Tree(DocumentError),
}

impl ApplyError {
    pub(crate) fn at(self, position: usize) -> IngestError {
        match self {
            ApplyError::Value(source) => IngestError::Value { position, source },
            ApplyError::Tree(source) => IngestError::Tree { source },
        }
    }
}

impl From<ParseError> for ApplyError {
    fn from(err: ParseError) -> Self {
        ApplyError::Value(err)
    }
}

impl From<DocumentError> for ApplyError {
    fn from(err: DocumentError) -> Self {
        ApplyError::Tree(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::ElementKey;

    #[test]
    fn value_errors_carry_their_stream_position() {
        let err = ApplyError::Value(ParseError::MalformedQuad {
            input: "1 2 3 4 5".into(),
        })
        .at(42);
        assert!(
            matches!(err, IngestError::Value { position: 42, .. }),
            "expected Value at 42, got: {err:?}"
        );
        let text = err.to_string();
        assert!(text.contains("byte 42"), "unexpected display: {text}");
    }

    #[test]
    fn tree_errors_ignore_the_position() {
        let key = ElementKey::from_raw(9);
        let err = ApplyError::Tree(DocumentError::NoSuchElement(key)).at(7);
        assert_eq!(
            err,
            IngestError::Tree {
                source: DocumentError::NoSuchElement(key)
            }
        );
    }

    #[test]
    fn ingest_error_exposes_its_source() {
        use std::error::Error;
        let err = IngestError::Value {
            position: 0,
            source: ParseError::UnknownKeyword {
                word: "bogus".into(),
                expected: "inline|block|none",
            },
        };
        assert!(err.source().is_some());
    }
}
