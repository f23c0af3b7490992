//! Attribute value vocabulary: numeric-with-unit values, colors, and the
//! closed keyword sets used by element attributes.
//!
//! Parsing here is deliberately two-tier:
//! - `UnitValue::parse` and `Color::parse` are total (bad input degrades to
//!   auto-calculate / opaque black),
//! - quad shorthand and exact keyword sets return `ParseError`.

mod color;
mod keywords;
mod values;

pub use crate::color::{Color, ColorSource};
pub use crate::keywords::{BorderStyle, Display, LineHeight, ListStyleType, Position, TextAlignment};
pub use crate::values::{Unit, UnitValue, parse_quad};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    MalformedQuad { input: String },
    UnknownKeyword { word: String, expected: &'static str },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MalformedQuad { input } => {
                write!(f, "malformed quad shorthand: {input:?}")
            }
            ParseError::UnknownKeyword { word, expected } => {
                write!(f, "unknown keyword {word:?}, expected one of: {expected}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
