use crate::{ParseError, UnitValue};

/// How an element participates in flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Inline,
    Block,
    None,
}

/// Coordinate interpretation for element geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Absolute,
    Relative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    Justified,
}

/// Line height is either font-derived or an explicit multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineHeight {
    Normal,
    Numeric(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderStyle {
    None,
    Dotted,
    Dashed,
    Solid,
    Doubled,
    Groove,
    Ridge,
    Inset,
    Outset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStyleType {
    None,
    Disc,
    Circle,
    Square,
    Decimal,
    Alpha,
    Greek,
    Latin,
    Roman,
}

fn unknown(word: &str, expected: &'static str) -> ParseError {
    ParseError::UnknownKeyword {
        word: word.to_string(),
        expected,
    }
}

impl Display {
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(Display::Inline),
            "block" => Ok(Display::Block),
            "none" => Ok(Display::None),
            _ => Err(unknown(value, "inline|block|none")),
        }
    }
}

impl Position {
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "absolute" => Ok(Position::Absolute),
            "relative" => Ok(Position::Relative),
            _ => Err(unknown(value, "absolute|relative")),
        }
    }
}

impl TextAlignment {
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(TextAlignment::Left),
            "center" => Ok(TextAlignment::Center),
            "right" => Ok(TextAlignment::Right),
            "justified" => Ok(TextAlignment::Justified),
            _ => Err(unknown(value, "left|center|right|justified")),
        }
    }
}

impl LineHeight {
    /// Permissive: `normal` or a numeric spelling (bad numbers read as 0).
    pub fn parse(value: &str) -> LineHeight {
        if value.trim().eq_ignore_ascii_case("normal") {
            LineHeight::Normal
        } else {
            LineHeight::Numeric(UnitValue::parse(value).magnitude)
        }
    }
}

impl BorderStyle {
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(BorderStyle::None),
            "dotted" => Ok(BorderStyle::Dotted),
            "dashed" => Ok(BorderStyle::Dashed),
            "solid" => Ok(BorderStyle::Solid),
            "doubled" => Ok(BorderStyle::Doubled),
            "groove" => Ok(BorderStyle::Groove),
            "ridge" => Ok(BorderStyle::Ridge),
            "inset" => Ok(BorderStyle::Inset),
            "outset" => Ok(BorderStyle::Outset),
            _ => Err(unknown(
                value,
                "none|dotted|dashed|solid|doubled|groove|ridge|inset|outset",
            )),
        }
    }
}

impl ListStyleType {
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(ListStyleType::None),
            "disc" => Ok(ListStyleType::Disc),
            "circle" => Ok(ListStyleType::Circle),
            "square" => Ok(ListStyleType::Square),
            "decimal" => Ok(ListStyleType::Decimal),
            "alpha" => Ok(ListStyleType::Alpha),
            "greek" => Ok(ListStyleType::Greek),
            "latin" => Ok(ListStyleType::Latin),
            "roman" => Ok(ListStyleType::Roman),
            _ => Err(unknown(
                value,
                "none|disc|circle|square|decimal|alpha|greek|latin|roman",
            )),
        }
    }
}
