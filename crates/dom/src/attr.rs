use style::{
    BorderStyle, Color, Display, LineHeight, ListStyleType, Position, TextAlignment, UnitValue,
};

/// Tag identifying one attribute slot on an element. Each element stores at
/// most one value per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttrKind {
    IndexBy,
    Display,
    Position,
    ObjectTop,
    ObjectLeft,
    ObjectHeight,
    ObjectWidth,
    ScrollTop,
    ScrollLeft,
    Background,
    Opacity,
    TextFace,
    TextSize,
    TextWeight,
    TextColor,
    TextAlignment,
    TextIndent,
    TabSize,
    LineHeight,
    MarginTop,
    MarginLeft,
    MarginBottom,
    MarginRight,
    PaddingTop,
    PaddingLeft,
    PaddingBottom,
    PaddingRight,
    BorderStyle,
    BorderWidth,
    BorderColor,
    BorderRadius,
    FocusIndex,
    ZIndex,
    ListStyleType,
}

/// A typed attribute value. The variant set is closed: every attribute the
/// engine knows is one arm here, and `Document::set_attribute` is a single
/// match over it.
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    /// Identity: the string id under which the element is indexed.
    IndexBy(String),
    Display(Display),
    Position(Position),
    ObjectTop(UnitValue),
    ObjectLeft(UnitValue),
    ObjectHeight(UnitValue),
    ObjectWidth(UnitValue),
    ScrollTop(UnitValue),
    ScrollLeft(UnitValue),
    Background(Color),
    Opacity(f64),
    TextFace(String),
    TextSize(UnitValue),
    TextWeight(f64),
    TextColor(Color),
    TextAlignment(TextAlignment),
    TextIndent(UnitValue),
    TabSize(UnitValue),
    LineHeight(LineHeight),
    MarginTop(UnitValue),
    MarginLeft(UnitValue),
    MarginBottom(UnitValue),
    MarginRight(UnitValue),
    PaddingTop(UnitValue),
    PaddingLeft(UnitValue),
    PaddingBottom(UnitValue),
    PaddingRight(UnitValue),
    BorderStyle(BorderStyle),
    BorderWidth(UnitValue),
    BorderColor(Color),
    BorderRadius(f64),
    FocusIndex(i32),
    ZIndex(i32),
    ListStyleType(ListStyleType),
}

impl Attribute {
    /// The slot this value occupies.
    pub const fn kind(&self) -> AttrKind {
        match self {
            Attribute::IndexBy(_) => AttrKind::IndexBy,
            Attribute::Display(_) => AttrKind::Display,
            Attribute::Position(_) => AttrKind::Position,
            Attribute::ObjectTop(_) => AttrKind::ObjectTop,
            Attribute::ObjectLeft(_) => AttrKind::ObjectLeft,
            Attribute::ObjectHeight(_) => AttrKind::ObjectHeight,
            Attribute::ObjectWidth(_) => AttrKind::ObjectWidth,
            Attribute::ScrollTop(_) => AttrKind::ScrollTop,
            Attribute::ScrollLeft(_) => AttrKind::ScrollLeft,
            Attribute::Background(_) => AttrKind::Background,
            Attribute::Opacity(_) => AttrKind::Opacity,
            Attribute::TextFace(_) => AttrKind::TextFace,
            Attribute::TextSize(_) => AttrKind::TextSize,
            Attribute::TextWeight(_) => AttrKind::TextWeight,
            Attribute::TextColor(_) => AttrKind::TextColor,
            Attribute::TextAlignment(_) => AttrKind::TextAlignment,
            Attribute::TextIndent(_) => AttrKind::TextIndent,
            Attribute::TabSize(_) => AttrKind::TabSize,
            Attribute::LineHeight(_) => AttrKind::LineHeight,
            Attribute::MarginTop(_) => AttrKind::MarginTop,
            Attribute::MarginLeft(_) => AttrKind::MarginLeft,
            Attribute::MarginBottom(_) => AttrKind::MarginBottom,
            Attribute::MarginRight(_) => AttrKind::MarginRight,
            Attribute::PaddingTop(_) => AttrKind::PaddingTop,
            Attribute::PaddingLeft(_) => AttrKind::PaddingLeft,
            Attribute::PaddingBottom(_) => AttrKind::PaddingBottom,
            Attribute::PaddingRight(_) => AttrKind::PaddingRight,
            Attribute::BorderStyle(_) => AttrKind::BorderStyle,
            Attribute::BorderWidth(_) => AttrKind::BorderWidth,
            Attribute::BorderColor(_) => AttrKind::BorderColor,
            Attribute::BorderRadius(_) => AttrKind::BorderRadius,
            Attribute::FocusIndex(_) => AttrKind::FocusIndex,
            Attribute::ZIndex(_) => AttrKind::ZIndex,
            Attribute::ListStyleType(_) => AttrKind::ListStyleType,
        }
    }
}

/// Raw content input for `Document::set_content`. A scalar variant replaces
/// that type's list with a one-element list; a list variant replaces the
/// whole list.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Text(String),
    TextList(Vec<String>),
    Number(f64),
    NumberList(Vec<f64>),
    Integer(i64),
    IntegerList(Vec<i64>),
    Character(char),
    CharacterList(Vec<char>),
}

/// Per-element free-form content, one list per payload type. The outline
/// renders the text runs; the other lists are caller-defined data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload {
    pub text: Vec<String>,
    pub numbers: Vec<f64>,
    pub integers: Vec<i64>,
    pub characters: Vec<char>,
}

impl Payload {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.numbers.is_empty()
            && self.integers.is_empty()
            && self.characters.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.numbers.clear();
        self.integers.clear();
        self.characters.clear();
    }

    pub(crate) fn apply(&mut self, content: Content) {
        match content {
            Content::Text(s) => self.text = vec![s],
            Content::TextList(v) => self.text = v,
            Content::Number(n) => self.numbers = vec![n],
            Content::NumberList(v) => self.numbers = v,
            Content::Integer(n) => self.integers = vec![n],
            Content::IntegerList(v) => self.integers = v,
            Content::Character(c) => self.characters = vec![c],
            Content::CharacterList(v) => self.characters = v,
        }
    }
}
