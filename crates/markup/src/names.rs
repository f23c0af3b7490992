//! The markup vocabulary: which words name elements, which name
//! attributes, and what each attribute word does with its value.
//!
//! Lookups expect lowercased words; the tokenizer normalizes before
//! calling in. Values are passed through in their original spelling.

use dom::{Attribute, Document, ElementKey, ElementKind};
use style::{
    BorderStyle, Color, Display, LineHeight, ListStyleType, Position, TextAlignment, UnitValue,
    parse_quad,
};

use crate::error::ApplyError;

type Apply = fn(&mut Document, ElementKey, &str) -> Result<(), ApplyError>;

/// A valued attribute word: its canonical spelling plus the function that
/// parses the value word and applies the result to an element.
#[derive(Clone, Copy)]
pub(crate) struct AttrName {
    name: &'static str,
    apply: Apply,
}

impl AttrName {
    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn apply(
        &self,
        doc: &mut Document,
        key: ElementKey,
        value: &str,
    ) -> Result<(), ApplyError> {
        (self.apply)(doc, key, value)
    }
}

impl std::fmt::Debug for AttrName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AttrName").field(&self.name).finish()
    }
}

impl PartialEq for AttrName {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// What an attribute word means once classified: a word awaiting its
/// value, or a word complete in itself.
#[derive(Debug, PartialEq)]
pub(crate) enum AttrEntry {
    Valued(AttrName),
    Simple(Attribute),
}

/// Element words. `view` and `text` are not spellable from markup; the
/// root exists before parsing and text runs come from color words.
pub(crate) fn element_for(word: &str) -> Option<ElementKind> {
    let kind = match word {
        "br" => ElementKind::Break,
        "h1" => ElementKind::H1,
        "h2" => ElementKind::H2,
        "h3" => ElementKind::H3,
        "p" | "paragraph" => ElementKind::Paragraph,
        "div" => ElementKind::Div,
        "span" => ElementKind::Span,
        "ol" => ElementKind::OrderedList,
        "ul" => ElementKind::UnorderedList,
        "li" => ElementKind::ListItem,
        "image" => ElementKind::Image,
        _ => return None,
    };
    Some(kind)
}

fn valued(name: &'static str, apply: Apply) -> AttrEntry {
    AttrEntry::Valued(AttrName { name, apply })
}

fn set(doc: &mut Document, key: ElementKey, attr: Attribute) -> Result<(), ApplyError> {
    doc.set_attribute(key, attr)?;
    Ok(())
}

fn set_quad(
    doc: &mut Document,
    key: ElementKey,
    value: &str,
    wrap: [fn(UnitValue) -> Attribute; 4],
) -> Result<(), ApplyError> {
    let quad = parse_quad(value)?;
    for (make, part) in wrap.iter().zip(quad) {
        set(doc, key, make(part))?;
    }
    Ok(())
}

/// Attribute words and their aliases.
pub(crate) fn attribute_for(word: &str) -> Option<AttrEntry> {
    let entry = match word {
        // Identity.
        "id" | "indexby" => valued("id", |d, k, v| set(d, k, Attribute::IndexBy(v.to_string()))),

        // Loud keyword vocabularies.
        "display" => valued("display", |d, k, v| {
            set(d, k, Attribute::Display(Display::parse(v)?))
        }),
        "position" => valued("position", |d, k, v| {
            set(d, k, Attribute::Position(Position::parse(v)?))
        }),
        "textalignment" => valued("textalignment", |d, k, v| {
            set(d, k, Attribute::TextAlignment(TextAlignment::parse(v)?))
        }),
        "borderstyle" => valued("borderstyle", |d, k, v| {
            set(d, k, Attribute::BorderStyle(BorderStyle::parse(v)?))
        }),
        "liststyletype" => valued("liststyletype", |d, k, v| {
            set(d, k, Attribute::ListStyleType(ListStyleType::parse(v)?))
        }),

        // Geometry. `left` is a geometry word; the alignment keyword of
        // the same spelling is only reachable as a quoted value of
        // `textalignment`.
        "top" | "objecttop" => valued("top", |d, k, v| {
            set(d, k, Attribute::ObjectTop(UnitValue::parse(v)))
        }),
        "left" | "objectleft" => valued("left", |d, k, v| {
            set(d, k, Attribute::ObjectLeft(UnitValue::parse(v)))
        }),
        "height" | "objectheight" => valued("height", |d, k, v| {
            set(d, k, Attribute::ObjectHeight(UnitValue::parse(v)))
        }),
        "width" | "objectwidth" => valued("width", |d, k, v| {
            set(d, k, Attribute::ObjectWidth(UnitValue::parse(v)))
        }),
        "coordinates" => valued("coordinates", |d, k, v| {
            set_quad(
                d,
                k,
                v,
                [
                    Attribute::ObjectTop,
                    Attribute::ObjectLeft,
                    Attribute::ObjectHeight,
                    Attribute::ObjectWidth,
                ],
            )
        }),
        "scrolltop" => valued("scrolltop", |d, k, v| {
            set(d, k, Attribute::ScrollTop(UnitValue::parse(v)))
        }),
        "scrollleft" => valued("scrollleft", |d, k, v| {
            set(d, k, Attribute::ScrollLeft(UnitValue::parse(v)))
        }),

        // Box spacing, as one quad or one side at a time.
        "margin" => valued("margin", |d, k, v| {
            set_quad(
                d,
                k,
                v,
                [
                    Attribute::MarginTop,
                    Attribute::MarginLeft,
                    Attribute::MarginBottom,
                    Attribute::MarginRight,
                ],
            )
        }),
        "margintop" => valued("margintop", |d, k, v| {
            set(d, k, Attribute::MarginTop(UnitValue::parse(v)))
        }),
        "marginleft" => valued("marginleft", |d, k, v| {
            set(d, k, Attribute::MarginLeft(UnitValue::parse(v)))
        }),
        "marginbottom" => valued("marginbottom", |d, k, v| {
            set(d, k, Attribute::MarginBottom(UnitValue::parse(v)))
        }),
        "marginright" => valued("marginright", |d, k, v| {
            set(d, k, Attribute::MarginRight(UnitValue::parse(v)))
        }),
        "padding" => valued("padding", |d, k, v| {
            set_quad(
                d,
                k,
                v,
                [
                    Attribute::PaddingTop,
                    Attribute::PaddingLeft,
                    Attribute::PaddingBottom,
                    Attribute::PaddingRight,
                ],
            )
        }),
        "paddingtop" => valued("paddingtop", |d, k, v| {
            set(d, k, Attribute::PaddingTop(UnitValue::parse(v)))
        }),
        "paddingleft" => valued("paddingleft", |d, k, v| {
            set(d, k, Attribute::PaddingLeft(UnitValue::parse(v)))
        }),
        "paddingbottom" => valued("paddingbottom", |d, k, v| {
            set(d, k, Attribute::PaddingBottom(UnitValue::parse(v)))
        }),
        "paddingright" => valued("paddingright", |d, k, v| {
            set(d, k, Attribute::PaddingRight(UnitValue::parse(v)))
        }),

        // Text.
        "textface" => valued("textface", |d, k, v| {
            set(d, k, Attribute::TextFace(v.to_string()))
        }),
        "textsize" => valued("textsize", |d, k, v| {
            set(d, k, Attribute::TextSize(UnitValue::parse(v)))
        }),
        "textweight" | "weight" => valued("textweight", |d, k, v| {
            set(d, k, Attribute::TextWeight(UnitValue::parse(v).magnitude))
        }),
        "textindent" | "indent" => valued("textindent", |d, k, v| {
            set(d, k, Attribute::TextIndent(UnitValue::parse(v)))
        }),
        "tabsize" | "tab" => valued("tabsize", |d, k, v| {
            set(d, k, Attribute::TabSize(UnitValue::parse(v)))
        }),
        "lineheight" => valued("lineheight", |d, k, v| {
            set(d, k, Attribute::LineHeight(LineHeight::parse(v)))
        }),

        // Colors; `Color::parse` is total, so these never reject.
        "background" => valued("background", |d, k, v| {
            set(d, k, Attribute::Background(Color::parse(v)))
        }),
        "textcolor" | "color" => valued("textcolor", |d, k, v| {
            set(d, k, Attribute::TextColor(Color::parse(v)))
        }),
        "bordercolor" => valued("bordercolor", |d, k, v| {
            set(d, k, Attribute::BorderColor(Color::parse(v)))
        }),

        // Bare numbers.
        "opacity" => valued("opacity", |d, k, v| {
            set(d, k, Attribute::Opacity(UnitValue::parse(v).magnitude))
        }),
        "borderwidth" => valued("borderwidth", |d, k, v| {
            set(d, k, Attribute::BorderWidth(UnitValue::parse(v)))
        }),
        "borderradius" => valued("borderradius", |d, k, v| {
            set(d, k, Attribute::BorderRadius(UnitValue::parse(v).magnitude))
        }),
        "focusindex" | "focus" => valued("focusindex", |d, k, v| {
            set(d, k, Attribute::FocusIndex(UnitValue::parse(v).magnitude as i32))
        }),
        "zindex" => valued("zindex", |d, k, v| {
            set(d, k, Attribute::ZIndex(UnitValue::parse(v).magnitude as i32))
        }),

        // Words complete in themselves.
        "block" => AttrEntry::Simple(Attribute::Display(Display::Block)),
        "inline" => AttrEntry::Simple(Attribute::Display(Display::Inline)),
        "hidden" => AttrEntry::Simple(Attribute::Display(Display::None)),
        "absolute" => AttrEntry::Simple(Attribute::Position(Position::Absolute)),
        "relative" => AttrEntry::Simple(Attribute::Position(Position::Relative)),
        "center" => AttrEntry::Simple(Attribute::TextAlignment(TextAlignment::Center)),
        "right" => AttrEntry::Simple(Attribute::TextAlignment(TextAlignment::Right)),
        "justified" => AttrEntry::Simple(Attribute::TextAlignment(TextAlignment::Justified)),
        "normal" => AttrEntry::Simple(Attribute::LineHeight(LineHeight::Normal)),
        "numeric" => AttrEntry::Simple(Attribute::LineHeight(LineHeight::Numeric(1.0))),

        _ => return None,
    };
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::AttrKind;
    use style::Unit;

    fn doc_with_div() -> (Document, ElementKey) {
        let mut doc = Document::new();
        let div = doc.create_element(ElementKind::Div);
        doc.append_child(doc.root(), div).unwrap();
        (doc, div)
    }

    fn apply(doc: &mut Document, key: ElementKey, word: &str, value: &str) {
        match attribute_for(word) {
            Some(AttrEntry::Valued(name)) => name.apply(doc, key, value).unwrap(),
            other => panic!("expected valued attribute for {word:?}, got: {other:?}"),
        }
    }

    #[test]
    fn element_words_cover_every_markup_tag() {
        assert_eq!(element_for("div"), Some(ElementKind::Div));
        assert_eq!(element_for("paragraph"), Some(ElementKind::Paragraph));
        assert_eq!(element_for("p"), Some(ElementKind::Paragraph));
        assert_eq!(element_for("ul"), Some(ElementKind::UnorderedList));
        assert_eq!(element_for("ol"), Some(ElementKind::OrderedList));
        assert_eq!(element_for("br"), Some(ElementKind::Break));
        assert_eq!(element_for("view"), None);
        assert_eq!(element_for("text"), None);
        assert_eq!(element_for("table"), None);
    }

    #[test]
    fn left_is_a_geometry_word() {
        let entry = attribute_for("left").unwrap();
        assert!(
            matches!(entry, AttrEntry::Valued(ref name) if name.name() == "left"),
            "expected valued geometry entry, got: {entry:?}"
        );

        let (mut doc, div) = doc_with_div();
        apply(&mut doc, div, "left", "4px");
        assert_eq!(
            doc.attribute(div, AttrKind::ObjectLeft).unwrap(),
            &Attribute::ObjectLeft(UnitValue::px(4.0))
        );
        assert!(!doc.has_attribute(div, AttrKind::TextAlignment).unwrap());
    }

    #[test]
    fn simple_words_carry_their_attribute() {
        assert_eq!(
            attribute_for("block"),
            Some(AttrEntry::Simple(Attribute::Display(Display::Block)))
        );
        assert_eq!(
            attribute_for("hidden"),
            Some(AttrEntry::Simple(Attribute::Display(Display::None)))
        );
        assert_eq!(
            attribute_for("center"),
            Some(AttrEntry::Simple(Attribute::TextAlignment(
                TextAlignment::Center
            )))
        );
        assert_eq!(
            attribute_for("numeric"),
            Some(AttrEntry::Simple(Attribute::LineHeight(
                LineHeight::Numeric(1.0)
            )))
        );
    }

    #[test]
    fn unknown_words_are_not_attributes() {
        assert_eq!(attribute_for("bogus"), None);
        assert_eq!(attribute_for("class"), None);
        // Lookups are exact; the tokenizer lowercases before calling in.
        assert_eq!(attribute_for("Display"), None);
    }

    #[test]
    fn coordinates_fans_out_to_four_geometry_slots() {
        let (mut doc, div) = doc_with_div();
        apply(&mut doc, div, "coordinates", "[10px 20px 30px 40px]");
        assert_eq!(
            doc.attribute(div, AttrKind::ObjectTop).unwrap(),
            &Attribute::ObjectTop(UnitValue::px(10.0))
        );
        assert_eq!(
            doc.attribute(div, AttrKind::ObjectLeft).unwrap(),
            &Attribute::ObjectLeft(UnitValue::px(20.0))
        );
        assert_eq!(
            doc.attribute(div, AttrKind::ObjectHeight).unwrap(),
            &Attribute::ObjectHeight(UnitValue::px(30.0))
        );
        assert_eq!(
            doc.attribute(div, AttrKind::ObjectWidth).unwrap(),
            &Attribute::ObjectWidth(UnitValue::px(40.0))
        );
    }

    #[test]
    fn margin_shorthand_expands_before_fanning_out() {
        let (mut doc, div) = doc_with_div();
        apply(&mut doc, div, "margin", "1em 2em");
        assert_eq!(
            doc.attribute(div, AttrKind::MarginTop).unwrap(),
            &Attribute::MarginTop(UnitValue::em(1.0))
        );
        assert_eq!(
            doc.attribute(div, AttrKind::MarginLeft).unwrap(),
            &Attribute::MarginLeft(UnitValue::em(2.0))
        );
        assert_eq!(
            doc.attribute(div, AttrKind::MarginBottom).unwrap(),
            &Attribute::MarginBottom(UnitValue::em(1.0))
        );
        assert_eq!(
            doc.attribute(div, AttrKind::MarginRight).unwrap(),
            &Attribute::MarginRight(UnitValue::em(2.0))
        );
    }

    #[test]
    fn loud_vocabularies_reject_bad_values() {
        let (mut doc, div) = doc_with_div();
        let Some(AttrEntry::Valued(display)) = attribute_for("display") else {
            panic!("display must be a valued attribute");
        };
        let err = display.apply(&mut doc, div, "sideways");
        assert!(
            matches!(err, Err(ApplyError::Value(_))),
            "expected a value error, got: {err:?}"
        );

        let Some(AttrEntry::Valued(margin)) = attribute_for("margin") else {
            panic!("margin must be a valued attribute");
        };
        let err = margin.apply(&mut doc, div, "1 2 3 4 5");
        assert!(matches!(err, Err(ApplyError::Value(_))));
    }

    #[test]
    fn permissive_vocabularies_absorb_bad_values() {
        let (mut doc, div) = doc_with_div();
        apply(&mut doc, div, "width", "garbled");
        assert_eq!(
            doc.attribute(div, AttrKind::ObjectWidth).unwrap(),
            &Attribute::ObjectWidth(UnitValue::new(0.0, Unit::Auto))
        );
        apply(&mut doc, div, "background", "notacolor");
        assert_eq!(
            doc.attribute(div, AttrKind::Background).unwrap(),
            &Attribute::Background(Color::BLACK)
        );
    }

    #[test]
    fn numeric_aliases_share_their_slot() {
        let (mut doc, div) = doc_with_div();
        apply(&mut doc, div, "weight", "700");
        assert_eq!(
            doc.attribute(div, AttrKind::TextWeight).unwrap(),
            &Attribute::TextWeight(700.0)
        );
        apply(&mut doc, div, "focus", "3");
        assert_eq!(
            doc.attribute(div, AttrKind::FocusIndex).unwrap(),
            &Attribute::FocusIndex(3)
        );
        apply(&mut doc, div, "indent", "2em");
        assert_eq!(
            doc.attribute(div, AttrKind::TextIndent).unwrap(),
            &Attribute::TextIndent(UnitValue::em(2.0))
        );
    }
}
