//! Renderer boundary: a depth-first textual outline of the live tree.
//!
//! One line per element (`depth tag (id)`, two spaces of indent per level,
//! `-` when the element has no indexed id), then one deeper-indented line
//! per payload text run. Children appear in document order.

use crate::document::Document;
use crate::element::ElementKey;
use crate::error::DocumentError;
use std::fmt::Write;

pub fn outline(doc: &Document, from: ElementKey) -> Result<String, DocumentError> {
    let mut out = String::new();
    let mut stack = vec![(from, 0usize)];
    while let Some((key, depth)) = stack.pop() {
        let kind = doc.kind(key)?;
        let id = doc.id_of(key)?.unwrap_or("-");
        let indent = "  ".repeat(depth);
        let _ = writeln!(out, "{indent}{depth} {} ({id})", kind.tag_name());
        for run in doc.text_of(key)? {
            let _ = writeln!(out, "{indent}  {run}");
        }
        let children: Vec<ElementKey> = doc.children(key)?.collect();
        for child in children.into_iter().rev() {
            stack.push((child, depth + 1));
        }
    }
    Ok(out)
}

/// Outline from the document root. The root is always live, so this cannot
/// fail.
pub fn outline_root(doc: &Document) -> String {
    outline(doc, doc.root()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::Attribute;
    use crate::element::ElementKind;

    #[test]
    fn outline_prints_depth_tag_id_and_text() {
        let mut doc = Document::new();
        let div = doc.create_element(ElementKind::Div);
        let p = doc.create_element(ElementKind::Paragraph);
        doc.append_child(doc.root(), div).unwrap();
        doc.append_child(div, p).unwrap();
        doc.set_attribute(div, Attribute::IndexBy("x".into())).unwrap();
        doc.append_text(p, "Hello").unwrap();

        let text = outline_root(&doc);
        assert_eq!(text, "0 view (-)\n  1 div (x)\n    2 p (-)\n      Hello\n");
    }

    #[test]
    fn outline_keeps_children_in_document_order() {
        let mut doc = Document::new();
        let ul = doc.create_element(ElementKind::UnorderedList);
        doc.append_child(doc.root(), ul).unwrap();
        for label in ["first", "second", "third"] {
            let li = doc.create_element(ElementKind::ListItem);
            doc.append_child(ul, li).unwrap();
            doc.append_text(li, label).unwrap();
        }

        let text = outline(&doc, ul).unwrap();
        let first = text.find("first").unwrap();
        let second = text.find("second").unwrap();
        let third = text.find("third").unwrap();
        assert!(first < second && second < third, "out of order:\n{text}");
    }

    #[test]
    fn outline_from_dead_key_is_loud() {
        let mut doc = Document::new();
        let div = doc.create_element(ElementKind::Div);
        doc.append_child(doc.root(), div).unwrap();
        doc.remove(div).unwrap();
        assert!(matches!(
            outline(&doc, div),
            Err(DocumentError::NoSuchElement(_))
        ));
    }
}
