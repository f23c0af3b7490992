use dom::{AttrKind, Attribute, Document, ElementKind, outline_root};
use markup::{IngestError, MarkupStream, ParserSession, append_markup};
use std::fmt::Write;
use style::TextAlignment;

#[test]
fn markup_round_trip_builds_the_documented_tree() {
    let mut doc = Document::new();
    let mut session = ParserSession::new(doc.root());
    let end = session
        .ingest(&mut doc, "<div id=x><p>Hello</p></div>")
        .unwrap();

    assert_eq!(end, doc.root());
    assert_eq!(
        outline_root(&doc),
        "0 view (-)\n  1 div (x)\n    2 p (-)\n      Hello\n"
    );

    let div = doc.get_element("x").unwrap();
    let p = doc.first_child(div).unwrap().unwrap();
    assert_eq!(doc.kind(p).unwrap(), ElementKind::Paragraph);
    assert_eq!(doc.text_of(p).unwrap().concat(), "Hello");
}

#[test]
fn chained_calls_resume_at_the_open_element() {
    let mut doc = Document::new();
    let mut session = ParserSession::new(doc.root());

    let mid = session
        .ingest(&mut doc, "<div id=outer><p id=inner>")
        .unwrap();
    assert_eq!(mid, doc.get_element("inner").unwrap());

    session.ingest(&mut doc, "resumed").unwrap();
    let end = session.ingest(&mut doc, "</p></div>").unwrap();
    assert_eq!(end, doc.root());

    let inner = doc.get_element("inner").unwrap();
    assert_eq!(doc.text_of(inner).unwrap().concat(), "resumed");
}

#[test]
fn bad_enum_value_reports_its_stream_position() {
    let mut doc = Document::new();
    let mut session = ParserSession::new(doc.root());
    let err = session.ingest(&mut doc, "<div display=bogus>").unwrap_err();
    // "bogus" starts at byte 13 of the stream.
    assert!(
        matches!(err, IngestError::Value { position: 13, .. }),
        "expected a value error at byte 13, got: {err:?}"
    );
}

#[test]
fn malformed_quoted_quad_reports_the_quote_position() {
    let mut doc = Document::new();
    let mut session = ParserSession::new(doc.root());
    let err = session
        .ingest(&mut doc, "<div coordinates=\"1px 2px 3px 4px 5px\">")
        .unwrap_err();
    // Five tokens is one too many; the error points at the opening quote.
    assert!(
        matches!(err, IngestError::Value { position: 17, .. }),
        "expected a value error at byte 17, got: {err:?}"
    );
}

#[test]
fn a_rejected_value_does_not_kill_the_session() {
    let mut doc = Document::new();
    let mut session = ParserSession::new(doc.root());

    let err = session
        .ingest(&mut doc, "<div display=bogus>kept</div>")
        .unwrap_err();
    assert!(matches!(err, IngestError::Value { .. }), "got: {err:?}");

    // The element survived; the tokens after the bad pair drain on the
    // next call together with the new input.
    let end = session.ingest(&mut doc, "<p>after</p>").unwrap();
    assert_eq!(end, doc.root());
    assert_eq!(
        outline_root(&doc),
        "0 view (-)\n  1 div (-)\n    kept\n  1 p (-)\n    after\n"
    );

    let div = doc.first_child(doc.root()).unwrap().unwrap();
    assert!(
        !doc.has_attribute(div, AttrKind::Display).unwrap(),
        "the rejected value must leave the slot unset"
    );
}

#[test]
fn ingest_into_a_dead_target_is_a_tree_error() {
    let mut doc = Document::new();
    let div = doc.create_element(ElementKind::Div);
    doc.append_child(doc.root(), div).unwrap();
    let mut session = ParserSession::new(div);
    doc.remove(div).unwrap();

    let err = session.ingest(&mut doc, "<p>lost</p>").unwrap_err();
    assert!(
        matches!(err, IngestError::Tree { .. }),
        "expected a tree error, got: {err:?}"
    );
    assert!(doc.is_empty(), "nothing may leak into the registry");
}

#[test]
fn append_markup_builds_under_the_given_target() {
    let mut doc = Document::new();
    let panel = doc.create_element(ElementKind::Div);
    doc.append_child(doc.root(), panel).unwrap();
    doc.set_attribute(panel, Attribute::IndexBy("panel".into()))
        .unwrap();

    let end = append_markup(&mut doc, panel, "<p>hi</p>").unwrap();
    assert_eq!(end, panel);
    assert_eq!(
        outline_root(&doc),
        "0 view (-)\n  1 div (panel)\n    2 p (-)\n      hi\n"
    );
}

#[test]
fn formatted_writes_stream_into_a_list() {
    let mut doc = Document::new();
    let list = doc.create_element(ElementKind::UnorderedList);
    doc.append_child(doc.root(), list).unwrap();

    let titles = ["Metropolis", "Playtime", "Stalker"];
    let mut stream = MarkupStream::new(&mut doc, list);
    for (rank, title) in titles.iter().enumerate() {
        write!(stream, "<li>{}. {title}</li>", rank + 1).unwrap();
    }
    let end = stream.finish().unwrap();
    assert_eq!(end, list);

    let items: Vec<_> = doc.children(list).unwrap().collect();
    assert_eq!(items.len(), titles.len(), "one item per write");
    for (item, (rank, title)) in items.iter().zip(titles.iter().enumerate()) {
        assert_eq!(doc.kind(*item).unwrap(), ElementKind::ListItem);
        let got = doc.text_of(*item).unwrap().concat();
        let want = format!("{}. {title}", rank + 1);
        assert_eq!(got, want, "item text should survive formatting");
    }
}

#[test]
fn deep_nesting_builds_and_unwinds() {
    let depth = 200usize;
    let mut markup = String::with_capacity(depth * 11 + 6);
    for _ in 0..depth {
        markup.push_str("<div>");
    }
    markup.push_str("bottom");
    for _ in 0..depth {
        markup.push_str("</div>");
    }

    let mut doc = Document::new();
    let mut session = ParserSession::new(doc.root());
    let end = session.ingest(&mut doc, &markup).unwrap();
    assert_eq!(end, doc.root(), "every level should close again");
    assert_eq!(doc.len(), depth + 1, "root plus one div per level");

    let mut cursor = doc.root();
    for level in 0..depth {
        cursor = doc
            .first_child(cursor)
            .unwrap()
            .unwrap_or_else(|| panic!("missing child at level {level}"));
    }
    assert_eq!(doc.text_of(cursor).unwrap().concat(), "bottom");
    assert_eq!(doc.first_child(cursor).unwrap(), None);
}

#[test]
fn alignment_keyword_left_requires_quoting() {
    let mut doc = Document::new();
    let mut session = ParserSession::new(doc.root());
    session
        .ingest(&mut doc, "<p id=bare textalignment=left>x</p>")
        .unwrap();
    session
        .ingest(&mut doc, "<p id=quoted textalignment=\"left\">y</p>")
        .unwrap();

    // Bare `left` is the geometry attribute word, so it starts a new
    // attribute and the alignment pair dissolves without a value.
    let bare = doc.get_element("bare").unwrap();
    assert!(!doc.has_attribute(bare, AttrKind::TextAlignment).unwrap());
    assert!(!doc.has_attribute(bare, AttrKind::ObjectLeft).unwrap());

    let quoted = doc.get_element("quoted").unwrap();
    assert_eq!(
        doc.attribute(quoted, AttrKind::TextAlignment).unwrap(),
        &Attribute::TextAlignment(TextAlignment::Left)
    );
}
