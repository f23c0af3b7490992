#![no_main]

use dom::{Document, ElementKey, ElementKind};
use libfuzzer_sys::fuzz_target;
use markup::ParserSession;

// Splitting the stream at any char boundary must build the same tree as
// feeding it whole. Text-run grouping differs per split, so the comparison
// joins each element's runs.
fuzz_target!(|data: &[u8]| {
    let Some((pick, rest)) = data.split_first() else {
        return;
    };
    let Ok(input) = std::str::from_utf8(rest) else {
        return;
    };

    let mut whole_doc = Document::new();
    let mut whole = ParserSession::new(whole_doc.root());
    let Ok(whole_end) = whole.ingest(&mut whole_doc, input) else {
        return;
    };

    let split = pick_char_boundary(input, *pick as usize);
    let (head, tail) = input.split_at(split);
    let mut chunked_doc = Document::new();
    let mut chunked = ParserSession::new(chunked_doc.root());
    chunked
        .ingest(&mut chunked_doc, head)
        .expect("a clean whole ingest cannot fail in its first chunk");
    let chunked_end = chunked
        .ingest(&mut chunked_doc, tail)
        .expect("a clean whole ingest cannot fail in its second chunk");

    assert_eq!(
        whole_end, chunked_end,
        "both runs must end on the same open element"
    );
    assert_eq!(
        shape(&whole_doc),
        shape(&chunked_doc),
        "split at byte {split} drifted from the whole-input tree"
    );
});

fn pick_char_boundary(s: &str, raw: usize) -> usize {
    let mut idx = raw % (s.len() + 1);
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn shape(doc: &Document) -> Vec<(usize, ElementKind, Option<String>, String)> {
    let mut out = Vec::new();
    walk(doc, doc.root(), 0, &mut out);
    out
}

fn walk(
    doc: &Document,
    key: ElementKey,
    depth: usize,
    out: &mut Vec<(usize, ElementKind, Option<String>, String)>,
) {
    let id = doc.id_of(key).unwrap().map(str::to_owned);
    let text = doc.text_of(key).unwrap().concat();
    out.push((depth, doc.kind(key).unwrap(), id, text));
    let children: Vec<ElementKey> = doc.children(key).unwrap().collect();
    for child in children {
        walk(doc, child, depth + 1, out);
    }
}
