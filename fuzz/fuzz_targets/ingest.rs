#![no_main]

use dom::{Document, outline_root};
use libfuzzer_sys::fuzz_target;
use markup::ParserSession;

// Arbitrary markup must never panic or corrupt the tree; a value error is
// a legal outcome. The outline walk afterwards touches every live element.
fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let mut doc = Document::new();
    let mut session = ParserSession::new(doc.root());
    let _ = session.ingest(&mut doc, input);
    let _ = outline_root(&doc);
});
