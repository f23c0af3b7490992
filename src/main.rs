use dom::{Attribute, Document, Event, EventKind, outline_root};
use markup::{MarkupStream, ParserSession};
use mimalloc::MiMalloc;
use std::fmt::Write;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    let mut doc = Document::new();

    let mut session = ParserSession::new(doc.root());
    session
        .ingest(
            &mut doc,
            "<h1>Release notes</h1>\
             <p>Build status: <green>passing</green> as of today.</p>\
             <ul id=highlights></ul>",
        )
        .expect("demo markup is well-formed");

    // Stream the list items through the formatting adapter.
    let list = doc.get_element("highlights").expect("list was indexed");
    let mut stream = MarkupStream::new(&mut doc, list);
    let lines = ["faster ingest", "stable ids", "quoted values"];
    for (n, line) in lines.iter().enumerate() {
        write!(stream, "<li>{}. {line}</li>", n + 1).expect("list markup streams");
    }
    stream.finish().expect("list markup closes cleanly");

    // A click renames the list; later lookups see the new id.
    doc.add_listener(list, EventKind::Click, |d, k, _| {
        d.set_attribute(k, Attribute::IndexBy("highlights-seen".into()))
            .expect("rename target is live");
    })
    .expect("listener target is live");

    doc.enqueue_event(list, Event::Click { x: 12.0, y: 40.0 });
    doc.enqueue_event(list, Event::Wheel { delta: -1.5 });
    let delivered = doc.pump_events();

    print!("{}", outline_root(&doc));
    println!("events delivered: {delivered}");
    println!(
        "id moved: highlights={} highlights-seen={}",
        doc.has_element("highlights"),
        doc.has_element("highlights-seen")
    );
}
