use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use dom::{Document, outline_root};
use markup::ParserSession;
use markup::perf_fixtures::make_blocks;

const SMALL_BLOCKS: usize = 64;
const LARGE_BLOCKS: usize = 20_000;

/// Every word in here misses all three vocabularies, so the scanner pays
/// for a classification on each and drops it.
fn make_unknown_words_adversarial(bytes: usize) -> String {
    let mut body = String::with_capacity(bytes + 64);
    while body.len() < bytes {
        body.push_str("<div zig zag zox=9 qqq>noise</div>");
    }
    body
}

fn ingest_whole(doc: &mut Document, markup: &str) {
    let mut session = ParserSession::new(doc.root());
    session
        .ingest(doc, markup)
        .expect("perf fixture markup should ingest cleanly");
}

fn bench_ingest_small(c: &mut Criterion) {
    let input = make_blocks(SMALL_BLOCKS);
    c.bench_function("bench_ingest_small", |b| {
        b.iter_batched(
            Document::new,
            |mut doc| {
                ingest_whole(&mut doc, black_box(&input));
                black_box(doc.len());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_ingest_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    c.bench_function("bench_ingest_large", |b| {
        b.iter_batched(
            Document::new,
            |mut doc| {
                ingest_whole(&mut doc, black_box(&input));
                black_box(doc.len());
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_ingest_chunked(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    // The fixture is pure ASCII, so byte offsets are char boundaries.
    let chunk_sizes = [1usize, 2, 3, 7, 64, 128, 256, 1024];
    c.bench_function("bench_ingest_chunked", |b| {
        b.iter_batched(
            Document::new,
            |mut doc| {
                let mut session = ParserSession::new(doc.root());
                let mut offset = 0usize;
                let mut size_idx = 0usize;
                while offset < input.len() {
                    let size = chunk_sizes[size_idx % chunk_sizes.len()];
                    let end = (offset + size).min(input.len());
                    session
                        .ingest(&mut doc, &input[offset..end])
                        .expect("chunked perf fixture should ingest cleanly");
                    offset = end;
                    size_idx += 1;
                }
                black_box(doc.len());
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_outline_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    let mut doc = Document::new();
    ingest_whole(&mut doc, &input);
    c.bench_function("bench_outline_large", |b| {
        b.iter(|| {
            let text = outline_root(black_box(&doc));
            black_box(text.len());
        });
    });
}

fn bench_ingest_unknown_words_adversarial(c: &mut Criterion) {
    let input = make_unknown_words_adversarial(512 * 1024);
    c.bench_function("bench_ingest_unknown_words_adversarial", |b| {
        b.iter_batched(
            Document::new,
            |mut doc| {
                ingest_whole(&mut doc, black_box(&input));
                black_box(doc.len());
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_ingest_small,
    bench_ingest_large,
    bench_ingest_chunked,
    bench_outline_large,
    bench_ingest_unknown_words_adversarial
);
criterion_main!(benches);
