//! Benchmarks for note transcoding and live editing, with pulldown-cmark
//! parsing the same text as a reference point.
//!
//! Run with: cargo bench -p notemark-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use notemark_core::{has_content, to_document, to_text, BlockPath, Editor, Point};
use pulldown_cmark::{Options, Parser as MdParser};

/// A typical meeting note
const NOTE_SAMPLE: &str = "# Weekly sync

> Ship the editor before the freeze
## Agenda
- review open pull requests
- triage new bug reports
- plan the next sprint
[x] book the room
[x] send the invite
[] write up the notes
Paragraph with a longer run of text that keeps going for a while so that
plain lines make up a fair share of the input.
### Follow ups
- update the roadmap
- ping design about icons
";

fn bench_transcode(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcode");

    // Set throughput for bytes/sec reporting
    group.throughput(Throughput::Bytes(NOTE_SAMPLE.len() as u64));

    group.bench_function("to_document", |b| {
        b.iter(|| {
            let doc = to_document(black_box(Some(NOTE_SAMPLE)));
            black_box(doc.blocks.len())
        })
    });

    let doc = to_document(Some(NOTE_SAMPLE));
    group.bench_function("to_text", |b| {
        b.iter(|| black_box(to_text(black_box(&doc))).len())
    });

    group.bench_function("has_content", |b| {
        b.iter(|| black_box(has_content(black_box(&doc))))
    });

    group.bench_function("markdown_pulldown", |b| {
        b.iter(|| {
            let parser = MdParser::new_ext(black_box(NOTE_SAMPLE), Options::all());
            let events: Vec<_> = parser.collect();
            black_box(events.len())
        })
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [1, 10, 100].iter() {
        let content = NOTE_SAMPLE.repeat(*size);
        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(BenchmarkId::new("round_trip", size), &content, |b, content| {
            b.iter(|| {
                let doc = to_document(Some(black_box(content)));
                black_box(to_text(&doc).len())
            })
        });

        group.bench_with_input(BenchmarkId::new("markdown", size), &content, |b, content| {
            b.iter(|| {
                let parser = MdParser::new_ext(black_box(content), Options::all());
                let events: Vec<_> = parser.collect();
                black_box(events.len())
            })
        });
    }

    group.finish();
}

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing");

    let keys = "- item with a few words";
    group.bench_function("shortcut_session", |b| {
        b.iter(|| {
            let mut editor = Editor::from_markdown(NOTE_SAMPLE);
            editor.move_to_end();
            for ch in black_box(keys).chars() {
                editor.insert_text(ch.encode_utf8(&mut [0; 4]));
            }
            black_box(editor.document().len())
        })
    });

    group.bench_function("plain_session", |b| {
        b.iter(|| {
            let mut editor = Editor::from_markdown(NOTE_SAMPLE).with_shortcuts(false);
            editor
                .set_cursor(Point::start_of(BlockPath::top(0)))
                .unwrap();
            for ch in black_box(keys).chars() {
                editor.insert_text(ch.encode_utf8(&mut [0; 4]));
            }
            black_box(editor.document().len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_transcode, bench_scaling, bench_typing);
criterion_main!(benches);
