//! Benchmarks for cartridge generation.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use cartouche::{CartridgeExporter, Chapter, Course, Lesson, MemorySink};
use cartouche::text::{page_file_name, plain_text};

/// Build a mid-sized course: 12 chapters of 8 lessons each.
fn sample_course() -> Course {
    let mut course = Course::new("Benchmark Course")
        .with_author("Bench Author")
        .with_description("<p>A synthetic course for benchmarking.</p>")
        .with_content("<p>Welcome to the benchmark course.</p>");

    for i in 0..12 {
        let mut chapter = Chapter::new(format!("chapter-{}", i), format!("Chapter {}", i));
        for j in 0..8 {
            chapter = chapter.with_lesson(Lesson::new(
                format!("lesson-{}-{}", i, j),
                format!("Lesson {} of Chapter {}", j, i),
                "<p>Some lesson content with <em>markup</em> and a bit of text \
                 so the page body is not trivially small.</p>",
            ));
        }
        course.add_chapter(chapter);
    }
    course
}

fn bench_export_cartridge(c: &mut Criterion) {
    let course = sample_course();

    c.bench_function("export_cartridge", |b| {
        b.iter(|| {
            let mut sink = MemorySink::new();
            CartridgeExporter::new().export(&course, &mut sink).unwrap();
            sink
        });
    });
}

fn bench_export_empty_course(c: &mut Criterion) {
    let course = Course::new("Empty Course");

    c.bench_function("export_empty_course", |b| {
        b.iter(|| {
            let mut sink = MemorySink::new();
            CartridgeExporter::new().export(&course, &mut sink).unwrap();
            sink
        });
    });
}

fn bench_plain_text(c: &mut Criterion) {
    let markup = "<p>Some <em>rich</em> text with &amp; entities and \
                  <a href=\"#\">links</a> repeated over and over.</p>"
        .repeat(50);

    c.bench_function("plain_text", |b| {
        b.iter(|| plain_text(&markup));
    });
}

fn bench_page_file_name(c: &mut Criterion) {
    c.bench_function("page_file_name", |b| {
        b.iter(|| page_file_name("A Fairly Long Lesson Name With Words", 7, 3));
    });
}

criterion_group!(
    benches,
    bench_export_cartridge,
    bench_export_empty_course,
    bench_plain_text,
    bench_page_file_name,
);
criterion_main!(benches);
