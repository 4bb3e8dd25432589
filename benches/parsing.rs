//! Benchmarks for transcript parsing and analysis.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- transcript`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use charla::config::ReportParams;
use charla::report::{ConsoleReport, ReportBuilder};
use charla::{Chat, Lexicon, TranscriptParser};

// =============================================================================
// Test Data Generators
// =============================================================================

const SAMPLE_TEXTS: &[&str] = &[
    "hola, qué tal todo por allá",
    "el perro ladra toda la noche jajaja",
    "mañana nos vemos en la oficina 😂",
    "<Multimedia omitido>",
    "vale, perfecto, nos hablamos luego 👍🏽",
    "no sé, yo creo que mejor el viernes",
];

fn generate_transcript(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let author = if i % 2 == 0 { "Ana" } else { "Luis" };
        let day = (i / 1440) % 28 + 1;
        let hour = (i / 60) % 24;
        let minute = i % 60;
        lines.push(format!(
            "{:02}/03/23, {:02}:{:02} - {}: {}",
            day,
            hour,
            minute,
            author,
            SAMPLE_TEXTS[i % SAMPLE_TEXTS.len()]
        ));
        // Every fifth message gets a continuation line
        if i % 5 == 0 {
            lines.push("y otra cosa más".to_string());
        }
    }
    lines.join("\n")
}

fn generate_chat(count: usize) -> Chat {
    TranscriptParser::new().parse_str(&generate_transcript(count))
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_transcript_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcript_parsing");
    let parser = TranscriptParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let chat = parser.parse_str(black_box(txt));
                black_box(chat)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Analysis Benchmarks
// =============================================================================

fn bench_word_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_filtering");
    let lexicon = Lexicon::spanish();
    let text = SAMPLE_TEXTS.join(" ");

    group.bench_function("filter_words", |b| {
        b.iter(|| black_box(lexicon.filter_words(black_box(&text))));
    });
    group.finish();
}

fn bench_word_frequency(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_frequency");
    let lexicon = Lexicon::spanish();

    for size in [1_000_usize, 10_000, 50_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || generate_chat(size),
                |chat| {
                    // Fresh chat each iteration so the cache is cold
                    for author in chat.authors() {
                        black_box(author.word_frequency(&lexicon));
                    }
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_emoji_frequency(c: &mut Criterion) {
    let mut group = c.benchmark_group("emoji_frequency");

    for size in [1_000_usize, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || generate_chat(size),
                |chat| {
                    for author in chat.authors() {
                        black_box(author.emoji_frequency());
                    }
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let parser = TranscriptParser::new();
    let lexicon = Lexicon::spanish();
    let params = ReportParams::default();

    for size in [1_000_usize, 10_000, 50_000] {
        let txt = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                // Full pipeline: parse -> aggregate -> render
                let chat = parser.parse_str(black_box(txt));
                let report = ConsoleReport::new().build(&chat, &lexicon, &params).unwrap();
                black_box(report)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_transcript_parsing,
    bench_word_filtering,
    bench_word_frequency,
    bench_emoji_frequency,
    bench_full_pipeline,
);

criterion_main!(benches);
