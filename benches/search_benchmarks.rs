//! Criterion benchmarks for the tool hot paths.
//!
//! Run with: `cargo bench`
//!
//! Synthetic inputs keep results reproducible across machines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;

use repo_tools::lines::split_lines;
use repo_tools::{grep, match_glob, GlobMatcher, GrepOptions, RepoFile, ToolCatalog, ToolConfig, ToolKind, UnconfiguredBackend};

// ─── Helpers ─────────────────────────────────────────────────────────

/// A source-like file of `num_lines` lines with a rare token every 97 lines.
fn synthetic_text(num_lines: usize) -> String {
    (0..num_lines)
        .map(|i| {
            if i % 97 == 0 {
                format!("    let handler = RareHttpClient::new({});", i)
            } else {
                format!("    let value_{} = compute(value_{}, {});", i, i.saturating_sub(1), i * 7)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn synthetic_paths(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 4 {
            0 => format!("src/module_{}/mod.rs", i),
            1 => format!("src/module_{}/handler_{}.rs", i / 4, i),
            2 => format!("docs/page_{}.md", i),
            _ => format!("tests/fixtures/case_{}.json", i),
        })
        .collect()
}

fn synthetic_snapshot(num_files: usize, lines_per_file: usize) -> Vec<RepoFile> {
    let text = synthetic_text(lines_per_file);
    synthetic_paths(num_files)
        .into_iter()
        .map(|name| RepoFile::completed(name, text.clone()))
        .collect()
}

// ─── Benchmarks ──────────────────────────────────────────────────────

fn bench_split_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_lines");
    for size in [100, 1_000, 10_000] {
        let text = synthetic_text(size).replace('\n', "\r\n");
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| split_lines(black_box(text)))
        });
    }
    group.finish();
}

fn bench_grep(c: &mut Criterion) {
    let mut group = c.benchmark_group("grep");
    let text = synthetic_text(5_000);

    let options = GrepOptions { context_lines: 2, ..GrepOptions::default() };
    group.bench_function("rare_token_context_2", |b| {
        b.iter(|| grep(black_box(&text), black_box("rarehttpclient"), &options))
    });

    let capped = GrepOptions { max_matches: Some(20), ..GrepOptions::default() };
    group.bench_function("common_token_capped", |b| {
        b.iter(|| grep(black_box(&text), black_box(r"value_\d+"), &capped))
    });

    let literal = GrepOptions { literal: true, ..GrepOptions::default() };
    group.bench_function("literal", |b| {
        b.iter(|| grep(black_box(&text), black_box("compute(value_"), &literal))
    });
    group.finish();
}

fn bench_glob(c: &mut Criterion) {
    let mut group = c.benchmark_group("glob");
    let paths = synthetic_paths(10_000);

    for pattern in ["**/*.rs", "src/module_?/*.rs", "**/*.{md,json}"] {
        let matcher = GlobMatcher::new(pattern);
        group.bench_with_input(BenchmarkId::new("precompiled", pattern), &paths, |b, paths| {
            b.iter(|| paths.iter().filter(|p| matcher.is_match(p)).count())
        });
    }

    group.bench_function("compile_per_call", |b| {
        b.iter(|| paths.iter().take(100).filter(|p| match_glob(p, black_box("**/*.rs"))).count())
    });
    group.finish();
}

fn bench_catalog_grep(c: &mut Criterion) {
    let catalog = ToolCatalog::new(synthetic_snapshot(200, 500), UnconfiguredBackend, ToolConfig::default());
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let args = json!({ "pattern": "RareHttpClient", "filePattern": "**/*.rs" });

    c.bench_function("catalog_grep_200_files", |b| {
        b.to_async(&runtime).iter(|| catalog.call(ToolKind::Grep, black_box(&args)))
    });
}

criterion_group!(benches, bench_split_lines, bench_grep, bench_glob, bench_catalog_grep);
criterion_main!(benches);
