//! Benchmarks for building, rendering and parsing documents.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use balisage::dom::parse_fragment;
use balisage::{
    Formatter, Indenter, Page, TableOptions, div, heading2, hyperlink, paragraph,
    table_from_rows, unordered_list_of,
};

/// A page with a few hundred elements: sections of text, links and a table.
fn sample_page() -> Page {
    let mut page = Page::new("Benchmark").with_stylesheet("style.css");
    for i in 0..20 {
        let mut section = div().with_class("section").unwrap();
        section.add(heading2(format!("Section {i}"))).unwrap();
        section
            .add(paragraph("Lorem ipsum dolor sit amet & <consectetur> \"adipiscing\" elit."))
            .unwrap();
        section
            .add(unordered_list_of(
                (0..5).map(|j| hyperlink(format!("/s{i}/{j}"), format!("Link {j}"))),
            ))
            .unwrap();
        page.add(section).unwrap();
    }

    let headers = ["Name", "Unit Price", "Quantity"];
    let rows: Vec<Vec<String>> = (0..100)
        .map(|i| vec![format!("item {i}"), format!("{}.99", i % 10), i.to_string()])
        .collect();
    page.add(table_from_rows(&headers, &rows, &TableOptions::default()).unwrap())
        .unwrap();
    page
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_page", |b| {
        b.iter(sample_page);
    });
}

fn bench_render(c: &mut Criterion) {
    let page = sample_page();
    c.bench_function("render_page", |b| {
        b.iter(|| black_box(&page).render());
    });
}

fn bench_indent(c: &mut Criterion) {
    let html = sample_page().render();
    let indenter = Indenter::default();
    c.bench_function("indent_page", |b| {
        b.iter(|| indenter.format(black_box(&html)));
    });
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let html = sample_page().body().render();
    c.bench_function("parse_fragment", |b| {
        b.iter(|| parse_fragment(black_box(&html)).unwrap());
    });
}

criterion_group!(
    benches,
    // Rendering
    bench_build,
    bench_render,
    bench_indent,
    // Parsing
    bench_parse,
);
criterion_main!(benches);
