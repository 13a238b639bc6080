// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery operations.
//!
//! Measures the performance of:
//! - Catalog parsing (embedded catalog)
//! - Card projection for collapsed and expanded galleries
//! - Carousel navigation inside the modal viewer

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::catalog::{Catalog, ProjectRecord};
use iced_folio::gallery::{card_views, GalleryState, ModalViewer};
use std::hint::black_box;

fn large_catalog(count: usize) -> Vec<ProjectRecord> {
    (0..count)
        .map(|i| ProjectRecord {
            title: format!("Project {i}"),
            short_description: "short".to_string(),
            detailed_description: "detailed".to_string(),
            tech_stack: (0..8).map(|t| format!("Tech {t}")).collect(),
            skills: vec!["Skill".to_string()],
            images: (0..6).map(|n| format!("images/{i}-{n}.png")).collect(),
            video: None,
            repository_link: "#".to_string(),
            live_demo_link: None,
        })
        .collect()
}

/// Benchmark parsing of the built-in catalog.
fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery");

    group.bench_function("parse_embedded_catalog", |b| {
        b.iter(|| black_box(Catalog::embedded().unwrap()));
    });

    group.finish();
}

/// Benchmark card projection for the visible slice.
fn bench_card_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery");
    let records = large_catalog(500);

    let collapsed = GalleryState::new(4);
    group.bench_function("card_views_collapsed", |b| {
        b.iter(|| black_box(card_views(&collapsed, &records, 3)));
    });

    let mut expanded = GalleryState::new(4);
    expanded.toggle_expanded();
    group.bench_function("card_views_expanded", |b| {
        b.iter(|| black_box(card_views(&expanded, &records, 3)));
    });

    group.finish();
}

/// Benchmark carousel navigation and modal projection.
fn bench_modal(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery");
    let records = large_catalog(10);

    group.bench_function("open_navigate_view", |b| {
        b.iter(|| {
            let mut viewer = ModalViewer::new();
            viewer.sync(Some(3), true, &records);
            for _ in 0..10 {
                viewer.next();
            }
            viewer.previous();
            black_box(viewer.view(&records));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_catalog, bench_card_views, bench_modal);
criterion_main!(benches);
