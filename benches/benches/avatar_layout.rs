// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_avatar_geometry`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Point, Rect, Size};
use understory_avatar_geometry::{compute_layout, cover_fit, in_touchable_area};

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/layout");
    for side in [48.0, 96.0, 512.0] {
        group.bench_with_input(BenchmarkId::new("compute_layout", side), &side, |b, &side| {
            b.iter(|| {
                black_box(compute_layout(
                    black_box(Size::new(side, side * 1.25)),
                    Insets::uniform(4.0),
                    black_box(3.0),
                    0.0,
                ))
            });
        });
    }
    group.finish();
}

fn bench_cover_fit(c: &mut Criterion) {
    let rect = Rect::new(15.0, 15.0, 185.0, 185.0);
    let mut group = c.benchmark_group("geometry/cover_fit");
    group.bench_function("wide", |b| {
        b.iter(|| black_box(cover_fit(black_box(Size::new(1920.0, 1080.0)), rect)))
    });
    group.bench_function("tall", |b| {
        b.iter(|| black_box(cover_fit(black_box(Size::new(1080.0, 1920.0)), rect)))
    });
    group.finish();
}

fn bench_hit(c: &mut Criterion) {
    let layout = compute_layout(Size::new(200.0, 200.0), Insets::ZERO, 10.0, 0.0);
    // A 16x16 grid across the widget, half inside the circle.
    let points: Vec<Point> = (0..16)
        .flat_map(|y| {
            (0..16).map(move |x| Point::new(f64::from(x) * 12.5 + 1.0, f64::from(y) * 12.5 + 1.0))
        })
        .collect();
    c.bench_function("geometry/hit_grid_256", |b| {
        b.iter(|| {
            points
                .iter()
                .filter(|&&p| in_touchable_area(&layout, black_box(p)))
                .count()
        })
    });
}

criterion_group!(benches, bench_layout, bench_cover_fit, bench_hit);
criterion_main!(benches);
