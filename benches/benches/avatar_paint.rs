// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for plan derivation and the animation tick path.

use std::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_avatar::{AvatarStyle, CircleBadgeView, CircleProgressView, ImageSource};
use understory_progress_animation::{AnimationDrawingState, default_orchestrator};

fn style() -> AvatarStyle {
    AvatarStyle {
        border_width: 4.0,
        ..AvatarStyle::default()
    }
}

fn bench_paint(c: &mut Criterion) {
    let mut group = c.benchmark_group("avatar/paint");

    group.bench_function("badge_cached_shader", |b| {
        let mut view = CircleBadgeView::new(style());
        view.set_size(Size::new(96.0, 96.0));
        view.set_image(Some(ImageSource::Color(peniko::Color::WHITE)));
        let _ = view.paint();
        b.iter(|| black_box(view.paint()))
    });

    group.bench_function("badge_after_resize", |b| {
        b.iter_batched(
            || {
                let mut view = CircleBadgeView::new(style());
                view.set_image(Some(ImageSource::Color(peniko::Color::WHITE)));
                view
            },
            |mut view| {
                view.set_size(Size::new(96.0, 96.0));
                black_box(view.paint())
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("progress_expanded", |b| {
        let mut view = CircleProgressView::new(style());
        view.view_mut().set_size(Size::new(96.0, 96.0));
        view.start_progress();
        view.on_frame(Duration::from_millis(250));
        b.iter(|| black_box(view.paint()))
    });

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("animation/tick_progress", |b| {
        let mut orchestrator = default_orchestrator();
        orchestrator.attach(|| {});
        orchestrator.start();
        let mut state = AnimationDrawingState::REST;
        orchestrator.on_tick(Duration::from_millis(250), &mut state);
        b.iter(|| orchestrator.on_tick(black_box(Duration::from_millis(16)), &mut state))
    });
}

criterion_group!(benches, bench_paint, bench_tick);
criterion_main!(benches);
