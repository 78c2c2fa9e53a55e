// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Vector};
use sticker_lens::ui::sticker::{
    GestureLayer, HitTargets, PointerEvent, SpringConfig, StickerTransform, ToggleBasis,
};
use std::hint::black_box;
use std::time::{Duration, Instant};

const DRAG_STEPS: usize = 240;

fn drag_path() -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(DRAG_STEPS + 2);
    events.push(PointerEvent::Pressed(Point::new(20.0, 20.0)));
    #[allow(clippy::cast_precision_loss)]
    events.extend((1..=DRAG_STEPS).map(|step| {
        let t = step as f32;
        PointerEvent::Moved(Point::new(20.0 + t, 20.0 + (t * 0.1).sin() * 30.0))
    }));
    events.push(PointerEvent::Released(Point::new(
        20.0 + DRAG_STEPS as f32,
        20.0,
    )));
    events
}

fn gesture_folding_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_folding");
    let path = drag_path();
    let hit = HitTargets {
        image: true,
        element: true,
    };

    group.bench_function("recognize_drag", |b| {
        b.iter(|| {
            let mut layer = GestureLayer::default();
            let start = Instant::now();
            let mut transform =
                StickerTransform::new(40.0, SpringConfig::default(), ToggleBasis::Target);
            for event in &path {
                if let Some(sticker_lens::ui::sticker::GestureEvent::PanChanged(delta)) =
                    layer.handle(*event, hit, start)
                {
                    transform.apply_pan(delta);
                }
            }
            black_box(transform.translation())
        });
    });

    group.bench_function("fold_pan_deltas", |b| {
        let deltas: Vec<Vector> = (0..1_000)
            .map(|i| Vector::new(if i % 2 == 0 { 1.5 } else { -0.5 }, 0.25))
            .collect();
        b.iter(|| {
            let mut transform =
                StickerTransform::new(40.0, SpringConfig::default(), ToggleBasis::Target);
            for delta in &deltas {
                transform.apply_pan(*delta);
            }
            black_box(transform.translation())
        });
    });

    group.bench_function("tap_and_settle", |b| {
        b.iter(|| {
            let mut transform =
                StickerTransform::new(40.0, SpringConfig::default(), ToggleBasis::Animated);
            transform.apply_tap();
            while transform.is_animating() {
                transform.tick(Duration::from_millis(16));
            }
            black_box(transform.displayed_size())
        });
    });

    group.finish();
}

criterion_group!(benches, gesture_folding_benchmark);
criterion_main!(benches);
