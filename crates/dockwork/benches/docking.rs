//! Benchmarks for drop zone classification and tree mutation

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dockwork::{DockingArea, DropZone, WindowId, zones_for};
use dockwork_core::geometry::Rect;
use dockwork_core::math::IVec2;
use dockwork_test_utils::MockHost;

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let zones = zones_for(Rect::new(0, 0, 1920, 1080), 0.10);
    let points: Vec<IVec2> = (0..1080)
        .step_by(7)
        .flat_map(|y| (0..1920).step_by(13).map(move |x| IVec2::new(x, y)))
        .collect();
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("grid", |b| {
        b.iter(|| {
            let mut edges = 0;
            for &point in &points {
                if black_box(zones.classify(point)).is_some_and(|z| z.is_edge()) {
                    edges += 1;
                }
            }
            edges
        });
    });

    group.bench_function("build_zones", |b| {
        b.iter(|| zones_for(black_box(Rect::new(10, 20, 640, 480)), black_box(0.10)));
    });

    group.finish();
}

const ZONES: [DropZone; 4] = [
    DropZone::Left,
    DropZone::Right,
    DropZone::Top,
    DropZone::Bottom,
];

fn bench_dock_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("dock_churn");

    for count in [8u64, 64, 256] {
        group.throughput(Throughput::Elements(count));

        group.bench_with_input(BenchmarkId::new("dock_undock", count), &count, |b, &count| {
            b.iter(|| {
                let mut host = MockHost::new(Rect::new(0, 0, 1920, 1080));
                let mut area = DockingArea::new();
                let mut previous = None;
                for i in 0..count {
                    let window = WindowId(i);
                    let zone = ZONES[(i % 4) as usize];
                    let _ = area.dock_window(&mut host, window, previous, zone);
                    previous = Some(window);
                }
                for i in (0..count).step_by(2) {
                    let _ = area.undock_window(&mut host, WindowId(i));
                }
                black_box(area.tree().splitter_count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_dock_churn);
criterion_main!(benches);
