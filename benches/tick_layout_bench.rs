use criterion::{Criterion, criterion_group, criterion_main};
use linear_tick::api::{TickEngine, TickLevel};
use linear_tick::core::{LayoutParams, ShyResolution, TickGrid, compute_layout};
use linear_tick::render::{FrameSurface, TickFrame, TickLabelStyle, TickMarkStyle, tick_labels, tick_lines};
use std::hint::black_box;

fn ruler_grids() -> [TickGrid; 4] {
    [
        TickGrid::new(100.0),
        TickGrid::new(50.0).shy(),
        TickGrid::new(10.0).shy().with_max_density_to_show(2.0),
        TickGrid::new(1.0).shy().with_max_density_to_show(0.2),
    ]
}

fn ruler_params() -> LayoutParams {
    LayoutParams::DEFAULT
        .with_density(0.1)
        .with_size(1920.0, 40.0)
        .with_anchor(0.5, 0.0)
        .with_redundancy(10.0)
}

fn bench_layout_coarse_first(c: &mut Criterion) {
    let params = ruler_params();
    let grids = ruler_grids();

    c.bench_function("tick_layout_coarse_first_1920px", |b| {
        b.iter(|| {
            let _ = compute_layout(black_box(&params), black_box(&grids));
        })
    });
}

fn bench_layout_fine_first(c: &mut Criterion) {
    let params = ruler_params().with_shy_resolution(ShyResolution::FineFirst);
    let grids = ruler_grids();

    c.bench_function("tick_layout_fine_first_1920px", |b| {
        b.iter(|| {
            let _ = compute_layout(black_box(&params), black_box(&grids));
        })
    });
}

fn bench_engine_draw_to_frame(c: &mut Criterion) {
    let levels = ruler_grids()
        .into_iter()
        .enumerate()
        .map(|(index, grid)| {
            let level = TickLevel::new(
                grid,
                tick_lines(TickMarkStyle {
                    length: 16.0 / (index + 1) as f64,
                    ..TickMarkStyle::default()
                }),
            );
            if index == 0 {
                level.with_draw_call(tick_labels(TickLabelStyle::default()))
            } else {
                level
            }
        })
        .collect();
    let mut engine: TickEngine<TickFrame> =
        TickEngine::new(levels, ruler_params()).expect("engine init");
    let mut surface = FrameSurface::new(1920.0, 40.0);

    c.bench_function("tick_engine_draw_to_frame_1920px", |b| {
        b.iter(|| {
            let _ = engine.draw(black_box(&mut surface)).expect("draw");
        })
    });
}

criterion_group!(
    benches,
    bench_layout_coarse_first,
    bench_layout_fine_first,
    bench_engine_draw_to_frame
);
criterion_main!(benches);
