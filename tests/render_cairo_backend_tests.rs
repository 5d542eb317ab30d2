#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use linear_tick::api::{ElementSize, TickEngine, TickLevel, TickStore, WhenResized};
use linear_tick::core::{LayoutParams, TickGrid};
use linear_tick::error::TickError;
use linear_tick::render::{
    CairoContextSurface, CairoSurface, FrameSurface, TickFrame, TickLabelStyle, TickMarkStyle,
    TickSurface, cairo_tick_lines, paint_frame, tick_labels, tick_lines,
};

fn ruler_params() -> LayoutParams {
    LayoutParams::DEFAULT
        .with_density(1.0)
        .with_redundancy(0.0)
        .with_size(200.0, 30.0)
}

#[test]
fn cairo_surface_rejects_invalid_size() {
    let err = CairoSurface::new(-1, 30).expect_err("negative width must fail");
    assert!(matches!(err, TickError::InvalidData(_)));
}

#[test]
fn batched_cairo_marks_draw_on_image_surface() {
    let mut surface = CairoSurface::new(200, 30).expect("surface");
    let levels: Vec<TickLevel<Context, TickStore>> = vec![
        TickLevel::new(TickGrid::new(50.0), cairo_tick_lines(TickMarkStyle::default())),
        TickLevel::new(
            TickGrid::new(10.0).shy(),
            cairo_tick_lines(TickMarkStyle {
                length: 4.0,
                ..TickMarkStyle::default()
            }),
        ),
    ];
    let mut engine: TickEngine<Context> =
        TickEngine::new(levels, ruler_params()).expect("engine init");

    let stats = engine.draw(&mut surface).expect("draw");

    assert_eq!(stats.levels_drawn, 2);
    assert_eq!(stats.ticks_visited, 5 + 16);
    assert_eq!(surface.backend_name(), "cairo+pango+pangocairo");
}

#[test]
fn cairo_surface_follows_resize() {
    let mut surface = CairoSurface::new(200, 30).expect("surface");
    surface
        .resize(linear_tick::render::SurfaceSize::new(400.0, 60.0, 200.0, 30.0))
        .expect("resize");

    assert_eq!(surface.surface().width(), 400);
    assert_eq!(surface.surface().height(), 60);
    assert_eq!(surface.size().css_width, 200.0);
}

#[test]
fn recorded_frame_paints_on_external_context() {
    let levels: Vec<TickLevel<TickFrame, TickStore>> = vec![
        TickLevel::new(TickGrid::new(50.0), tick_lines(TickMarkStyle::default()))
            .with_draw_call(tick_labels(TickLabelStyle::default())),
    ];
    let mut engine: TickEngine<TickFrame> =
        TickEngine::new(levels, ruler_params()).expect("engine init");
    let mut frame_surface = FrameSurface::new(200.0, 30.0);
    engine.draw(&mut frame_surface).expect("draw");

    let image = ImageSurface::create(Format::ARgb32, 200, 30).expect("surface");
    let context = Context::new(&image).expect("context");
    let stats = paint_frame(&context, frame_surface.frame()).expect("paint");

    assert_eq!(stats.lines_drawn, 5);
    assert_eq!(stats.texts_drawn, 5);
}

#[test]
fn engine_draws_through_a_borrowed_context() {
    let image = ImageSurface::create(Format::ARgb32, 200, 30).expect("surface");
    let context = Context::new(&image).expect("context");
    let mut surface = CairoContextSurface::new(context);
    let levels: Vec<TickLevel<Context, TickStore>> = vec![TickLevel::new(
        TickGrid::new(20.0),
        cairo_tick_lines(TickMarkStyle::default()),
    )];
    let mut engine: TickEngine<Context> =
        TickEngine::new(levels, ruler_params()).expect("engine init");

    let stats = engine.draw(&mut surface).expect("draw");
    assert_eq!(stats.ticks_visited, 11);
}

#[test]
fn collapsed_element_resizes_to_an_empty_backing_store() {
    let mut surface = CairoSurface::new(200, 30).expect("surface");
    let levels: Vec<TickLevel<Context, TickStore>> = vec![TickLevel::new(
        TickGrid::new(20.0),
        cairo_tick_lines(TickMarkStyle::default()),
    )];
    let mut engine: TickEngine<Context> =
        TickEngine::new(levels, ruler_params()).expect("engine init");
    engine.set_keep_same_size_with(Some(1));
    engine.set_when_resized(WhenResized::DrawImmediately);

    let handled = engine
        .on_resize(ElementSize::new(0.0, 0.0), &mut surface)
        .expect("zero-size resize");

    assert!(handled);
    assert_eq!(surface.surface().width(), 0);
    assert_eq!(surface.surface().height(), 0);
    assert_eq!(engine.params().width, 0.0);
    assert_eq!(engine.params().height, 0.0);
}
