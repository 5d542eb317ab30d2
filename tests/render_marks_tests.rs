use linear_tick::api::{TickEngine, TickLevel};
use linear_tick::core::{LayoutParams, TickGrid};
use linear_tick::render::{
    Color, FrameSurface, TextHAlign, TickFrame, TickLabelStyle, TickMarkStyle, tick_labels,
    tick_lines,
};

fn ruler_params() -> LayoutParams {
    LayoutParams::DEFAULT
        .with_density(1.0)
        .with_redundancy(0.0)
        .with_size(100.0, 20.0)
}

fn major_minor_levels() -> Vec<TickLevel<TickFrame, linear_tick::api::TickStore>> {
    vec![
        TickLevel::new(
            TickGrid::new(50.0),
            tick_lines(TickMarkStyle {
                length: 12.0,
                ..TickMarkStyle::default()
            }),
        )
        .with_draw_call(tick_labels(TickLabelStyle::default())),
        TickLevel::new(
            TickGrid::new(10.0).shy(),
            tick_lines(TickMarkStyle::default()),
        ),
    ]
}

#[test]
fn major_and_minor_marks_are_recorded_once_per_value() {
    let mut engine: TickEngine<TickFrame> =
        TickEngine::new(major_minor_levels(), ruler_params()).expect("engine init");
    let mut surface = FrameSurface::new(100.0, 20.0);

    let stats = engine.draw(&mut surface).expect("draw");
    let frame = surface.frame();

    assert_eq!(frame.lines.len(), 3 + 8);
    assert_eq!(frame.texts.len(), 3);
    assert_eq!(stats.ticks_visited, 3 + 3 + 8);

    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["0", "50", "100"]);
    assert!(frame.texts.iter().all(|text| text.h_align == TextHAlign::Center));

    let major = frame.lines[1];
    assert_eq!((major.x1, major.y1, major.x2, major.y2), (50.0, 0.0, 50.0, 12.0));
    assert!(frame.validate().is_ok());
}

#[test]
fn labels_follow_the_axis_normal() {
    let levels = vec![TickLevel::new(
        TickGrid::new(25.0),
        tick_labels(TickLabelStyle {
            offset: 6.0,
            precision: 1,
            ..TickLabelStyle::default()
        }),
    )];
    let params = ruler_params()
        .with_direction(0.0, 1.0)
        .with_size(30.0, 100.0)
        .with_anchor(0.5, 0.0);
    let mut engine: TickEngine<TickFrame> = TickEngine::new(levels, params).expect("engine init");
    let mut surface = FrameSurface::new(30.0, 100.0);

    engine.draw(&mut surface).expect("draw");

    let texts = &surface.frame().texts;
    assert_eq!(texts.len(), 5);
    assert_eq!(texts[1].text, "25.0");
    // Normal of a downward axis points to the left.
    assert_eq!(texts[1].x, 15.0 - 6.0);
    assert_eq!(texts[1].y, 25.0);
}

#[test]
fn transparent_style_skips_its_bundle() {
    let levels = vec![
        TickLevel::new(
            TickGrid::new(10.0),
            tick_lines(TickMarkStyle {
                color: Color::rgb(0.2, 0.2, 0.2).with_alpha(0.0),
                ..TickMarkStyle::default()
            }),
        )
        .with_draw_call(tick_labels(TickLabelStyle::default())),
    ];
    let mut engine: TickEngine<TickFrame> =
        TickEngine::new(levels, ruler_params()).expect("engine init");
    let mut surface = FrameSurface::new(100.0, 20.0);

    let stats = engine.draw(&mut surface).expect("draw");

    assert!(surface.frame().lines.is_empty());
    assert_eq!(surface.frame().texts.len(), 11);
    assert_eq!(stats.bundles_skipped, 1);
    assert_eq!(stats.bundles_run, 1);
}

#[test]
fn each_draw_replaces_the_previous_frame() {
    let mut engine: TickEngine<TickFrame> =
        TickEngine::new(major_minor_levels(), ruler_params()).expect("engine init");
    let mut surface = FrameSurface::new(100.0, 20.0);

    engine.draw(&mut surface).expect("first draw");
    engine.params_mut().value = 5.0;
    engine.draw(&mut surface).expect("second draw");

    let labels: Vec<&str> = surface
        .frame()
        .texts
        .iter()
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, vec!["50", "100"]);
    assert_eq!(surface.passes(), 2);
}
