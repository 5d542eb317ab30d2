use linear_tick::core::{LayoutOverrides, LayoutParams, ShyResolution, TickGrid};
use linear_tick::error::TickError;

#[test]
fn partial_json_document_keeps_defaults() {
    let params = LayoutParams::from_json_str(r#"{ "density": 0.5, "width": 640.0 }"#)
        .expect("parse params");

    assert_eq!(params.density, 0.5);
    assert_eq!(params.width, 640.0);
    assert_eq!(params.height, LayoutParams::DEFAULT.height);
    assert_eq!(params.redundancy, 1.0);
    assert_eq!(params.shy_resolution, ShyResolution::CoarseFirst);
    assert!(params.min.is_none());
}

#[test]
fn params_survive_a_json_round_trip() {
    let params = LayoutParams::DEFAULT
        .with_value(42.0)
        .with_bounds(Some(-5.0), None)
        .with_direction(0.0, -1.0)
        .with_pixel_ratio(Some(2.0))
        .with_shy_resolution(ShyResolution::FineFirst);

    let json = params.to_json_pretty().expect("serialize params");
    let restored = LayoutParams::from_json_str(&json).expect("parse params");
    assert_eq!(restored, params);
}

#[test]
fn malformed_json_is_reported_as_invalid_data() {
    let err = LayoutParams::from_json_str("{ density: }").expect_err("malformed json");
    assert!(matches!(err, TickError::InvalidData(_)));

    let err = LayoutParams::from_json_str(r#"{ "density": "dense" }"#).expect_err("wrong type");
    assert!(matches!(err, TickError::InvalidData(_)));
}

#[test]
fn overrides_only_touch_the_fields_they_set() {
    let base = LayoutParams::DEFAULT.with_value(10.0).with_bounds(Some(0.0), Some(20.0));
    let merged = base.merged(LayoutOverrides {
        value: Some(15.0),
        max: Some(30.0),
        ..LayoutOverrides::default()
    });

    assert_eq!(merged.value, 15.0);
    assert_eq!(merged.min, Some(0.0));
    assert_eq!(merged.max, Some(30.0));
    assert_eq!(merged.density, base.density);
}

#[test]
fn validation_names_the_offending_field() {
    let mut params = LayoutParams::DEFAULT;
    params.anchor_x = f64::NAN;
    match params.validate() {
        Err(TickError::InvalidParams(message)) => assert!(message.contains("anchor_x")),
        other => panic!("expected invalid params, got {other:?}"),
    }

    let params = LayoutParams::DEFAULT.with_bounds(Some(10.0), Some(5.0));
    assert!(matches!(params.validate(), Err(TickError::InvalidParams(_))));

    let params = LayoutParams::DEFAULT.with_redundancy(-1.0);
    assert!(matches!(params.validate(), Err(TickError::InvalidParams(_))));

    let params = LayoutParams::DEFAULT.with_pixel_ratio(Some(0.0));
    assert!(matches!(params.validate(), Err(TickError::InvalidParams(_))));
}

#[test]
fn grid_definitions_deserialize_with_defaults() {
    let grids: Vec<TickGrid> = serde_json::from_str(
        r#"[
            { "multiply": 10.0 },
            { "multiply": 5.0, "shy": true, "max_density_to_show": 0.5 }
        ]"#,
    )
    .expect("parse grids");

    assert_eq!(grids[0], TickGrid::new(10.0));
    assert_eq!(
        grids[1],
        TickGrid::new(5.0).shy().with_max_density_to_show(0.5)
    );
}
