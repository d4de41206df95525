use approx::assert_relative_eq;
use cosmic_timeline::TimelineError;
use cosmic_timeline::api::{RecordingSurface, TimelineConfig, TimelineEngine};
use cosmic_timeline::core::{Catalog, Viewport};
use cosmic_timeline::interaction::{GestureMode, TouchPoint};
use cosmic_timeline::render::NullRenderer;

fn build_engine() -> TimelineEngine<NullRenderer, RecordingSurface> {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let config = TimelineConfig::new(Viewport::new(1000, 600));
    TimelineEngine::new(NullRenderer::default(), RecordingSurface::default(), catalog, config)
        .expect("engine init")
}

fn touch(x: f64) -> TouchPoint {
    TouchPoint::new(x, 200.0)
}

#[test]
fn pinch_scales_by_distance_ratio_around_midpoint() {
    let mut engine = build_engine();
    let anchor_year = engine.x_to_year(500.0);

    engine.pinch_start(touch(400.0), touch(600.0)).expect("start");
    assert_eq!(engine.mode(), GestureMode::Pinching);

    engine.pinch(touch(300.0), touch(700.0), 0.0).expect("pinch");
    assert_relative_eq!(engine.scale(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(engine.x_to_year(500.0), anchor_year, epsilon = 1e-3);
}

#[test]
fn pinch_ratio_is_relative_to_start_not_previous_move() {
    let mut engine = build_engine();
    engine.pinch_start(touch(450.0), touch(550.0)).expect("start");

    engine.pinch(touch(400.0), touch(600.0), 0.0).expect("pinch");
    engine.pinch(touch(350.0), touch(650.0), 0.0).expect("pinch");
    assert_relative_eq!(engine.scale(), 3.0, epsilon = 1e-12);
}

#[test]
fn pinch_anchor_is_measured_in_canvas_coordinates() {
    let mut engine = build_engine();
    let canvas_left = 50.0;
    let anchor_year = engine.x_to_year(500.0);

    engine.pinch_start(touch(500.0), touch(600.0)).expect("start");
    engine.pinch(touch(450.0), touch(650.0), canvas_left).expect("pinch");

    assert_relative_eq!(engine.scale(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(engine.x_to_year(500.0), anchor_year, epsilon = 1e-3);
}

#[test]
fn pinch_anchor_holds_when_already_zoomed() {
    let mut engine = build_engine();
    engine.zoom(40.0, 130.0).expect("zoom");
    let anchor_year = engine.x_to_year(700.0);

    engine.pinch_start(touch(650.0), touch(750.0)).expect("start");
    engine.pinch(touch(675.0), touch(725.0), 0.0).expect("pinch");

    assert_relative_eq!(engine.scale(), 20.0, max_relative = 1e-12);
    assert_relative_eq!(engine.x_to_year(700.0), anchor_year, epsilon = 1e-3);
}

#[test]
fn pinch_is_floored_at_min_scale() {
    let mut engine = build_engine();
    engine.pinch_start(touch(0.0), touch(1000.0)).expect("start");
    engine.pinch(touch(495.0), touch(505.0), 0.0).expect("pinch");
    assert_eq!(engine.scale(), 0.1);
}

#[test]
fn coincident_touches_do_not_corrupt_transform() {
    let mut engine = build_engine();
    engine.pinch_start(touch(300.0), touch(300.0)).expect("start");

    engine.pinch(touch(300.0), touch(300.0), 0.0).expect("pinch");
    assert_eq!(engine.scale(), 1.0);
    assert_eq!(engine.offset_x(), 0.0);

    // First separation re-seeds the reference distance.
    engine.pinch(touch(250.0), touch(350.0), 0.0).expect("pinch");
    assert_eq!(engine.scale(), 1.0);
    assert!(engine.transform().is_finite());

    engine.pinch(touch(200.0), touch(400.0), 0.0).expect("pinch");
    assert_relative_eq!(engine.scale(), 2.0, epsilon = 1e-12);
    assert!(engine.transform().is_finite());
}

#[test]
fn pinch_without_session_is_ignored() {
    let mut engine = build_engine();
    engine.pinch(touch(100.0), touch(900.0), 0.0).expect("pinch");
    assert_eq!(engine.scale(), 1.0);
    assert!(!engine.wants_frame());
}

#[test]
fn pinch_start_cancels_animation_and_drag() {
    let mut engine = build_engine();
    engine.animate_to_position(5.0, 0.0, 1_000.0).expect("animate");
    engine.on_frame(0.0).expect("frame");
    engine.start_drag(10.0).expect("drag");
    engine.animate_to_position(5.0, 0.0, 1_000.0).expect("animate again");

    engine.pinch_start(touch(400.0), touch(600.0)).expect("start");
    assert_eq!(engine.mode(), GestureMode::Pinching);
    assert!(!engine.interaction().is_dragging());

    engine.on_frame(5_000.0).expect("frame");
    assert_eq!(engine.scale(), 1.0);
}

#[test]
fn non_finite_touches_are_rejected() {
    let mut engine = build_engine();
    let err = engine
        .pinch_start(touch(f64::NAN), touch(500.0))
        .expect_err("nan touch");
    assert!(matches!(err, TimelineError::InvalidData(_)));
    assert_eq!(engine.mode(), GestureMode::Idle);
}
