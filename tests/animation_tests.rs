use approx::assert_relative_eq;
use cosmic_timeline::TimelineError;
use cosmic_timeline::api::{RecordingSurface, TimelineConfig, TimelineEngine};
use cosmic_timeline::core::{Catalog, MIN_YEAR, Period, Rgb, TOTAL_YEARS, Viewport};
use cosmic_timeline::interaction::GestureMode;
use cosmic_timeline::render::NullRenderer;

fn build_engine() -> TimelineEngine<NullRenderer, RecordingSurface> {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let config = TimelineConfig::new(Viewport::new(1000, 600));
    TimelineEngine::new(NullRenderer::default(), RecordingSurface::default(), catalog, config)
        .expect("engine init")
}

fn run_to_completion(engine: &mut TimelineEngine<NullRenderer, RecordingSurface>, start_ms: f64) {
    let mut now = start_ms;
    while engine.mode() == GestureMode::Animating {
        engine.on_frame(now).expect("frame");
        now += 16.0;
        assert!(now < start_ms + 10_000.0, "animation did not terminate");
    }
}

#[test]
fn animation_lands_exactly_on_target_and_stops_scheduling() {
    let mut engine = build_engine();
    engine
        .animate_to_position(4.0, -1_500.0, 1_000.0)
        .expect("animate");
    assert_eq!(engine.mode(), GestureMode::Animating);
    assert!(engine.wants_frame());

    engine.on_frame(0.0).expect("first frame");
    engine.on_frame(500.0).expect("mid frame");
    engine.on_frame(1_000.0).expect("last frame");

    assert_eq!(engine.scale(), 4.0);
    assert_eq!(engine.offset_x(), -1_500.0);
    assert_eq!(engine.mode(), GestureMode::Idle);
    assert!(!engine.wants_frame());

    let draws = engine.draw_count();
    engine.on_frame(1_016.0).expect("idle frame");
    assert_eq!(engine.draw_count(), draws);
}

#[test]
fn animation_clock_starts_on_first_frame() {
    let mut engine = build_engine();
    engine
        .animate_to_position(4.0, -1_500.0, 1_000.0)
        .expect("animate");

    engine.on_frame(100.0).expect("latch frame");
    assert_eq!(engine.scale(), 1.0);
    assert_eq!(engine.offset_x(), 0.0);

    engine.on_frame(600.0).expect("halfway");
    assert_relative_eq!(engine.scale(), 2.5, epsilon = 1e-12);
    assert_relative_eq!(engine.offset_x(), -750.0, epsilon = 1e-9);
}

#[test]
fn every_animation_frame_draws_once() {
    let mut engine = build_engine();
    engine.animate_to_position(2.0, 0.0, 100.0).expect("animate");
    engine.render();

    engine.on_frame(0.0).expect("frame");
    assert_eq!(engine.draw_count(), 1);
    assert!(!engine.render_pending());

    engine.on_frame(50.0).expect("frame");
    engine.on_frame(100.0).expect("frame");
    assert_eq!(engine.draw_count(), 3);
}

#[test]
fn starting_a_drag_halts_the_animation() {
    let mut engine = build_engine();
    engine
        .animate_to_position(8.0, -3_000.0, 1_000.0)
        .expect("animate");
    engine.on_frame(0.0).expect("frame");
    engine.on_frame(200.0).expect("frame");

    engine.start_drag(300.0).expect("start drag");
    assert_eq!(engine.mode(), GestureMode::Dragging);
    let frozen = engine.transform();

    engine.on_frame(400.0).expect("frame");
    engine.on_frame(2_000.0).expect("frame");
    assert_eq!(engine.transform(), frozen);

    engine.drag(350.0).expect("drag");
    assert_eq!(engine.scale(), frozen.scale);
    assert_eq!(engine.offset_x(), frozen.offset_x + 50.0);
}

#[test]
fn zoom_cancels_the_animation() {
    let mut engine = build_engine();
    engine.animate_to_position(8.0, 0.0, 1_000.0).expect("animate");
    engine.on_frame(0.0).expect("frame");

    engine.zoom(2.0, 500.0).expect("zoom");
    assert_eq!(engine.mode(), GestureMode::Idle);
    assert_eq!(engine.scale(), 2.0);

    engine.on_frame(5_000.0).expect("frame");
    assert_eq!(engine.scale(), 2.0);
}

#[test]
fn new_animation_replaces_the_running_one() {
    let mut engine = build_engine();
    engine.animate_to_position(8.0, 0.0, 1_000.0).expect("first");
    engine.on_frame(0.0).expect("frame");
    engine.on_frame(300.0).expect("frame");

    engine.animate_to_position(3.0, 120.0, 500.0).expect("second");
    run_to_completion(&mut engine, 400.0);

    assert_eq!(engine.scale(), 3.0);
    assert_eq!(engine.offset_x(), 120.0);
}

#[test]
fn jump_to_period_centers_padded_period() {
    let mut engine = build_engine();
    let index = engine
        .catalog()
        .periods()
        .iter()
        .position(|period| period.name == "Юра")
        .expect("jurassic period");
    let period = engine.catalog().periods()[index].clone();

    engine.jump_to_period_index(index).expect("jump");
    run_to_completion(&mut engine, 0.0);

    assert_relative_eq!(
        engine.visible_years(),
        period.duration() * 1.3,
        max_relative = 1e-9
    );
    assert_relative_eq!(engine.year_to_x(period.midpoint()), 500.0, epsilon = 1e-6);
}

#[test]
fn jump_to_instant_period_uses_minimum_visible_span() {
    let instant = Period {
        start: 1_969.0,
        end: 1_969.0,
        name: "Момент".to_owned(),
        icon: "🚀".to_owned(),
        color: Rgb::new(10, 20, 30),
    };
    let catalog = Catalog::new(vec![instant.clone()], Vec::new(), Vec::new()).expect("catalog");
    let config = TimelineConfig::new(Viewport::new(1000, 600));
    let mut engine =
        TimelineEngine::new(NullRenderer::default(), RecordingSurface::default(), catalog, config)
            .expect("engine init");

    engine.jump_to_period(&instant).expect("jump");
    run_to_completion(&mut engine, 0.0);

    assert!(engine.transform().is_finite());
    assert_relative_eq!(engine.scale(), TOTAL_YEARS, max_relative = 1e-12);
    let expected_offset = 500.0 - ((1_969.0 - MIN_YEAR) / TOTAL_YEARS) * 1000.0 * TOTAL_YEARS;
    assert_relative_eq!(engine.offset_x(), expected_offset, max_relative = 1e-12);
}

#[test]
fn jump_to_missing_period_index_fails() {
    let mut engine = build_engine();
    let err = engine.jump_to_period_index(999).expect_err("out of range");
    assert!(matches!(err, TimelineError::InvalidData(_)));
    assert_eq!(engine.mode(), GestureMode::Idle);
}

#[test]
fn reset_flies_back_to_full_view() {
    let mut engine = build_engine();
    engine.zoom(64.0, 123.0).expect("zoom");
    engine.reset().expect("reset");
    run_to_completion(&mut engine, 0.0);

    assert_eq!(engine.scale(), 1.0);
    assert_eq!(engine.offset_x(), 0.0);
}

#[test]
fn animation_rejects_invalid_targets() {
    let mut engine = build_engine();
    assert!(engine.animate_to_position(0.0, 0.0, 100.0).is_err());
    assert!(engine.animate_to_position(1.0, f64::NAN, 100.0).is_err());
    assert!(engine.animate_to_position(1.0, 0.0, -5.0).is_err());
    assert_eq!(engine.mode(), GestureMode::Idle);
}

#[test]
fn button_fly_to_during_held_drag_ends_the_drag() {
    let mut engine = build_engine();
    engine.start_drag(100.0).expect("drag");
    engine.jump_to_period_index(12).expect("jump");
    assert!(!engine.interaction().is_dragging());

    run_to_completion(&mut engine, 0.0);
    assert_eq!(engine.mode(), GestureMode::Idle);

    let landed = engine.offset_x();
    engine.drag(600.0).expect("stale drag move");
    assert_eq!(engine.offset_x(), landed);
}
