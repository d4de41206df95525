use cosmic_timeline::core::{
    TickWindow, format_span, format_year, format_zoom_info, ruler_interval, tick_interval,
    year_ticks,
};

#[test]
fn year_formatting_matches_magnitude_buckets() {
    assert_eq!(format_year(-1_500_000_000.0), "1.5 млрд лет назад");
    assert_eq!(format_year(-2_600_000.0), "2.6 млн лет назад");
    assert_eq!(format_year(-5_000.0), "5 тыс. лет назад");
    assert_eq!(format_year(-500.0), "500 до н.э.");
    assert_eq!(format_year(2024.0), "2024 н.э.");
    assert_eq!(format_year(0.0), "0 н.э.");
    assert_eq!(format_year(-0.0), "0 н.э.");
}

#[test]
fn ruler_ladder_picks_first_exceeded_threshold() {
    let full = ruler_interval(13_800_002_024.0);
    assert_eq!(full.interval_years, 1.0e9);
    assert_eq!(full.label, "1 млрд лет");

    // Thresholds are strict.
    assert_eq!(ruler_interval(5.0e9).label, "500 млн лет");
    assert_eq!(ruler_interval(150_000.0).label, "100 тыс. лет");
    assert_eq!(ruler_interval(1_500.0).label, "1000 лет");

    let floor = ruler_interval(100.0);
    assert_eq!(floor.interval_years, 10.0);
    assert_eq!(floor.label, "10 лет");
}

#[test]
fn tick_ladder_is_finer_than_ruler_ladder() {
    assert_eq!(tick_interval(13_800_002_024.0), 1.0e9);
    assert_eq!(tick_interval(7.0e8), 1.0e8);
    assert_eq!(tick_interval(5_000.0), 500.0);
    assert_eq!(tick_interval(21.0), 5.0);
    assert_eq!(tick_interval(20.0), 1.0);
    assert_eq!(tick_interval(0.5), 1.0);

    // Same span, different ladders.
    assert_eq!(ruler_interval(7.0e8).interval_years, 1.0e8);
    assert_eq!(ruler_interval(3.0e8).interval_years, 1.0e8);
    assert_eq!(tick_interval(3.0e8), 5.0e7);
}

#[test]
fn tick_interval_never_grows_as_span_shrinks() {
    let mut previous = f64::INFINITY;
    let mut visible = 2.0e10;
    while visible > 0.1 {
        let interval = tick_interval(visible);
        assert!(interval <= previous, "interval grew at visible={visible}");
        previous = interval;
        visible *= 0.93;
    }
}

fn identity_window(left_year: f64, right_year: f64, visible_years: f64) -> TickWindow {
    TickWindow {
        left_year,
        right_year,
        max_year: 2024.0,
        visible_years,
        canvas_width: 100.0,
        max_ticks: 30,
    }
}

#[test]
fn short_spans_label_every_tick() {
    let ticks = year_ticks(identity_window(0.0, 100.0, 100.0), |year| year);
    assert_eq!(ticks.len(), 11);
    assert!(ticks.iter().all(|tick| tick.labeled));
    assert_eq!(ticks[0].year, 0.0);
    assert_eq!(ticks[10].year, 100.0);
}

#[test]
fn long_spans_label_every_other_tick_and_cap_count() {
    let window = TickWindow {
        canvas_width: 1.0e6,
        ..identity_window(0.0, 1.0e6, 5_000.0)
    };
    let ticks = year_ticks(window, |year| year);

    assert_eq!(ticks.len(), 30);
    assert!(ticks[0].labeled);
    assert!(!ticks[1].labeled);
    assert!(ticks[2].labeled);
    assert_eq!(ticks[1].year - ticks[0].year, 500.0);
}

#[test]
fn off_canvas_ticks_do_not_consume_the_budget() {
    let window = TickWindow {
        max_ticks: 5,
        ..identity_window(-1_000.0, 100.0, 100.0)
    };
    let ticks = year_ticks(window, |year| year);

    let years: Vec<f64> = ticks.iter().map(|tick| tick.year).collect();
    assert_eq!(years, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
}

#[test]
fn ticks_stop_at_the_latest_year() {
    let window = TickWindow {
        canvas_width: 1.0e6,
        ..identity_window(1_990.0, 5_000.0, 100.0)
    };
    let ticks = year_ticks(window, |year| year);

    let years: Vec<f64> = ticks.iter().map(|tick| tick.year).collect();
    assert_eq!(years, vec![1_990.0, 2_000.0, 2_010.0, 2_020.0]);
}

#[test]
fn span_and_zoom_readouts_use_their_own_precision() {
    assert_eq!(format_span(13_800_002_024.0), "13.8 млрд лет");
    assert_eq!(format_span(2_500_000.0), "2.5 млн лет");
    assert_eq!(format_span(1_500.0), "1.5 тыс. лет");
    assert_eq!(format_span(79.4), "79 лет");

    assert_eq!(format_zoom_info(13_800_002_024.0), "На экране: 13.8 млрд лет");
    assert_eq!(format_zoom_info(2_500_000.0), "На экране: 2.5 млн лет");
    assert_eq!(format_zoom_info(72_000.0), "На экране: 72 тыс. лет");
    assert_eq!(format_zoom_info(1_000.0), "На экране: 1000 лет");
}
