use crate::core::Rgb;
use crate::error::{TimelineError, TimelineResult};
use crate::render::Color;

const fn hex_color(red: u8, green: u8, blue: u8) -> Color {
    Color::rgb(
        red as f64 / 255.0,
        green as f64 / 255.0,
        blue as f64 / 255.0,
    )
}

/// Visual parameters for the canvas scene.
///
/// Offsets are measured from the axis line (`viewport.center_y()`), except
/// the ruler's horizontal anchors which are absolute canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineStyle {
    pub period_band_height_px: f64,
    pub period_band_alpha: f64,
    pub period_label_color: Color,
    pub period_label_gap_px: f64,
    /// Unclipped band width a label needs before it is drawn at all.
    pub period_label_min_width_px: f64,
    /// Unclipped band width above which the label shows icon and name.
    pub period_label_full_width_px: f64,
    pub period_label_full_font_px: f64,
    pub period_label_icon_font_px: f64,

    pub axis_line_color: Color,
    pub axis_line_width: f64,

    pub tick_color: Color,
    pub tick_width: f64,
    pub tick_half_length_px: f64,
    pub tick_label_color: Color,
    pub tick_label_font_px: f64,
    pub tick_label_offset_px: f64,

    pub ruler_color: Color,
    pub ruler_line_width: f64,
    pub ruler_background: Color,
    pub ruler_font_px: f64,
    pub ruler_box_left_px: f64,
    pub ruler_line_left_px: f64,
    pub ruler_box_extra_width_px: f64,
    pub ruler_box_top_offset_px: f64,
    pub ruler_box_height_px: f64,
    pub ruler_line_offset_px: f64,
    pub ruler_cap_half_height_px: f64,
    pub ruler_text_offset_px: f64,

    pub default_event_color: Rgb,
    pub event_marker_top_offset_px: f64,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            period_band_height_px: 80.0,
            period_band_alpha: 0.3,
            period_label_color: hex_color(0x33, 0x33, 0x33),
            period_label_gap_px: 10.0,
            period_label_min_width_px: 80.0,
            period_label_full_width_px: 150.0,
            period_label_full_font_px: 14.0,
            period_label_icon_font_px: 11.0,

            axis_line_color: hex_color(0x33, 0x33, 0x33),
            axis_line_width: 3.0,

            tick_color: hex_color(0x99, 0x99, 0x99),
            tick_width: 1.0,
            tick_half_length_px: 15.0,
            tick_label_color: hex_color(0x66, 0x66, 0x66),
            tick_label_font_px: 12.0,
            tick_label_offset_px: 35.0,

            ruler_color: hex_color(0x66, 0x7e, 0xea),
            ruler_line_width: 2.0,
            ruler_background: Color::rgba(1.0, 1.0, 1.0, 0.9),
            ruler_font_px: 12.0,
            ruler_box_left_px: 15.0,
            ruler_line_left_px: 20.0,
            ruler_box_extra_width_px: 20.0,
            ruler_box_top_offset_px: 50.0,
            ruler_box_height_px: 40.0,
            ruler_line_offset_px: 70.0,
            ruler_cap_half_height_px: 5.0,
            ruler_text_offset_px: 85.0,

            default_event_color: Rgb::new(0x66, 0x7e, 0xea),
            event_marker_top_offset_px: 8.0,
        }
    }
}

impl TimelineStyle {
    pub fn validate(self) -> TimelineResult<Self> {
        for color in [
            self.period_label_color,
            self.axis_line_color,
            self.tick_color,
            self.tick_label_color,
            self.ruler_color,
            self.ruler_background,
        ] {
            color.validate()?;
        }

        if !self.period_band_alpha.is_finite() || !(0.0..=1.0).contains(&self.period_band_alpha) {
            return Err(TimelineError::InvalidData(
                "style `period_band_alpha` must be in [0, 1]".to_owned(),
            ));
        }

        for (name, value) in [
            ("period_band_height_px", self.period_band_height_px),
            ("period_label_full_font_px", self.period_label_full_font_px),
            ("period_label_icon_font_px", self.period_label_icon_font_px),
            ("axis_line_width", self.axis_line_width),
            ("tick_width", self.tick_width),
            ("tick_label_font_px", self.tick_label_font_px),
            ("ruler_line_width", self.ruler_line_width),
            ("ruler_font_px", self.ruler_font_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("period_label_gap_px", self.period_label_gap_px),
            ("period_label_min_width_px", self.period_label_min_width_px),
            ("period_label_full_width_px", self.period_label_full_width_px),
            ("tick_half_length_px", self.tick_half_length_px),
            ("tick_label_offset_px", self.tick_label_offset_px),
            ("ruler_box_left_px", self.ruler_box_left_px),
            ("ruler_line_left_px", self.ruler_line_left_px),
            ("ruler_box_extra_width_px", self.ruler_box_extra_width_px),
            ("ruler_box_top_offset_px", self.ruler_box_top_offset_px),
            ("ruler_box_height_px", self.ruler_box_height_px),
            ("ruler_line_offset_px", self.ruler_line_offset_px),
            ("ruler_cap_half_height_px", self.ruler_cap_half_height_px),
            ("ruler_text_offset_px", self.ruler_text_offset_px),
            ("event_marker_top_offset_px", self.event_marker_top_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }

        Ok(self)
    }
}
