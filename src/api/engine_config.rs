use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load timeline
/// setup without inventing their own ad-hoc format. Every field except the
/// viewport has a default, so a JSON file only needs to name what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,
    #[serde(default = "default_wheel_zoom_in_factor")]
    pub wheel_zoom_in_factor: f64,
    #[serde(default = "default_wheel_zoom_out_factor")]
    pub wheel_zoom_out_factor: f64,
    #[serde(default = "default_button_zoom_factor")]
    pub button_zoom_factor: f64,
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: f64,
    #[serde(default = "default_jump_padding_ratio")]
    pub jump_padding_ratio: f64,
    #[serde(default = "default_min_jump_visible_years")]
    pub min_jump_visible_years: f64,
    #[serde(default = "default_max_ticks")]
    pub max_ticks: usize,
    #[serde(default = "default_max_event_markers")]
    pub max_event_markers: usize,
    #[serde(default = "default_period_cull_margin_px")]
    pub period_cull_margin_px: f64,
    #[serde(default = "default_tick_cull_margin_px")]
    pub tick_cull_margin_px: f64,
    #[serde(default = "default_event_cull_margin_px")]
    pub event_cull_margin_px: f64,
}

impl TimelineConfig {
    /// Creates a config with default navigation tuning.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            min_scale: default_min_scale(),
            wheel_zoom_in_factor: default_wheel_zoom_in_factor(),
            wheel_zoom_out_factor: default_wheel_zoom_out_factor(),
            button_zoom_factor: default_button_zoom_factor(),
            animation_duration_ms: default_animation_duration_ms(),
            jump_padding_ratio: default_jump_padding_ratio(),
            min_jump_visible_years: default_min_jump_visible_years(),
            max_ticks: default_max_ticks(),
            max_event_markers: default_max_event_markers(),
            period_cull_margin_px: default_period_cull_margin_px(),
            tick_cull_margin_px: default_tick_cull_margin_px(),
            event_cull_margin_px: default_event_cull_margin_px(),
        }
    }

    #[must_use]
    pub fn with_min_scale(mut self, min_scale: f64) -> Self {
        self.min_scale = min_scale;
        self
    }

    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration_ms: f64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_max_event_markers(mut self, max_event_markers: usize) -> Self {
        self.max_event_markers = max_event_markers;
        self
    }

    /// Rejects values that would corrupt the view transform at runtime.
    pub fn validate(self) -> TimelineResult<Self> {
        self.viewport.validate()?;

        for (name, value) in [
            ("min_scale", self.min_scale),
            ("wheel_zoom_in_factor", self.wheel_zoom_in_factor),
            ("wheel_zoom_out_factor", self.wheel_zoom_out_factor),
            ("button_zoom_factor", self.button_zoom_factor),
            ("jump_padding_ratio", self.jump_padding_ratio),
            ("min_jump_visible_years", self.min_jump_visible_years),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "config `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("animation_duration_ms", self.animation_duration_ms),
            ("period_cull_margin_px", self.period_cull_margin_px),
            ("tick_cull_margin_px", self.tick_cull_margin_px),
            ("event_cull_margin_px", self.event_cull_margin_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "config `{name}` must be finite and >= 0"
                )));
            }
        }

        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_min_scale() -> f64 {
    0.1
}

fn default_wheel_zoom_in_factor() -> f64 {
    1.15
}

fn default_wheel_zoom_out_factor() -> f64 {
    0.85
}

fn default_button_zoom_factor() -> f64 {
    2.0
}

fn default_animation_duration_ms() -> f64 {
    1_000.0
}

fn default_jump_padding_ratio() -> f64 {
    1.3
}

fn default_min_jump_visible_years() -> f64 {
    1.0
}

fn default_max_ticks() -> usize {
    30
}

fn default_max_event_markers() -> usize {
    100
}

fn default_period_cull_margin_px() -> f64 {
    200.0
}

fn default_tick_cull_margin_px() -> f64 {
    100.0
}

fn default_event_cull_margin_px() -> f64 {
    100.0
}
