mod animation_controller;
mod axis_ruler_builder;
mod axis_tick_builder;
mod engine;
mod engine_config;
mod event_marker_builder;
mod gesture_controller;
mod hover_controller;
mod input;
mod period_band_builder;
mod render_coordinator;
mod render_frame_builder;
mod scene_context;
mod stats;
mod surface;
mod timeline_style;
mod tooltip;
mod validation;

pub use engine::TimelineEngine;
pub use engine_config::TimelineConfig;
pub use event_marker_builder::{EventMarker, build_event_markers, visible_event_indices};
pub use input::{InputDispatcher, InputEvent, InputOutcome};
pub use render_frame_builder::build_render_frame;
pub use scene_context::SceneContext;
pub use stats::{TimelineStats, compute_stats};
pub use surface::{RecordingSurface, TimelineSurface};
pub use timeline_style::TimelineStyle;
pub use tooltip::{TooltipContent, TooltipPosition, TooltipView, place_tooltip, tooltip_content};
