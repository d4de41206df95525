//! cosmic-timeline: pannable, zoomable timeline engine spanning cosmological
//! to historical time.
//!
//! The crate keeps a strict split between pure year/pixel math (`core`),
//! backend-agnostic drawing (`render`), gesture sessions (`interaction`) and
//! the engine facade that ties them together (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    InputDispatcher, InputEvent, RecordingSurface, TimelineConfig, TimelineEngine,
    TimelineStyle, TimelineSurface,
};
pub use error::{TimelineError, TimelineResult};
