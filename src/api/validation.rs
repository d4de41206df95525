use crate::core::ViewTransform;
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::TouchPoint;

pub(super) fn validate_finite(name: &str, value: f64) -> TimelineResult<f64> {
    if !value.is_finite() {
        return Err(TimelineError::InvalidData(format!("{name} must be finite")));
    }
    Ok(value)
}

pub(super) fn validate_positive(name: &str, value: f64) -> TimelineResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TimelineError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(value)
}

pub(super) fn validate_touch(point: TouchPoint) -> TimelineResult<TouchPoint> {
    if !point.is_finite() {
        return Err(TimelineError::InvalidData(
            "touch coordinates must be finite".to_owned(),
        ));
    }
    Ok(point)
}

/// Guards the transform a gesture is about to commit.
pub(super) fn validate_transform(transform: ViewTransform) -> TimelineResult<ViewTransform> {
    if !transform.is_finite() || transform.scale <= 0.0 {
        return Err(TimelineError::InvalidData(format!(
            "gesture produced an unusable transform: scale={}, offset_x={}",
            transform.scale, transform.offset_x
        )));
    }
    Ok(transform)
}
