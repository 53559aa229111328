use glam::Vec2;

/// Center of a box from its bounding-rect fields, in viewport pixels.
#[inline]
pub fn rect_center(left: f64, top: f64, width: f64, height: f64) -> Vec2 {
    Vec2::new((left + width * 0.5) as f32, (top + height * 0.5) as f32)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingChange {
    Wire,
    Unwire,
    Keep,
}

/// Whether the pointer listener has to be added or removed so that it is
/// wired exactly when the device can hover.
#[inline]
pub fn tracking_change(wired: bool, hover: bool) -> TrackingChange {
    match (wired, hover) {
        (false, true) => TrackingChange::Wire,
        (true, false) => TrackingChange::Unwire,
        _ => TrackingChange::Keep,
    }
}
