use oculus_engine::coords::{Rect, Vec2, Viewport};

use super::rotation::{restricted_limit, RotationState, CENTER};

/// Offset of the pointer from the centre of `container`, in logical px.
pub fn distance_xy(pointer: Vec2, container: Rect) -> (f64, f64) {
    let c = container.center();
    (pointer.x as f64 - c.x as f64, pointer.y as f64 - c.y as f64)
}

/// Distance at which the eye stops following the pointer.
#[inline]
pub fn max_distance_of_effect(viewport: Viewport, effect_distance: f64) -> f64 {
    viewport.max_dimension() as f64 * effect_distance
}

/// Orientation for a pointer `distance` away from the eye.
///
/// Falls linearly from [`CENTER`] at distance 0 and is floored at
/// `restricted_limit(eye_roll_restriction)`. A non-positive or non-finite
/// `max_distance` yields the floor.
pub fn orientation(distance: f64, max_distance: f64, eye_roll_restriction: f64) -> f64 {
    let floor = restricted_limit(eye_roll_restriction);
    if !(max_distance > 0.0 && max_distance.is_finite()) {
        return floor;
    }

    let ratio = 1.0 - distance / max_distance;
    let value = CENTER * ratio;
    if value < floor || value.is_nan() { floor } else { value }
}

/// Gaze direction in degrees, `[0, 360)`, with 0 pointing up (towards -Y).
pub fn gaze_degrees(dx: f64, dy: f64) -> f64 {
    let deg = dy.atan2(dx).to_degrees() + 90.0;
    if deg < 0.0 { deg + 360.0 } else { deg }
}

/// Rotation the eye should take for `pointer`.
pub fn target_rotation(
    pointer: Vec2,
    container: Rect,
    viewport: Viewport,
    effect_distance: f64,
    eye_roll_restriction: f64,
) -> RotationState {
    let (dx, dy) = distance_xy(pointer, container);
    let max = max_distance_of_effect(viewport, effect_distance);
    RotationState::uniform(orientation(dx.hypot(dy), max, eye_roll_restriction))
}
