//! Scalar and vector helpers shared by the handling subsystems.
//!
//! Angles are degrees. Axes follow the renderer: heading 0° points up
//! (negative y) and increasing heading turns the nose left.

/// Step `value` toward `target` by at most `step`, without overshooting.
#[inline]
pub fn move_toward(value: f32, target: f32, step: f32) -> f32 {
    if value < target {
        (value + step).min(target)
    } else if value > target {
        (value - step).max(target)
    } else {
        value
    }
}

/// Move `current` a `fraction` of the remaining distance toward `target`.
#[inline]
pub fn blend_toward(current: f32, target: f32, fraction: f32) -> f32 {
    current + (target - current) * fraction
}

/// Round `rotation` to the nearest multiple of `snap_step_degrees`.
/// A non-positive step disables snapping.
#[inline]
pub fn snap_angle(rotation: f32, snap_step_degrees: f32) -> f32 {
    if snap_step_degrees <= 0.0 {
        return rotation;
    }
    (rotation / snap_step_degrees).round() * snap_step_degrees
}

/// Unit forward vector for a heading in degrees.
#[inline]
pub fn forward_vector(heading_degrees: f32) -> (f32, f32) {
    let radians = heading_degrees.to_radians();
    (-radians.sin(), -radians.cos())
}
