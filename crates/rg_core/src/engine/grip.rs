//! Velocity/grip blending: converts heading and speed into world velocity.
//!
//! Velocity chases the heading-implied target by an exponential blend rather
//! than jumping to it; the blend fraction is the grip left over after slip,
//! and slip rises with speed and turn rate. The result is the arcade slide:
//! quick direction changes carry the old velocity for a few frames.

use super::math::{blend_toward, forward_vector};
use super::profile::HandlingProfile;

/// Blend velocity one frame toward the heading-implied target.
///
/// `drift_skew` is `Some((direction, degrees))` while a drift is active; the
/// target forward vector is rotated by that slide angle so the car travels
/// at an angle to its nose. Ratios are guarded so a zero reference speed or
/// turn-rate cap yields ratio 0 instead of a fault.
pub fn update_velocity(
    velocity: (f32, f32),
    heading_degrees: f32,
    speed: f32,
    turn_rate: f32,
    drift_skew: Option<(i8, f32)>,
    profile: &HandlingProfile,
) -> (f32, f32) {
    let travel_heading = match drift_skew {
        Some((direction, skew_degrees)) => heading_degrees + f32::from(direction) * skew_degrees,
        None => heading_degrees,
    };
    let (forward_x, forward_y) = forward_vector(travel_heading);
    let target = (forward_x * speed, forward_y * speed);

    let tuning = &profile.slip;
    let max_reference = profile.speed.max_reference_speed();
    let speed_ratio = if max_reference > 0.0 {
        (speed.abs() / max_reference).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let max_turn_rate = profile.rotation.max_turn_rate;
    let turn_ratio = if max_turn_rate > 0.0 { turn_rate.abs() / max_turn_rate } else { 0.0 };

    let slip = (tuning.slide_factor
        + speed_ratio * tuning.speed_slip_weight
        + turn_ratio * tuning.turn_slip_weight)
        .clamp(0.0, tuning.max_slip);
    let grip = 1.0 - slip;

    // Past the base cap the grip blend is too lazy; converge faster so a
    // finished boost decelerates snappily.
    let fraction = if speed > profile.speed.max_speed {
        tuning.overspeed_blend_fraction
    } else {
        grip
    };

    let mut vx = blend_toward(velocity.0, target.0, fraction);
    let mut vy = blend_toward(velocity.1, target.1, fraction);

    // At a standstill the blend target is zero anyway; the multiplicative
    // decay removes the residual drift it would leave behind.
    if speed.abs() <= tuning.stop_speed_epsilon {
        vx *= tuning.coast_velocity_decay;
        vy *= tuning.coast_velocity_decay;
    }

    if vx.abs() < tuning.stop_velocity_epsilon {
        vx = 0.0;
    }
    if vy.abs() < tuning.stop_velocity_epsilon {
        vy = 0.0;
    }

    (vx, vy)
}
