//! Longitudinal speed model: throttle, brake, coast hold and overspeed
//! decay.

use super::math::move_toward;
use super::profile::SpeedTuning;

/// Tiered deceleration used while speed sits above the forward cap.
fn overspeed_deceleration(over: f32, tuning: &SpeedTuning) -> f32 {
    if over <= tuning.overspeed_near_margin {
        tuning.overspeed_near_deceleration
    } else if over <= tuning.overspeed_mid_margin {
        tuning.overspeed_mid_deceleration
    } else {
        tuning.overspeed_far_deceleration
    }
}

/// Advance the signed speed by one frame.
///
/// `accelerate`/`reverse` are the raw pedal holds; pressing both cancels to
/// a coast. `forward_cap` is the effective forward limit, raised while a
/// boost is active. Speed already above the cap decays toward it through the
/// overspeed tiers instead of being clamped.
///
/// The hold floor keeps a vehicle from bleeding speed on a straight coast
/// once momentum is built: it arms only while not braking, the turn is not
/// sharp, and speed is at the floor (or throttling at/above the activation
/// threshold).
pub fn update_speed(
    speed: f32,
    accelerate: bool,
    reverse: bool,
    turn_rate: f32,
    forward_cap: f32,
    tuning: &SpeedTuning,
) -> f32 {
    let throttle = accelerate && !reverse;
    let brake = reverse && !accelerate;
    let abs_turn = turn_rate.abs();
    let sharp_turn = abs_turn >= tuning.hold_cancel_turn_rate;
    let hold_floor = tuning.hold_floor();
    let hold_activation = tuning.hold_activation_min();
    let hold_enabled = !brake
        && !sharp_turn
        && (speed >= hold_floor || (throttle && speed >= hold_activation));

    let mut speed = speed;
    if throttle {
        if speed < 0.0 {
            // Bleed reverse momentum before forward acceleration takes over.
            speed = (speed + tuning.brake_deceleration).min(0.0);
        }
        if speed > forward_cap {
            let rate = overspeed_deceleration(speed - forward_cap, tuning);
            speed = move_toward(speed, forward_cap, rate);
        } else {
            speed = (speed + tuning.throttle_acceleration).min(forward_cap);
        }
    } else if brake {
        if speed > 0.0 {
            speed = (speed - tuning.brake_deceleration).max(0.0);
        } else {
            speed = (speed - tuning.reverse_acceleration).max(-tuning.max_reverse_speed);
        }
    } else {
        let coast_target = if hold_enabled { hold_floor } else { 0.0 };
        let rate = if speed > forward_cap {
            overspeed_deceleration(speed - forward_cap, tuning)
        } else {
            tuning.coast_deceleration
        };
        speed = move_toward(speed, coast_target, rate);
    }

    // Sharp turning bleeds speed regardless of pedal state.
    let turn_drag = abs_turn * tuning.turn_speed_penalty;
    if turn_drag > tuning.min_turn_drag {
        let drag_target = if hold_enabled { hold_floor } else { 0.0 };
        speed = move_toward(speed, drag_target, turn_drag);
    }

    // Keeps the vehicle from hovering just under the plateau due to rounding.
    if throttle && !sharp_turn && speed >= hold_activation {
        speed = speed.max(hold_floor);
    }

    speed
}
