//! Steering: converts held steer input into a turn rate and integrates
//! heading.

use super::math::{move_toward, snap_angle};
use super::profile::RotationTuning;

/// Advance heading and turn rate by one frame.
///
/// `steer` is the effective direction for this frame (drift-locked or
/// player-filtered), `hold_frames` the consecutive frames it has been held,
/// and `strength` the steer-strength multiplier (1.0 outside a drift). The
/// multiplier scales the whole response: phase accelerations, the plateau
/// target and the turn-rate cap.
///
/// With no steer input the rate decays toward zero; once it sits at or under
/// the stop epsilon it is zeroed outright and, if `snap_step_degrees` is
/// positive, the heading rounds to that grid so an idle vehicle rests on a
/// fixed sprite orientation.
///
/// Returns `(heading_degrees, turn_rate)`.
pub fn update_rotation(
    heading_degrees: f32,
    turn_rate: f32,
    steer: i8,
    hold_frames: u32,
    strength: f32,
    tuning: &RotationTuning,
    snap_step_degrees: f32,
) -> (f32, f32) {
    let mut heading = heading_degrees;
    let mut rate = turn_rate;
    let steer_sign = f32::from(steer);

    if steer != 0 {
        // A reversal damps the old rate before the phase curve applies, so
        // the nose never flips instantaneously.
        if rate * steer_sign < 0.0 {
            rate = move_toward(rate, 0.0, tuning.turn_direction_change_damping);
        }

        if hold_frames <= tuning.initial_phase_frames {
            rate += steer_sign * tuning.initial_turn_acceleration * strength;
        } else if hold_frames <= tuning.plateau_end_frame() {
            rate = move_toward(
                rate,
                steer_sign * tuning.plateau_turn_rate * strength,
                tuning.plateau_acceleration,
            );
        } else {
            rate += steer_sign * tuning.late_turn_acceleration * strength;
        }

        let cap = tuning.max_turn_rate * strength;
        rate = rate.clamp(-cap, cap);
    } else {
        rate = move_toward(rate, 0.0, tuning.turn_damping);
    }

    heading += rate;

    if steer == 0 && rate.abs() <= tuning.turn_stop_epsilon {
        rate = 0.0;
        heading = snap_angle(heading, snap_step_degrees);
    }

    (heading, rate)
}
