//! Drift lifecycle: start resolution, per-frame fine-tuning, release and
//! boost accounting.
//!
//! A vehicle is either grounded or drifting; release is a one-frame
//! transition, not a state of its own. While drifting, player steering is
//! overridden: the direction fed to the steering subsystem is locked to the
//! drift direction and only the raw left/right holds fine-tune strength and
//! skew. A sufficiently charged voluntary release pays out a timed
//! mini-boost.

use super::input::ControlSnapshot;
use super::math::move_toward;
use super::profile::{DriftPreset, DriftTuning, HandlingProfile};
use super::state::{ActiveBoost, BoostLevel, DriftPhase, VehicleState};

/// Resolve the slide direction for a start attempt.
///
/// An exclusively held raw key wins (left = +1, right = -1); otherwise the
/// filtered steer sign decides. `None` means the attempt is a no-op.
fn resolve_direction(controls: &ControlSnapshot, filtered_steer: i8) -> Option<i8> {
    if controls.left_held && !controls.right_held {
        Some(1)
    } else if controls.right_held && !controls.left_held {
        Some(-1)
    } else if filtered_steer != 0 {
        Some(filtered_steer)
    } else {
        None
    }
}

/// Attempt the grounded -> drifting transition for this frame.
pub fn try_start(state: &mut VehicleState, controls: &ControlSnapshot, profile: &HandlingProfile) {
    if state.is_drifting() || !controls.drift {
        return;
    }
    if state.speed.abs() < profile.drift.min_drift_speed {
        return;
    }
    let filtered = controls.filtered_steer(state.speed, profile.speed.min_steer_speed);
    let Some(direction) = resolve_direction(controls, filtered) else {
        return;
    };
    state.drift = DriftPhase::Drifting { direction, charge_frames: 0 };
    log::debug!("drift start: direction={} speed={:.3}", direction, state.speed);
}

/// Apply the drifting -> grounded transition if one is due this frame.
///
/// Dropping below the minimum drift speed cancels outright: no boost, no
/// counter-steer flick. Releasing the drift request grades the accumulated
/// charge against the tier thresholds and flicks the nose back against the
/// slide.
pub fn update_release(
    state: &mut VehicleState,
    controls: &ControlSnapshot,
    profile: &HandlingProfile,
) {
    let DriftPhase::Drifting { direction, charge_frames } = state.drift else {
        return;
    };

    if state.speed.abs() < profile.drift.min_drift_speed {
        state.drift = DriftPhase::Grounded;
        log::debug!("drift cancel: speed={:.3} below minimum", state.speed);
        return;
    }

    if controls.drift {
        return;
    }

    let granted = if charge_frames >= profile.drift.long_charge_frames {
        Some((BoostLevel::Long, &profile.boost.long))
    } else if charge_frames >= profile.drift.short_charge_frames {
        Some((BoostLevel::Short, &profile.boost.short))
    } else {
        None
    };
    if let Some((level, tier)) = granted {
        state.boost = Some(ActiveBoost::from_tier(level, tier, profile.speed.max_speed));
        log::debug!("drift release: charge={} granted {:?} boost", charge_frames, level);
    } else {
        log::debug!("drift release: charge={} below short threshold", charge_frames);
    }

    // Exit flick: snap the heading back against the slide and counter-steer.
    let dir = f32::from(direction);
    state.heading_degrees -= dir * profile.drift.release_counter_angle_degrees;
    state.turn_rate = -dir * profile.drift.release_counter_turn_rate;
    state.drift = DriftPhase::Grounded;
}

/// Select the fine-tuning preset for one frame of an active drift.
///
/// Holding the key opposite the slide tightens it (sharp); holding the
/// same-side key widens it (slow); neither or both keeps the base feel.
fn select_preset<'a>(
    tuning: &'a DriftTuning,
    direction: i8,
    controls: &ControlSnapshot,
) -> &'a DriftPreset {
    let same = if direction > 0 { controls.left_held } else { controls.right_held };
    let opposite = if direction > 0 { controls.right_held } else { controls.left_held };
    if opposite && !same {
        &tuning.sharp
    } else if same && !opposite {
        &tuning.slow
    } else {
        &tuning.base
    }
}

/// Advance one drifting frame: accumulate charge, pick the preset, store the
/// skew for rendering and velocity blending, and return the locked steer
/// direction and strength for the steering subsystem.
pub fn update_drifting(
    state: &mut VehicleState,
    controls: &ControlSnapshot,
    tuning: &DriftTuning,
) -> (i8, f32) {
    let DriftPhase::Drifting { direction, charge_frames } = state.drift else {
        return (0, 1.0);
    };
    let preset = select_preset(tuning, direction, controls);
    state.drift = DriftPhase::Drifting { direction, charge_frames: charge_frames + 1 };
    state.skew_direction = direction;
    state.skew_degrees = preset.skew_degrees.min(tuning.max_skew_degrees);
    (direction, preset.steer_strength)
}

/// Ease the stored skew back to zero after a drift ends; clearing the stored
/// direction once it gets there keeps the camera tilt easing out smoothly
/// instead of snapping.
pub fn decay_skew(state: &mut VehicleState, tuning: &DriftTuning) {
    if state.skew_degrees > 0.0 {
        state.skew_degrees = (state.skew_degrees - tuning.skew_decay_step_degrees).max(0.0);
    }
    if state.skew_degrees == 0.0 {
        state.skew_direction = 0;
    }
}

/// Boost countdown: push speed toward the boosted cap, then expire.
///
/// Runs after the speed rules each frame, so the push and the raised cap are
/// both visible to velocity blending the same frame they apply.
pub fn tick_boost(state: &mut VehicleState) {
    let Some(mut active) = state.boost else {
        return;
    };
    state.speed = move_toward(state.speed, active.max_speed, active.acceleration);
    active.frames_remaining = active.frames_remaining.saturating_sub(1);
    if active.frames_remaining == 0 {
        state.boost = None;
        log::debug!("boost expired: speed={:.3}", state.speed);
    } else {
        state.boost = Some(active);
    }
}
