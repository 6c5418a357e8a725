//! Frame orchestration.
//!
//! `step_frame` is the only entry point that mutates a [`VehicleState`]. It
//! sequences the subsystems in a fixed order: drift transitions resolve
//! before steering and speed so the same frame already reflects the new
//! lifecycle phase, and the boost countdown runs after the speed rules so
//! the raised cap and the boost's own push both land in this frame's
//! velocity blend.

use super::drift;
use super::grip;
use super::input::ControlSnapshot;
use super::profile::HandlingProfile;
use super::speed;
use super::state::VehicleState;
use super::steering;

/// Advance the simulation by one frame.
///
/// `snap_step_degrees` is the idle-heading grid that aligns a resting
/// vehicle with a discrete sprite set ([`super::timestep::SPRITE_SNAP_STEP_DEGREES`]
/// matches the default sprite count); any non-positive value disables
/// snapping.
pub fn step_frame(
    state: &mut VehicleState,
    controls: &ControlSnapshot,
    profile: &HandlingProfile,
    snap_step_degrees: f32,
) {
    // 1-2. Drift lifecycle transitions.
    drift::try_start(state, controls, profile);
    drift::update_release(state, controls, profile);

    // 3. Effective steer direction and strength for this frame. A drift
    // locks the direction and substitutes its preset strength; otherwise
    // player input passes through the standstill filter and the stored skew
    // keeps easing out.
    let (steer, strength) = if state.is_drifting() {
        drift::update_drifting(state, controls, &profile.drift)
    } else {
        drift::decay_skew(state, &profile.drift);
        let filtered = controls.filtered_steer(state.speed, profile.speed.min_steer_speed);
        (filtered, 1.0)
    };

    // 4. Steer-hold bookkeeping drives the three-phase turn curve.
    if steer == 0 {
        state.steer_hold_frames = 0;
        state.last_steer = 0;
    } else if steer == state.last_steer {
        state.steer_hold_frames += 1;
    } else {
        state.steer_hold_frames = 1;
        state.last_steer = steer;
    }

    // 5. Steering.
    let (heading, turn_rate) = steering::update_rotation(
        state.heading_degrees,
        state.turn_rate,
        steer,
        state.steer_hold_frames,
        strength,
        &profile.rotation,
        snap_step_degrees,
    );
    state.heading_degrees = heading;
    state.turn_rate = turn_rate;

    // 6. Speed, against the boost-aware forward cap.
    let forward_cap = state.forward_cap(profile);
    state.speed = speed::update_speed(
        state.speed,
        controls.throttle,
        controls.brake,
        state.turn_rate,
        forward_cap,
        &profile.speed,
    );

    // 7. Boost countdown.
    drift::tick_boost(state);

    // 8. Velocity blending with the current drift skew.
    let drift_skew = if state.is_drifting() {
        Some((state.drift_direction(), state.skew_degrees))
    } else {
        None
    };
    state.velocity = grip::update_velocity(
        state.velocity,
        state.heading_degrees,
        state.speed,
        state.turn_rate,
        drift_skew,
        profile,
    );

    // 9. Position integration.
    state.position.0 += state.velocity.0;
    state.position.1 += state.velocity.1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state::DriftPhase;
    use proptest::prelude::*;

    fn profile() -> HandlingProfile {
        HandlingProfile::default()
    }

    fn throttle() -> ControlSnapshot {
        ControlSnapshot { throttle: true, ..ControlSnapshot::default() }
    }

    #[test]
    fn test_drift_start_locks_steering_same_frame() {
        let profile = profile();
        let mut state = VehicleState::new();
        state.speed = 1.2;
        // Steering right, drift with the left key: direction locks to +1 and
        // this very frame already steers left.
        let controls = ControlSnapshot {
            drift: true,
            left_held: true,
            steer: -1,
            throttle: true,
            ..ControlSnapshot::default()
        };
        step_frame(&mut state, &controls, &profile, 0.0);
        assert!(state.is_drifting());
        assert_eq!(state.drift_direction(), 1);
        assert!(state.turn_rate > 0.0);
        assert!(state.skew_degrees > 0.0);
    }

    #[test]
    fn test_forced_cancel_on_slow_frame() {
        let profile = profile();
        let mut state = VehicleState::new();
        state.speed = 0.5;
        state.drift = DriftPhase::Drifting { direction: 1, charge_frames: 200 };
        let controls = ControlSnapshot { drift: true, ..ControlSnapshot::default() };
        step_frame(&mut state, &controls, &profile, 0.0);
        assert!(!state.is_drifting());
        assert!(state.boost.is_none());
    }

    #[test]
    fn test_steer_hold_counter_tracks_direction_changes() {
        let profile = profile();
        let mut state = VehicleState::new();
        state.speed = 1.0;

        let left = ControlSnapshot { steer: 1, throttle: true, ..ControlSnapshot::default() };
        step_frame(&mut state, &left, &profile, 0.0);
        step_frame(&mut state, &left, &profile, 0.0);
        assert_eq!(state.steer_hold_frames, 2);
        assert_eq!(state.last_steer, 1);

        let right = ControlSnapshot { steer: -1, throttle: true, ..ControlSnapshot::default() };
        step_frame(&mut state, &right, &profile, 0.0);
        assert_eq!(state.steer_hold_frames, 1);
        assert_eq!(state.last_steer, -1);

        step_frame(&mut state, &throttle(), &profile, 0.0);
        assert_eq!(state.steer_hold_frames, 0);
        assert_eq!(state.last_steer, 0);
    }

    #[test]
    fn test_skew_eases_out_after_release() {
        let profile = profile();
        let mut state = VehicleState::new();
        state.speed = 1.2;
        state.drift = DriftPhase::Drifting { direction: 1, charge_frames: 5 };
        state.skew_direction = 1;
        state.skew_degrees = profile.drift.base.skew_degrees;

        // Release: skew starts decaying but the direction sticks around for
        // the camera until the angle is gone.
        step_frame(&mut state, &throttle(), &profile, 0.0);
        assert!(!state.is_drifting());
        assert!(state.skew_degrees < profile.drift.base.skew_degrees);
        assert_eq!(state.skew_direction, 1);

        for _ in 0..20 {
            step_frame(&mut state, &throttle(), &profile, 0.0);
        }
        assert_eq!(state.skew_degrees, 0.0);
        assert_eq!(state.skew_direction, 0);
    }

    #[test]
    fn test_boost_cap_and_push_apply_same_frame() {
        let profile = profile();
        let mut state = VehicleState::new();
        state.speed = 1.2;
        state.drift = DriftPhase::Drifting {
            direction: 1,
            charge_frames: profile.drift.long_charge_frames,
        };

        // Release frame: the long tier lands and its push already runs.
        step_frame(&mut state, &throttle(), &profile, 0.0);
        assert_eq!(state.boost_level(), 2);
        let active = state.boost.expect("long boost active");
        assert_eq!(active.frames_remaining, profile.boost.long.duration_frames - 1);
        assert!(state.speed > 1.2);
    }

    #[test]
    fn test_boost_expires_and_overspeed_bleeds_back() {
        let profile = profile();
        let mut state = VehicleState::new();
        state.speed = 1.2;
        state.drift = DriftPhase::Drifting {
            direction: 1,
            charge_frames: profile.drift.short_charge_frames,
        };

        step_frame(&mut state, &throttle(), &profile, 0.0);
        for _ in 0..profile.boost.short.duration_frames {
            step_frame(&mut state, &throttle(), &profile, 0.0);
        }
        assert!(state.boost.is_none());
        let peak = state.speed;
        assert!(peak > profile.speed.max_speed);

        // With the cap reverted, speed bleeds back down tier by tier.
        let mut last = peak;
        while state.speed > profile.speed.max_speed {
            step_frame(&mut state, &throttle(), &profile, 0.0);
            assert!(state.speed < last);
            last = state.speed;
        }
        assert!((state.speed - profile.speed.max_speed).abs() < 1e-6);
    }

    fn control_strategy() -> impl Strategy<Value = ControlSnapshot> {
        (-1i8..=1, any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
            .prop_map(|(steer, left_held, right_held, throttle, brake, drift)| ControlSnapshot {
                steer,
                left_held,
                right_held,
                throttle,
                brake,
                drift,
            })
    }

    proptest! {
        // Whatever the input stream does, the state obeys its bounds.
        #[test]
        fn prop_state_stays_within_bounds(
            controls_seq in proptest::collection::vec(control_strategy(), 1..300)
        ) {
            let profile = HandlingProfile::default();
            let turn_cap = profile.rotation.max_turn_rate * profile.drift.sharp.steer_strength;
            let speed_ceiling =
                profile.speed.max_speed + profile.boost.long.max_speed_delta;

            let mut state = VehicleState::new();
            for controls in &controls_seq {
                step_frame(&mut state, controls, &profile, 10.0);

                prop_assert!(state.turn_rate.abs() <= turn_cap + 1e-3);
                prop_assert!(state.speed >= -profile.speed.max_reverse_speed - 1e-4);
                prop_assert!(state.speed <= speed_ceiling + 1e-4);
                prop_assert!((0.0..=45.0).contains(&state.skew_degrees));
                prop_assert!(state.velocity.0.is_finite() && state.velocity.1.is_finite());
                if !state.is_drifting() {
                    prop_assert_eq!(state.drift_charge_frames(), 0);
                }
            }
        }

        // Replaying the same input stream from the same start state lands on
        // the exact same state, frame for frame.
        #[test]
        fn prop_stepping_is_deterministic(
            controls_seq in proptest::collection::vec(control_strategy(), 1..120)
        ) {
            let profile = HandlingProfile::default();
            let mut a = VehicleState::new();
            let mut b = VehicleState::new();
            for controls in &controls_seq {
                step_frame(&mut a, controls, &profile, 10.0);
                step_frame(&mut b, controls, &profile, 10.0);
                prop_assert_eq!(&a, &b);
            }
        }
    }
}
