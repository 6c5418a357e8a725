//! Tuning constants for the baseline handling model.
//!
//! These are the canonical hand-tuned values; `HandlingProfile::default()`
//! assembles its tuning blocks from them. Per-vehicle variants override
//! profile fields through presets, never by editing these.

/// Turn-rate response tuning.
///
/// The response runs in three phases keyed on how long the same steer
/// direction has been held: a punchy initial ramp, a bounded ease onto a
/// plateau rate, then a slow late tightening.
pub mod rotation {
    /// Turn-rate gain per frame during the initial response phase.
    pub const INITIAL_TURN_ACCELERATION: f32 = 0.6;
    /// Frames covered by the initial response phase.
    pub const INITIAL_PHASE_FRAMES: u32 = 4;
    /// Bounded step used to ease onto the plateau rate.
    pub const PLATEAU_ACCELERATION: f32 = 0.4;
    /// Frames spent easing onto the plateau after the initial phase.
    pub const PLATEAU_PHASE_FRAMES: u32 = 7;
    /// Target turn rate of the plateau phase (degrees per frame).
    pub const PLATEAU_TURN_RATE: f32 = 2.0;
    /// Turn-rate gain per frame once the plateau has been passed.
    pub const LATE_TURN_ACCELERATION: f32 = 0.15;
    /// Turn-rate cap at steer strength 1.0 (degrees per frame).
    pub const MAX_TURN_RATE: f32 = 4.0;
    /// Per-frame decay toward zero with no steer input.
    pub const TURN_DAMPING: f32 = 0.15;
    /// Damping applied while the requested direction opposes the current rate.
    pub const TURN_DIRECTION_CHANGE_DAMPING: f32 = 0.35;
    /// Below this magnitude an un-steered turn rate is zeroed.
    pub const TURN_STOP_EPSILON: f32 = 0.05;
}

/// Longitudinal speed tuning (units per frame).
pub mod speed {
    pub const THROTTLE_ACCELERATION: f32 = 0.05;
    pub const COAST_DECELERATION: f32 = 0.005;
    pub const BRAKE_DECELERATION: f32 = 0.14;
    pub const REVERSE_ACCELERATION: f32 = 0.04;
    pub const MAX_SPEED: f32 = 1.5;
    pub const MAX_REVERSE_SPEED: f32 = 1.0;
    /// Steering below this speed is filtered out entirely.
    pub const MIN_STEER_SPEED: f32 = 0.03;
    /// Speed bled per frame per degree of turn rate.
    pub const TURN_SPEED_PENALTY: f32 = 0.01;
    /// Turn drag below this threshold is ignored.
    pub const MIN_TURN_DRAG: f32 = 0.03;
    /// Coast speed maintained once momentum has been built up.
    pub const SPEED_HOLD_FLOOR: f32 = 1.0;
    /// Throttling at or above this speed arms the hold floor.
    pub const SPEED_HOLD_ACTIVATION_MIN: f32 = 0.9;
    /// A turn rate at or above this cancels the hold floor.
    pub const HOLD_CANCEL_TURN_RATE: f32 = 3.0;

    // Overspeed decay tiers: softer near the cap, harsher far above it, so a
    // finished boost lands instead of clamping.
    /// Overspeed within this margin of the cap uses the near tier.
    pub const OVERSPEED_NEAR_MARGIN: f32 = 0.15;
    /// Overspeed within this margin of the cap uses the mid tier.
    pub const OVERSPEED_MID_MARGIN: f32 = 0.5;
    pub const OVERSPEED_NEAR_DECELERATION: f32 = 0.01;
    pub const OVERSPEED_MID_DECELERATION: f32 = 0.03;
    pub const OVERSPEED_FAR_DECELERATION: f32 = 0.06;
}

/// Velocity blending and stopping thresholds.
pub mod slip {
    /// Base slide fraction present at any speed.
    pub const DEFAULT_SLIDE_FACTOR: f32 = 0.2;
    pub const SPEED_SLIP_WEIGHT: f32 = 0.35;
    pub const TURN_SLIP_WEIGHT: f32 = 0.35;
    /// Slip never reaches full slide; some grip always remains.
    pub const MAX_SLIP: f32 = 0.95;
    /// Multiplicative residual-velocity decay at a standstill.
    pub const COAST_VELOCITY_DECAY: f32 = 0.01;
    /// Blend fraction used instead of grip while past the base speed cap.
    pub const OVERSPEED_BLEND_FRACTION: f32 = 0.5;
    pub const STOP_SPEED_EPSILON: f32 = 1e-6;
    pub const STOP_VELOCITY_EPSILON: f32 = 1e-3;
}

/// Drift lifecycle tuning.
pub mod drift {
    /// Minimum speed magnitude to start or sustain a drift.
    pub const MIN_DRIFT_SPEED: f32 = 0.8;
    /// Charge frames needed for the short boost tier.
    pub const SHORT_CHARGE_FRAMES: u32 = 45;
    /// Charge frames needed for the long boost tier.
    pub const LONG_CHARGE_FRAMES: u32 = 90;

    // Fine-tuning presets: (steer strength, skew degrees). Holding the key
    // opposite the slide tightens it; holding the same-side key widens it.
    pub const BASE_STEER_STRENGTH: f32 = 1.0;
    pub const BASE_SKEW_DEGREES: f32 = 22.5;
    pub const SHARP_STEER_STRENGTH: f32 = 1.5;
    pub const SHARP_SKEW_DEGREES: f32 = 15.0;
    pub const SLOW_STEER_STRENGTH: f32 = 0.35;
    pub const SLOW_SKEW_DEGREES: f32 = 35.0;

    /// Upper bound on the stored slide angle.
    pub const MAX_SKEW_DEGREES: f32 = 45.0;
    /// Heading snapped back by this angle on a voluntary release.
    pub const RELEASE_COUNTER_ANGLE_DEGREES: f32 = 12.0;
    /// Turn rate set opposite the slide on a voluntary release.
    pub const RELEASE_COUNTER_TURN_RATE: f32 = 1.2;
    /// Per-frame skew decay once the drift has ended.
    pub const SKEW_DECAY_STEP_DEGREES: f32 = 3.0;
}

/// Mini-boost tiers granted on a charged drift release.
pub mod boost {
    pub const SHORT_DURATION_FRAMES: u32 = 30;
    pub const SHORT_ACCELERATION: f32 = 0.10;
    pub const SHORT_MAX_SPEED_DELTA: f32 = 0.5;

    pub const LONG_DURATION_FRAMES: u32 = 60;
    pub const LONG_ACCELERATION: f32 = 0.15;
    pub const LONG_MAX_SPEED_DELTA: f32 = 0.9;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_thresholds_ordering() {
        assert!(speed::SPEED_HOLD_ACTIVATION_MIN < speed::SPEED_HOLD_FLOOR);
        assert!(speed::SPEED_HOLD_FLOOR <= speed::MAX_SPEED);
        assert!(speed::HOLD_CANCEL_TURN_RATE < rotation::MAX_TURN_RATE);
    }

    #[test]
    fn test_drift_tiers_ordering() {
        assert!(drift::SHORT_CHARGE_FRAMES < drift::LONG_CHARGE_FRAMES);
        assert!(boost::SHORT_DURATION_FRAMES < boost::LONG_DURATION_FRAMES);
        assert!(boost::SHORT_MAX_SPEED_DELTA < boost::LONG_MAX_SPEED_DELTA);
    }

    #[test]
    fn test_skew_presets_within_bound() {
        for skew in [drift::BASE_SKEW_DEGREES, drift::SHARP_SKEW_DEGREES, drift::SLOW_SKEW_DEGREES] {
            assert!(skew > 0.0 && skew <= drift::MAX_SKEW_DEGREES);
        }
    }
}
