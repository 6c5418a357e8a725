//! Per-vehicle handling profiles.
//!
//! A profile is an immutable bundle of tuning constants resolved once at
//! vehicle-selection time and shared read-only by every simulation step. It
//! is plain data: profiles can be built from the named presets here,
//! deserialized from JSON (missing fields fall back to the baseline), or
//! assembled field by field.
//!
//! Validation lives with construction. `step_frame` assumes a well-formed
//! profile; `validate`/`from_json` are the gate.

use serde::{Deserialize, Serialize};

use super::physics_constants::{boost, drift, rotation, slip, speed};
use crate::error::{ProfileError, Result};

/// Turn-rate response tuning (degrees and degrees-per-frame).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationTuning {
    /// Turn-rate gain per frame during the initial response phase.
    pub initial_turn_acceleration: f32,
    /// Frames covered by the initial response phase.
    pub initial_phase_frames: u32,
    /// Bounded step used to ease onto the plateau rate.
    pub plateau_acceleration: f32,
    /// Frames spent easing onto the plateau after the initial phase.
    pub plateau_phase_frames: u32,
    /// Target turn rate of the plateau phase.
    pub plateau_turn_rate: f32,
    /// Turn-rate gain per frame once the plateau has been passed.
    pub late_turn_acceleration: f32,
    /// Turn-rate cap at steer strength 1.0.
    pub max_turn_rate: f32,
    /// Per-frame decay toward zero with no steer input.
    pub turn_damping: f32,
    /// Damping applied while the requested direction opposes the current rate.
    pub turn_direction_change_damping: f32,
    /// Below this magnitude an un-steered turn rate is zeroed.
    pub turn_stop_epsilon: f32,
}

impl Default for RotationTuning {
    fn default() -> Self {
        Self {
            initial_turn_acceleration: rotation::INITIAL_TURN_ACCELERATION,
            initial_phase_frames: rotation::INITIAL_PHASE_FRAMES,
            plateau_acceleration: rotation::PLATEAU_ACCELERATION,
            plateau_phase_frames: rotation::PLATEAU_PHASE_FRAMES,
            plateau_turn_rate: rotation::PLATEAU_TURN_RATE,
            late_turn_acceleration: rotation::LATE_TURN_ACCELERATION,
            max_turn_rate: rotation::MAX_TURN_RATE,
            turn_damping: rotation::TURN_DAMPING,
            turn_direction_change_damping: rotation::TURN_DIRECTION_CHANGE_DAMPING,
            turn_stop_epsilon: rotation::TURN_STOP_EPSILON,
        }
    }
}

impl RotationTuning {
    /// Last hold frame covered by the plateau phase.
    pub fn plateau_end_frame(&self) -> u32 {
        self.initial_phase_frames + self.plateau_phase_frames
    }
}

/// Longitudinal speed tuning (units per frame).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedTuning {
    pub throttle_acceleration: f32,
    pub coast_deceleration: f32,
    pub brake_deceleration: f32,
    pub reverse_acceleration: f32,
    pub max_speed: f32,
    pub max_reverse_speed: f32,
    /// Steering below this speed is filtered out entirely.
    pub min_steer_speed: f32,
    /// Speed bled per frame per degree of turn rate.
    pub turn_speed_penalty: f32,
    /// Turn drag below this threshold is ignored.
    pub min_turn_drag: f32,
    /// Coast speed maintained once momentum has been built up.
    pub speed_hold_floor: f32,
    /// Throttling at or above this speed arms the hold floor.
    pub speed_hold_activation_min: f32,
    /// A turn rate at or above this cancels the hold floor.
    pub hold_cancel_turn_rate: f32,
    /// Overspeed within this margin of the cap uses the near decay tier.
    pub overspeed_near_margin: f32,
    /// Overspeed within this margin of the cap uses the mid decay tier.
    pub overspeed_mid_margin: f32,
    pub overspeed_near_deceleration: f32,
    pub overspeed_mid_deceleration: f32,
    pub overspeed_far_deceleration: f32,
}

impl Default for SpeedTuning {
    fn default() -> Self {
        Self {
            throttle_acceleration: speed::THROTTLE_ACCELERATION,
            coast_deceleration: speed::COAST_DECELERATION,
            brake_deceleration: speed::BRAKE_DECELERATION,
            reverse_acceleration: speed::REVERSE_ACCELERATION,
            max_speed: speed::MAX_SPEED,
            max_reverse_speed: speed::MAX_REVERSE_SPEED,
            min_steer_speed: speed::MIN_STEER_SPEED,
            turn_speed_penalty: speed::TURN_SPEED_PENALTY,
            min_turn_drag: speed::MIN_TURN_DRAG,
            speed_hold_floor: speed::SPEED_HOLD_FLOOR,
            speed_hold_activation_min: speed::SPEED_HOLD_ACTIVATION_MIN,
            hold_cancel_turn_rate: speed::HOLD_CANCEL_TURN_RATE,
            overspeed_near_margin: speed::OVERSPEED_NEAR_MARGIN,
            overspeed_mid_margin: speed::OVERSPEED_MID_MARGIN,
            overspeed_near_deceleration: speed::OVERSPEED_NEAR_DECELERATION,
            overspeed_mid_deceleration: speed::OVERSPEED_MID_DECELERATION,
            overspeed_far_deceleration: speed::OVERSPEED_FAR_DECELERATION,
        }
    }
}

impl SpeedTuning {
    /// Effective hold floor; never above the forward cap.
    pub fn hold_floor(&self) -> f32 {
        self.speed_hold_floor.min(self.max_speed)
    }

    /// Effective hold activation threshold; never above the floor itself.
    pub fn hold_activation_min(&self) -> f32 {
        self.speed_hold_activation_min.min(self.hold_floor())
    }

    /// Reference speed for the slip ratio.
    pub fn max_reference_speed(&self) -> f32 {
        self.max_speed.max(self.max_reverse_speed)
    }
}

/// Velocity blending and stopping thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlipTuning {
    /// Base slide fraction present at any speed.
    pub slide_factor: f32,
    pub speed_slip_weight: f32,
    pub turn_slip_weight: f32,
    /// Slip never reaches full slide; some grip always remains.
    pub max_slip: f32,
    /// Multiplicative residual-velocity decay at a standstill.
    pub coast_velocity_decay: f32,
    /// Blend fraction used instead of grip while past the base speed cap.
    pub overspeed_blend_fraction: f32,
    pub stop_speed_epsilon: f32,
    pub stop_velocity_epsilon: f32,
}

impl Default for SlipTuning {
    fn default() -> Self {
        Self {
            slide_factor: slip::DEFAULT_SLIDE_FACTOR,
            speed_slip_weight: slip::SPEED_SLIP_WEIGHT,
            turn_slip_weight: slip::TURN_SLIP_WEIGHT,
            max_slip: slip::MAX_SLIP,
            coast_velocity_decay: slip::COAST_VELOCITY_DECAY,
            overspeed_blend_fraction: slip::OVERSPEED_BLEND_FRACTION,
            stop_speed_epsilon: slip::STOP_SPEED_EPSILON,
            stop_velocity_epsilon: slip::STOP_VELOCITY_EPSILON,
        }
    }
}

/// One (steer-strength, skew) pair used for drift fine-tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftPreset {
    /// Multiplier applied to the whole steering response while active.
    pub steer_strength: f32,
    /// Slide angle between nose and travel direction, degrees.
    pub skew_degrees: f32,
}

impl Default for DriftPreset {
    fn default() -> Self {
        Self {
            steer_strength: drift::BASE_STEER_STRENGTH,
            skew_degrees: drift::BASE_SKEW_DEGREES,
        }
    }
}

/// Drift lifecycle tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftTuning {
    /// Minimum speed magnitude to start or sustain a drift.
    pub min_drift_speed: f32,
    /// Charge frames needed for the short boost tier.
    pub short_charge_frames: u32,
    /// Charge frames needed for the long boost tier.
    pub long_charge_frames: u32,
    /// Preset while no fine-tuning key is held.
    pub base: DriftPreset,
    /// Preset while the key opposite the slide is held exclusively.
    pub sharp: DriftPreset,
    /// Preset while the same-side key is held exclusively.
    pub slow: DriftPreset,
    /// Upper bound on the stored slide angle.
    pub max_skew_degrees: f32,
    /// Heading snapped back by this angle on a voluntary release.
    pub release_counter_angle_degrees: f32,
    /// Turn rate set opposite the slide on a voluntary release.
    pub release_counter_turn_rate: f32,
    /// Per-frame skew decay once the drift has ended.
    pub skew_decay_step_degrees: f32,
}

impl Default for DriftTuning {
    fn default() -> Self {
        Self {
            min_drift_speed: drift::MIN_DRIFT_SPEED,
            short_charge_frames: drift::SHORT_CHARGE_FRAMES,
            long_charge_frames: drift::LONG_CHARGE_FRAMES,
            base: DriftPreset {
                steer_strength: drift::BASE_STEER_STRENGTH,
                skew_degrees: drift::BASE_SKEW_DEGREES,
            },
            sharp: DriftPreset {
                steer_strength: drift::SHARP_STEER_STRENGTH,
                skew_degrees: drift::SHARP_SKEW_DEGREES,
            },
            slow: DriftPreset {
                steer_strength: drift::SLOW_STEER_STRENGTH,
                skew_degrees: drift::SLOW_SKEW_DEGREES,
            },
            max_skew_degrees: drift::MAX_SKEW_DEGREES,
            release_counter_angle_degrees: drift::RELEASE_COUNTER_ANGLE_DEGREES,
            release_counter_turn_rate: drift::RELEASE_COUNTER_TURN_RATE,
            skew_decay_step_degrees: drift::SKEW_DECAY_STEP_DEGREES,
        }
    }
}

/// One mini-boost tier: an immutable (duration, acceleration, cap delta)
/// triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostTier {
    pub duration_frames: u32,
    pub acceleration: f32,
    /// Added on top of the profile's base max speed while the boost runs.
    pub max_speed_delta: f32,
}

impl Default for BoostTier {
    fn default() -> Self {
        Self {
            duration_frames: boost::SHORT_DURATION_FRAMES,
            acceleration: boost::SHORT_ACCELERATION,
            max_speed_delta: boost::SHORT_MAX_SPEED_DELTA,
        }
    }
}

/// The two boost tiers a drift release can grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostCatalog {
    pub short: BoostTier,
    pub long: BoostTier,
}

impl Default for BoostCatalog {
    fn default() -> Self {
        Self {
            short: BoostTier {
                duration_frames: boost::SHORT_DURATION_FRAMES,
                acceleration: boost::SHORT_ACCELERATION,
                max_speed_delta: boost::SHORT_MAX_SPEED_DELTA,
            },
            long: BoostTier {
                duration_frames: boost::LONG_DURATION_FRAMES,
                acceleration: boost::LONG_ACCELERATION,
                max_speed_delta: boost::LONG_MAX_SPEED_DELTA,
            },
        }
    }
}

/// Complete handling profile for one vehicle archetype.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlingProfile {
    pub rotation: RotationTuning,
    pub speed: SpeedTuning,
    pub slip: SlipTuning,
    pub drift: DriftTuning,
    pub boost: BoostCatalog,
}

impl HandlingProfile {
    /// The baseline all-rounder.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Grip-focused variant: lower slip caps and slip blending plus a lower
    /// base slide make for more planted handling; stronger pedals and a
    /// higher top speed compensate.
    pub fn gripper() -> Self {
        let mut profile = Self::default();
        profile.slip.max_slip = 0.80;
        profile.slip.speed_slip_weight = 0.10;
        profile.slip.turn_slip_weight = 0.08;
        profile.slip.slide_factor = 0.2;
        profile.speed.throttle_acceleration = 0.065;
        profile.speed.coast_deceleration = 0.006;
        profile.speed.brake_deceleration = 0.18;
        profile.speed.reverse_acceleration = 0.06;
        profile.speed.max_speed = 2.8;
        profile
    }

    /// Parse a profile from JSON and validate it. Missing fields fall back
    /// to the baseline values.
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Check the constraints the step function relies on.
    pub fn validate(&self) -> Result<()> {
        fn ensure(condition: bool, message: String) -> Result<()> {
            if condition {
                Ok(())
            } else {
                Err(ProfileError::InvalidParameter(message))
            }
        }

        ensure(
            self.rotation.max_turn_rate > 0.0,
            format!("max_turn_rate must be positive (got {})", self.rotation.max_turn_rate),
        )?;
        ensure(
            self.rotation.turn_stop_epsilon >= 0.0,
            format!("turn_stop_epsilon must not be negative (got {})", self.rotation.turn_stop_epsilon),
        )?;
        ensure(
            self.speed.max_speed > 0.0,
            format!("max_speed must be positive (got {})", self.speed.max_speed),
        )?;
        ensure(
            self.speed.max_reverse_speed >= 0.0,
            format!("max_reverse_speed must not be negative (got {})", self.speed.max_reverse_speed),
        )?;
        ensure(
            self.slip.slide_factor >= 0.0
                && self.slip.speed_slip_weight >= 0.0
                && self.slip.turn_slip_weight >= 0.0,
            "slip factors must not be negative".to_string(),
        )?;
        ensure(
            (0.0..1.0).contains(&self.slip.max_slip),
            format!("max_slip must be in [0, 1) (got {})", self.slip.max_slip),
        )?;
        ensure(
            self.drift.min_drift_speed > 0.0,
            format!("min_drift_speed must be positive (got {})", self.drift.min_drift_speed),
        )?;
        ensure(
            self.drift.short_charge_frames <= self.drift.long_charge_frames,
            format!(
                "short charge threshold ({}) must not exceed the long one ({})",
                self.drift.short_charge_frames, self.drift.long_charge_frames
            ),
        )?;
        ensure(
            self.drift.max_skew_degrees <= 45.0,
            format!("max_skew_degrees must not exceed 45 (got {})", self.drift.max_skew_degrees),
        )?;
        for (name, preset) in
            [("base", &self.drift.base), ("sharp", &self.drift.sharp), ("slow", &self.drift.slow)]
        {
            ensure(
                preset.steer_strength > 0.0,
                format!("{} preset steer_strength must be positive (got {})", name, preset.steer_strength),
            )?;
            ensure(
                preset.skew_degrees > 0.0 && preset.skew_degrees <= self.drift.max_skew_degrees,
                format!(
                    "{} preset skew_degrees must be in (0, {}] (got {})",
                    name, self.drift.max_skew_degrees, preset.skew_degrees
                ),
            )?;
        }
        for (name, tier) in [("short", &self.boost.short), ("long", &self.boost.long)] {
            ensure(
                tier.duration_frames > 0,
                format!("{} boost tier duration must be positive", name),
            )?;
            ensure(
                tier.acceleration > 0.0 && tier.max_speed_delta >= 0.0,
                format!("{} boost tier values out of range", name),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert!(HandlingProfile::default().validate().is_ok());
        assert!(HandlingProfile::gripper().validate().is_ok());
    }

    #[test]
    fn test_gripper_is_more_planted() {
        let standard = HandlingProfile::standard();
        let gripper = HandlingProfile::gripper();

        assert!(gripper.slip.max_slip < standard.slip.max_slip);
        assert!(gripper.slip.speed_slip_weight < standard.slip.speed_slip_weight);
        assert!(gripper.slip.turn_slip_weight < standard.slip.turn_slip_weight);
        assert!(gripper.speed.brake_deceleration > standard.speed.brake_deceleration);
        assert!(gripper.speed.max_speed > standard.speed.max_speed);
    }

    #[test]
    fn test_derived_hold_values_stay_under_cap() {
        let mut tuning = SpeedTuning::default();
        tuning.max_speed = 0.8;
        assert_eq!(tuning.hold_floor(), 0.8);
        assert_eq!(tuning.hold_activation_min(), 0.8);

        let tuning = SpeedTuning::default();
        assert_eq!(tuning.hold_floor(), 1.0);
        assert_eq!(tuning.hold_activation_min(), 0.9);
        assert_eq!(tuning.max_reference_speed(), 1.5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut profile = HandlingProfile::default();
        profile.rotation.max_turn_rate = 0.0;
        assert!(profile.validate().is_err());

        let mut profile = HandlingProfile::default();
        profile.slip.max_slip = 1.0;
        assert!(profile.validate().is_err());

        let mut profile = HandlingProfile::default();
        profile.drift.short_charge_frames = 120;
        assert!(profile.validate().is_err());

        let mut profile = HandlingProfile::default();
        profile.drift.sharp.skew_degrees = 50.0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_from_json_partial_override() {
        let profile = HandlingProfile::from_json(r#"{"speed": {"max_speed": 2.0}}"#).unwrap();
        assert_eq!(profile.speed.max_speed, 2.0);
        // Untouched fields keep the baseline values.
        assert_eq!(profile.speed.throttle_acceleration, 0.05);
        assert_eq!(profile.rotation.max_turn_rate, 4.0);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            HandlingProfile::from_json("not json"),
            Err(crate::error::ProfileError::DeserializationError(_))
        ));
        assert!(matches!(
            HandlingProfile::from_json(r#"{"speed": {"max_speed": -1.0}}"#),
            Err(crate::error::ProfileError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_profile_json_round_trip() {
        let profile = HandlingProfile::gripper();
        let json = serde_json::to_string(&profile).unwrap();
        let back = HandlingProfile::from_json(&json).unwrap();
        assert_eq!(back, profile);
    }
}
