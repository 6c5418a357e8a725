//! Mutable per-vehicle simulation state.
//!
//! One `VehicleState` exists per active vehicle, created at race start,
//! updated in place by `step_frame` every frame and discarded at race end.
//! All fields are plain data; the state serializes for checkpoint/restore
//! and replay capture.

use serde::{Deserialize, Serialize};

use super::profile::{BoostTier, HandlingProfile};

/// Drift lifecycle phase.
///
/// Charge frames exist only while drifting, so a grounded vehicle with
/// leftover charge is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriftPhase {
    Grounded,
    Drifting {
        /// Locked slide direction: +1 (left) or -1 (right).
        direction: i8,
        /// Consecutive frames spent in this drift.
        charge_frames: u32,
    },
}

/// Which boost tier is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoostLevel {
    Short,
    Long,
}

/// Numeric effect of the boost in progress.
///
/// Copied out of the profile's tier catalog when granted, so handling
/// changes mid-boost cannot retroactively alter a boost already under way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveBoost {
    pub level: BoostLevel,
    pub frames_remaining: u32,
    pub acceleration: f32,
    pub max_speed: f32,
}

impl ActiveBoost {
    /// Cache a tier's effect against the given base cap.
    pub fn from_tier(level: BoostLevel, tier: &BoostTier, base_max_speed: f32) -> Self {
        Self {
            level,
            frames_remaining: tier.duration_frames,
            acceleration: tier.acceleration,
            max_speed: base_max_speed + tier.max_speed_delta,
        }
    }
}

/// Complete simulation state for one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Heading in degrees. Unbounded accumulator; only trig ever reads it.
    pub heading_degrees: f32,
    /// Current turn rate in degrees per frame.
    pub turn_rate: f32,
    /// Consecutive frames the current steer direction has been held.
    pub steer_hold_frames: u32,
    /// Effective steer direction of the previous frame (-1/0/+1).
    pub last_steer: i8,
    /// Signed scalar speed; negative while reversing.
    pub speed: f32,
    /// World velocity, units per frame.
    pub velocity: (f32, f32),
    /// World position.
    pub position: (f32, f32),
    /// Drift lifecycle phase.
    pub drift: DriftPhase,
    /// Slide direction still shown by the renderer while the skew decays;
    /// cleared once the skew reaches zero.
    pub skew_direction: i8,
    /// Visual slide angle in degrees, 0..=45.
    pub skew_degrees: f32,
    /// Boost in progress, if any.
    pub boost: Option<ActiveBoost>,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleState {
    /// A vehicle at rest at the world origin, facing up.
    pub fn new() -> Self {
        Self {
            heading_degrees: 0.0,
            turn_rate: 0.0,
            steer_hold_frames: 0,
            last_steer: 0,
            speed: 0.0,
            velocity: (0.0, 0.0),
            position: (0.0, 0.0),
            drift: DriftPhase::Grounded,
            skew_direction: 0,
            skew_degrees: 0.0,
            boost: None,
        }
    }

    /// A vehicle at rest at a spawn position and heading.
    pub fn at(position: (f32, f32), heading_degrees: f32) -> Self {
        Self { position, heading_degrees, ..Self::new() }
    }

    /// Forward speed cap for this frame: the boosted cap while a boost runs,
    /// the profile's base cap otherwise.
    pub fn forward_cap(&self, profile: &HandlingProfile) -> f32 {
        match &self.boost {
            Some(active) => active.max_speed,
            None => profile.speed.max_speed,
        }
    }

    pub fn is_drifting(&self) -> bool {
        matches!(self.drift, DriftPhase::Drifting { .. })
    }

    /// Locked drift direction, 0 when grounded.
    pub fn drift_direction(&self) -> i8 {
        match self.drift {
            DriftPhase::Drifting { direction, .. } => direction,
            DriftPhase::Grounded => 0,
        }
    }

    /// Consecutive drift frames, 0 when grounded.
    pub fn drift_charge_frames(&self) -> u32 {
        match self.drift {
            DriftPhase::Drifting { charge_frames, .. } => charge_frames,
            DriftPhase::Grounded => 0,
        }
    }

    /// Boost tier indicator for telemetry: 0 = none, 1 = short, 2 = long.
    pub fn boost_level(&self) -> u8 {
        match self.boost {
            None => 0,
            Some(ActiveBoost { level: BoostLevel::Short, .. }) => 1,
            Some(ActiveBoost { level: BoostLevel::Long, .. }) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::profile::HandlingProfile;

    #[test]
    fn test_new_state_is_grounded_and_still() {
        let state = VehicleState::new();
        assert_eq!(state.drift, DriftPhase::Grounded);
        assert_eq!(state.drift_direction(), 0);
        assert_eq!(state.drift_charge_frames(), 0);
        assert_eq!(state.boost_level(), 0);
        assert_eq!(state.velocity, (0.0, 0.0));
    }

    #[test]
    fn test_forward_cap_tracks_boost() {
        let profile = HandlingProfile::default();
        let mut state = VehicleState::new();
        assert_eq!(state.forward_cap(&profile), profile.speed.max_speed);

        state.boost = Some(ActiveBoost::from_tier(
            BoostLevel::Long,
            &profile.boost.long,
            profile.speed.max_speed,
        ));
        assert_eq!(
            state.forward_cap(&profile),
            profile.speed.max_speed + profile.boost.long.max_speed_delta
        );
    }

    #[test]
    fn test_boost_level_mapping() {
        let profile = HandlingProfile::default();
        let mut state = VehicleState::new();

        state.boost = Some(ActiveBoost::from_tier(
            BoostLevel::Short,
            &profile.boost.short,
            profile.speed.max_speed,
        ));
        assert_eq!(state.boost_level(), 1);

        state.boost = Some(ActiveBoost::from_tier(
            BoostLevel::Long,
            &profile.boost.long,
            profile.speed.max_speed,
        ));
        assert_eq!(state.boost_level(), 2);

        state.boost = None;
        assert_eq!(state.boost_level(), 0);
    }

    #[test]
    fn test_drift_accessors() {
        let mut state = VehicleState::new();
        state.drift = DriftPhase::Drifting { direction: -1, charge_frames: 17 };
        assert!(state.is_drifting());
        assert_eq!(state.drift_direction(), -1);
        assert_eq!(state.drift_charge_frames(), 17);
    }
}
