//! Per-frame control snapshot consumed by the frame orchestrator.

use serde::{Deserialize, Serialize};

/// Normalized player input for one frame.
///
/// The input collaborator resolves overlapping key presses before this
/// struct is built: `steer` carries the winning direction (positive = left),
/// while `left_held`/`right_held` keep the raw hold state that drift
/// fine-tuning needs to tell "holding the outer key" from "holding the
/// inner key".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSnapshot {
    /// Resolved steer direction: -1 (right), 0, or +1 (left).
    #[serde(default)]
    pub steer: i8,
    /// Raw hold state of the left steer key.
    #[serde(default)]
    pub left_held: bool,
    /// Raw hold state of the right steer key.
    #[serde(default)]
    pub right_held: bool,
    /// Accelerator held.
    #[serde(default)]
    pub throttle: bool,
    /// Brake/reverse held.
    #[serde(default)]
    pub brake: bool,
    /// Drift requested.
    #[serde(default)]
    pub drift: bool,
}

impl ControlSnapshot {
    /// Steer direction with the near-standstill filter applied.
    ///
    /// Steering below `min_steer_speed` is ignored so the vehicle cannot
    /// spin in place.
    pub fn filtered_steer(&self, speed: f32, min_steer_speed: f32) -> i8 {
        if speed.abs() < min_steer_speed {
            return 0;
        }
        self.steer.signum()
    }
}
