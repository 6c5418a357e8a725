//! Read models for the presentation collaborators.
//!
//! Everything here is a copy of state the simulation already owns; nothing
//! written by a consumer ever flows back in.

use serde::Serialize;

use super::state::VehicleState;

/// On-screen diagnostics sample, one row of the debug overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HudTelemetry {
    pub speed: f32,
    pub drift_charge_frames: u32,
    /// 0 = none, 1 = short tier, 2 = long tier.
    pub boost_level: u8,
}

/// Pose data the renderer and camera follow each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderView {
    pub position: (f32, f32),
    pub heading_degrees: f32,
    /// Slide direction for camera tilt; stays set while the skew decays and
    /// clears with it.
    pub drift_direction: i8,
    pub drift_skew_degrees: f32,
}

pub fn hud_sample(state: &VehicleState) -> HudTelemetry {
    HudTelemetry {
        speed: state.speed,
        drift_charge_frames: state.drift_charge_frames(),
        boost_level: state.boost_level(),
    }
}

pub fn render_view(state: &VehicleState) -> RenderView {
    RenderView {
        position: state.position,
        heading_degrees: state.heading_degrees,
        drift_direction: state.skew_direction,
        drift_skew_degrees: state.skew_degrees,
    }
}
