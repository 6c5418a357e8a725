//! Vehicle handling simulation.
//!
//! One [`step_frame`] call advances a single vehicle by one discrete frame:
//! drift lifecycle, steering, speed, boost countdown, velocity blending and
//! position integration, in that fixed order. Everything is O(1) per frame
//! and allocation-free; the caller owns the state and passes it in by
//! mutable reference.

pub mod catalog;
pub mod drift;
pub mod grip;
pub mod input;
pub mod math;
pub mod physics_constants;
pub mod profile;
pub mod speed;
pub mod state;
pub mod steering;
pub mod step;
pub mod telemetry;
pub mod timestep;

pub use catalog::profile_for_vehicle;
pub use input::ControlSnapshot;
pub use profile::{
    BoostCatalog, BoostTier, DriftPreset, DriftTuning, HandlingProfile, RotationTuning,
    SlipTuning, SpeedTuning,
};
pub use state::{ActiveBoost, BoostLevel, DriftPhase, VehicleState};
pub use step::step_frame;
pub use telemetry::{hud_sample, render_view, HudTelemetry, RenderView};
