//! # rg_core - Deterministic Arcade Car Handling Engine
//!
//! Frame-stepped handling simulation for a top-down arcade racer: steering
//! response, throttle/brake/reverse, the drift lifecycle with its charged
//! mini-boost, and slip/grip velocity blending.
//!
//! ## Features
//! - 100% deterministic stepping (same inputs = same trajectory)
//! - Tunable per-vehicle handling profiles with serde support
//! - O(1) work per frame, no allocation in the step path
//!
//! The frame loop owns a [`VehicleState`], builds a [`ControlSnapshot`] from
//! player input each frame and calls [`step_frame`]; rendering and
//! diagnostics read the resulting pose through [`engine::telemetry`].
//!
//! ```
//! use rg_core::{step_frame, ControlSnapshot, HandlingProfile, VehicleState};
//!
//! let profile = HandlingProfile::default();
//! let mut state = VehicleState::new();
//! let controls = ControlSnapshot { throttle: true, ..ControlSnapshot::default() };
//! for _ in 0..60 {
//!     step_frame(&mut state, &controls, &profile, 0.0);
//! }
//! assert!(state.speed > 0.0);
//! ```

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod engine;
pub mod error;

// Re-export the handling API
pub use engine::catalog::profile_for_vehicle;
pub use engine::input::ControlSnapshot;
pub use engine::profile::{BoostTier, DriftTuning, HandlingProfile};
pub use engine::state::{ActiveBoost, BoostLevel, DriftPhase, VehicleState};
pub use engine::step::step_frame;
pub use engine::telemetry::{hud_sample, render_view, HudTelemetry, RenderView};
pub use error::{ProfileError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
