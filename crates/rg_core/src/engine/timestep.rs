//! Frame stepping constants.
//!
//! The engine advances one discrete frame per rendered frame at a fixed
//! rate; no delta-time scaling exists anywhere in the handling code, so all
//! tuning values are per-frame quantities.

/// Fixed simulation/render rate (frames per second).
pub const FRAME_RATE: u32 = 60;

/// Number of pre-rendered sprite orientations for a vehicle.
pub const SPRITE_DIRECTIONS: u32 = 36;

/// Idle-heading snap granularity that aligns a resting vehicle with the
/// sprite set.
pub const SPRITE_SNAP_STEP_DEGREES: f32 = 360.0 / SPRITE_DIRECTIONS as f32;

// Compile-time validation
const _: () = assert!(SPRITE_DIRECTIONS > 0 && 360 % SPRITE_DIRECTIONS == 0);
