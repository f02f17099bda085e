//! Camera system for the AR overlay.
//!
//! Provides the spherical orbit state, the per-frame damped resolver, and
//! the controller that fuses every input source into one viewpoint.

/// Multi-source orbit controller and debug snapshot.
pub mod controller;
/// Camera pose, projection, and GPU uniform types.
pub mod core;
/// Canonical spherical orbit state and its bounds.
pub mod orbit;
/// Spherical-to-Cartesian resolution with damping.
pub mod resolver;

pub use controller::{DebugSnapshot, OrbitController};
pub use core::{CameraPose, CameraUniform, Projection};
pub use orbit::{OrbitLimits, OrbitSnapshot, OrbitState};
pub use resolver::CameraResolver;
