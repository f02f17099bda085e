use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit bounds, damping, and projection parameters.
pub struct CameraOptions {
    /// Point the camera orbits and always faces (the tracked object).
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Orbit radius at startup and after a reset.
    #[schemars(title = "Initial Distance", range(min = 0.5, max = 50.0), extend("step" = 0.1))]
    pub initial_radius: f32,
    /// Closest allowed orbit radius.
    #[schemars(title = "Min Distance", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub min_radius: f32,
    /// Farthest allowed orbit radius.
    #[schemars(title = "Max Distance", range(min = 1.0, max = 100.0), extend("step" = 0.5))]
    pub max_radius: f32,
    /// Smallest polar angle in radians (keeps the camera off the top pole).
    #[schemars(skip)]
    pub min_phi: f32,
    /// Largest polar angle in radians (keeps the camera off the bottom pole).
    #[schemars(skip)]
    pub max_phi: f32,
    /// Fraction of the remaining eye-position gap closed every frame.
    #[schemars(title = "Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Jump straight to the default pose on reset instead of easing there.
    #[schemars(title = "Snap On Reset")]
    pub snap_on_reset: bool,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            target: [0.0; 3],
            initial_radius: 5.0,
            min_radius: 1.0,
            max_radius: 20.0,
            min_phi: 0.1,
            max_phi: PI - 0.1,
            damping_factor: 0.1,
            snap_on_reset: false,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}
