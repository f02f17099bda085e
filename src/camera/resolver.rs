//! Spherical-to-Cartesian camera resolution with per-frame damping.

use glam::Vec3;

use super::core::CameraPose;
use super::orbit::OrbitSnapshot;

/// Point at `radius` from `target` along the direction `(theta, phi)`.
///
/// `phi` is measured from +Y, `theta` from +Z toward +X.
#[must_use]
pub fn spherical_to_cartesian(
    target: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,
) -> Vec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    target
        + Vec3::new(
            radius * sin_phi * sin_theta,
            radius * cos_phi,
            radius * sin_phi * cos_theta,
        )
}

/// Move `current` a fraction `damping` of the way to `desired`, per axis.
#[must_use]
pub fn damp_toward(current: Vec3, desired: Vec3, damping: f32) -> Vec3 {
    current + (desired - current) * damping
}

/// Where the orbit wants the eye, before damping.
#[must_use]
pub fn desired_eye(snapshot: &OrbitSnapshot) -> Vec3 {
    spherical_to_cartesian(
        snapshot.target,
        snapshot.radius,
        snapshot.theta,
        snapshot.phi,
    )
}

/// One damped resolver step. Pure in both arguments.
#[must_use]
pub fn resolve_step(previous_eye: Vec3, snapshot: &OrbitSnapshot) -> CameraPose {
    let eye =
        damp_toward(previous_eye, desired_eye(snapshot), snapshot.damping_factor);
    CameraPose::looking_at(eye, snapshot.target)
}

/// Remembers the actual eye position between frames.
///
/// The resolver has no knowledge of which input source last wrote the
/// orbit; it only low-pass filters toward whatever the snapshot says.
#[derive(Debug, Clone)]
pub struct CameraResolver {
    eye: Vec3,
}

impl CameraResolver {
    /// Resolver whose eye already sits on the snapshot's desired position.
    #[must_use]
    pub fn new(snapshot: &OrbitSnapshot) -> Self {
        Self {
            eye: desired_eye(snapshot),
        }
    }

    /// Resolver starting from an arbitrary eye position.
    #[must_use]
    pub fn with_eye(eye: Vec3) -> Self {
        Self { eye }
    }

    /// Current (damped) eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Advance one frame toward the snapshot and return the new pose.
    pub fn resolve(&mut self, snapshot: &OrbitSnapshot) -> CameraPose {
        let pose = resolve_step(self.eye, snapshot);
        self.eye = pose.eye;
        pose
    }

    /// Jump straight onto the snapshot's desired position.
    pub fn snap(&mut self, snapshot: &OrbitSnapshot) -> CameraPose {
        self.eye = desired_eye(snapshot);
        CameraPose::looking_at(self.eye, snapshot.target)
    }
}
