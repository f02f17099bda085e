use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ArcamError;
use crate::options::CameraOptions;

/// Polar-angle and radius bounds enforced after every orbit write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    /// Smallest polar angle in radians.
    pub min_phi: f32,
    /// Largest polar angle in radians.
    pub max_phi: f32,
    /// Closest allowed distance to the target.
    pub min_radius: f32,
    /// Farthest allowed distance to the target.
    pub max_radius: f32,
}

impl OrbitLimits {
    /// Build limits, rejecting bounds that touch a pole or are inverted.
    pub fn new(
        min_phi: f32,
        max_phi: f32,
        min_radius: f32,
        max_radius: f32,
    ) -> Result<Self, ArcamError> {
        if !(min_phi > 0.0 && min_phi <= max_phi && max_phi < std::f32::consts::PI) {
            return Err(ArcamError::InvalidOptions(format!(
                "phi bounds [{min_phi}, {max_phi}] must satisfy 0 < min <= max < pi"
            )));
        }
        if !(min_radius > 0.0 && min_radius <= max_radius) {
            return Err(ArcamError::InvalidOptions(format!(
                "radius bounds [{min_radius}, {max_radius}] must satisfy 0 < min <= max"
            )));
        }
        Ok(Self {
            min_phi,
            max_phi,
            min_radius,
            max_radius,
        })
    }

    /// Limits taken from camera options.
    pub fn from_options(opts: &CameraOptions) -> Result<Self, ArcamError> {
        Self::new(opts.min_phi, opts.max_phi, opts.min_radius, opts.max_radius)
    }

    #[inline]
    fn clamp_phi(&self, phi: f32) -> f32 {
        phi.clamp(self.min_phi, self.max_phi)
    }

    #[inline]
    fn clamp_radius(&self, radius: f32) -> f32 {
        radius.clamp(self.min_radius, self.max_radius)
    }
}

/// Read-only copy of every orbit field, taken once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitSnapshot {
    /// Azimuth in radians (unbounded).
    pub theta: f32,
    /// Polar angle in radians.
    pub phi: f32,
    /// Distance from the target.
    pub radius: f32,
    /// Point the camera faces.
    pub target: Vec3,
    /// Fraction of the eye-position gap closed per frame.
    pub damping_factor: f32,
    /// Whether any orientation sample has been received.
    pub has_orientation_signal: bool,
}

/// Canonical spherical camera parameters.
///
/// Every adapter writes through the setters below, which clamp `phi` and
/// `radius` into [`OrbitLimits`]. Non-finite values are dropped so a
/// single corrupt sensor reading cannot poison the session.
#[derive(Debug, Clone)]
pub struct OrbitState {
    theta: f32,
    phi: f32,
    radius: f32,
    target: Vec3,
    damping_factor: f32,
    has_orientation_signal: bool,
    limits: OrbitLimits,
}

impl OrbitState {
    /// Create a state facing `target` from the equator at `radius`.
    ///
    /// `damping_factor` is clamped into `(0, 1]`; a non-positive value
    /// falls back to 1 (no smoothing). A non-finite `radius` falls back to
    /// the closest allowed distance and a non-finite `target` to the origin.
    pub fn new(target: Vec3, radius: f32, damping_factor: f32, limits: OrbitLimits) -> Self {
        let damping_factor = if damping_factor > 0.0 {
            damping_factor.min(1.0)
        } else {
            1.0
        };
        let radius = if finite_or_warn(radius, "radius") {
            limits.clamp_radius(radius)
        } else {
            limits.min_radius
        };
        let target = if target.is_finite() {
            target
        } else {
            log::warn!("non-finite orbit target {target}, using the origin");
            Vec3::ZERO
        };
        Self {
            theta: 0.0,
            phi: limits.clamp_phi(FRAC_PI_2),
            radius,
            target,
            damping_factor,
            has_orientation_signal: false,
            limits,
        }
    }

    /// Build a state from validated camera options.
    pub fn from_options(opts: &CameraOptions) -> Result<Self, ArcamError> {
        let limits = OrbitLimits::from_options(opts)?;
        Ok(Self::new(
            Vec3::from_array(opts.target),
            opts.initial_radius,
            opts.damping_factor,
            limits,
        ))
    }

    /// Current azimuth.
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Current polar angle.
    #[must_use]
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Current distance from the target.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The configured bounds.
    #[must_use]
    pub fn limits(&self) -> OrbitLimits {
        self.limits
    }

    /// Whether any orientation sample has been received.
    #[must_use]
    pub fn has_orientation_signal(&self) -> bool {
        self.has_orientation_signal
    }

    /// Record that an orientation source is live. Never reset.
    pub fn mark_orientation_signal(&mut self) {
        if !self.has_orientation_signal {
            log::debug!("first device orientation sample received");
        }
        self.has_orientation_signal = true;
    }

    /// Assign the azimuth.
    pub fn set_theta(&mut self, theta: f32) {
        if finite_or_warn(theta, "theta") {
            self.theta = theta;
        }
    }

    /// Add to the azimuth.
    pub fn adjust_theta(&mut self, delta: f32) {
        self.set_theta(self.theta + delta);
    }

    /// Assign the polar angle, clamped into the configured bounds.
    pub fn set_phi(&mut self, phi: f32) {
        if finite_or_warn(phi, "phi") {
            self.phi = self.limits.clamp_phi(phi);
        }
    }

    /// Add to the polar angle, then clamp.
    pub fn adjust_phi(&mut self, delta: f32) {
        self.set_phi(self.phi + delta);
    }

    /// Assign the radius, clamped into the configured bounds.
    pub fn set_radius(&mut self, radius: f32) {
        if finite_or_warn(radius, "radius") {
            self.radius = self.limits.clamp_radius(radius);
        }
    }

    /// Add to the radius, then clamp.
    pub fn adjust_radius(&mut self, delta: f32) {
        self.set_radius(self.radius + delta);
    }

    /// Restore `theta = 0`, `phi = π/2`, `radius = initial_radius`.
    ///
    /// The orientation flag and target are left untouched.
    pub fn reset(&mut self, initial_radius: f32) {
        self.theta = 0.0;
        self.phi = self.limits.clamp_phi(FRAC_PI_2);
        self.set_radius(initial_radius);
    }

    /// Pure read of every field.
    #[must_use]
    pub fn snapshot(&self) -> OrbitSnapshot {
        OrbitSnapshot {
            theta: self.theta,
            phi: self.phi,
            radius: self.radius,
            target: self.target,
            damping_factor: self.damping_factor,
            has_orientation_signal: self.has_orientation_signal,
        }
    }
}

fn finite_or_warn(value: f32, field: &str) -> bool {
    if value.is_finite() {
        true
    } else {
        log::warn!("dropping non-finite {field} write: {value}");
        false
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    fn limits() -> OrbitLimits {
        OrbitLimits::new(0.1, PI - 0.1, 1.0, 10.0).unwrap()
    }

    fn state() -> OrbitState {
        OrbitState::new(Vec3::ZERO, 3.0, 0.1, limits())
    }

    #[test]
    fn starts_on_equator() {
        let s = state().snapshot();
        assert_eq!(s.theta, 0.0);
        assert_eq!(s.phi, FRAC_PI_2);
        assert_eq!(s.radius, 3.0);
        assert!(!s.has_orientation_signal);
    }

    #[test]
    fn phi_stays_in_bounds_under_any_adjustments() {
        let mut s = state();
        let deltas = [5.0, -0.3, -12.0, 0.05, 3.2, -1.0, 100.0, -100.0];
        for (i, d) in deltas.iter().enumerate() {
            if i % 2 == 0 {
                s.adjust_phi(*d);
            } else {
                s.set_phi(*d);
            }
            assert!(s.phi() >= 0.1 && s.phi() <= PI - 0.1, "phi {}", s.phi());
        }
    }

    #[test]
    fn radius_stays_in_bounds_under_any_adjustments() {
        let mut s = state();
        for d in [-50.0, 0.5, 3.0, 40.0, -2.5, 7.0] {
            s.adjust_radius(d);
            assert!(s.radius() >= 1.0 && s.radius() <= 10.0);
        }
        s.set_radius(0.0);
        assert_eq!(s.radius(), 1.0);
        s.set_radius(1e9);
        assert_eq!(s.radius(), 10.0);
    }

    #[test]
    fn setting_clamped_value_is_plain_assignment() {
        let mut s = state();
        s.set_phi(PI - 0.1);
        let before = s.snapshot();
        s.set_phi(before.phi);
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn theta_is_never_wrapped() {
        let mut s = state();
        for _ in 0..10 {
            s.adjust_theta(PI);
        }
        assert!((s.theta() - 10.0 * PI).abs() < 1e-4);
    }

    #[test]
    fn non_finite_writes_are_ignored() {
        let mut s = state();
        s.set_theta(f32::NAN);
        s.adjust_phi(f32::INFINITY);
        s.set_radius(f32::NEG_INFINITY);
        assert_eq!(s.snapshot(), state().snapshot());
    }

    #[test]
    fn non_finite_construction_stays_in_bounds() {
        let s = OrbitState::new(Vec3::ZERO, f32::NAN, 0.1, limits());
        assert_eq!(s.radius(), 1.0);

        let target = Vec3::new(f32::NAN, 0.0, f32::INFINITY);
        let s = OrbitState::new(target, f32::INFINITY, f32::NAN, limits());
        let snap = s.snapshot();
        assert_eq!(snap.radius, 1.0);
        assert_eq!(snap.target, Vec3::ZERO);
        assert_eq!(snap.damping_factor, 1.0);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_signal() {
        let mut s = state();
        s.set_theta(2.0);
        s.set_phi(0.4);
        s.set_radius(8.0);
        s.mark_orientation_signal();
        s.reset(3.0);
        let snap = s.snapshot();
        assert_eq!(snap.theta, 0.0);
        assert_eq!(snap.phi, FRAC_PI_2);
        assert_eq!(snap.radius, 3.0);
        assert!(snap.has_orientation_signal);
    }

    #[test]
    fn limits_reject_poles_and_inverted_ranges() {
        assert!(OrbitLimits::new(0.0, 1.0, 1.0, 2.0).is_err());
        assert!(OrbitLimits::new(0.2, PI, 1.0, 2.0).is_err());
        assert!(OrbitLimits::new(1.0, 0.5, 1.0, 2.0).is_err());
        assert!(OrbitLimits::new(0.2, 1.0, 3.0, 2.0).is_err());
        assert!(OrbitLimits::new(0.2, 1.0, 0.0, 2.0).is_err());
    }

    #[test]
    fn damping_is_kept_in_unit_interval() {
        let s = OrbitState::new(Vec3::ZERO, 3.0, 4.0, limits());
        assert_eq!(s.snapshot().damping_factor, 1.0);
        let s = OrbitState::new(Vec3::ZERO, 3.0, -1.0, limits());
        assert_eq!(s.snapshot().damping_factor, 1.0);
    }
}
