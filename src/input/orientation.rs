use super::event::OrientationSample;
use crate::camera::OrbitState;

/// Share of the left-right tilt folded into the heading.
pub const GAMMA_HEADING_WEIGHT: f32 = 0.2;

/// Wrap a tilt angle in degrees into `(-180, 180]`.
#[must_use]
pub fn normalize_tilt(beta: f32) -> f32 {
    let wrapped = beta.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Absolute control law for device orientation.
///
/// Each sample fully overwrites `theta` and `phi`; nothing is accumulated.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrientationAdapter;

impl OrientationAdapter {
    /// Apply one orientation sample to the orbit.
    pub fn apply(self, state: &mut OrbitState, sample: OrientationSample) {
        state.mark_orientation_signal();
        state.set_theta(
            sample.alpha.to_radians()
                + sample.gamma.to_radians() * GAMMA_HEADING_WEIGHT,
        );
        let beta = normalize_tilt(sample.beta);
        state.set_phi((90.0 - beta).to_radians());
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use glam::Vec3;

    use super::*;
    use crate::camera::OrbitLimits;

    fn state() -> OrbitState {
        let limits = OrbitLimits::new(0.1, PI - 0.1, 1.0, 10.0).unwrap();
        OrbitState::new(Vec3::ZERO, 3.0, 0.1, limits)
    }

    #[test]
    fn tilt_wraps_into_half_open_range() {
        assert_eq!(normalize_tilt(0.0), 0.0);
        assert_eq!(normalize_tilt(180.0), 180.0);
        assert_eq!(normalize_tilt(-180.0), 180.0);
        assert_eq!(normalize_tilt(190.0), -170.0);
        assert_eq!(normalize_tilt(-190.0), 170.0);
        assert_eq!(normalize_tilt(720.0 + 45.0), 45.0);
    }

    #[test]
    fn tilt_maps_onto_polar_angle() {
        let mut s = state();
        OrientationAdapter.apply(&mut s, OrientationSample::new(None, Some(90.0), None));
        assert!(s.phi().abs() < 0.1 + 1e-6);

        OrientationAdapter.apply(&mut s, OrientationSample::new(None, Some(0.0), None));
        assert!((s.phi() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn heading_and_gamma_combine_absolutely() {
        let mut s = state();
        s.set_theta(42.0);
        OrientationAdapter.apply(
            &mut s,
            OrientationSample::new(Some(90.0), Some(0.0), Some(10.0)),
        );
        let expected = FRAC_PI_2 + 10.0_f32.to_radians() * 0.2;
        assert!((s.theta() - expected).abs() < 1e-6);
    }

    #[test]
    fn later_samples_overwrite_earlier_ones() {
        let mut s = state();
        OrientationAdapter.apply(&mut s, OrientationSample::new(Some(30.0), Some(20.0), None));
        OrientationAdapter.apply(&mut s, OrientationSample::new(Some(60.0), Some(40.0), None));
        assert!((s.theta() - 60.0_f32.to_radians()).abs() < 1e-6);
        assert!((s.phi() - 50.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn phi_is_clamped_for_flipped_devices() {
        let mut s = state();
        OrientationAdapter.apply(&mut s, OrientationSample::new(None, Some(-170.0), None));
        assert_eq!(s.phi(), PI - 0.1);
    }

    #[test]
    fn first_sample_raises_signal_flag() {
        let mut s = state();
        assert!(!s.has_orientation_signal());
        OrientationAdapter.apply(&mut s, OrientationSample::default());
        assert!(s.has_orientation_signal());
    }
}
