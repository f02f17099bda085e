use super::event::MotionRateSample;
use crate::camera::OrbitState;

/// Low-authority additive law for device rotation rate.
///
/// Nudges whatever the primary source last wrote; never overwrites
/// `theta` or `phi` wholesale.
#[derive(Debug, Clone, Copy)]
pub struct MotionRateAdapter {
    sensitivity: f32,
}

impl MotionRateAdapter {
    /// Adapter scaling deg/s into radians by `sensitivity`.
    #[must_use]
    pub fn new(sensitivity: f32) -> Self {
        Self { sensitivity }
    }

    /// Apply one rotation-rate sample to the orbit.
    pub fn apply(self, state: &mut OrbitState, sample: MotionRateSample) {
        state.adjust_theta(sample.gamma * self.sensitivity);
        state.adjust_phi(sample.beta * self.sensitivity);
    }
}
