use crate::camera::OrbitState;

/// Stateless scroll-to-radius law.
#[derive(Debug, Clone, Copy)]
pub struct WheelAdapter {
    sensitivity: f32,
}

impl WheelAdapter {
    /// Adapter scaling wheel units into radius units by `sensitivity`.
    #[must_use]
    pub fn new(sensitivity: f32) -> Self {
        Self { sensitivity }
    }

    /// Apply one scroll event to the orbit radius.
    pub fn apply(self, state: &mut OrbitState, delta_y: f32) {
        state.adjust_radius(delta_y * self.sensitivity);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use glam::Vec3;

    use super::*;
    use crate::camera::OrbitLimits;

    fn state(max_radius: f32) -> OrbitState {
        let limits = OrbitLimits::new(0.1, PI - 0.1, 1.0, max_radius).unwrap();
        OrbitState::new(Vec3::ZERO, 3.0, 0.1, limits)
    }

    #[test]
    fn scroll_down_moves_camera_away() {
        let mut s = state(10.0);
        WheelAdapter::new(0.01).apply(&mut s, 100.0);
        assert!((s.radius() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn scroll_is_clamped_at_both_ends() {
        let mut s = state(3.5);
        let wheel = WheelAdapter::new(0.01);
        wheel.apply(&mut s, 100.0);
        assert_eq!(s.radius(), 3.5);
        wheel.apply(&mut s, -10_000.0);
        assert_eq!(s.radius(), 1.0);
    }
}
