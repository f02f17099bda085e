use std::fmt;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::core::CameraPose;
use super::orbit::OrbitState;
use super::resolver::CameraResolver;
use crate::error::ArcamError;
use crate::input::{
    InputEvent, MotionRateAdapter, MotionRateSample, OrientationAdapter, OrientationSample,
    PointerAdapter, WheelAdapter,
};
use crate::options::Options;

/// Diagnostic values for an on-screen debug panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugSnapshot {
    /// Azimuth in radians.
    pub theta: f32,
    /// Polar angle in radians.
    pub phi: f32,
    /// Distance from the target.
    pub radius: f32,
    /// Whether a device orientation source has delivered a sample.
    pub has_orientation_signal: bool,
}

impl fmt::Display for DebugSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.has_orientation_signal {
            "detected"
        } else {
            "not detected"
        };
        write!(
            f,
            "theta {:.1}° | phi {:.1}° | radius {:.2} | Orientation: {status}",
            self.theta.to_degrees(),
            self.phi.to_degrees(),
            self.radius,
        )
    }
}

/// Multi-source orbit camera controller.
///
/// Owns the single [`OrbitState`] and hands it by `&mut` to whichever
/// adapter's event fires. Sources are not coordinated: the latest write
/// wins on overlapping fields. The render driver calls
/// [`resolve_pose`](Self::resolve_pose) once per frame.
///
/// # Example
///
/// ```ignore
/// let mut controller = OrbitController::new(&Options::default())?;
/// controller.on_orientation_sample(Some(alpha), Some(beta), Some(gamma));
/// controller.on_wheel(delta_y);
/// let pose = controller.resolve_pose();
/// ```
#[derive(Debug, Clone)]
pub struct OrbitController {
    state: OrbitState,
    resolver: CameraResolver,
    orientation: OrientationAdapter,
    motion: MotionRateAdapter,
    pointer: PointerAdapter,
    wheel: WheelAdapter,
    initial_radius: f32,
    suppress_motion_while_dragging: bool,
    snap_on_reset: bool,
}

impl OrbitController {
    /// Build a controller from validated options.
    ///
    /// The eye starts exactly on the initial orbit position.
    pub fn new(options: &Options) -> Result<Self, ArcamError> {
        options.validate()?;
        let state = OrbitState::from_options(&options.camera)?;
        let resolver = CameraResolver::new(&state.snapshot());
        let s = options.input.sensitivities;
        Ok(Self {
            state,
            resolver,
            orientation: OrientationAdapter,
            motion: MotionRateAdapter::new(s.motion_rate),
            pointer: PointerAdapter::new(s.touch_drag, s.mouse_drag),
            wheel: WheelAdapter::new(s.wheel),
            initial_radius: options.camera.initial_radius,
            suppress_motion_while_dragging: options.input.suppress_motion_while_dragging,
            snap_on_reset: options.camera.snap_on_reset,
        })
    }

    /// Read-only access to the orbit.
    #[must_use]
    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    /// Read-only access to the gesture state machine.
    #[must_use]
    pub fn pointer(&self) -> &PointerAdapter {
        &self.pointer
    }

    /// Current damped eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.resolver.eye()
    }

    /// Dispatch a platform-agnostic input event to its adapter.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Orientation { alpha, beta, gamma } => {
                self.on_orientation_sample(alpha, beta, gamma);
            }
            InputEvent::MotionRate { alpha, beta, gamma } => {
                self.on_motion_rate_sample(alpha, beta, gamma);
            }
            InputEvent::PointerDown { id, x, y } => {
                self.on_pointer_down(id, x, y);
            }
            InputEvent::PointerMove { id, x, y } => {
                self.on_pointer_move(id, x, y);
            }
            InputEvent::PointerUp { id } => self.on_pointer_up(id),
            InputEvent::MouseDown { x, y } => self.on_mouse_down(x, y),
            InputEvent::MouseMove { x, y } => self.on_mouse_move(x, y),
            InputEvent::MouseUp => self.on_mouse_up(),
            InputEvent::Wheel { delta_y } => self.on_wheel(delta_y),
        }
    }

    /// Absolute device orientation in degrees; missing axes count as 0.
    pub fn on_orientation_sample(
        &mut self,
        alpha: Option<f32>,
        beta: Option<f32>,
        gamma: Option<f32>,
    ) {
        self.orientation.apply(&mut self.state, OrientationSample::new(alpha, beta, gamma));
    }

    /// Device rotation rate in deg/s; missing axes count as 0.
    pub fn on_motion_rate_sample(
        &mut self,
        alpha_rate: Option<f32>,
        beta_rate: Option<f32>,
        gamma_rate: Option<f32>,
    ) {
        if self.suppress_motion_while_dragging && self.pointer.is_active() {
            return;
        }
        let sample = MotionRateSample::new(alpha_rate, beta_rate, gamma_rate);
        self.motion.apply(&mut self.state, sample);
    }

    /// A touch pointer went down.
    pub fn on_pointer_down(&mut self, id: i32, x: f32, y: f32) {
        self.pointer.pointer_down(&self.state, id, Vec2::new(x, y));
    }

    /// A touch pointer moved.
    pub fn on_pointer_move(&mut self, id: i32, x: f32, y: f32) {
        self.pointer.pointer_move(&mut self.state, id, Vec2::new(x, y));
    }

    /// A touch pointer lifted or was cancelled.
    pub fn on_pointer_up(&mut self, id: i32) {
        self.pointer.pointer_up(&self.state, id);
    }

    /// Primary mouse button pressed.
    pub fn on_mouse_down(&mut self, x: f32, y: f32) {
        self.pointer.mouse_down(&self.state, Vec2::new(x, y));
    }

    /// Mouse moved; ignored unless the button is held.
    pub fn on_mouse_move(&mut self, x: f32, y: f32) {
        self.pointer.mouse_move(&mut self.state, Vec2::new(x, y));
    }

    /// Primary mouse button released.
    pub fn on_mouse_up(&mut self) {
        self.pointer.mouse_up();
    }

    /// Scroll wheel.
    pub fn on_wheel(&mut self, delta_y: f32) {
        self.wheel.apply(&mut self.state, delta_y);
    }

    /// Advance the damped eye one frame and return the pose.
    pub fn resolve_pose(&mut self) -> CameraPose {
        self.resolver.resolve(&self.state.snapshot())
    }

    /// Values for the diagnostic overlay.
    #[must_use]
    pub fn debug_snapshot(&self) -> DebugSnapshot {
        let s = self.state.snapshot();
        DebugSnapshot {
            theta: s.theta,
            phi: s.phi,
            radius: s.radius,
            has_orientation_signal: s.has_orientation_signal,
        }
    }

    /// Restore `theta = 0`, `phi = π/2`, `radius = initial` in one step.
    ///
    /// Any gesture in progress is dropped so a held finger cannot drag the
    /// camera back to its pre-reset pose.
    pub fn reset_to_default(&mut self) {
        self.pointer.cancel();
        self.state.reset(self.initial_radius);
        if self.snap_on_reset {
            let _ = self.resolver.snap(&self.state.snapshot());
        }
        log::info!("camera reset to default orbit");
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::camera::resolver::desired_eye;

    fn controller() -> OrbitController {
        OrbitController::new(&Options::default()).unwrap()
    }

    #[test]
    fn starts_on_initial_orbit() {
        let mut c = controller();
        let pose = c.resolve_pose();
        assert!((pose.eye - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
        assert_eq!(pose.target, Vec3::ZERO);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let mut opts = Options::default();
        opts.camera.min_radius = 30.0;
        assert!(OrbitController::new(&opts).is_err());
    }

    #[test]
    fn wheel_event_adds_scaled_delta() {
        let mut c = controller();
        c.handle_input(InputEvent::Wheel { delta_y: 100.0 });
        assert!((c.state().radius() - 6.0).abs() < 1e-5);
    }

    #[test]
    fn reset_restores_defaults_after_arbitrary_input() {
        let mut c = controller();
        c.on_orientation_sample(Some(123.0), Some(-40.0), Some(7.0));
        c.on_motion_rate_sample(None, Some(90.0), Some(-30.0));
        c.on_wheel(700.0);
        c.on_pointer_down(1, 0.0, 0.0);
        c.on_pointer_move(1, 80.0, -60.0);

        c.reset_to_default();
        let d = c.debug_snapshot();
        assert_eq!(d.theta, 0.0);
        assert_eq!(d.phi, FRAC_PI_2);
        assert_eq!(d.radius, 5.0);
        assert!(d.has_orientation_signal);
        assert!(!c.pointer().is_active());

        // The held finger no longer drives the camera.
        c.on_pointer_move(1, 300.0, 300.0);
        assert_eq!(c.debug_snapshot().theta, 0.0);
    }

    #[test]
    fn snap_on_reset_moves_eye_immediately() {
        let mut opts = Options::default();
        opts.camera.snap_on_reset = true;
        let mut c = OrbitController::new(&opts).unwrap();
        c.on_wheel(500.0);
        for _ in 0..5 {
            let _ = c.resolve_pose();
        }
        c.reset_to_default();
        assert!((c.eye() - desired_eye(&c.state().snapshot())).length() < 1e-5);
    }

    #[test]
    fn eye_eases_toward_new_orbit() {
        let mut c = controller();
        c.on_wheel(500.0);
        let first = c.resolve_pose();
        assert!((first.distance() - 5.5).abs() < 1e-4);
        for _ in 0..200 {
            let _ = c.resolve_pose();
        }
        assert!((c.eye().distance(Vec3::ZERO) - 10.0).abs() < 1e-3);
    }

    #[test]
    fn later_source_wins_on_overlapping_fields() {
        let mut c = controller();
        c.on_pointer_down(1, 0.0, 0.0);
        c.on_pointer_move(1, 100.0, 0.0);
        c.on_orientation_sample(Some(0.0), Some(0.0), Some(0.0));
        assert_eq!(c.debug_snapshot().theta, 0.0);
        c.on_pointer_move(1, 100.0, 0.0);
        assert!((c.debug_snapshot().theta + 0.5).abs() < 1e-5);
    }

    #[test]
    fn motion_is_applied_during_drag_by_default() {
        let mut c = controller();
        c.on_pointer_down(1, 0.0, 0.0);
        c.on_motion_rate_sample(None, None, Some(1000.0));
        assert!((c.debug_snapshot().theta - 0.1).abs() < 1e-6);
    }

    #[test]
    fn motion_can_be_suppressed_during_drag() {
        let mut opts = Options::default();
        opts.input.suppress_motion_while_dragging = true;
        let mut c = OrbitController::new(&opts).unwrap();
        c.on_pointer_down(1, 0.0, 0.0);
        c.on_motion_rate_sample(None, None, Some(1000.0));
        assert_eq!(c.debug_snapshot().theta, 0.0);
        c.on_pointer_up(1);
        c.on_motion_rate_sample(None, None, Some(1000.0));
        assert!((c.debug_snapshot().theta - 0.1).abs() < 1e-6);
    }

    #[test]
    fn pointer_still_works_without_orientation() {
        let mut c = controller();
        c.on_mouse_down(0.0, 0.0);
        c.on_mouse_move(0.0, 100.0);
        c.on_mouse_up();
        let d = c.debug_snapshot();
        assert!(!d.has_orientation_signal);
        assert!((d.phi - (FRAC_PI_2 + 0.5)).abs() < 1e-5);
    }

    #[test]
    fn debug_text_reports_orientation_status() {
        let mut c = controller();
        assert!(c.debug_snapshot().to_string().ends_with("Orientation: not detected"));
        c.on_orientation_sample(None, None, None);
        assert!(c.debug_snapshot().to_string().ends_with("Orientation: detected"));
    }

    #[test]
    fn debug_snapshot_serializes_for_ui() {
        let c = controller();
        let json = serde_json::to_value(c.debug_snapshot()).unwrap();
        assert_eq!(json["radius"], 5.0);
        assert_eq!(json["has_orientation_signal"], false);
    }
}
