use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into
/// [`OrbitController::handle_input`](crate::camera::OrbitController::handle_input).
/// Every sensor field is optional because browsers deliver `null` for
/// axes the device cannot measure; missing values count as zero.
///
/// Events are serde-tagged so recorded sessions can be replayed:
///
/// ```json
/// {"type": "pointer_down", "id": 1, "x": 120.0, "y": 300.0}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Absolute device orientation in degrees.
    Orientation {
        /// Compass heading.
        #[serde(default)]
        alpha: Option<f32>,
        /// Front-back tilt.
        #[serde(default)]
        beta: Option<f32>,
        /// Left-right tilt.
        #[serde(default)]
        gamma: Option<f32>,
    },
    /// Device rotation rate in degrees per second.
    MotionRate {
        /// Rate around the z axis.
        #[serde(default)]
        alpha: Option<f32>,
        /// Rate around the x axis.
        #[serde(default)]
        beta: Option<f32>,
        /// Rate around the y axis.
        #[serde(default)]
        gamma: Option<f32>,
    },
    /// A touch pointer went down.
    PointerDown {
        /// Platform pointer id, stable for the lifetime of the contact.
        id: i32,
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// A touch pointer moved.
    PointerMove {
        /// Platform pointer id.
        id: i32,
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// A touch pointer lifted or was cancelled.
    PointerUp {
        /// Platform pointer id.
        id: i32,
    },
    /// Primary mouse button pressed.
    MouseDown {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Mouse cursor moved (with or without a button held).
    MouseMove {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Primary mouse button released.
    MouseUp,
    /// Scroll wheel (positive = away from the target).
    Wheel {
        /// Vertical scroll delta in the platform's wheel units.
        delta_y: f32,
    },
}

/// A single orientation reading with missing axes already zeroed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationSample {
    /// Compass heading in degrees.
    pub alpha: f32,
    /// Front-back tilt in degrees.
    pub beta: f32,
    /// Left-right tilt in degrees.
    pub gamma: f32,
}

impl OrientationSample {
    /// Build a sample, treating missing axes as zero.
    #[must_use]
    pub fn new(alpha: Option<f32>, beta: Option<f32>, gamma: Option<f32>) -> Self {
        Self {
            alpha: alpha.unwrap_or(0.0),
            beta: beta.unwrap_or(0.0),
            gamma: gamma.unwrap_or(0.0),
        }
    }
}

/// A single rotation-rate reading with missing axes already zeroed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionRateSample {
    /// Rate around the z axis in deg/s.
    pub alpha: f32,
    /// Rate around the x axis in deg/s.
    pub beta: f32,
    /// Rate around the y axis in deg/s.
    pub gamma: f32,
}

impl MotionRateSample {
    /// Build a sample, treating missing axes as zero.
    #[must_use]
    pub fn new(alpha: Option<f32>, beta: Option<f32>, gamma: Option<f32>) -> Self {
        Self {
            alpha: alpha.unwrap_or(0.0),
            beta: beta.unwrap_or(0.0),
            gamma: gamma.unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sensor_fields_default_to_zero() {
        let s = OrientationSample::new(None, Some(45.0), None);
        assert_eq!(s, OrientationSample { alpha: 0.0, beta: 45.0, gamma: 0.0 });
        assert_eq!(MotionRateSample::new(None, None, None), MotionRateSample::default());
    }

    #[test]
    fn events_decode_from_tagged_json() {
        let e: InputEvent =
            serde_json::from_str(r#"{"type":"orientation","alpha":10.0,"beta":null}"#)
                .unwrap();
        assert_eq!(
            e,
            InputEvent::Orientation { alpha: Some(10.0), beta: None, gamma: None }
        );

        let e: InputEvent = serde_json::from_str(r#"{"type":"mouse_up"}"#).unwrap();
        assert_eq!(e, InputEvent::MouseUp);

        let e: InputEvent =
            serde_json::from_str(r#"{"type":"wheel","delta_y":-3.5}"#).unwrap();
        assert_eq!(e, InputEvent::Wheel { delta_y: -3.5 });
    }
}
