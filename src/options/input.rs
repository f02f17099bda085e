use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-source scale factors mapping raw device units to angle or radius
/// deltas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sensitivities", inline)]
#[serde(default)]
pub struct InputSensitivities {
    /// Radians per pixel of single-finger drag.
    #[schemars(title = "Touch Drag", range(min = 0.0005, max = 0.05), extend("step" = 0.0005))]
    pub touch_drag: f32,
    /// Radians per pixel of mouse drag.
    #[schemars(title = "Mouse Drag", range(min = 0.0005, max = 0.05), extend("step" = 0.0005))]
    pub mouse_drag: f32,
    /// Radius units per wheel delta unit.
    #[schemars(title = "Wheel Zoom", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub wheel: f32,
    /// Radians per deg/s of device rotation rate.
    #[schemars(skip)]
    pub motion_rate: f32,
}

impl Default for InputSensitivities {
    fn default() -> Self {
        Self {
            touch_drag: 0.005,
            mouse_drag: 0.005,
            wheel: 0.01,
            motion_rate: 1e-4,
        }
    }
}

/// Input source configuration.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Input", inline)]
#[serde(default)]
pub struct InputOptions {
    /// Scale factors for every input source.
    #[serde(flatten)]
    pub sensitivities: InputSensitivities,
    /// Ignore rotation-rate samples while a drag or pinch is in progress.
    #[schemars(title = "Hold Gyro While Dragging")]
    pub suppress_motion_while_dragging: bool,
}
