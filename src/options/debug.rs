use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Debug overlay toggles.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Show the orbit angles and orientation status over the feed.
    #[schemars(title = "Show Overlay")]
    pub show_overlay: bool,
    /// Include the smoothed frame rate in the overlay text.
    #[schemars(title = "Show FPS")]
    pub show_fps: bool,
}
