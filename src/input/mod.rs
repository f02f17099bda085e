//! Input handling: event types and the four adapters that write sensor,
//! touch, mouse, and wheel input into the orbit.

/// Platform-agnostic input events and sensor samples.
pub mod event;
/// Additive rotation-rate law.
pub mod motion;
/// Absolute device-orientation law.
pub mod orientation;
/// Touch/mouse gesture state machine.
pub mod pointer;
/// Recorded input traces and replay.
pub mod trace;
/// Scroll-to-radius law.
pub mod wheel;
/// Translation of winit window events.
#[cfg(feature = "viewer")]
pub mod window;

pub use event::{InputEvent, MotionRateSample, OrientationSample};
pub use motion::MotionRateAdapter;
pub use orientation::OrientationAdapter;
pub use pointer::{PointerAdapter, PointerGesture};
pub use trace::{parse_trace, replay, TraceRecord, MAX_TRACE_FRAME};
pub use wheel::WheelAdapter;
#[cfg(feature = "viewer")]
pub use window::WindowEventTranslator;
