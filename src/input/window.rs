use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, Touch, TouchPhase, WindowEvent};

use super::event::InputEvent;

/// Wheel units per scrolled line, matching what browsers report for a
/// single notch in pixel mode.
const PIXELS_PER_LINE: f32 = 100.0;

/// Translates winit window events into [`InputEvent`]s.
///
/// winit reports button presses without a position, so the translator
/// remembers the last cursor position.
#[derive(Debug, Default)]
pub struct WindowEventTranslator {
    cursor: (f32, f32),
}

impl WindowEventTranslator {
    /// Create a translator with the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert one window event; returns `None` for unrelated events.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.cursor_moved(*position)),
            WindowEvent::MouseInput { button, state, .. } => self.mouse_input(*button, *state),
            WindowEvent::MouseWheel { delta, .. } => Some(wheel(*delta)),
            WindowEvent::Touch(Touch { id, phase, location, .. }) => {
                Some(touch(*id, *phase, *location))
            }
            _ => None,
        }
    }

    fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> InputEvent {
        self.cursor = (position.x as f32, position.y as f32);
        InputEvent::MouseMove { x: self.cursor.0, y: self.cursor.1 }
    }

    fn mouse_input(&self, button: MouseButton, state: ElementState) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }
        Some(match state {
            ElementState::Pressed => InputEvent::MouseDown { x: self.cursor.0, y: self.cursor.1 },
            ElementState::Released => InputEvent::MouseUp,
        })
    }
}

// winit scrolls positive "up"; browsers report positive deltaY when
// scrolling down.
fn wheel(delta: MouseScrollDelta) -> InputEvent {
    let delta_y = match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    };
    InputEvent::Wheel { delta_y }
}

fn touch(id: u64, phase: TouchPhase, location: PhysicalPosition<f64>) -> InputEvent {
    let id = id as i32;
    let (x, y) = (location.x as f32, location.y as f32);
    match phase {
        TouchPhase::Started => InputEvent::PointerDown { id, x, y },
        TouchPhase::Moved => InputEvent::PointerMove { id, x, y },
        TouchPhase::Ended | TouchPhase::Cancelled => InputEvent::PointerUp { id },
    }
}
