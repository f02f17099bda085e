//! Browser bindings for the orbit controller (feature `web`).
//!
//! [`WebOrbitController`] is exported to JavaScript. `attach` registers
//! the sensor listeners on `window` and the pointer/wheel listeners on the
//! viewer element; the host's `requestAnimationFrame` loop calls `pose()`
//! once per frame. Permission prompts and the camera feed stay on the
//! JavaScript side: a source whose permission was denied simply never
//! fires.
//!
//! The element should carry `touch-action: none` so the browser does not
//! claim pinches for page zoom.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, DeviceMotionEvent, DeviceOrientationEvent, Element, Event, EventTarget,
    PointerEvent, WheelEvent,
};

use crate::camera::OrbitController;
use crate::error::ArcamError;
use crate::options::Options;
use crate::util::frame_timing::FrameTiming;

/// Install the panic hook and console logger when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"arcam: logger already installed".into());
    }
    log::info!("arcam module loaded");
}

impl From<ArcamError> for JsValue {
    fn from(e: ArcamError) -> Self {
        Self::from_str(&e.to_string())
    }
}

type SharedController = Rc<RefCell<OrbitController>>;

/// One registered DOM listener; unregisters itself on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn register(
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, ArcamError> {
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| ArcamError::Web(format!("failed to listen for {kind}: {e:?}")))?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to remove {} listener", self.kind);
        }
    }
}

/// Run `f` against the controller unless another handler holds it.
///
/// Handlers run to completion on the single JS thread, so a busy borrow
/// only happens on re-entrant dispatch; that event is dropped.
fn with_controller(controller: &SharedController, f: impl FnOnce(&mut OrbitController)) {
    if let Ok(mut c) = controller.try_borrow_mut() {
        f(&mut *c);
    }
}

fn opt_f32(v: Option<f64>) -> Option<f32> {
    v.map(|v| v as f32)
}

fn is_mouse(event: &PointerEvent) -> bool {
    event.pointer_type() == "mouse"
}

/// `MouseEvent.button` of the primary button.
const PRIMARY_BUTTON: i16 = 0;
/// Bit of the primary button in `MouseEvent.buttons`.
const PRIMARY_BUTTONS_MASK: u16 = 1;

/// What a mouse pointer event does to the drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MouseAction {
    Press,
    Drag,
    Release,
    Ignore,
}

/// Only the primary button starts or ends a drag. A move without the
/// primary button held ends any drag whose release happened elsewhere.
fn mouse_action(kind: &str, button: i16, buttons: u16) -> MouseAction {
    match kind {
        "pointerdown" if button == PRIMARY_BUTTON => MouseAction::Press,
        "pointermove" if buttons & PRIMARY_BUTTONS_MASK != 0 => MouseAction::Drag,
        "pointermove" | "pointercancel" => MouseAction::Release,
        "pointerup" if button == PRIMARY_BUTTON => MouseAction::Release,
        _ => MouseAction::Ignore,
    }
}

/// Route a mouse pointer event into the controller.
fn dispatch_mouse(controller: &SharedController, event: &PointerEvent) {
    let action = mouse_action(&event.type_(), event.button(), event.buttons());
    let (x, y) = (event.client_x() as f32, event.client_y() as f32);
    if action == MouseAction::Press {
        capture_pointer(event);
    }
    with_controller(controller, |c| match action {
        MouseAction::Press => c.on_mouse_down(x, y),
        MouseAction::Drag => c.on_mouse_move(x, y),
        MouseAction::Release => c.on_mouse_up(),
        MouseAction::Ignore => {}
    });
}

/// Keep receiving the pointer's events after it leaves the element, so
/// the release is seen wherever it happens.
fn capture_pointer(event: &PointerEvent) {
    let Some(element) = event.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    if element.set_pointer_capture(event.pointer_id()).is_err() {
        log::warn!("failed to capture pointer {}", event.pointer_id());
    }
}

fn on_orientation(controller: SharedController) -> Closure<dyn FnMut(Event)> {
    Closure::new(move |event: Event| {
        let Some(event) = event.dyn_ref::<DeviceOrientationEvent>() else {
            return;
        };
        with_controller(&controller, |c| {
            c.on_orientation_sample(
                opt_f32(event.alpha()),
                opt_f32(event.beta()),
                opt_f32(event.gamma()),
            );
        });
    })
}

fn on_motion(controller: SharedController) -> Closure<dyn FnMut(Event)> {
    Closure::new(move |event: Event| {
        let Some(rate) = event
            .dyn_ref::<DeviceMotionEvent>()
            .and_then(DeviceMotionEvent::rotation_rate)
        else {
            return;
        };
        with_controller(&controller, |c| {
            c.on_motion_rate_sample(
                opt_f32(rate.alpha()),
                opt_f32(rate.beta()),
                opt_f32(rate.gamma()),
            );
        });
    })
}

fn on_pointer_down(controller: SharedController) -> Closure<dyn FnMut(Event)> {
    Closure::new(move |event: Event| {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        if is_mouse(event) {
            dispatch_mouse(&controller, event);
            return;
        }
        let (x, y) = (event.client_x() as f32, event.client_y() as f32);
        with_controller(&controller, |c| c.on_pointer_down(event.pointer_id(), x, y));
    })
}

fn on_pointer_move(controller: SharedController) -> Closure<dyn FnMut(Event)> {
    Closure::new(move |event: Event| {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        if is_mouse(event) {
            dispatch_mouse(&controller, event);
            return;
        }
        let (x, y) = (event.client_x() as f32, event.client_y() as f32);
        with_controller(&controller, |c| c.on_pointer_move(event.pointer_id(), x, y));
    })
}

fn on_pointer_up(controller: SharedController) -> Closure<dyn FnMut(Event)> {
    Closure::new(move |event: Event| {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        if is_mouse(event) {
            dispatch_mouse(&controller, event);
            return;
        }
        with_controller(&controller, |c| c.on_pointer_up(event.pointer_id()));
    })
}

fn on_wheel(controller: SharedController) -> Closure<dyn FnMut(Event)> {
    Closure::new(move |event: Event| {
        let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
            return;
        };
        event.prevent_default();
        let delta_y = wheel.delta_y() as f32;
        with_controller(&controller, |c| c.on_wheel(delta_y));
    })
}

/// Orbit controller exported to JavaScript.
#[wasm_bindgen]
pub struct WebOrbitController {
    controller: SharedController,
    options: Options,
    listeners: Vec<Listener>,
    frame_timing: RefCell<FrameTiming>,
}

#[wasm_bindgen]
impl WebOrbitController {
    /// Create a controller from an optional TOML options string.
    #[wasm_bindgen(constructor)]
    pub fn new(options_toml: Option<String>) -> Result<WebOrbitController, JsValue> {
        let options = match options_toml {
            Some(toml) => Options::from_toml(&toml)?,
            None => Options::default(),
        };
        let controller = OrbitController::new(&options)?;
        Ok(Self {
            controller: Rc::new(RefCell::new(controller)),
            options,
            listeners: Vec::new(),
            frame_timing: RefCell::new(FrameTiming::new(0)),
        })
    }

    /// Subscribe to sensor events on `window` and pointer/wheel events on
    /// the element with `element_id`. Replaces any earlier subscription.
    pub fn attach(&mut self, element_id: &str) -> Result<(), JsValue> {
        self.detach();

        let window = web_sys::window().ok_or_else(|| ArcamError::Web("no global window".into()))?;
        let element = window
            .document()
            .ok_or_else(|| ArcamError::Web("no document".into()))?
            .get_element_by_id(element_id)
            .ok_or_else(|| ArcamError::Web(format!("no element with id {element_id}")))?;
        let window: &EventTarget = window.as_ref();
        let element: &EventTarget = element.as_ref();
        let c = &self.controller;

        let listeners = vec![
            Listener::register(window, "deviceorientation", true, on_orientation(c.clone()))?,
            Listener::register(window, "devicemotion", true, on_motion(c.clone()))?,
            Listener::register(element, "pointerdown", true, on_pointer_down(c.clone()))?,
            Listener::register(element, "pointermove", true, on_pointer_move(c.clone()))?,
            Listener::register(element, "pointerup", true, on_pointer_up(c.clone()))?,
            Listener::register(element, "pointercancel", true, on_pointer_up(c.clone()))?,
            Listener::register(element, "wheel", false, on_wheel(c.clone()))?,
        ];
        self.listeners = listeners;
        log::info!("listening for input on #{element_id}");
        Ok(())
    }

    /// Unregister every listener added by [`attach`](Self::attach).
    pub fn detach(&mut self) {
        self.listeners.clear();
    }

    /// Advance one frame and return `[eye.x, eye.y, eye.z, target.x,
    /// target.y, target.z]`.
    pub fn pose(&self) -> js_sys::Float32Array {
        let pose = self.controller.borrow_mut().resolve_pose();
        self.frame_timing.borrow_mut().end_frame();
        let values = [
            pose.eye.x,
            pose.eye.y,
            pose.eye.z,
            pose.target.x,
            pose.target.y,
            pose.target.z,
        ];
        js_sys::Float32Array::from(&values[..])
    }

    /// `{theta, phi, radius, has_orientation_signal}` as a JS object.
    pub fn debug_snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.controller.borrow().debug_snapshot();
        let json = serde_json::to_string(&snapshot).map_err(|e| ArcamError::Web(e.to_string()))?;
        js_sys::JSON::parse(&json)
    }

    /// Overlay text, or `undefined` when the debug overlay is disabled.
    ///
    /// Includes the frame rate measured over [`pose`](Self::pose) calls
    /// when `debug.show_fps` is set.
    pub fn debug_text(&self) -> Option<String> {
        let snapshot = self.controller.borrow().debug_snapshot();
        self.frame_timing.borrow().overlay_text(&snapshot, &self.options.debug)
    }

    /// Restore the default orbit.
    pub fn reset(&self) {
        self.controller.borrow_mut().reset_to_default();
    }

    /// Feed an orientation sample from a host-managed listener.
    pub fn orientation(&self, alpha: Option<f64>, beta: Option<f64>, gamma: Option<f64>) {
        with_controller(&self.controller, |c| {
            c.on_orientation_sample(opt_f32(alpha), opt_f32(beta), opt_f32(gamma));
        });
    }

    /// Feed a rotation-rate sample from a host-managed listener.
    pub fn motion_rate(&self, alpha: Option<f64>, beta: Option<f64>, gamma: Option<f64>) {
        with_controller(&self.controller, |c| {
            c.on_motion_rate_sample(opt_f32(alpha), opt_f32(beta), opt_f32(gamma));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_press_starts_drag_other_buttons_do_not() {
        assert_eq!(mouse_action("pointerdown", 0, 1), MouseAction::Press);
        assert_eq!(mouse_action("pointerdown", 2, 2), MouseAction::Ignore);
    }

    #[test]
    fn secondary_release_keeps_primary_drag() {
        assert_eq!(mouse_action("pointerup", 2, 1), MouseAction::Ignore);
        assert_eq!(mouse_action("pointerup", 0, 0), MouseAction::Release);
    }

    #[test]
    fn hover_without_primary_button_ends_drag() {
        assert_eq!(mouse_action("pointermove", -1, 1), MouseAction::Drag);
        assert_eq!(mouse_action("pointermove", -1, 0), MouseAction::Release);
        assert_eq!(mouse_action("pointermove", -1, 2), MouseAction::Release);
    }

    #[test]
    fn cancel_always_releases() {
        assert_eq!(mouse_action("pointercancel", -1, 0), MouseAction::Release);
    }

    #[test]
    fn release_outside_element_cannot_leave_camera_dragging() {
        let mut c = OrbitController::new(&Options::default()).unwrap();
        let events = [
            ("pointerdown", 0, 1, 0.0, 0.0),
            ("pointermove", -1, 1, 100.0, 0.0),
            // Button released outside the element; the next hover reports no buttons.
            ("pointermove", -1, 0, 400.0, 300.0),
            ("pointermove", -1, 0, 800.0, 300.0),
        ];
        for (kind, button, buttons, x, y) in events {
            match mouse_action(kind, button, buttons) {
                MouseAction::Press => c.on_mouse_down(x, y),
                MouseAction::Drag => c.on_mouse_move(x, y),
                MouseAction::Release => c.on_mouse_up(),
                MouseAction::Ignore => {}
            }
        }
        assert!(!c.pointer().mouse_button_down());
        assert!((c.debug_snapshot().theta + 0.5).abs() < 1e-5);
    }
}
