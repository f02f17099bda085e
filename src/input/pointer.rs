//! Touch and mouse gesture state machine.
//!
//! Drags recompute the angles from a snapshot taken at gesture start
//! instead of accumulating per-event deltas, so rounding never drifts and
//! restarting the same drag reproduces the same pose. Pinches re-base the
//! reference distance every event.

use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::camera::OrbitState;

/// Pinch distances at or below this many pixels are treated as degenerate.
const MIN_PINCH_DISTANCE: f32 = 1e-3;

/// Angles and position captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOrigin {
    /// Pointer position at gesture start.
    pub origin: Vec2,
    /// Azimuth at gesture start.
    pub theta0: f32,
    /// Polar angle at gesture start.
    pub phi0: f32,
}

impl DragOrigin {
    fn capture(state: &OrbitState, origin: Vec2) -> Self {
        Self {
            origin,
            theta0: state.theta(),
            phi0: state.phi(),
        }
    }

    /// Absolute recompute from the origin: horizontal motion turns the
    /// azimuth, vertical motion tilts the polar angle.
    fn apply(&self, state: &mut OrbitState, pos: Vec2, sensitivity: f32) {
        let delta = pos - self.origin;
        state.set_theta(self.theta0 - delta.x * sensitivity);
        state.set_phi(self.phi0 + delta.y * sensitivity);
    }
}

/// Current touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerGesture {
    /// No touch pointer is down.
    #[default]
    Idle,
    /// One finger is rotating the orbit.
    Dragging {
        /// Pointer driving the drag.
        pointer: i32,
        /// Snapshot taken when the drag started.
        origin: DragOrigin,
    },
    /// Two fingers are zooming the orbit.
    Pinching {
        /// First pinch pointer.
        first: i32,
        /// Second pinch pointer.
        second: i32,
        /// Inter-pointer distance at the previous event.
        previous_distance: f32,
    },
}

/// Pointer/touch adapter.
///
/// Holds only the ephemeral gesture record and the live pointer
/// positions; the orbit itself is passed in on every call.
#[derive(Debug, Clone)]
pub struct PointerAdapter {
    touch_sensitivity: f32,
    mouse_sensitivity: f32,
    pointers: FxHashMap<i32, Vec2>,
    gesture: PointerGesture,
    /// `Some` while the primary mouse button is held.
    mouse_drag: Option<DragOrigin>,
}

impl PointerAdapter {
    /// Adapter with separate radians-per-pixel factors for touch and mouse.
    #[must_use]
    pub fn new(touch_sensitivity: f32, mouse_sensitivity: f32) -> Self {
        Self {
            touch_sensitivity,
            mouse_sensitivity,
            pointers: FxHashMap::default(),
            gesture: PointerGesture::Idle,
            mouse_drag: None,
        }
    }

    /// Current touch gesture.
    #[must_use]
    pub fn gesture(&self) -> PointerGesture {
        self.gesture
    }

    /// Whether the primary mouse button is held.
    #[must_use]
    pub fn mouse_button_down(&self) -> bool {
        self.mouse_drag.is_some()
    }

    /// Whether any drag or pinch is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.gesture != PointerGesture::Idle || self.mouse_drag.is_some()
    }

    /// Number of touch pointers currently down.
    #[must_use]
    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    /// A touch pointer went down.
    pub fn pointer_down(&mut self, state: &OrbitState, id: i32, pos: Vec2) {
        let _ = self.pointers.insert(id, pos);

        match self.pointers.len() {
            1 => {
                self.gesture = PointerGesture::Dragging {
                    pointer: id,
                    origin: DragOrigin::capture(state, pos),
                };
                log::debug!("pointer {id}: drag started");
            }
            2 => {
                let other = self
                    .pointers
                    .iter()
                    .find(|(other, _)| **other != id)
                    .map(|(other, other_pos)| (*other, *other_pos));
                if let Some((other, other_pos)) = other {
                    self.gesture = PointerGesture::Pinching {
                        first: other,
                        second: id,
                        previous_distance: other_pos.distance(pos),
                    };
                    log::debug!("pointers {other}+{id}: pinch started");
                }
            }
            n => log::debug!("pointer {id} ignored ({n} pointers down)"),
        }
    }

    /// A touch pointer moved. Unknown pointers are ignored.
    pub fn pointer_move(&mut self, state: &mut OrbitState, id: i32, pos: Vec2) {
        match self.pointers.get_mut(&id) {
            Some(slot) => *slot = pos,
            None => return,
        }

        match &mut self.gesture {
            PointerGesture::Idle => {}
            PointerGesture::Dragging { pointer, origin } => {
                if *pointer == id {
                    origin.apply(state, pos, self.touch_sensitivity);
                }
            }
            PointerGesture::Pinching {
                first,
                second,
                previous_distance,
            } => {
                let (first, second) = (*first, *second);
                if id != first && id != second {
                    return;
                }
                let (Some(a), Some(b)) =
                    (self.pointers.get(&first), self.pointers.get(&second))
                else {
                    return;
                };
                let distance = a.distance(*b);
                if distance <= MIN_PINCH_DISTANCE {
                    return;
                }
                if *previous_distance > MIN_PINCH_DISTANCE {
                    let scale = distance / *previous_distance;
                    state.set_radius(state.radius() / scale);
                }
                *previous_distance = distance;
            }
        }
    }

    /// A touch pointer lifted or was cancelled.
    ///
    /// When one finger of a pinch lifts, the remaining finger starts a
    /// fresh drag from where it is, so the camera does not jump.
    pub fn pointer_up(&mut self, state: &OrbitState, id: i32) {
        if self.pointers.remove(&id).is_none() {
            return;
        }

        if self.pointers.is_empty() {
            self.gesture = PointerGesture::Idle;
            log::debug!("pointer {id}: gesture ended");
            return;
        }

        let partner = match self.gesture {
            PointerGesture::Pinching { first, second, .. } if id == first => {
                Some(second)
            }
            PointerGesture::Pinching { first, second, .. } if id == second => {
                Some(first)
            }
            PointerGesture::Dragging { pointer, .. } if pointer == id => {
                self.pointers.keys().next().copied()
            }
            _ => None,
        };

        if let Some(partner) = partner {
            match self.pointers.get(&partner) {
                Some(pos) => {
                    self.gesture = PointerGesture::Dragging {
                        pointer: partner,
                        origin: DragOrigin::capture(state, *pos),
                    };
                    log::debug!("pointer {partner}: drag resumed");
                }
                None => self.gesture = PointerGesture::Idle,
            }
        }
    }

    /// Primary mouse button pressed: snapshot the drag origin.
    pub fn mouse_down(&mut self, state: &OrbitState, pos: Vec2) {
        self.mouse_drag = Some(DragOrigin::capture(state, pos));
    }

    /// Mouse moved. Without the button held this does nothing.
    pub fn mouse_move(&self, state: &mut OrbitState, pos: Vec2) {
        if let Some(origin) = &self.mouse_drag {
            origin.apply(state, pos, self.mouse_sensitivity);
        }
    }

    /// Primary mouse button released.
    pub fn mouse_up(&mut self) {
        self.mouse_drag = None;
    }

    /// Drop every pointer and gesture without touching the orbit.
    pub fn cancel(&mut self) {
        self.pointers.clear();
        self.gesture = PointerGesture::Idle;
        self.mouse_drag = None;
    }
}
