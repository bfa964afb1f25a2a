use super::types::{InputEvent, PointerMoveEvent};

/// Current input state for the window.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputState {
    /// Last known pointer position in logical pixels; `None` until the
    /// pointer first enters the window.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    /// Applies an event. Returns `true` when the pointer position changed;
    /// only then is the event worth dispatching.
    ///
    /// Leaving the window keeps the last position: the pointer is tracked
    /// across the whole window, and the last position is still the best
    /// estimate of where it is.
    pub fn apply_event(&mut self, ev: &InputEvent) -> bool {
        match ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                if !(x.is_finite() && y.is_finite()) {
                    return false;
                }
                let next = Some((*x, *y));
                let changed = self.pointer_pos != next;
                self.pointer_pos = next;
                changed
            }
            InputEvent::PointerLeft => false,
        }
    }
}
