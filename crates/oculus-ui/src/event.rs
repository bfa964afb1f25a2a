use oculus_engine::coords::{Vec2, Viewport};

/// Input events routed to widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer moved anywhere over the window. `viewport` is the window's
    /// logical size at the time of the move.
    PointerMoved { pos: Vec2, viewport: Viewport },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled and the widget needs repainting.
    Consumed,
    /// Event was not handled.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
