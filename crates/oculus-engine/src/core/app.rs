use crate::input::{InputEvent, InputState};

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    /// Nothing to do.
    Continue,
    /// Schedule a frame. Frames are only drawn on demand.
    Redraw,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called for input events that `input` accepted, after it has been updated.
    /// Rejected events (e.g. non-finite pointer positions) never reach the app.
    fn on_input(
        &mut self,
        window: &WindowCtx<'_>,
        input: &InputState,
        event: &InputEvent,
    ) -> AppControl {
        let _ = (window, input, event);
        AppControl::Continue
    }

    /// Called when a frame is drawn: initially, after resizes and DPI changes,
    /// and whenever a callback returned [`AppControl::Redraw`].
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
