use oculus_engine::canvas::DrawSurface;
use oculus_engine::coords::Rect;

use crate::event::{EventResult, UiEvent};

/// A component drawn into a canvas element.
///
/// `rect` is the bounding rectangle of the widget's container element in
/// window logical px; the surface's user space is the canvas' logical space.
pub trait Widget: 'static {
    /// Draw the widget. May update internal scratch state.
    fn paint(&mut self, surface: &mut dyn DrawSurface, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to request a repaint.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }
}
