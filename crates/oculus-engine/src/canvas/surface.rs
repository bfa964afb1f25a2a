use crate::paint::Color;

/// Shape used at the open ends of stroked subpaths.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Minimal canvas-2D-like drawing interface.
///
/// Angles are radians; `arc`/`ellipse` sweep clockwise in a +Y-down space
/// unless `anticlockwise` is set, exactly like the HTML canvas.
///
/// Implementations must ignore transform calls with non-finite arguments
/// (the canvas behaviour), so callers may pass through unchecked math.
pub trait DrawSurface {
    /// Pushes the current drawing state (transform + styles).
    fn save(&mut self);

    /// Pops the most recently saved drawing state. No-op when the stack is empty.
    fn restore(&mut self);

    fn translate(&mut self, x: f64, y: f64);
    fn scale(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);

    fn set_fill_style(&mut self, color: Color);
    fn set_stroke_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);

    /// Discards the current path.
    fn begin_path(&mut self);

    /// Adds a circular arc to the current path.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        self.ellipse(x, y, radius, radius, 0.0, start, end, anticlockwise);
    }

    /// Adds an elliptical arc to the current path.
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start: f64,
        end: f64,
        anticlockwise: bool,
    );

    /// Fills a rectangle with the current fill style. Does not touch the current path.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Fills the current path (subpaths are implicitly closed, non-zero rule).
    fn fill(&mut self);

    /// Strokes the current path with the current stroke style, width and cap.
    fn stroke(&mut self);
}
