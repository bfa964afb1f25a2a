//! Test doubles shared by the unit tests of this crate.

use oculus_engine::canvas::{DrawSurface, LineCap};
use oculus_engine::paint::Color;

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Save,
    Restore,
    Translate(f64, f64),
    Scale(f64, f64),
    Rotate(f64),
    SetFillStyle(Color),
    SetStrokeStyle(Color),
    SetLineWidth(f64),
    SetLineCap(LineCap),
    BeginPath,
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool },
    Ellipse { x: f64, y: f64, radius_x: f64, radius_y: f64, rotation: f64, start: f64, end: f64, anticlockwise: bool },
    FillRect(f64, f64, f64, f64),
    Fill,
    Stroke,
}

impl Call {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Call::Save => "save",
            Call::Restore => "restore",
            Call::Translate(..) => "translate",
            Call::Scale(..) => "scale",
            Call::Rotate(_) => "rotate",
            Call::SetFillStyle(_) => "set_fill_style",
            Call::SetStrokeStyle(_) => "set_stroke_style",
            Call::SetLineWidth(_) => "set_line_width",
            Call::SetLineCap(_) => "set_line_cap",
            Call::BeginPath => "begin_path",
            Call::Arc { .. } => "arc",
            Call::Ellipse { .. } => "ellipse",
            Call::FillRect(..) => "fill_rect",
            Call::Fill => "fill",
            Call::Stroke => "stroke",
        }
    }
}

/// [`DrawSurface`] that records every call instead of drawing.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub(crate) fn names(&self) -> Vec<&'static str> {
        self.calls.iter().map(Call::name).collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) {
        self.calls.push(Call::Save);
    }

    fn restore(&mut self) {
        self.calls.push(Call::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.calls.push(Call::Translate(x, y));
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.calls.push(Call::Scale(x, y));
    }

    fn rotate(&mut self, angle: f64) {
        self.calls.push(Call::Rotate(angle));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.calls.push(Call::SetFillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.calls.push(Call::SetStrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(Call::SetLineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.calls.push(Call::SetLineCap(cap));
    }

    fn begin_path(&mut self) {
        self.calls.push(Call::BeginPath);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        self.calls.push(Call::Arc { x, y, radius, start, end, anticlockwise });
    }

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
    ) {
        self.calls.push(Call::Ellipse { x, y, radius_x, radius_y, rotation, start, end, anticlockwise });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(Call::FillRect(x, y, width, height));
    }

    fn fill(&mut self) {
        self.calls.push(Call::Fill);
    }

    fn stroke(&mut self) {
        self.calls.push(Call::Stroke);
    }
}
