use lyon::geom::Angle;

use super::path::{arc_sweep, Path};
use super::surface::{DrawSurface, LineCap};
use super::tessellate::{self, Mesh};
use super::{Point, Transform, Vector};
use crate::paint::Color;
use crate::scene::{DrawList, ZIndex};

/// Default flattening/tessellation tolerance, in logical window pixels.
const DEFAULT_TOLERANCE: f64 = 0.1;

/// Saveable drawing state of a [`Canvas`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasState {
    /// Current transform: canvas user space → backing store.
    pub transform: Transform,
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f64,
    pub line_cap: LineCap,
}

impl Default for CanvasState {
    fn default() -> Self {
        let black = Color::from_premul(0.0, 0.0, 0.0, 1.0);
        Self {
            transform: Transform::identity(),
            fill: black,
            stroke: black,
            line_width: 1.0,
            line_cap: LineCap::Butt,
        }
    }
}

/// [`DrawSurface`] that records tessellated meshes into a [`DrawList`].
///
/// Geometry goes through two transforms: the canvas transform (saved and
/// restored with the state) maps user space to the backing store, and
/// `to_window` maps the backing store to logical window pixels.
pub struct Canvas<'a> {
    list: &'a mut DrawList,
    to_window: Transform,
    state: CanvasState,
    stack: Vec<CanvasState>,
    path: Path,
    tolerance: f64,
}

impl<'a> Canvas<'a> {
    pub fn new(list: &'a mut DrawList, to_window: Transform) -> Self {
        Self {
            list,
            to_window,
            state: CanvasState::default(),
            stack: Vec::new(),
            path: Path::new(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    #[inline]
    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    /// User space → logical window pixels.
    fn device_transform(&self) -> Transform {
        self.state.transform.then(&self.to_window)
    }

    fn record(&mut self, mesh: Result<Mesh, lyon::tessellation::TessellationError>, color: Color) {
        match mesh {
            Ok(mesh) => self.list.push_mesh(ZIndex::default(), mesh.vertices, mesh.indices, color),
            Err(e) => log::warn!("canvas: tessellation failed: {e:?}"),
        }
    }
}

fn finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

impl DrawSurface for Canvas<'_> {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, x: f64, y: f64) {
        if finite(&[x, y]) {
            self.state.transform = self.state.transform.pre_translate(Vector::new(x, y));
        }
    }

    fn scale(&mut self, x: f64, y: f64) {
        if finite(&[x, y]) {
            self.state.transform = self.state.transform.pre_scale(x, y);
        }
    }

    fn rotate(&mut self, angle: f64) {
        if angle.is_finite() {
            self.state.transform = self.state.transform.pre_rotate(Angle::radians(angle));
        }
    }

    fn set_fill_style(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        // Canvas ignores zero, negative and non-finite widths.
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
    }

    fn begin_path(&mut self) {
        self.path.clear();
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
        if !finite(&[x, y, radius_x, radius_y, rotation, start, end]) {
            return;
        }
        if radius_x < 0.0 || radius_y < 0.0 {
            log::debug!("canvas: ignoring ellipse with negative radius ({radius_x}, {radius_y})");
            return;
        }

        let sweep = arc_sweep(start, end, anticlockwise);
        let device = self.device_transform();
        self.path.ellipse(
            &device,
            Point::new(x, y),
            radius_x,
            radius_y,
            rotation,
            start,
            sweep,
            self.tolerance,
        );
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if self.state.fill.is_invisible() || !finite(&[x, y, width, height]) {
            return;
        }
        if width == 0.0 || height == 0.0 {
            return;
        }

        let device = self.device_transform();
        let mut rect = Path::new();
        for (px, py) in [(x, y), (x + width, y), (x + width, y + height), (x, y + height)] {
            rect.line_to(device.transform_point(Point::new(px, py)));
        }
        let mesh = tessellate::fill(&rect, self.tolerance as f32);
        self.record(mesh, self.state.fill);
    }

    fn fill(&mut self) {
        if self.state.fill.is_invisible() || self.path.is_empty() {
            return;
        }
        let mesh = tessellate::fill(&self.path, self.tolerance as f32);
        self.record(mesh, self.state.fill);
    }

    fn stroke(&mut self) {
        if self.state.stroke.is_invisible() || self.path.is_empty() {
            return;
        }
        let scale = self.device_transform().determinant().abs().sqrt();
        let width = self.state.line_width * scale;
        if !(width.is_finite() && width > 0.0) {
            return;
        }
        let mesh = tessellate::stroke(&self.path, width as f32, self.state.line_cap, self.tolerance as f32);
        self.record(mesh, self.state.stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;
    use std::f64::consts::{PI, TAU};

    fn meshes(list: &mut DrawList) -> Vec<crate::scene::MeshCmd> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Mesh(m) => m.clone(),
            })
            .collect()
    }

    fn bounds(m: &crate::scene::MeshCmd) -> ([f32; 2], [f32; 2]) {
        let mut min = [f32::MAX; 2];
        let mut max = [f32::MIN; 2];
        for v in &m.vertices {
            for k in 0..2 {
                min[k] = min[k].min(v[k]);
                max[k] = max[k].max(v[k]);
            }
        }
        (min, max)
    }

    #[test]
    fn save_restore_round_trips_state() {
        let mut list = DrawList::new();
        let mut c = Canvas::new(&mut list, Transform::identity());
        c.save();
        c.translate(10.0, 20.0);
        c.set_line_width(5.0);
        c.set_line_cap(LineCap::Round);
        c.restore();
        assert_eq!(*c.state(), CanvasState::default());
    }

    #[test]
    fn restore_on_empty_stack_is_noop() {
        let mut list = DrawList::new();
        let mut c = Canvas::new(&mut list, Transform::identity());
        c.translate(3.0, 4.0);
        c.restore();
        assert_ne!(c.state().transform, Transform::identity());
    }

    #[test]
    fn non_finite_transform_is_ignored() {
        let mut list = DrawList::new();
        let mut c = Canvas::new(&mut list, Transform::identity());
        c.rotate(f64::NAN);
        c.translate(f64::INFINITY, 0.0);
        c.scale(1.0, f64::NAN);
        assert_eq!(c.state().transform, Transform::identity());
    }

    #[test]
    fn invalid_line_width_is_ignored() {
        let mut list = DrawList::new();
        let mut c = Canvas::new(&mut list, Transform::identity());
        c.set_line_width(0.0);
        c.set_line_width(-2.0);
        c.set_line_width(f64::NAN);
        assert_eq!(c.state().line_width, 1.0);
    }

    #[test]
    fn transparent_fill_records_nothing() {
        let mut list = DrawList::new();
        {
            let mut c = Canvas::new(&mut list, Transform::identity());
            c.set_fill_style(Color::transparent());
            c.fill_rect(0.0, 0.0, 100.0, 100.0);
            c.arc(0.0, 0.0, 10.0, 0.0, TAU, false);
            c.fill();
        }
        assert!(list.is_empty());
    }

    #[test]
    fn fill_rect_leaves_path_untouched() {
        let mut list = DrawList::new();
        let mut c = Canvas::new(&mut list, Transform::identity());
        c.fill_rect(0.0, 0.0, 10.0, 10.0);
        assert!(c.path.is_empty());
    }

    #[test]
    fn flipped_and_translated_circle_lands_at_center() {
        let mut list = DrawList::new();
        {
            let mut c = Canvas::new(&mut list, Transform::identity());
            c.translate(125.0, 125.0);
            c.scale(1.0, -1.0);
            c.begin_path();
            c.arc(0.0, 0.0, 100.0, 0.0, TAU, false);
            c.fill();
        }
        let m = &meshes(&mut list)[0];
        let (min, max) = bounds(m);
        assert!((min[0] - 25.0).abs() < 0.5 && (max[0] - 225.0).abs() < 0.5);
        assert!((min[1] - 25.0).abs() < 0.5 && (max[1] - 225.0).abs() < 0.5);
    }

    #[test]
    fn backing_scale_and_window_offset_compose() {
        // Backing store at dpr 2, shown at (100, 50) in a window.
        let to_window = Transform::scale(0.5, 0.5).then_translate(Vector::new(100.0, 50.0));
        let mut list = DrawList::new();
        {
            let mut c = Canvas::new(&mut list, to_window);
            c.scale(2.0, 2.0);
            c.fill_rect(0.0, 0.0, 250.0, 250.0);
        }
        let (min, max) = bounds(&meshes(&mut list)[0]);
        assert_eq!(min, [100.0, 50.0]);
        assert_eq!(max, [350.0, 300.0]);
    }

    #[test]
    fn stroke_width_follows_transform_scale() {
        let mut list = DrawList::new();
        {
            let mut c = Canvas::new(&mut list, Transform::identity());
            c.scale(2.0, 2.0);
            c.set_line_width(2.0);
            c.begin_path();
            c.arc(0.0, 0.0, 50.0, 0.0, TAU, false);
            c.stroke();
        }
        let (_, max) = bounds(&meshes(&mut list)[0]);
        // Radius 100 device px, half width 2 device px.
        assert!((max[0] - 102.0).abs() < 0.5, "max x {}", max[0]);
    }

    #[test]
    fn rotation_applies_before_existing_translation() {
        let mut list = DrawList::new();
        {
            let mut c = Canvas::new(&mut list, Transform::identity());
            c.translate(100.0, 0.0);
            c.rotate(PI / 2.0);
            c.begin_path();
            c.ellipse(0.0, 0.0, 40.0, 10.0, 0.0, 0.0, TAU, false);
            c.fill();
        }
        let (min, max) = bounds(&meshes(&mut list)[0]);
        // Major axis now vertical.
        assert!((max[0] - min[0] - 20.0).abs() < 0.5);
        assert!((max[1] - min[1] - 80.0).abs() < 0.5);
        assert!(((min[0] + max[0]) / 2.0 - 100.0).abs() < 0.5);
    }

    #[test]
    fn negative_radius_is_ignored() {
        let mut list = DrawList::new();
        let mut c = Canvas::new(&mut list, Transform::identity());
        c.ellipse(0.0, 0.0, -1.0, 5.0, 0.0, 0.0, TAU, false);
        assert!(c.path.is_empty());
    }

    #[test]
    fn meshes_are_recorded_in_call_order() {
        let mut list = DrawList::new();
        {
            let mut c = Canvas::new(&mut list, Transform::identity());
            c.set_fill_style(Color::from_premul(1.0, 0.0, 0.0, 1.0));
            c.fill_rect(0.0, 0.0, 1.0, 1.0);
            c.set_fill_style(Color::from_premul(0.0, 0.0, 1.0, 1.0));
            c.fill_rect(0.0, 0.0, 1.0, 1.0);
        }
        let colors: Vec<_> = list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Mesh(m) => m.color,
            })
            .collect();
        assert_eq!(
            colors,
            vec![Color::from_premul(1.0, 0.0, 0.0, 1.0), Color::from_premul(0.0, 0.0, 1.0, 1.0)]
        );
    }
}
