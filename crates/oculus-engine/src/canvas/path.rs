use std::f64::consts::TAU;

use super::{Point, Transform};

/// Upper bound on segments per flattened arc.
const MAX_ARC_SEGMENTS: usize = 1024;

/// A polyline in device space. Curves are flattened when they are added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubPath {
    pub points: Vec<Point>,
}

/// The current path of a canvas: a list of flattened subpaths.
///
/// Points are stored already transformed into device space, so later
/// transform changes do not affect geometry added earlier (canvas semantics).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.subpaths.clear();
    }

    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|s| s.points.is_empty())
    }

    /// Starts a new subpath at `p`.
    pub fn move_to(&mut self, p: Point) {
        self.subpaths.push(SubPath { points: vec![p] });
    }

    /// Appends `p` to the current subpath, starting one if there is none.
    pub fn line_to(&mut self, p: Point) {
        match self.subpaths.last_mut() {
            Some(sub) => {
                if sub.points.last() != Some(&p) {
                    sub.points.push(p);
                }
            }
            _ => self.move_to(p),
        }
    }

    /// Adds an elliptical arc (canvas `ellipse` semantics).
    ///
    /// `sweep` is the signed angular extent from [`arc_sweep`]. The arc start
    /// point is connected to the current subpath with a straight line.
    /// `tolerance` is the maximum chord deviation in device pixels.
    #[allow(clippy::too_many_arguments)]
    pub fn ellipse(
        &mut self,
        transform: &Transform,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start: f64,
        sweep: f64,
        tolerance: f64,
    ) {
        let (sin_r, cos_r) = rotation.sin_cos();
        let at = |t: f64| {
            let (sin_t, cos_t) = t.sin_cos();
            let ex = radius_x * cos_t;
            let ey = radius_y * sin_t;
            transform.transform_point(Point::new(
                center.x + ex * cos_r - ey * sin_r,
                center.y + ex * sin_r + ey * cos_r,
            ))
        };

        let device_radius = radius_x.max(radius_y) * transform.determinant().abs().sqrt();
        let n = segment_count(sweep, device_radius, tolerance);

        for i in 0..=n {
            let t = start + sweep * (i as f64 / n as f64);
            self.line_to(at(t));
        }
    }
}

/// Signed sweep of a canvas arc from `start` to `end`.
///
/// Mirrors the HTML canvas rules: a clockwise arc whose `end - start` reaches
/// a full turn (or an anticlockwise arc whose `start - end` does) is a full
/// ellipse; otherwise the sweep is the angular distance in the requested
/// direction, in `[0, 2π)` clockwise or `(-2π, 0]` anticlockwise.
pub fn arc_sweep(start: f64, end: f64, anticlockwise: bool) -> f64 {
    if !anticlockwise && end - start >= TAU {
        return TAU;
    }
    if anticlockwise && start - end >= TAU {
        return -TAU;
    }

    let sweep = (end - start) % TAU;
    if anticlockwise {
        if sweep > 0.0 { sweep - TAU } else { sweep }
    } else if sweep < 0.0 {
        sweep + TAU
    } else {
        sweep
    }
}

/// Number of chords needed to keep a flattened arc within `tolerance`.
fn segment_count(sweep: f64, device_radius: f64, tolerance: f64) -> usize {
    let sweep = sweep.abs();
    if sweep == 0.0 || !sweep.is_finite() {
        return 1;
    }
    if device_radius.is_nan() || device_radius <= tolerance {
        return 4usize.max((sweep / (TAU / 16.0)).ceil() as usize).min(MAX_ARC_SEGMENTS);
    }

    // Chord of angle `step` on a circle of radius r deviates r·(1 − cos(step/2)).
    let step = 2.0 * (1.0 - tolerance / device_radius).acos();
    ((sweep / step).ceil() as usize).clamp(1, MAX_ARC_SEGMENTS)
}
