use std::f64::consts::TAU;

use oculus_engine::canvas::DrawSurface;

use super::config::SectionStyle;
use super::vector::Vec3;

/// Below this, a planar length or semi-axis counts as zero.
const EPSILON: f64 = 1e-12;

/// A circular cross-section of the eyeball, projected to a canvas ellipse.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SectionEllipse {
    pub center_x: f64,
    pub center_y: f64,
    pub radius_x: f64,
    pub radius_y: f64,
    /// Rotation of the ellipse's x axis, radians.
    pub rotation: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub anticlockwise: bool,
}

impl SectionEllipse {
    /// Computes the visible outline of the section with offset `offset`
    /// (cosine of its half angle) around the rotated normal `n`, scaled to
    /// an eyeball of `radius`.
    ///
    /// Returns `None` when the section faces straight away from the camera.
    pub fn compute(n: Vec3, offset: f64, radius: f64) -> Option<Self> {
        let o = offset.clamp(-1.0, 1.0);
        let rotation = n.y.atan2(n.x);
        let ry = (1.0 - o * o).max(0.0).sqrt();
        let rx = ry * n.z.abs();
        let w = n.planar_length();

        let (start_angle, end_angle, anticlockwise) = if w < EPSILON {
            // Head-on: nothing is foreshortened or hidden.
            if n.z <= 0.0 {
                return None;
            }
            (0.0, TAU, false)
        } else {
            let sa = start_angle_cosine(o, w, rx).acos();
            let sb = if n.z > 0.0 { TAU - sa } else { -sa };
            (sa, sb, n.z <= 0.0)
        };

        Some(Self {
            center_x: n.x * o * radius,
            center_y: n.y * o * radius,
            radius_x: rx * radius,
            radius_y: ry * radius,
            rotation,
            start_angle,
            end_angle,
            anticlockwise,
        })
    }

    /// Adds this ellipse to the current path of `surface`.
    pub fn trace(&self, surface: &mut dyn DrawSurface) {
        surface.ellipse(
            self.center_x,
            self.center_y,
            self.radius_x,
            self.radius_y,
            self.rotation,
            self.start_angle,
            self.end_angle,
            self.anticlockwise,
        );
    }
}

/// Cosine of the angle at which the section's outline meets the sphere's
/// silhouette, clamped to `[-1, 1]`.
///
/// `w` must be positive. An edge-on section (`rx == 0`) saturates by the sign
/// of the numerator.
pub fn start_angle_cosine(offset: f64, w: f64, rx: f64) -> f64 {
    let numerator = offset * (1.0 / w - w);
    if rx.abs() < EPSILON {
        return if numerator < 0.0 { -1.0 } else { 1.0 };
    }
    let c = numerator / rx;
    if c.is_nan() { 1.0 } else { c.clamp(-1.0, 1.0) }
}

/// Draws one section: stroke, then fill when `fill` is set.
pub fn draw_section(
    surface: &mut dyn DrawSurface,
    n: Vec3,
    offset: f64,
    radius: f64,
    style: SectionStyle,
    fill: bool,
) {
    let Some(section) = SectionEllipse::compute(n, offset, radius) else {
        log::trace!("section o={offset:.4} faces away from the camera; skipped");
        return;
    };

    surface.set_stroke_style(style.stroke);
    surface.set_fill_style(style.fill);

    surface.begin_path();
    section.trace(surface);
    surface.stroke();

    if fill {
        surface.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eye::rotation::{project, RotationState, CENTER, LIMIT};
    use crate::testing::{Call, RecordingSurface};
    use oculus_engine::paint::Color;
    use std::f64::consts::PI;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ── cosine clamp ──────────────────────────────────────────────────────

    #[test]
    fn cosine_is_clamped_and_finite_over_grid() {
        for i in 0..=40 {
            let o = -1.0 + i as f64 * 0.05;
            for j in 1..=40 {
                let w = j as f64 * 0.025;
                for k in 0..=20 {
                    let rx = k as f64 * 0.05;
                    let c = start_angle_cosine(o, w, rx);
                    assert!(!c.is_nan(), "o={o} w={w} rx={rx}");
                    assert!((-1.0..=1.0).contains(&c));
                }
            }
        }
    }

    #[test]
    fn edge_on_saturates_by_sign() {
        assert_eq!(start_angle_cosine(0.5, 0.5, 0.0), 1.0);
        assert_eq!(start_angle_cosine(-0.5, 0.5, 0.0), -1.0);
        // 0 / 0
        assert_eq!(start_angle_cosine(0.0, 0.5, 0.0), 1.0);
    }

    // ── ellipse geometry ──────────────────────────────────────────────────

    #[test]
    fn every_projected_section_is_finite() {
        let mut out = Vec3::zero();
        for i in 0..=30 {
            for j in 0..=30 {
                let r = RotationState::new(i as f64 * PI / 15.0, j as f64 * PI / 15.0);
                let n = project(&mut out, Vec3::Z, r);
                for o in [-1.0, -0.5, 0.0, (PI / 16.0).cos(), (PI / 8.0).cos(), 1.0] {
                    if let Some(s) = SectionEllipse::compute(n, o, 123.0) {
                        for v in [s.center_x, s.center_y, s.radius_x, s.radius_y, s.rotation, s.start_angle, s.end_angle] {
                            assert!(v.is_finite(), "{s:?}");
                        }
                        assert!(s.radius_x >= 0.0 && s.radius_y >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn iris_at_rest_matches_formula() {
        let mut out = Vec3::zero();
        let n = project(&mut out, Vec3::Z, RotationState::default());
        let o = (2.0 * PI / 16.0).cos();
        let s = SectionEllipse::compute(n, o, 123.0).unwrap();

        let ry = (1.0 - o * o).sqrt();
        assert!(close(s.radius_y, ry * 123.0));
        assert!(close(s.radius_x, ry * n.z.abs() * 123.0));
        assert!(close(s.rotation, PI / 2.0));
        assert!(close(s.center_x, 0.0));
        assert!(close(s.center_y, n.y * o * 123.0));
        // Facing the camera: clockwise, symmetric around 2π.
        assert!(!s.anticlockwise);
        assert!(close(s.start_angle + s.end_angle, 2.0 * PI));
        // Tilt is tiny, so the whole outline is visible.
        assert!(close(s.start_angle, 0.0));
    }

    #[test]
    fn far_side_section_is_anticlockwise() {
        let n = Vec3::new(0.6, 0.0, -0.8);
        let s = SectionEllipse::compute(n, 0.5, 1.0).unwrap();
        assert!(s.anticlockwise);
        assert!(close(s.end_angle, -s.start_angle));
    }

    #[test]
    fn head_on_section_is_full_ellipse() {
        let s = SectionEllipse::compute(Vec3::Z, 0.5, 10.0).unwrap();
        assert_eq!((s.start_angle, s.end_angle, s.anticlockwise), (0.0, TAU, false));
        assert!(close(s.radius_x, s.radius_y));
    }

    #[test]
    fn head_on_from_behind_is_skipped() {
        assert_eq!(SectionEllipse::compute(Vec3::new(0.0, 0.0, -1.0), 0.5, 10.0), None);
    }

    #[test]
    fn restricted_orientation_is_drawable() {
        let mut out = Vec3::zero();
        let n = project(&mut out, Vec3::Z, RotationState::uniform(LIMIT * 120.0));
        assert!(SectionEllipse::compute(n, (PI / 8.0).cos(), 123.0).is_some());
        let n = project(&mut out, Vec3::Z, RotationState::uniform(CENTER));
        assert!(SectionEllipse::compute(n, (PI / 8.0).cos(), 123.0).is_some());
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn draw_strokes_then_fills() {
        let c = Color::from_srgb_u8(1, 2, 3, 255);
        let style = SectionStyle { stroke: c, fill: c };
        let mut rec = RecordingSurface::default();
        draw_section(&mut rec, Vec3::Z, 0.5, 10.0, style, true);

        let kinds: Vec<&str> = rec.calls.iter().map(Call::name).collect();
        assert_eq!(kinds, ["set_stroke_style", "set_fill_style", "begin_path", "ellipse", "stroke", "fill"]);
    }

    #[test]
    fn draw_without_fill_only_strokes() {
        let style = SectionStyle { stroke: Color::transparent(), fill: Color::transparent() };
        let mut rec = RecordingSurface::default();
        draw_section(&mut rec, Vec3::Z, 0.5, 10.0, style, false);
        assert_eq!(rec.calls.last().map(Call::name), Some("stroke"));
    }

    #[test]
    fn skipped_section_draws_nothing() {
        let style = SectionStyle { stroke: Color::transparent(), fill: Color::transparent() };
        let mut rec = RecordingSurface::default();
        draw_section(&mut rec, Vec3::new(0.0, 0.0, -1.0), 0.5, 10.0, style, true);
        assert!(rec.calls.is_empty());
    }
}
