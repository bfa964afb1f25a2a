use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// This is the engine's equivalent of a DOM bounding client rect:
/// `origin` is `(left, top)` and `size` is `(width, height)`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    /// Centre point: `(left + width / 2, top + height / 2)`.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x / 2.0,
            self.origin.y + self.size.y / 2.0,
        )
    }

    /// Returns a rect of `size` centred inside `self`.
    ///
    /// The origin is floored to whole logical pixels so the content does not
    /// straddle pixel boundaries at 1x scale.
    #[inline]
    pub fn centered(self, size: Vec2) -> Rect {
        let x = self.origin.x + ((self.size.x - size.x) / 2.0).floor();
        let y = self.origin.y + ((self.size.y - size.y) / 2.0).floor();
        Rect::from_origin_size(Vec2::new(x, y), size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── center ────────────────────────────────────────────────────────────

    #[test]
    fn center_of_eye_container() {
        let c = r(100.0, 100.0, 250.0, 250.0).center();
        assert_eq!(c, Vec2::new(225.0, 225.0));
    }

    #[test]
    fn center_of_origin_rect() {
        assert_eq!(r(0.0, 0.0, 10.0, 4.0).center(), Vec2::new(5.0, 2.0));
    }

    // ── centered ──────────────────────────────────────────────────────────

    #[test]
    fn centered_in_window() {
        let window = r(0.0, 0.0, 800.0, 600.0);
        let inner = window.centered(Vec2::new(250.0, 250.0));
        assert_eq!(inner, r(275.0, 175.0, 250.0, 250.0));
    }

    #[test]
    fn centered_floors_odd_gaps() {
        let window = r(0.0, 0.0, 251.0, 251.0);
        let inner = window.centered(Vec2::new(250.0, 250.0));
        assert_eq!(inner.origin, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn centered_larger_than_parent_goes_negative() {
        let window = r(0.0, 0.0, 100.0, 100.0);
        let inner = window.centered(Vec2::new(250.0, 250.0));
        assert_eq!(inner.origin, Vec2::new(-75.0, -75.0));
    }
}
