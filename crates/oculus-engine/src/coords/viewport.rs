use super::Vec2;

/// Viewport size in logical pixels.
///
/// The mesh renderer uploads this as the basis for converting logical px
/// positions to NDC. The UI layer treats it as the window's inner size
/// (`innerWidth` / `innerHeight`).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// The larger of the two dimensions.
    #[inline]
    pub fn max_dimension(self) -> f32 {
        self.width.max(self.height)
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
