use oculus_engine::canvas::{Canvas, DrawSurface, LineCap, Transform, Vector};
use oculus_engine::coords::Vec2;
use oculus_engine::paint::Color;
use oculus_engine::scene::DrawList;

/// A canvas element: a backing store in device pixels shown at a CSS size.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasElement {
    /// Backing-store size, device px.
    width: u32,
    height: u32,
    /// Display size, logical px.
    css_width: f64,
    css_height: f64,
    device_pixel_ratio: f64,
}

impl Default for CanvasElement {
    /// The HTML default: 300×150 at ratio 1.
    fn default() -> Self {
        Self {
            width: 300,
            height: 150,
            css_width: 300.0,
            css_height: 150.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl CanvasElement {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Display width, logical px.
    #[inline]
    pub fn css_width(&self) -> f64 {
        self.css_width
    }

    #[inline]
    pub fn css_height(&self) -> f64 {
        self.css_height
    }

    /// CSS width, e.g. `"250px"`.
    pub fn style_width(&self) -> String {
        px(self.css_width)
    }

    pub fn style_height(&self) -> String {
        px(self.css_height)
    }

    /// Sizes the canvas to `width`×`height` logical px at `dpr` device
    /// pixels per logical pixel. Returns `true` when anything changed.
    pub fn configure(&mut self, width: f64, height: f64, dpr: f64) -> bool {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let next = Self {
            width: (width * dpr).round().max(0.0) as u32,
            height: (height * dpr).round().max(0.0) as u32,
            css_width: width,
            css_height: height,
            device_pixel_ratio: dpr,
        };
        if next == *self {
            return false;
        }
        log::debug!(
            "canvas: {}x{} backing store for {}x{} at dpr {dpr}",
            next.width,
            next.height,
            width,
            height
        );
        *self = next;
        true
    }

    /// Opens a 2D context recording into `draw_list`, with the canvas shown
    /// at `origin` (window logical px).
    ///
    /// The context starts with a transparent fill, round line caps and a
    /// `scale(dpr, dpr)` transform, so user space is in logical px.
    pub fn context<'a>(&self, draw_list: &'a mut DrawList, origin: Vec2) -> Canvas<'a> {
        let mut ctx = Canvas::new(draw_list, self.backing_to_window(origin));
        ctx.set_fill_style(Color::transparent());
        ctx.set_line_cap(LineCap::Round);
        ctx.scale(self.device_pixel_ratio, self.device_pixel_ratio);
        ctx
    }

    /// Backing-store px → window logical px.
    fn backing_to_window(&self, origin: Vec2) -> Transform {
        let sx = if self.width > 0 { self.css_width / self.width as f64 } else { 1.0 };
        let sy = if self.height > 0 { self.css_height / self.height as f64 } else { 1.0 };
        Transform::scale(sx, sy).then_translate(Vector::new(origin.x as f64, origin.y as f64))
    }
}

fn px(v: f64) -> String {
    format!("{v}px")
}
