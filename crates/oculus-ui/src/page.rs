//! A minimal element tree standing in for the host page.
//!
//! Elements are looked up by id, carry an optional CSS-like pixel size and
//! are laid out by centring each element inside its parent (the window for
//! root elements).

use oculus_engine::coords::{Rect, Vec2, Viewport};

use crate::canvas::CanvasElement;

/// What an element is.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Container,
    Canvas(CanvasElement),
}

/// Inline style of an element. Sizes are CSS pixel strings such as `"250px"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub width: Option<String>,
    pub height: Option<String>,
}

impl Style {
    /// Sets both dimensions to `length` logical px.
    pub fn set_square(&mut self, length: u32) {
        self.width = Some(format!("{length}px"));
        self.height = Some(format!("{length}px"));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: String,
    kind: ElementKind,
    pub style: Style,
    rect: Rect,
    children: Vec<Element>,
}

impl Element {
    pub fn container(id: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Container)
    }

    pub fn canvas(id: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Canvas(CanvasElement::new()))
    }

    fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            style: Style::default(),
            rect: Rect::default(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self.kind, ElementKind::Container)
    }

    pub fn as_canvas(&self) -> Option<&CanvasElement> {
        match &self.kind {
            ElementKind::Canvas(c) => Some(c),
            ElementKind::Container => None,
        }
    }

    pub fn as_canvas_mut(&mut self) -> Option<&mut CanvasElement> {
        match &mut self.kind {
            ElementKind::Canvas(c) => Some(c),
            ElementKind::Container => None,
        }
    }

    /// Layout box in window logical px (the DOM bounding client rect).
    #[inline]
    pub fn bounding_client_rect(&self) -> Rect {
        self.rect
    }

    fn find(&self, id: &str) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Intrinsic size: the styled size, else the canvas display size, else
    /// whatever is available.
    fn size_in(&self, available: Rect) -> Vec2 {
        let fallback = match &self.kind {
            ElementKind::Canvas(c) => Vec2::new(c.css_width() as f32, c.css_height() as f32),
            ElementKind::Container => available.size,
        };
        Vec2::new(
            self.style.width.as_deref().and_then(parse_px).unwrap_or(fallback.x),
            self.style.height.as_deref().and_then(parse_px).unwrap_or(fallback.y),
        )
    }

    fn layout(&mut self, available: Rect) {
        self.rect = available.centered(self.size_in(available));
        let rect = self.rect;
        for child in &mut self.children {
            child.layout(rect);
        }
    }
}

/// The element tree of the window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    roots: Vec<Element>,
    viewport: Viewport,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, element: Element) {
        self.roots.push(element);
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.roots.iter().find_map(|e| e.find(id))
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.roots.iter_mut().find_map(|e| e.find_mut(id))
    }

    /// Window size used by the last layout (`innerWidth` / `innerHeight`).
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Lays every element out for a window of `viewport` logical px.
    pub fn layout(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let window = Rect::from_origin_size(Vec2::zero(), viewport.size());
        for root in &mut self.roots {
            root.layout(window);
        }
    }
}

/// Parses `"<number>px"` (or a bare number) into logical px.
fn parse_px(s: &str) -> Option<f32> {
    let s = s.trim();
    let n = s.strip_suffix("px").unwrap_or(s).trim();
    n.parse::<f32>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}
