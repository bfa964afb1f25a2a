use winit::dpi::LogicalSize;

use oculus_engine::coords::{Rect, Vec2, Viewport};
use oculus_engine::core::{App as EngineApp, AppControl, FrameCtx, WindowCtx};
use oculus_engine::input::{InputEvent, InputState, PointerMoveEvent};
use oculus_engine::paint::Color;
use oculus_engine::render::shapes::mesh::MeshRenderer;
use oculus_engine::scene::DrawList;
use oculus_engine::window::{Runtime, RuntimeConfig};

use crate::error::UiError;
use crate::event::UiEvent;
use crate::eye::{EyeConfig, EyeRenderer};
use crate::page::{Element, Page};
use crate::widget::Widget;

// ── Application ───────────────────────────────────────────────────────────

/// Top-level application builder.
///
/// Builds the page (a container holding a canvas), mounts the eye onto the
/// elements named by its config and runs the window loop.
///
/// ```rust,ignore
/// Application::new()
///     .title("Eye")
///     .size(800.0, 600.0)
///     .run()?;
/// ```
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    background: Color,
    eye: EyeConfig,
    container_id: Option<String>,
    canvas_id: Option<String>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "oculus".to_string(),
            width: 800.0,
            height: 600.0,
            background: Color::from_srgb_u8(0xff, 0xff, 0xff, 0xff),
            eye: EyeConfig::default(),
            container_id: None,
            canvas_id: None,
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Window clear colour behind the (transparent) canvas.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn eye(mut self, config: EyeConfig) -> Self {
        self.eye = config;
        self
    }

    /// Id of the page's container element. Defaults to the eye's `wrapper_id`.
    pub fn container(mut self, id: impl Into<String>) -> Self {
        self.container_id = Some(id.into());
        self
    }

    /// Id of the page's canvas element. Defaults to the eye's `canvas_id`.
    pub fn canvas(mut self, id: impl Into<String>) -> Self {
        self.canvas_id = Some(id.into());
        self
    }

    /// The page this application shows: a container element holding a canvas.
    pub fn page(&self) -> Page {
        let container = self.container_id.as_deref().unwrap_or(&self.eye.wrapper_id);
        let canvas = self.canvas_id.as_deref().unwrap_or(&self.eye.canvas_id);

        let mut page = Page::new();
        page.append(Element::container(container).with_child(Element::canvas(canvas)));
        page
    }

    /// Mounts the eye and runs the event loop until the window is closed.
    pub fn run(self) -> Result<(), UiError> {
        let state = UiAppState::mount(self.page(), self.eye.clone(), self.background)?;
        let config = RuntimeConfig {
            title: self.title,
            initial_size: LogicalSize::new(self.width, self.height),
            ..RuntimeConfig::default()
        };

        Runtime::run(config, state).map_err(|e| UiError::ContextUnavailable(format!("{e:#}")))
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Internal state that implements `oculus_engine::core::App`.
///
/// Everything engine-specific (renderer, FrameCtx) lives here.
struct UiAppState {
    page: Page,
    eye: EyeRenderer,
    wrapper_id: String,
    canvas_id: String,
    background: Color,

    draw_list: DrawList,
    mesh_renderer: MeshRenderer,
}

impl UiAppState {
    /// Looks up the eye's elements and sizes the container.
    fn mount(mut page: Page, config: EyeConfig, background: Color) -> Result<Self, UiError> {
        let wrapper_id = config.wrapper_id.clone();
        let canvas_id = config.canvas_id.clone();

        let wrapper = page
            .get_element_by_id_mut(&wrapper_id)
            .filter(|e| e.is_container())
            .ok_or_else(|| UiError::ElementNotFound(wrapper_id.clone()))?;
        wrapper.style.set_square(config.length);

        page.get_element_by_id(&canvas_id)
            .and_then(Element::as_canvas)
            .ok_or_else(|| UiError::ElementNotFound(canvas_id.clone()))?;

        log::info!("eye mounted on '{wrapper_id}' / '{canvas_id}'");

        Ok(Self {
            page,
            eye: EyeRenderer::new(config),
            wrapper_id,
            canvas_id,
            background,
            draw_list: DrawList::new(),
            mesh_renderer: MeshRenderer::new(),
        })
    }

    /// Brings the canvas backing store and the layout up to date.
    fn sync(&mut self, viewport: Viewport, scale_factor: f64) {
        let length = self.eye.config().width();
        if let Some(canvas) = self
            .page
            .get_element_by_id_mut(&self.canvas_id)
            .and_then(Element::as_canvas_mut)
        {
            canvas.configure(length, length, scale_factor);
        }
        if self.page.viewport() != viewport {
            log::debug!("layout for {}x{}", viewport.width, viewport.height);
        }
        self.page.layout(viewport);
    }

    fn wrapper_rect(&self) -> Rect {
        self.page
            .get_element_by_id(&self.wrapper_id)
            .map(Element::bounding_client_rect)
            .unwrap_or_default()
    }

    /// Records the eye into the draw list.
    fn paint(&mut self) {
        self.draw_list.clear();
        let wrapper = self.wrapper_rect();

        let Some(canvas_el) = self.page.get_element_by_id(&self.canvas_id) else { return };
        let Some(canvas) = canvas_el.as_canvas() else { return };

        let mut ctx = canvas.context(&mut self.draw_list, canvas_el.bounding_client_rect().origin);
        self.eye.paint(&mut ctx, wrapper);
    }

    fn pointer_moved(&mut self, pos: Vec2, viewport: Viewport) -> AppControl {
        let rect = self.wrapper_rect();
        if self.eye.on_event(&UiEvent::PointerMoved { pos, viewport }, rect).is_consumed() {
            AppControl::Redraw
        } else {
            AppControl::Continue
        }
    }
}

impl EngineApp for UiAppState {
    fn on_input(&mut self, window: &WindowCtx<'_>, _input: &InputState, event: &InputEvent) -> AppControl {
        match event {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                let viewport = window.viewport();
                self.sync(viewport, window.scale_factor());
                self.pointer_moved(Vec2::new(*x, *y), viewport)
            }
            InputEvent::PointerLeft => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.sync(ctx.window.viewport(), ctx.window.scale_factor());
        self.paint();

        let dl = &mut self.draw_list;
        let mesh = &mut self.mesh_renderer;
        ctx.render(self.background, |rctx, target| {
            mesh.render(rctx, target, dl);
        })
    }
}
