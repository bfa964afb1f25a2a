//! Oculus UI: a cursor-tracking eye drawn on a canvas, on top of `oculus-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use oculus_ui::prelude::*;
//!
//! Application::new()
//!     .title("Eye")
//!     .eye(EyeConfig { nb_sections: 12, ..EyeConfig::default() })
//!     .run()?;
//! ```
//!
//! The eye itself is a [`Widget`](widget::Widget) drawing through the
//! engine's `DrawSurface`, so it can be rendered into any surface,
//! including a recording one in tests.

pub mod app;
pub mod canvas;
pub mod error;
pub mod event;
pub mod eye;
pub mod page;
pub mod widget;

#[cfg(test)]
mod testing;

pub use app::Application;
pub use error::UiError;

/// Everything needed to configure and run the eye.
pub mod prelude {
    pub use crate::app::Application;
    pub use crate::canvas::CanvasElement;
    pub use crate::error::UiError;
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::eye::{EyeColors, EyeConfig, EyeRenderer, SectionStyle};
    pub use crate::page::{Element, ElementKind, Page, Style};
    pub use crate::widget::Widget;

    // Engine primitives used in configs and custom widgets.
    pub use oculus_engine::canvas::{DrawSurface, LineCap};
    pub use oculus_engine::coords::{Rect, Vec2, Viewport};
    pub use oculus_engine::paint::Color;
}
