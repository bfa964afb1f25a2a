//! Canvas-style 2D drawing surface.
//!
//! The UI layer draws through [`DrawSurface`], a small subset of the HTML
//! canvas 2D context (transform stack, styles, `arc`/`ellipse` paths,
//! `fill`/`stroke`). [`Canvas`] is the production implementation: it flattens
//! paths on the CPU, tessellates them with `lyon` and records the resulting
//! meshes into a [`DrawList`](crate::scene::DrawList) for the mesh renderer.
//!
//! Coordinates follow canvas conventions: the user space of a fresh context
//! is the canvas backing store (origin top-left, +Y down). A separate
//! backing-to-window transform places the canvas inside the window.

mod context;
mod path;
mod surface;
mod tessellate;

pub use context::{Canvas, CanvasState};
pub use path::{arc_sweep, Path, SubPath};
pub use surface::{DrawSurface, LineCap};

/// Affine transform used by the canvas (`f64`, canvas user space → device space).
pub type Transform = lyon::geom::euclid::default::Transform2D<f64>;

/// Point in canvas/device space.
pub type Point = lyon::geom::euclid::default::Point2D<f64>;

/// Displacement in canvas/device space.
pub type Vector = lyon::geom::euclid::default::Vector2D<f64>;
