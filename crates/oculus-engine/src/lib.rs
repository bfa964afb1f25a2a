//! Oculus engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the UI layer: the winit
//! window loop, wgpu device/surface, input translation, a canvas-style 2D
//! drawing surface and the mesh renderer that paints what it records.

pub mod canvas;
pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod window;
