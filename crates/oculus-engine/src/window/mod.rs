//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single application window, and wires
//! them to the GPU layer. Frames are drawn on demand only.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
