//! Paint model shared between the canvas surface and the mesh renderer.
//!
//! Scope: colour representation (sRGB-encoded, premultiplied alpha) and parsing of
//! CSS-style hex colour strings. Geometry types remain in `coords`.

pub mod color;

pub use color::{Color, ColorParseError};
