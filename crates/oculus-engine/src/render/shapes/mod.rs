//! Shape renderers.

mod common;

pub mod mesh;
