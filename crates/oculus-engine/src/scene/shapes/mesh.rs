use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Pre-tessellated, single-colour triangle mesh.
///
/// `vertices` are in logical pixels (top-left origin, +Y down); `indices`
/// form a triangle list into `vertices`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshCmd {
    pub vertices: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
    pub color: Color,
}

impl MeshCmd {
    #[inline]
    pub fn new(vertices: Vec<[f32; 2]>, indices: Vec<u32>, color: Color) -> Self {
        Self { vertices, indices, color }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.len() < 3
    }
}

impl DrawList {
    /// Records a tessellated mesh. Empty meshes are dropped.
    #[inline]
    pub fn push_mesh(&mut self, z: ZIndex, vertices: Vec<[f32; 2]>, indices: Vec<u32>, color: Color) {
        let cmd = MeshCmd::new(vertices, indices, color);
        if cmd.is_empty() {
            return;
        }
        self.push(z, DrawCmd::Mesh(cmd));
    }
}
