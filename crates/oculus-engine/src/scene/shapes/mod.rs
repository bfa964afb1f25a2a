pub mod mesh;

pub use mesh::MeshCmd;
