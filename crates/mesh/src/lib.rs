mod geometry;
mod quad_mesh;

pub use geometry::*;
pub use quad_mesh::*;
