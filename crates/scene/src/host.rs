use mobius_mesh::{Quad, Rgba, Vector3};
use thiserror::Error;

use crate::graph::{GraphError, ShadingGraph};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("an entity named {0:?} already exists")]
    NameTaken(String),

    #[error("no mesh named {0:?}")]
    UnknownMesh(String),

    #[error("no object named {0:?}")]
    UnknownObject(String),

    #[error("no material named {0:?}")]
    UnknownMaterial(String),

    #[error("color layer {layer:?} has {actual} corners, mesh has {expected}")]
    CornerCountMismatch {
        layer: String,
        expected: usize,
        actual: usize,
    },

    #[error("face {face} references vertex {index} but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("invalid shader graph: {0}")]
    InvalidGraph(#[from] GraphError),
}

/// The subset of a 3D application's scene that mesh generation needs.
///
/// Every operation either succeeds completely or returns an error without registering
/// anything. Names are unique across objects, meshes and materials.
pub trait SceneHost {
    type Mesh;
    type Object;
    type Material;

    /// Removes every object, mesh or material called `name`. Does nothing if there is none.
    fn destroy_if_exists(&mut self, name: &str) -> Result<(), SceneError>;

    /// Registers a mesh built from `vertices` and 0-based quad `faces`.
    fn create_mesh(
        &mut self,
        name: &str,
        vertices: &[Vector3],
        faces: &[Quad],
    ) -> Result<Self::Mesh, SceneError>;

    /// Attaches per-corner colors; `corner_colors.len()` must be four times the face count.
    fn attach_vertex_color_layer(
        &mut self,
        mesh: &Self::Mesh,
        layer_name: &str,
        corner_colors: &[Rgba],
    ) -> Result<(), SceneError>;

    /// Creates an object instancing `mesh` and links it into the scene.
    fn create_object(&mut self, name: &str, mesh: &Self::Mesh) -> Result<Self::Object, SceneError>;

    fn create_material(&mut self, name: &str) -> Result<Self::Material, SceneError>;

    /// Replaces the node graph of `material` with `graph`.
    fn build_shader_graph(
        &mut self,
        material: &Self::Material,
        graph: &ShadingGraph,
    ) -> Result<(), SceneError>;

    fn attach_material(
        &mut self,
        object: &Self::Object,
        material: &Self::Material,
    ) -> Result<(), SceneError>;

    /// Makes `object` the active, selected object.
    fn set_active(&mut self, object: &Self::Object) -> Result<(), SceneError>;
}
