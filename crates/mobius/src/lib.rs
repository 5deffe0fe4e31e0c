//! Procedural Möbius strip meshes with a hue gradient along their length.
//!
//! [`generate_geometry`] samples the surface and builds faces and per-corner colors without
//! touching any scene. [`generate`] additionally registers the mesh, an object and a
//! vertex-color material with a [`mobius_scene::SceneHost`], replacing an earlier strip of
//! the same name.

mod color;
mod config;
mod error;
mod grid;
mod pipeline;
mod sampler;
mod shading;
mod topology;

pub use color::*;
pub use config::*;
pub use error::*;
pub use grid::*;
pub use pipeline::*;
pub use sampler::*;
pub use shading::*;
pub use topology::*;
