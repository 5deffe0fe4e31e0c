use crate::geometry::{Quad, Rgba, Vector3};

/// A named set of colors attached to face corners.
///
/// Colors are stored per corner (a face's reference to one of its vertices) rather than per
/// vertex. Two faces sharing a vertex can therefore carry different colors at that vertex.
/// The corners are ordered face by face, and within a face in the winding order of its
/// [`Quad`], so `colors[4 * f + k]` belongs to corner `k` of face `f`.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerColorLayer {
    pub name: String,
    pub colors: Vec<Rgba>,
}

/// Maintains geometry for a quad-dominant surface.
///
/// Faces only hold indices into `points`. For a strip of `n` segments with two points per
/// cross-section this looks like:
///
///    0-------2-------4-- ... --2n
///    |       |       |         |
///    |  f0   |  f1   |         |
///    |       |       |         |
///    1-------3-------5-- ... --2n+1
///
/// Every interior point is shared by two faces, so storing indices instead of positions
/// roughly halves the memory needed for the geometry:
///    3 floats * 8b * 4 corners * n faces = 96n bytes
///
/// If instead we store:
///    3 floats * 8b * (2n + 2) points = 48n + 48b
///  + 4 indices * 4b * n faces        = 16n b
///                                   =========
///                                    64n + 48b
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuadMesh {
    pub points: Vec<Vector3>,
    pub faces: Vec<Quad>,
    pub color_layers: Vec<CornerColorLayer>,
}

impl QuadMesh {
    pub fn new(points: Vec<Vector3>, faces: Vec<Quad>) -> Self {
        Self {
            points,
            faces,
            color_layers: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of face corners; four for every quad.
    pub fn corner_count(&self) -> usize {
        4 * self.faces.len()
    }

    /// Iterates the vertex index of every face corner, face by face.
    pub fn corners(&self) -> impl Iterator<Item = u32> + '_ {
        self.faces.iter().flat_map(|f| f.corners())
    }

    /// Resolves the positions of the corners of a single face.
    ///
    /// Returns `None` if the face references a point that does not exist.
    pub fn face_points(&self, face: &Quad) -> Option<[Vector3; 4]> {
        let [a, b, c, d] = face.corners();
        Some([
            *self.points.get(a as usize)?,
            *self.points.get(b as usize)?,
            *self.points.get(c as usize)?,
            *self.points.get(d as usize)?,
        ])
    }

    /// Returns the first face whose corners reference a missing point, if any.
    pub fn first_dangling_face(&self) -> Option<(usize, &Quad)> {
        let n = self.points.len();
        self.faces
            .iter()
            .enumerate()
            .find(|(_, f)| f.max_index() as usize >= n)
    }

    /// Points that no face references.
    ///
    /// An open seam leaves the final cross-section of a closed strip unreferenced, so this is
    /// a quick way to tell the seam modes apart.
    pub fn unreferenced_points(&self) -> Vec<u32> {
        let mut used = vec![false; self.points.len()];
        for c in self.corners() {
            if let Some(u) = used.get_mut(c as usize) {
                *u = true;
            }
        }
        used.iter()
            .enumerate()
            .filter(|(_, u)| !**u)
            .map(|(i, _)| i as u32)
            .collect()
    }

    /// Adds or replaces a corner color layer.
    ///
    /// Returns the rejected colors if their count does not match [`QuadMesh::corner_count`].
    pub fn set_color_layer<S: Into<String>>(
        &mut self,
        name: S,
        colors: Vec<Rgba>,
    ) -> Result<(), Vec<Rgba>> {
        if colors.len() != self.corner_count() {
            return Err(colors);
        }
        let name = name.into();
        match self.color_layers.iter_mut().find(|l| l.name == name) {
            Some(layer) => layer.colors = colors,
            None => self.color_layers.push(CornerColorLayer { name, colors }),
        }
        Ok(())
    }

    pub fn color_layer(&self, name: &str) -> Option<&CornerColorLayer> {
        self.color_layers.iter().find(|l| l.name == name)
    }
}
