use std::collections::BTreeMap;

use log::debug;
use mobius_mesh::{Quad, QuadMesh, Rgba, Vector3};

use crate::graph::ShadingGraph;
use crate::host::{SceneError, SceneHost};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeshHandle(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectHandle(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaterialHandle(String);

impl MeshHandle {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl ObjectHandle {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl MaterialHandle {
    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRecord {
    /// Name of the mesh this object instances.
    pub mesh: String,
    /// Material slots in attachment order.
    pub materials: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialRecord {
    pub graph: Option<ShadingGraph>,
}

/// A scene that lives entirely in memory.
///
/// Useful wherever no 3D application is around: tests, headless runs, and as the reference
/// for how a [`SceneHost`] is expected to behave.
#[derive(Debug, Default)]
pub struct InMemoryScene {
    meshes: BTreeMap<String, QuadMesh>,
    objects: BTreeMap<String, ObjectRecord>,
    materials: BTreeMap<String, MaterialRecord>,
    active: Option<String>,
}

impl InMemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn mesh(&self, name: &str) -> Option<&QuadMesh> {
        self.meshes.get(name)
    }

    pub fn object(&self, name: &str) -> Option<&ObjectRecord> {
        self.objects.get(name)
    }

    pub fn material(&self, name: &str) -> Option<&MaterialRecord> {
        self.materials.get(name)
    }

    pub fn active_object(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn contains(&self, name: &str) -> bool {
        self.meshes.contains_key(name)
            || self.objects.contains_key(name)
            || self.materials.contains_key(name)
    }

    fn claim(&self, name: &str) -> Result<(), SceneError> {
        if self.contains(name) {
            Err(SceneError::NameTaken(name.to_string()))
        } else {
            Ok(())
        }
    }

    fn remove_object(&mut self, name: &str) {
        if self.objects.remove(name).is_some() {
            debug!("removed object {name:?}");
            if self.active.as_deref() == Some(name) {
                self.active = None;
            }
        }
    }
}

impl SceneHost for InMemoryScene {
    type Mesh = MeshHandle;
    type Object = ObjectHandle;
    type Material = MaterialHandle;

    fn destroy_if_exists(&mut self, name: &str) -> Result<(), SceneError> {
        self.remove_object(name);

        if self.meshes.remove(name).is_some() {
            debug!("removed mesh {name:?}");
            // Objects cannot outlive the mesh they instance.
            let users: Vec<String> = self
                .objects
                .iter()
                .filter(|(_, o)| o.mesh == name)
                .map(|(n, _)| n.clone())
                .collect();
            for user in users {
                self.remove_object(&user);
            }
        }

        if self.materials.remove(name).is_some() {
            debug!("removed material {name:?}");
            for object in self.objects.values_mut() {
                object.materials.retain(|m| m != name);
            }
        }
        Ok(())
    }

    fn create_mesh(
        &mut self,
        name: &str,
        vertices: &[Vector3],
        faces: &[Quad],
    ) -> Result<MeshHandle, SceneError> {
        self.claim(name)?;
        let mesh = QuadMesh::new(vertices.to_vec(), faces.to_vec());
        if let Some((face, quad)) = mesh.first_dangling_face() {
            return Err(SceneError::FaceIndexOutOfRange {
                face,
                index: quad.max_index(),
                vertex_count: mesh.vertex_count(),
            });
        }
        debug!(
            "created mesh {name:?} with {} vertices and {} faces",
            mesh.vertex_count(),
            mesh.face_count()
        );
        self.meshes.insert(name.to_string(), mesh);
        Ok(MeshHandle(name.to_string()))
    }

    fn attach_vertex_color_layer(
        &mut self,
        mesh: &MeshHandle,
        layer_name: &str,
        corner_colors: &[Rgba],
    ) -> Result<(), SceneError> {
        let target = self
            .meshes
            .get_mut(mesh.name())
            .ok_or_else(|| SceneError::UnknownMesh(mesh.name().to_string()))?;
        let expected = target.corner_count();
        target
            .set_color_layer(layer_name, corner_colors.to_vec())
            .map_err(|rejected| SceneError::CornerCountMismatch {
                layer: layer_name.to_string(),
                expected,
                actual: rejected.len(),
            })
    }

    fn create_object(&mut self, name: &str, mesh: &MeshHandle) -> Result<ObjectHandle, SceneError> {
        if !self.meshes.contains_key(mesh.name()) {
            return Err(SceneError::UnknownMesh(mesh.name().to_string()));
        }
        self.claim(name)?;
        self.objects.insert(
            name.to_string(),
            ObjectRecord {
                mesh: mesh.name().to_string(),
                materials: Vec::new(),
            },
        );
        debug!("linked object {name:?} to mesh {:?}", mesh.name());
        Ok(ObjectHandle(name.to_string()))
    }

    fn create_material(&mut self, name: &str) -> Result<MaterialHandle, SceneError> {
        self.claim(name)?;
        self.materials
            .insert(name.to_string(), MaterialRecord::default());
        Ok(MaterialHandle(name.to_string()))
    }

    fn build_shader_graph(
        &mut self,
        material: &MaterialHandle,
        graph: &ShadingGraph,
    ) -> Result<(), SceneError> {
        graph.validate()?;
        let record = self
            .materials
            .get_mut(material.name())
            .ok_or_else(|| SceneError::UnknownMaterial(material.name().to_string()))?;
        record.graph = Some(graph.clone());
        Ok(())
    }

    fn attach_material(
        &mut self,
        object: &ObjectHandle,
        material: &MaterialHandle,
    ) -> Result<(), SceneError> {
        if !self.materials.contains_key(material.name()) {
            return Err(SceneError::UnknownMaterial(material.name().to_string()));
        }
        let record = self
            .objects
            .get_mut(object.name())
            .ok_or_else(|| SceneError::UnknownObject(object.name().to_string()))?;
        record.materials.push(material.name().to_string());
        Ok(())
    }

    fn set_active(&mut self, object: &ObjectHandle) -> Result<(), SceneError> {
        if !self.objects.contains_key(object.name()) {
            return Err(SceneError::UnknownObject(object.name().to_string()));
        }
        self.active = Some(object.name().to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;

    fn square() -> (Vec<Vector3>, Vec<Quad>) {
        (
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
            ],
            vec![Quad::new(0, 2, 3, 1)],
        )
    }

    #[test]
    fn names_are_unique_across_kinds() {
        let mut scene = InMemoryScene::new();
        let (v, f) = square();
        scene.create_mesh("a", &v, &f).unwrap();
        assert_eq!(
            Err(SceneError::NameTaken("a".into())),
            scene.create_material("a")
        );
    }

    #[test]
    fn destroy_is_idempotent() {
        let mut scene = InMemoryScene::new();
        scene.destroy_if_exists("missing").unwrap();
        scene.create_material("m").unwrap();
        scene.destroy_if_exists("m").unwrap();
        scene.destroy_if_exists("m").unwrap();
        assert_eq!(0, scene.material_count());
    }

    #[test]
    fn destroying_a_mesh_removes_its_objects() {
        let mut scene = InMemoryScene::new();
        let (v, f) = square();
        let mesh = scene.create_mesh("m", &v, &f).unwrap();
        let obj = scene.create_object("o", &mesh).unwrap();
        scene.set_active(&obj).unwrap();
        scene.destroy_if_exists("m").unwrap();
        assert_eq!(0, scene.object_count());
        assert_eq!(None, scene.active_object());
    }

    #[test]
    fn destroying_a_material_clears_slots() {
        let mut scene = InMemoryScene::new();
        let (v, f) = square();
        let mesh = scene.create_mesh("m", &v, &f).unwrap();
        let obj = scene.create_object("o", &mesh).unwrap();
        let mat = scene.create_material("mat").unwrap();
        scene.attach_material(&obj, &mat).unwrap();
        scene.destroy_if_exists("mat").unwrap();
        assert!(scene.object("o").unwrap().materials.is_empty());
    }

    #[test]
    fn out_of_range_faces_are_rejected() {
        let mut scene = InMemoryScene::new();
        let (v, _) = square();
        let err = scene
            .create_mesh("m", &v, &[Quad::new(0, 1, 2, 4)])
            .unwrap_err();
        assert_eq!(
            SceneError::FaceIndexOutOfRange {
                face: 0,
                index: 4,
                vertex_count: 4
            },
            err
        );
        assert_eq!(0, scene.mesh_count());
    }

    #[test]
    fn color_layer_length_is_checked() {
        let mut scene = InMemoryScene::new();
        let (v, f) = square();
        let mesh = scene.create_mesh("m", &v, &f).unwrap();
        assert_eq!(
            Err(SceneError::CornerCountMismatch {
                layer: "Col".into(),
                expected: 4,
                actual: 2
            }),
            scene.attach_vertex_color_layer(&mesh, "Col", &[Rgba::RED; 2])
        );
        scene
            .attach_vertex_color_layer(&mesh, "Col", &[Rgba::RED; 4])
            .unwrap();
        assert!(scene.mesh("m").unwrap().color_layer("Col").is_some());
    }

    #[test]
    fn invalid_graphs_are_not_stored() {
        let mut scene = InMemoryScene::new();
        let mat = scene.create_material("mat").unwrap();
        let mut graph = ShadingGraph::new();
        graph.add_node("bsdf", NodeKind::PrincipledBsdf, (0.0, 0.0));
        assert!(matches!(
            scene.build_shader_graph(&mat, &graph),
            Err(SceneError::InvalidGraph(_))
        ));
        assert_eq!(None, scene.material("mat").unwrap().graph);
    }
}
