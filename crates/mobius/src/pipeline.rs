use cgmath::InnerSpace;
use log::{debug, info, warn};
use mobius_mesh::{Quad, Rgba, Vector3};
use mobius_scene::{SceneError, SceneHost, ShadingGraph};

use crate::config::{MobiusConfig, SeamMode, COLOR_LAYER};
use crate::error::Result;
use crate::grid::{ring_count, CROSS_SECTION_POINTS};
use crate::sampler::sample_surface;
use crate::shading::vertex_color_graph;
use crate::topology::build_topology;

/// Everything the scene needs to display a strip, computed up front.
#[derive(Debug, Clone, PartialEq)]
pub struct StripGeometry {
    pub points: Vec<Vector3>,
    pub faces: Vec<Quad>,
    pub corner_colors: Vec<Rgba>,
    pub seam: SeamMode,
}

impl StripGeometry {
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Largest distance between matching points of the first and last cross-section.
    ///
    /// Only defined for an open seam, where both cross-sections have their own vertices.
    pub fn seam_gap(&self) -> Option<f64> {
        let n = CROSS_SECTION_POINTS as usize;
        if self.seam != SeamMode::Open || self.points.len() < 2 * n {
            return None;
        }
        let first = &self.points[..n];
        let last = &self.points[self.points.len() - n..];
        first
            .iter()
            .zip(last)
            .map(|(a, b)| (*a - *b).magnitude())
            .reduce(f64::max)
    }
}

/// Samples the surface and builds its faces and corner colors.
///
/// Parameters are validated before any sampling happens.
pub fn generate_geometry(config: &MobiusConfig) -> Result<StripGeometry> {
    config.validate()?;

    let mut points = sample_surface(config.segments, config.width, config.radius);
    points.truncate((ring_count(config.segments, config.seam) * CROSS_SECTION_POINTS) as usize);
    let topology = build_topology(config.segments, config.seam);

    debug!(
        "sampled {} points, built {} faces and {} corner colors",
        points.len(),
        topology.faces.len(),
        topology.corner_colors.len()
    );
    Ok(StripGeometry {
        points,
        faces: topology.faces,
        corner_colors: topology.corner_colors,
        seam: config.seam,
    })
}

/// Handles to the entities a run registered, plus the geometry they were built from.
pub struct GeneratedStrip<H: SceneHost> {
    pub object: H::Object,
    pub mesh: H::Mesh,
    pub material: H::Material,
    pub geometry: StripGeometry,
}

fn register<H: SceneHost>(
    host: &mut H,
    config: &MobiusConfig,
    geometry: &StripGeometry,
    graph: &ShadingGraph,
) -> std::result::Result<(H::Object, H::Mesh, H::Material), SceneError> {
    let mesh = host.create_mesh(&config.mesh_name(), &geometry.points, &geometry.faces)?;
    host.attach_vertex_color_layer(&mesh, COLOR_LAYER, &geometry.corner_colors)?;

    let object = host.create_object(config.object_name(), &mesh)?;
    host.set_active(&object)?;

    let material = host.create_material(&config.material_name())?;
    host.build_shader_graph(&material, graph)?;
    host.attach_material(&object, &material)?;

    Ok((object, mesh, material))
}

/// Replaces any strip of the same name in `host` with a freshly generated one.
///
/// Previous entities are destroyed first and all geometry is computed before the first
/// entity is created. If the host fails part way through, whatever this run registered is
/// removed again before the error is returned.
pub fn generate<H: SceneHost>(host: &mut H, config: &MobiusConfig) -> Result<GeneratedStrip<H>> {
    let geometry = generate_geometry(config)?;
    let graph = vertex_color_graph(COLOR_LAYER);
    if let Some(gap) = geometry.seam_gap() {
        debug!("open seam, cross-sections {} apart", gap);
    }

    let names = config.entity_names();
    for name in &names {
        host.destroy_if_exists(name)?;
    }

    match register(host, config, &geometry, &graph) {
        Ok((object, mesh, material)) => {
            info!(
                "created {:?}: {} vertices, {} faces, {} segments",
                config.name,
                geometry.vertex_count(),
                geometry.face_count(),
                config.segments
            );
            Ok(GeneratedStrip {
                object,
                mesh,
                material,
                geometry,
            })
        }
        Err(e) => {
            warn!("failed to register {:?}, removing partial entities: {}", config.name, e);
            for name in &names {
                if let Err(cleanup) = host.destroy_if_exists(name) {
                    warn!("could not remove {:?}: {}", name, cleanup);
                }
            }
            Err(e.into())
        }
    }
}
