use mobius_scene::{NodeKind, ShadingGraph, SocketRef};

pub const VERTEX_COLOR_NODE: &str = "Vertex Color";
pub const SURFACE_NODE: &str = "Principled BSDF";
pub const OUTPUT_NODE: &str = "Material Output";

/// Material graph that shades a surface with the colors stored in `layer_name`.
///
/// ```text
/// [Vertex Color] Color --> Base Color [Principled BSDF] BSDF --> Surface [Material Output]
/// ```
pub fn vertex_color_graph(layer_name: &str) -> ShadingGraph {
    let mut graph = ShadingGraph::new();
    graph.add_node(OUTPUT_NODE, NodeKind::MaterialOutput, (200.0, 0.0));
    graph.add_node(SURFACE_NODE, NodeKind::PrincipledBsdf, (0.0, 0.0));
    graph.add_node(
        VERTEX_COLOR_NODE,
        NodeKind::VertexColor {
            layer_name: layer_name.to_string(),
        },
        (-200.0, 0.0),
    );
    graph.link(
        SocketRef::new(VERTEX_COLOR_NODE, "Color"),
        SocketRef::new(SURFACE_NODE, "Base Color"),
    );
    graph.link(
        SocketRef::new(SURFACE_NODE, "BSDF"),
        SocketRef::new(OUTPUT_NODE, "Surface"),
    );
    graph
}
