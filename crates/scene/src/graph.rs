//! Declarative description of a material's shader node graph.
//!
//! Hosts receive the whole graph in one call instead of being driven node by node, which keeps
//! the code that decides the graph free of side effects.

use thiserror::Error;

/// The shader nodes a graph can be built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Reads a corner color layer of the mesh the material is attached to.
    VertexColor { layer_name: String },
    /// Physically based surface shader.
    PrincipledBsdf,
    /// Terminal node that the renderer evaluates.
    MaterialOutput,
}

impl NodeKind {
    pub fn inputs(&self) -> &'static [&'static str] {
        match self {
            NodeKind::VertexColor { .. } => &[],
            NodeKind::PrincipledBsdf => &["Base Color", "Metallic", "Roughness", "Alpha"],
            NodeKind::MaterialOutput => &["Surface", "Volume", "Displacement"],
        }
    }

    pub fn outputs(&self) -> &'static [&'static str] {
        match self {
            NodeKind::VertexColor { .. } => &["Color", "Alpha"],
            NodeKind::PrincipledBsdf => &["BSDF"],
            NodeKind::MaterialOutput => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShaderNode {
    pub name: String,
    pub kind: NodeKind,
    /// Position in the host's node editor. Purely cosmetic.
    pub location: (f32, f32),
}

/// One end of a link: a named socket on a named node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SocketRef {
    pub node: String,
    pub socket: String,
}

impl SocketRef {
    pub fn new<N: Into<String>, S: Into<String>>(node: N, socket: S) -> Self {
        Self {
            node: node.into(),
            socket: socket.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    pub from: SocketRef,
    pub to: SocketRef,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("duplicate node name {0:?}")]
    DuplicateNode(String),

    #[error("link references unknown node {0:?}")]
    UnknownNode(String),

    #[error("node {node:?} has no output socket {socket:?}")]
    UnknownOutput { node: String, socket: String },

    #[error("node {node:?} has no input socket {socket:?}")]
    UnknownInput { node: String, socket: String },

    #[error("input socket {node}.{socket} is linked more than once")]
    InputLinkedTwice { node: String, socket: String },

    #[error("graph has no material output node")]
    MissingOutput,
}

/// Nodes plus the links between their sockets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadingGraph {
    pub nodes: Vec<ShaderNode>,
    pub links: Vec<Link>,
}

impl ShadingGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node<S: Into<String>>(&mut self, name: S, kind: NodeKind, location: (f32, f32)) {
        self.nodes.push(ShaderNode {
            name: name.into(),
            kind,
            location,
        });
    }

    pub fn link(&mut self, from: SocketRef, to: SocketRef) {
        self.links.push(Link { from, to });
    }

    pub fn node(&self, name: &str) -> Option<&ShaderNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Checks that every link connects existing sockets and that every input is driven by at
    /// most one link.
    pub fn validate(&self) -> Result<(), GraphError> {
        for (i, n) in self.nodes.iter().enumerate() {
            if self.nodes[..i].iter().any(|m| m.name == n.name) {
                return Err(GraphError::DuplicateNode(n.name.clone()));
            }
        }
        if !self
            .nodes
            .iter()
            .any(|n| n.kind == NodeKind::MaterialOutput)
        {
            return Err(GraphError::MissingOutput);
        }

        for (i, link) in self.links.iter().enumerate() {
            let from = self
                .node(&link.from.node)
                .ok_or_else(|| GraphError::UnknownNode(link.from.node.clone()))?;
            if !from.kind.outputs().contains(&link.from.socket.as_str()) {
                return Err(GraphError::UnknownOutput {
                    node: link.from.node.clone(),
                    socket: link.from.socket.clone(),
                });
            }
            let to = self
                .node(&link.to.node)
                .ok_or_else(|| GraphError::UnknownNode(link.to.node.clone()))?;
            if !to.kind.inputs().contains(&link.to.socket.as_str()) {
                return Err(GraphError::UnknownInput {
                    node: link.to.node.clone(),
                    socket: link.to.socket.clone(),
                });
            }
            if self.links[..i].iter().any(|l| l.to == link.to) {
                return Err(GraphError::InputLinkedTwice {
                    node: link.to.node.clone(),
                    socket: link.to.socket.clone(),
                });
            }
        }
        Ok(())
    }
}
