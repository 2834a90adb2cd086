//! Node Material

use crate::graph::*;
use crate::value::*;
use pbr::interaction::*;
use pbr::material::*;
use pbr::reflection::*;

/// Material whose BSDF is described by a node graph.
#[derive(Clone, Debug)]
pub struct NodeMaterial {
    /// The nodes.
    graph: MaterialGraph,

    /// Root BxDF node. `None` when the graph failed validation, in which case
    /// the material is black.
    root: Option<NodeId>,
}

impl NodeMaterial {
    /// Create a new `NodeMaterial`. An invalid graph produces a material with
    /// no lobes.
    ///
    /// * `graph` - The nodes.
    /// * `root`  - Root BxDF node.
    pub fn new(graph: MaterialGraph, root: NodeId) -> Self {
        let root = if graph.validate(root) {
            Some(root)
        } else {
            warn!(
                "Material graph rooted at node {} is invalid; using a black material",
                root.index()
            );
            None
        };
        Self { graph, root }
    }

    /// Returns `true` if the graph passed validation.
    pub fn is_valid(&self) -> bool {
        self.root.is_some()
    }

    /// Loads tabulated data referenced by the graph. Call before sharing the
    /// material.
    pub fn post_process(&mut self) {
        if self.is_valid() {
            self.graph.post_process();
        }
    }
}

impl Material for NodeMaterial {
    /// Builds the BSDF at the intersection point on the surface.
    ///
    /// * `si` - The surface interaction at the intersection.
    fn compute_scattering_functions(&self, si: &SurfaceInteraction) -> BSDF {
        match self.root {
            Some(root) => self.graph.instantiate(root, si),
            None => BSDF::new(si),
        }
    }
}
