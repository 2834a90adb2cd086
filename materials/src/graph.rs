//! Material Graph

use crate::bxdf_node::*;
use crate::layered_node::*;
use crate::node_type::*;
use crate::operator_node::*;
use crate::texture_node::*;
use crate::value::*;
use pbr::interaction::*;
use pbr::pbrt::*;
use pbr::reflection::*;

/// A node of the material graph.
#[derive(Clone, Debug, PartialEq)]
pub enum MaterialNode {
    Constant(NodeValue),
    Texture(TextureNode),
    Operator(OperatorNode),
    Bxdf(BxdfNode),
    Layered(LayeredNode),
}

impl MaterialNode {
    /// Returns the node category.
    pub fn get_type(&self) -> NodeType {
        match self {
            Self::Constant(_) => NodeType::CONSTANT,
            Self::Texture(_) => NodeType::TEXTURE,
            Self::Operator(_) => NodeType::OPERATOR,
            Self::Bxdf(_) | Self::Layered(_) => NodeType::BXDF,
        }
    }

    /// Returns the slots that consume values. Layered lobe and weight slots
    /// are checked separately.
    fn value_inputs(&self) -> Vec<Input> {
        match self {
            Self::Constant(_) | Self::Layered(_) => vec![],
            Self::Texture(node) => node.inputs(),
            Self::Operator(node) => node.inputs(),
            Self::Bxdf(node) => node.inputs(),
        }
    }
}

impl From<NodeValue> for MaterialNode {
    fn from(v: NodeValue) -> Self {
        Self::Constant(v)
    }
}

impl From<TextureNode> for MaterialNode {
    fn from(node: TextureNode) -> Self {
        Self::Texture(node)
    }
}

impl From<OperatorNode> for MaterialNode {
    fn from(node: OperatorNode) -> Self {
        Self::Operator(node)
    }
}

impl From<BxdfNode> for MaterialNode {
    fn from(node: BxdfNode) -> Self {
        Self::Bxdf(node)
    }
}

impl From<LayeredNode> for MaterialNode {
    fn from(node: LayeredNode) -> Self {
        Self::Layered(node)
    }
}

/// Stores material nodes. A node can only reference nodes added before it so
/// the graph is acyclic. Nodes may be shared by several consumers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialGraph {
    nodes: Vec<MaterialNode>,
}

impl MaterialGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its handle.
    ///
    /// * `node` - The node.
    pub fn add<N: Into<MaterialNode>>(&mut self, node: N) -> NodeId {
        self.nodes.push(node.into());
        NodeId(self.nodes.len() - 1)
    }

    /// Returns the node for a handle.
    ///
    /// * `id` - The node handle.
    pub fn node(&self, id: NodeId) -> Option<&MaterialNode> {
        self.nodes.get(id.0)
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks the connections reachable from `root`. Fails when the root is
    /// not a BxDF node, a reference doesn't point to an earlier node, a BxDF
    /// node feeds a value slot, a layered node has a non-BxDF lobe or a
    /// layered weight is bound to a non-constant node.
    ///
    /// * `root` - The node producing the material's BSDF.
    pub fn validate(&self, root: NodeId) -> bool {
        match self.node(root) {
            Some(node) if node.get_type().contains(NodeType::BXDF) => (),
            _ => return false,
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if visited[id.0] {
                continue;
            }
            visited[id.0] = true;

            let node = &self.nodes[id.0];
            for input in node.value_inputs() {
                if let Some(upstream) = input.node() {
                    match self.upstream_type(id, upstream) {
                        Some(t) if !t.contains(NodeType::BXDF) => stack.push(upstream),
                        _ => return false,
                    }
                }
            }

            if let MaterialNode::Layered(layered) = node {
                for layer in layered.layers.iter() {
                    if let Some(bxdf) = layer.bxdf {
                        match self.upstream_type(id, bxdf) {
                            Some(t) if t.contains(NodeType::BXDF) => stack.push(bxdf),
                            _ => return false,
                        }
                    }
                    if let Some(weight) = layer.weight.node() {
                        match self.upstream_type(id, weight) {
                            Some(t) if t.contains(NodeType::CONSTANT) => (),
                            _ => return false,
                        }
                    }
                }
            }
        }

        true
    }

    /// Returns the type of `upstream` if it was added before `consumer`.
    fn upstream_type(&self, consumer: NodeId, upstream: NodeId) -> Option<NodeType> {
        if upstream.0 < consumer.0 {
            self.node(upstream).map(|n| n.get_type())
        } else {
            None
        }
    }

    /// Resolves an input slot to its value at the shading point. Slots bound
    /// to BxDF nodes evaluate to zero.
    ///
    /// * `input` - The input slot.
    /// * `si`    - The surface interaction.
    pub fn evaluate(&self, input: &Input, si: &SurfaceInteraction) -> NodeValue {
        match input {
            Input::Value(v) => *v,
            Input::Node(id) => self.evaluate_node(*id, si),
        }
    }

    /// Resolves an input slot of node `consumer`. Nodes that were not added
    /// before `consumer` evaluate to zero, which keeps evaluation finite on
    /// graphs that never went through `validate`.
    ///
    /// * `consumer` - The node owning the slot.
    /// * `input`    - The input slot.
    /// * `si`       - The surface interaction.
    fn evaluate_upstream(
        &self,
        consumer: NodeId,
        input: &Input,
        si: &SurfaceInteraction,
    ) -> NodeValue {
        match input {
            Input::Value(v) => *v,
            Input::Node(id) if id.0 < consumer.0 => self.evaluate_node(*id, si),
            Input::Node(_) => NodeValue::Scalar(0.0),
        }
    }

    /// Returns the output of a value producing node.
    fn evaluate_node(&self, id: NodeId, si: &SurfaceInteraction) -> NodeValue {
        let upstream = |i: &Input| self.evaluate_upstream(id, i, si);
        match self.node(id) {
            Some(MaterialNode::Constant(v)) => *v,
            Some(MaterialNode::Texture(node)) => node.evaluate(si, upstream),
            Some(MaterialNode::Operator(node)) => node.evaluate(upstream),
            _ => NodeValue::Scalar(0.0),
        }
    }

    /// Builds the BSDF for the graph rooted at `root`. Every reachable BxDF
    /// node adds one lobe weighted by the product of the layer weights along
    /// its path.
    ///
    /// * `root` - The node producing the material's BSDF.
    /// * `si`   - The surface interaction.
    pub fn instantiate(&self, root: NodeId, si: &SurfaceInteraction) -> BSDF {
        let mut bsdf = BSDF::new(si);
        self.add_lobes(root, 1.0, si, &mut bsdf);
        bsdf
    }

    /// Appends the lobes produced by node `id`.
    ///
    /// * `id`     - The node.
    /// * `weight` - Accumulated weight of the path from the root.
    /// * `si`     - The surface interaction.
    /// * `bsdf`   - The BSDF to extend.
    fn add_lobes(&self, id: NodeId, weight: Float, si: &SurfaceInteraction, bsdf: &mut BSDF) {
        match self.node(id) {
            Some(MaterialNode::Bxdf(node)) => {
                if let Some(bxdf) = node.bxdf(|i| self.evaluate_upstream(id, i, si)) {
                    bsdf.add(bxdf, weight);
                }
            }
            Some(MaterialNode::Layered(layered)) => {
                for layer in layered.layers.iter() {
                    let bxdf = match layer.bxdf {
                        Some(bxdf) if bxdf.0 < id.0 => bxdf,
                        _ => continue,
                    };

                    let w = self.evaluate_upstream(id, &layer.weight, si).to_scalar();
                    let w = clamp(w, 0.0, 1.0);
                    if w > 0.0 {
                        self.add_lobes(bxdf, weight * w, si, bsdf);
                    }
                }
            }
            _ => (),
        }
    }

    /// Loads tabulated data for every BxDF node. Each file is read at most
    /// once.
    pub fn post_process(&mut self) {
        for node in self.nodes.iter_mut() {
            if let MaterialNode::Bxdf(bxdf) = node {
                bxdf.post_process();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabulated::*;
    use float_cmp::*;
    use pbr::geometry::*;
    use pbr::spectrum::*;
    use proptest::prelude::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn shading_point(u: Float, v: Float) -> SurfaceInteraction {
        SurfaceInteraction::new(
            Point3f::new(0.0, 0.0, 0.0),
            Point2f::new(u, v),
            Vector3f::new(0.0, 0.0, 1.0),
            Normal3f::new(0.0, 0.0, 1.0),
            Vector3f::new(1.0, 0.0, 0.0),
        )
    }

    fn white_lambert(graph: &mut MaterialGraph) -> NodeId {
        graph.add(BxdfNode::lambert(Input::color(Spectrum::ONE)))
    }

    fn f_normal(bsdf: &BSDF) -> Float {
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let wi = Vector3f::new(0.0, 0.6, 0.8);
        bsdf.f(&wo, &wi, BxDFType::BSDF_ALL)[0]
    }

    /// Writes a monochrome Fourier table whose coefficients are all `a0`.
    fn write_fourier_table(name: &str, a0: f32) -> PathBuf {
        let mu: [f32; 3] = [-1.0, 0.0, 1.0];
        let n = mu.len() * mu.len();

        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"SCATFUN\x01");
        for v in [1_i32, mu.len() as i32, n as i32, 1, 1, 1, 0, 0, 0] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        bytes.extend_from_slice(&1.0_f32.to_le_bytes());
        for _ in 0..4 {
            bytes.extend_from_slice(&0_i32.to_le_bytes());
        }
        for v in mu {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        for _ in 0..n {
            bytes.extend_from_slice(&0.0_f32.to_le_bytes());
        }
        for i in 0..n {
            bytes.extend_from_slice(&(i as i32).to_le_bytes());
            bytes.extend_from_slice(&1_i32.to_le_bytes());
        }
        for _ in 0..n {
            bytes.extend_from_slice(&a0.to_le_bytes());
        }

        let path = std::env::temp_dir().join(format!("{}-{}.bsdf", name, std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&bytes).unwrap();
        path
    }

    #[test]
    fn self_referencing_operator_evaluates_to_finite_value() {
        let mut graph = MaterialGraph::new();
        let looped = graph.add(OperatorNode::Add {
            a: Input::Node(NodeId(0)),
            b: Input::scalar(1.0),
        });
        let root = graph.add(BxdfNode::lambert(looped.into()));
        assert!(!graph.validate(root));

        // The slot referring to its own node reads as zero.
        let si = shading_point(0.5, 0.5);
        assert_eq!(graph.evaluate(&looped.into(), &si), NodeValue::Scalar(1.0));
        let bsdf = graph.instantiate(root, &si);
        assert!(approx_eq!(Float, f_normal(&bsdf), INV_PI, epsilon = 1e-6));
    }

    #[test]
    fn forward_reference_in_lobe_input_reads_as_zero() {
        let mut graph = MaterialGraph::new();
        let root = graph.add(BxdfNode::lambert(Input::Node(NodeId(1))));
        graph.add(NodeValue::Scalar(1.0));
        assert!(!graph.validate(root));

        let bsdf = graph.instantiate(root, &shading_point(0.5, 0.5));
        assert_eq!(f_normal(&bsdf), 0.0);
    }

    #[test]
    fn single_lambert_has_unit_weight() {
        let mut graph = MaterialGraph::new();
        let root = white_lambert(&mut graph);
        assert!(graph.validate(root));

        let bsdf = graph.instantiate(root, &shading_point(0.5, 0.5));
        assert_eq!(bsdf.bxdfs.len(), 1);
        assert_eq!(bsdf.bxdfs[0].weight, 1.0);
        assert!(approx_eq!(Float, f_normal(&bsdf), INV_PI, epsilon = 1e-6));
    }

    #[test]
    fn layer_weight_scales_lobe() {
        let mut graph = MaterialGraph::new();
        let lambert = white_lambert(&mut graph);
        let half = graph.add(NodeValue::Scalar(0.5));
        let root = graph.add(LayeredNode::new(&[(lambert, half.into())]));
        assert!(graph.validate(root));

        let bsdf = graph.instantiate(root, &shading_point(0.5, 0.5));
        assert_eq!(bsdf.bxdfs.len(), 1);
        assert_eq!(bsdf.bxdfs[0].weight, 0.5);
        assert!(approx_eq!(Float, f_normal(&bsdf), 0.5 * INV_PI, epsilon = 1e-6));
    }

    #[test]
    fn nested_layers_multiply_weights() {
        let mut graph = MaterialGraph::new();
        let lambert = white_lambert(&mut graph);
        let inner = graph.add(LayeredNode::new(&[(lambert, Input::scalar(0.5))]));
        let root = graph.add(LayeredNode::new(&[(inner, Input::scalar(0.5))]));
        assert!(graph.validate(root));

        let bsdf = graph.instantiate(root, &shading_point(0.5, 0.5));
        assert_eq!(bsdf.bxdfs.len(), 1);
        assert!(approx_eq!(Float, bsdf.bxdfs[0].weight, 0.25, epsilon = 1e-6));
    }

    #[test]
    fn shared_lobe_is_added_per_path() {
        let mut graph = MaterialGraph::new();
        let lambert = white_lambert(&mut graph);
        let root = graph.add(LayeredNode::new(&[
            (lambert, Input::scalar(0.25)),
            (lambert, Input::scalar(0.5)),
        ]));
        assert!(graph.validate(root));

        let bsdf = graph.instantiate(root, &shading_point(0.5, 0.5));
        assert_eq!(bsdf.bxdfs.len(), 2);
        assert!(approx_eq!(Float, f_normal(&bsdf), 0.75 * INV_PI, epsilon = 1e-6));
    }

    #[test]
    fn zero_and_out_of_range_weights() {
        let mut graph = MaterialGraph::new();
        let lambert = white_lambert(&mut graph);
        let root = graph.add(LayeredNode::new(&[
            (lambert, Input::scalar(0.0)),
            (lambert, Input::scalar(3.0)),
        ]));

        let bsdf = graph.instantiate(root, &shading_point(0.5, 0.5));
        assert_eq!(bsdf.bxdfs.len(), 1);
        assert_eq!(bsdf.bxdfs[0].weight, 1.0);
    }

    #[test]
    fn root_must_be_a_bxdf() {
        let mut graph = MaterialGraph::new();
        let constant = graph.add(NodeValue::Scalar(1.0));
        assert!(!graph.validate(constant));
        assert!(!graph.validate(NodeId(42)));
    }

    #[test]
    fn bxdf_cannot_feed_a_bxdf() {
        let mut graph = MaterialGraph::new();
        let lambert = white_lambert(&mut graph);
        let root = graph.add(BxdfNode::lambert(lambert.into()));
        assert!(!graph.validate(root));
    }

    #[test]
    fn bxdf_cannot_feed_an_operator() {
        let mut graph = MaterialGraph::new();
        let lambert = white_lambert(&mut graph);
        let sum = graph.add(OperatorNode::Add {
            a: lambert.into(),
            b: Input::scalar(0.5),
        });
        let root = graph.add(BxdfNode::lambert(sum.into()));
        assert!(!graph.validate(root));
    }

    #[test]
    fn layered_lobe_must_be_a_bxdf() {
        let mut graph = MaterialGraph::new();
        let texture = graph.add(TextureNode::Uv);
        let root = graph.add(LayeredNode::new(&[(texture, Input::scalar(1.0))]));
        assert!(!graph.validate(root));
    }

    #[test]
    fn layered_weight_must_be_constant() {
        let mut graph = MaterialGraph::new();
        let lambert = white_lambert(&mut graph);
        let texture = graph.add(TextureNode::Uv);
        let root = graph.add(LayeredNode::new(&[(lambert, texture.into())]));
        assert!(!graph.validate(root));
    }

    #[test]
    fn textures_and_operators_drive_bxdf_inputs() {
        let mut graph = MaterialGraph::new();
        let checker = graph.add(TextureNode::checker(
            Input::color(Spectrum::new(0.2)),
            Input::color(Spectrum::new(0.8)),
            Input::scalar(2.0),
        ));
        let scaled = graph.add(OperatorNode::Multiply {
            a: checker.into(),
            b: Input::scalar(0.5),
        });
        let root = graph.add(BxdfNode::lambert(scaled.into()));
        assert!(graph.validate(root));

        let even = graph.instantiate(root, &shading_point(0.1, 0.1));
        assert!(approx_eq!(Float, f_normal(&even), 0.1 * INV_PI, epsilon = 1e-6));

        let odd = graph.instantiate(root, &shading_point(0.6, 0.1));
        assert!(approx_eq!(Float, f_normal(&odd), 0.4 * INV_PI, epsilon = 1e-6));
    }

    #[test]
    fn uv_texture_maps_coordinates() {
        let mut graph = MaterialGraph::new();
        let uv = graph.add(TextureNode::Uv);
        let value = graph.evaluate(&uv.into(), &shading_point(0.25, 1.75));
        assert_eq!(
            value,
            NodeValue::Color(Spectrum::from_rgb([0.25, 0.75, 0.0]))
        );
    }

    #[test]
    fn microfacet_nodes_build_their_lobes() {
        let mut graph = MaterialGraph::new();
        let reflection = graph.add(BxdfNode::microfacet_reflection(
            Input::color(Spectrum::ONE),
            Input::scalar(0.3),
            Input::scalar(1.5),
            Input::scalar(0.0),
        ));
        let refraction = graph.add(BxdfNode::MicrofacetRefraction {
            base_color: Input::color(Spectrum::ONE),
            distribution: String::from("Beckmann"),
            visibility: String::from("Smith"),
            roughness: Input::scalar(0.3),
            in_ior: Input::scalar(1.5),
            ext_ior: Input::scalar(1.0),
        });
        let root = graph.add(LayeredNode::new(&[
            (reflection, Input::scalar(1.0)),
            (refraction, Input::scalar(1.0)),
        ]));
        assert!(graph.validate(root));

        let bsdf = graph.instantiate(root, &shading_point(0.5, 0.5));
        assert_eq!(bsdf.num_components(BxDFType::BSDF_ALL), 2);
        assert_eq!(
            bsdf.num_components(BxDFType::BSDF_TRANSMISSION | BxDFType::BSDF_GLOSSY),
            1
        );
    }

    #[test]
    fn failed_table_contributes_nothing() {
        let mut graph = MaterialGraph::new();
        let merl = graph.add(BxdfNode::merl("/no/such/file.binary"));
        let lambert = white_lambert(&mut graph);
        let root = graph.add(LayeredNode::new(&[
            (merl, Input::scalar(1.0)),
            (lambert, Input::scalar(0.5)),
        ]));
        assert!(graph.validate(root));

        graph.post_process();
        graph.post_process();
        match graph.node(merl) {
            Some(MaterialNode::Bxdf(BxdfNode::Merl(table))) => {
                assert_eq!(table.state(), &TableState::Failed)
            }
            other => panic!("unexpected node {:?}", other),
        }

        let bsdf = graph.instantiate(root, &shading_point(0.5, 0.5));
        assert_eq!(bsdf.bxdfs.len(), 1);
        assert!(approx_eq!(Float, f_normal(&bsdf), 0.5 * INV_PI, epsilon = 1e-6));
    }

    #[test]
    fn unprocessed_table_contributes_nothing() {
        let mut graph = MaterialGraph::new();
        let root = graph.add(BxdfNode::fourier("/no/such/file.bsdf"));
        let bsdf = graph.instantiate(root, &shading_point(0.5, 0.5));
        assert!(bsdf.bxdfs.is_empty());
    }

    #[test]
    fn loaded_fourier_table_is_shared() {
        let path = write_fourier_table("graph-fourier", 0.4);
        let path = path.to_str().unwrap();

        let mut graph = MaterialGraph::new();
        let first = graph.add(BxdfNode::fourier(path));
        let second = graph.add(BxdfNode::fourier(path));
        let root = graph.add(LayeredNode::new(&[
            (first, Input::scalar(1.0)),
            (second, Input::scalar(1.0)),
        ]));
        graph.post_process();

        let table = |id| match graph.node(id) {
            Some(MaterialNode::Bxdf(BxdfNode::Fourier(table))) => table.table(),
            _ => None,
        };
        let (a, b) = (table(first).unwrap(), table(second).unwrap());
        assert!(std::sync::Arc::ptr_eq(&a, &b));

        let bsdf = graph.instantiate(root, &shading_point(0.5, 0.5));
        assert_eq!(bsdf.bxdfs.len(), 2);
    }

    proptest! {
        #[test]
        fn instantiation_is_deterministic(
            u in 0.0f32..4.0,
            v in 0.0f32..4.0,
            w in 0.0f32..1.0,
        ) {
            let mut graph = MaterialGraph::new();
            let checker = graph.add(TextureNode::checker(
                Input::color(Spectrum::new(0.2)),
                Input::color(Spectrum::new(0.9)),
                Input::scalar(3.0),
            ));
            let lambert = graph.add(BxdfNode::lambert(checker.into()));
            let rough = graph.add(BxdfNode::oren_nayar(checker.into(), Input::scalar(0.3)));
            let weight = graph.add(NodeValue::Scalar(w));
            let root = graph.add(LayeredNode::new(&[
                (lambert, weight.into()),
                (rough, Input::scalar(1.0)),
            ]));
            prop_assert!(graph.validate(root));

            let si = shading_point(u, v);
            let a = graph.instantiate(root, &si);
            let b = graph.instantiate(root, &si);
            prop_assert_eq!(a.bxdfs, b.bxdfs);
        }
    }
}
