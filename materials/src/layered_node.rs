//! Layered BxDF Node

use crate::value::*;

/// Number of lobe slots of a layered node.
pub const MAX_LAYERED_BXDFS: usize = 4;

/// A lobe slot of a layered node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layer {
    /// BxDF node providing the lobe. Empty slots contribute nothing.
    pub bxdf: Option<NodeId>,

    /// Weight of the lobe. Either a literal or a constant node.
    pub weight: Input,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            bxdf: None,
            weight: Input::scalar(1.0),
        }
    }
}

/// Combines up to `MAX_LAYERED_BXDFS` weighted BxDF nodes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LayeredNode {
    /// The lobe slots.
    pub layers: [Layer; MAX_LAYERED_BXDFS],
}

impl LayeredNode {
    /// Create a layered node from `(bxdf, weight)` pairs. Pairs beyond
    /// `MAX_LAYERED_BXDFS` are dropped.
    ///
    /// * `layers` - The BxDF nodes and their weights.
    pub fn new(layers: &[(NodeId, Input)]) -> Self {
        if layers.len() > MAX_LAYERED_BXDFS {
            warn!(
                "Layered node supports {} BxDFs, ignoring {} more",
                MAX_LAYERED_BXDFS,
                layers.len() - MAX_LAYERED_BXDFS
            );
        }

        let mut node = Self::default();
        for (slot, (bxdf, weight)) in node.layers.iter_mut().zip(layers.iter()) {
            slot.bxdf = Some(*bxdf);
            slot.weight = *weight;
        }
        node
    }
}
