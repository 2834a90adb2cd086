//! Node Values

use pbr::pbrt::*;
use pbr::spectrum::*;

/// Handle to a node stored in a `MaterialGraph`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the position of the node in its graph.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Value produced by a constant, texture or operator node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NodeValue {
    Scalar(Float),
    Color(Spectrum),
}

impl NodeValue {
    /// Returns the value as a scalar. Colours yield their first channel.
    pub fn to_scalar(&self) -> Float {
        match self {
            Self::Scalar(v) => *v,
            Self::Color(c) => c[0],
        }
    }

    /// Returns the value as a spectrum. Scalars are broadcast to every
    /// channel.
    pub fn to_spectrum(&self) -> Spectrum {
        match self {
            Self::Scalar(v) => Spectrum::new(*v),
            Self::Color(c) => *c,
        }
    }
}

impl From<Float> for NodeValue {
    fn from(v: Float) -> Self {
        Self::Scalar(v)
    }
}

impl From<Spectrum> for NodeValue {
    fn from(c: Spectrum) -> Self {
        Self::Color(c)
    }
}

/// An input slot of a node. It either holds a literal value or is bound to an
/// upstream node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Input {
    Value(NodeValue),
    Node(NodeId),
}

impl Input {
    /// Create a literal scalar input.
    ///
    /// * `v` - The value.
    pub fn scalar(v: Float) -> Self {
        Self::Value(NodeValue::Scalar(v))
    }

    /// Create a literal colour input.
    ///
    /// * `c` - The colour.
    pub fn color(c: Spectrum) -> Self {
        Self::Value(NodeValue::Color(c))
    }

    /// Returns the bound upstream node if there is one.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            Self::Value(_) => None,
            Self::Node(id) => Some(*id),
        }
    }
}

impl From<NodeId> for Input {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<Float> for Input {
    fn from(v: Float) -> Self {
        Self::Value(NodeValue::Scalar(v))
    }
}

impl From<Spectrum> for Input {
    fn from(c: Spectrum) -> Self {
        Self::Value(NodeValue::Color(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_broadcasts_to_spectrum() {
        assert_eq!(NodeValue::Scalar(0.25).to_spectrum(), Spectrum::new(0.25));
    }

    #[test]
    fn colour_yields_first_channel() {
        let v = NodeValue::Color(Spectrum::from_rgb([0.1, 0.2, 0.3]));
        assert_eq!(v.to_scalar(), 0.1);
    }

    #[test]
    fn literal_inputs_have_no_node() {
        assert_eq!(Input::scalar(1.0).node(), None);
        assert_eq!(Input::from(NodeId(3)).node(), Some(NodeId(3)));
    }
}
