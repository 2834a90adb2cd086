//! Operator Nodes

use crate::value::*;
use pbr::pbrt::*;

/// Parameter nodes that transform upstream values. Two scalars produce a
/// scalar, anything involving a colour produces a colour.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OperatorNode {
    Add { a: Input, b: Input },
    Multiply { a: Input, b: Input },

    /// Linear interpolation from `a` to `b` by the scalar `factor`.
    Blend { a: Input, b: Input, factor: Input },
}

impl OperatorNode {
    /// Returns the input slots.
    pub fn inputs(&self) -> Vec<Input> {
        match self {
            Self::Add { a, b } | Self::Multiply { a, b } => vec![*a, *b],
            Self::Blend { a, b, factor } => vec![*a, *b, *factor],
        }
    }

    /// Evaluates the operator.
    ///
    /// * `eval` - Resolves an input slot to its value.
    pub fn evaluate<F>(&self, eval: F) -> NodeValue
    where
        F: Fn(&Input) -> NodeValue,
    {
        match self {
            Self::Add { a, b } => match (eval(a), eval(b)) {
                (NodeValue::Scalar(x), NodeValue::Scalar(y)) => NodeValue::Scalar(x + y),
                (x, y) => NodeValue::Color(x.to_spectrum() + y.to_spectrum()),
            },
            Self::Multiply { a, b } => match (eval(a), eval(b)) {
                (NodeValue::Scalar(x), NodeValue::Scalar(y)) => NodeValue::Scalar(x * y),
                (x, y) => NodeValue::Color(x.to_spectrum() * y.to_spectrum()),
            },
            Self::Blend { a, b, factor } => {
                let t = eval(factor).to_scalar();
                match (eval(a), eval(b)) {
                    (NodeValue::Scalar(x), NodeValue::Scalar(y)) => {
                        NodeValue::Scalar(lerp(t, x, y))
                    }
                    (x, y) => NodeValue::Color(lerp(t, x.to_spectrum(), y.to_spectrum())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use pbr::spectrum::*;

    fn literal(input: &Input) -> NodeValue {
        match input {
            Input::Value(v) => *v,
            Input::Node(_) => NodeValue::Scalar(0.0),
        }
    }

    #[test]
    fn scalars_stay_scalar() {
        let op = OperatorNode::Add {
            a: Input::scalar(0.25),
            b: Input::scalar(0.5),
        };
        assert_eq!(op.evaluate(literal), NodeValue::Scalar(0.75));
    }

    #[test]
    fn colour_operand_promotes_result() {
        let op = OperatorNode::Multiply {
            a: Input::scalar(0.5),
            b: Input::color(Spectrum::from_rgb([1.0, 0.5, 0.25])),
        };
        assert_eq!(
            op.evaluate(literal),
            NodeValue::Color(Spectrum::from_rgb([0.5, 0.25, 0.125]))
        );
    }

    #[test]
    fn blend_interpolates() {
        let op = OperatorNode::Blend {
            a: Input::scalar(0.0),
            b: Input::scalar(2.0),
            factor: Input::scalar(0.25),
        };
        assert!(approx_eq!(
            f32,
            op.evaluate(literal).to_scalar(),
            0.5,
            epsilon = 1e-6
        ));
    }
}
