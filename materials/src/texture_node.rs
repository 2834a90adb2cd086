//! Texture Nodes

use crate::value::*;
use pbr::interaction::*;
use pbr::pbrt::*;
use pbr::spectrum::*;

/// Texture sources evaluated from the surface parametrization.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TextureNode {
    /// Alternates between two colours on a `scale` x `scale` grid per unit of
    /// (u, v).
    Checker {
        color1: Input,
        color2: Input,
        scale: Input,
    },

    /// Maps (u, v) to the red and green channels.
    Uv,
}

impl TextureNode {
    /// Create a checkerboard texture.
    ///
    /// * `color1` - Colour of even cells.
    /// * `color2` - Colour of odd cells.
    /// * `scale`  - Number of cells per unit of (u, v).
    pub fn checker(color1: Input, color2: Input, scale: Input) -> Self {
        Self::Checker {
            color1,
            color2,
            scale,
        }
    }

    /// Returns the input slots.
    pub fn inputs(&self) -> Vec<Input> {
        match self {
            Self::Checker {
                color1,
                color2,
                scale,
            } => vec![*color1, *color2, *scale],
            Self::Uv => vec![],
        }
    }

    /// Evaluates the texture at the shading point.
    ///
    /// * `si`   - The surface interaction.
    /// * `eval` - Resolves an input slot to its value.
    pub fn evaluate<F>(&self, si: &SurfaceInteraction, eval: F) -> NodeValue
    where
        F: Fn(&Input) -> NodeValue,
    {
        match self {
            Self::Checker {
                color1,
                color2,
                scale,
            } => {
                let s = eval(scale).to_scalar();
                let cu = (si.uv.x * s).floor() as Int;
                let cv = (si.uv.y * s).floor() as Int;
                if (cu + cv) % 2 == 0 {
                    eval(color1)
                } else {
                    eval(color2)
                }
            }
            Self::Uv => {
                let (u, v) = (si.uv.x, si.uv.y);
                NodeValue::Color(Spectrum::from_rgb([u - u.floor(), v - v.floor(), 0.0]))
            }
        }
    }
}
