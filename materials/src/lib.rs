//! Materials

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod bxdf_node;
mod graph;
mod layered_node;
mod node_material;
mod node_type;
mod operator_node;
mod tabulated;
mod texture_node;
mod value;

// Re-export
pub use bxdf_node::*;
pub use graph::*;
pub use layered_node::*;
pub use node_material::*;
pub use node_type::*;
pub use operator_node::*;
pub use tabulated::*;
pub use texture_node::*;
pub use value::*;
