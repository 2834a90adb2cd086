//! Core

extern crate bitflags;
#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;

// Re-export.
pub mod geometry;
pub mod integrator;
pub mod interaction;
pub mod interpolation;
pub mod light;
pub mod material;
pub mod microfacet;
pub mod pbrt;
pub mod primitive;
pub mod primitives;
pub mod reflection;
pub mod rng;
pub mod sampler;
pub mod sampling;
pub mod scene;
pub mod spectrum;
