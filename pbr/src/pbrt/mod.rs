//! PBRT common stuff

#![allow(dead_code)]

mod clamp;
mod common;

// Re-export
pub use clamp::*;
pub use common::*;
