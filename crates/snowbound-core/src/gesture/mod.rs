//! Pointer-driven mini-games. Each verifier consumes container-local samples
//! and reports completion once; repeat completions cannot happen until reset.

pub mod cut;
pub mod lock;
pub mod scratch;

pub use cut::*;
pub use lock::*;
pub use scratch::*;

/// Container-local pointer position (touch is normalized to the same shape).
pub type Point = glam::Vec2;
