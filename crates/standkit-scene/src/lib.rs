//! # Standkit Scene
//!
//! Assembles the 3D element list of a ground stand from its resolved
//! geometry. The scene is built once per export and shared by all four
//! orthographic sheets; it carries world-space primitives and bounds,
//! no pixels and no paint.

pub mod assembler;
pub mod element;

pub use assembler::assemble;
pub use element::{Axis, Bounds, Element, Material, Scene, Shape};
