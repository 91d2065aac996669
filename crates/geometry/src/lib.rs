//! Geometry: raw meshes, uniformly colored shapes, composite shape trees and
//! the recursive fractal generators that build them.
//!
//! # Invariants
//! - Every face index is `< vertex_count` and every face has at least 3 indices.
//! - `colors()` is parallel to `vertices()`.
//! - A `CompositeShape` is immutable once built; its merged mesh is computed
//!   once, on first read, and never invalidated.

pub mod composite;
pub mod decor;
mod error;
pub mod fractal;
pub mod mesh;
pub mod primitives;
pub mod shape;

pub use composite::{Child, CompositeShape, CompositeShapeBuilder};
pub use error::GeometryError;
pub use fractal::{CornerFractal, MAX_FRACTAL_DEPTH, MAX_FRACTAL_VERTICES, Placement};
pub use mesh::{Face, Mesh, validate};
pub use shape::{Geometry, Shape};

pub fn crate_info() -> &'static str {
    "fractalscape-geometry v0.1.0"
}
