//! Scene composition: everything that is built once at startup.
//!
//! # Invariants
//! - Shapes are generated before any entity is added; meshes never change
//!   afterwards.
//! - Population is deterministic for a given [`DemoParams`].

mod bestiary;
mod populate;
mod tracker;

pub use bestiary::{Exhibit, bestiary, exhibit};
pub use populate::{DemoParams, populate};
pub use tracker::{CameraTracker, TrackedMover};

use fractalscape_geometry::GeometryError;
use fractalscape_kernel::WorldError;

/// Errors from building a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    World(#[from] WorldError),
    #[error("no exhibit named {0:?}")]
    UnknownExhibit(String),
}

pub fn crate_info() -> &'static str {
    "fractalscape-scene v0.1.0"
}
