use std::sync::Arc;

use fractalscape_common::{Color, Vec3};
use fractalscape_geometry::fractal::{koch_cube, koch_tetra, sierpinski_tetra};
use fractalscape_geometry::primitives::{circle, cube, rectangle, tetrahedron};
use fractalscape_geometry::{Mesh, decor};
use fractalscape_kernel::{Entity, Spinner};

use crate::SceneError;

/// A named shape shown on its own at the origin.
#[derive(Clone)]
pub struct Exhibit {
    pub name: &'static str,
    pub shape: Arc<dyn Mesh>,
}

impl Exhibit {
    fn new<M: Mesh + 'static>(name: &'static str, shape: M) -> Self {
        Self {
            name,
            shape: Arc::new(shape),
        }
    }

    /// A slowly spinning entity at the origin showing this exhibit.
    pub fn spawn(&self) -> Entity {
        Entity::new()
            .with_shared_shape(Arc::clone(&self.shape))
            .at(Vec3::ZERO)
            .with_spin(Spinner::around(Vec3::new(0.3, 1.0, 0.1), 0.5))
    }
}

impl std::fmt::Debug for Exhibit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exhibit")
            .field("name", &self.name)
            .field("vertices", &self.shape.vertex_count())
            .field("faces", &self.shape.face_count())
            .finish()
    }
}

/// Every exhibit, simplest first. Selecting one (by key or otherwise) is up
/// to the caller.
pub fn bestiary() -> Result<Vec<Exhibit>, SceneError> {
    Ok(vec![
        Exhibit::new("rectangle", rectangle(2.0, 1.0, Color::GREEN)?),
        Exhibit::new("circle", circle(1.0, Color::CYAN)?),
        Exhibit::new("tetrahedron", tetrahedron(1.8, Color::BLUE)?),
        Exhibit::new("cube", cube(0.9, Color::GREEN)?),
        Exhibit::new("cube-cross", decor::cube_cross()?),
        Exhibit::new(
            "koch-cube",
            koch_cube(&cube(1.0, Color::RED)?, 3, Some(Color::YELLOW))?,
        ),
        Exhibit::new(
            "koch-tetra",
            koch_tetra(&tetrahedron(1.5, Color::PURPLE)?, 4, Some(Color::WHITE))?,
        ),
        Exhibit::new(
            "sierpinski-tetra",
            sierpinski_tetra(&tetrahedron(2.0, Color::YELLOW)?, 4, None)?,
        ),
    ])
}

/// Look up one exhibit by name.
pub fn exhibit(name: &str) -> Result<Exhibit, SceneError> {
    bestiary()?
        .into_iter()
        .find(|e| e.name == name)
        .ok_or_else(|| SceneError::UnknownExhibit(name.to_string()))
}
