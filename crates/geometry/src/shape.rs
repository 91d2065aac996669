use fractalscape_common::{Color, Vec3};

use crate::error::require_positive;
use crate::mesh::validate_faces;
use crate::{Face, GeometryError, Mesh};

/// A polyhedral mesh: vertices plus faces indexing into them.
///
/// Faces are checked on construction, so a `Geometry` never holds a dangling
/// index.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Geometry {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Result<Self, GeometryError> {
        validate_faces(vertices.len(), &faces)?;
        Ok(Self { vertices, faces })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}

/// A geometry painted in one color.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: Geometry,
    color: Color,
    colors: Vec<Color>,
}

impl Shape {
    pub fn new(geometry: Geometry, color: Color) -> Self {
        let colors = vec![color; geometry.vertices.len()];
        Self {
            geometry,
            color,
            colors,
        }
    }

    /// Build and validate the geometry in one step.
    pub fn from_parts(
        vertices: Vec<Vec3>,
        faces: Vec<Face>,
        color: Color,
    ) -> Result<Self, GeometryError> {
        Ok(Self::new(Geometry::new(vertices, faces)?, color))
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Mean of the vertices, or the origin for an empty shape.
    pub fn centroid(&self) -> Vec3 {
        let vertices = self.geometry.vertices();
        if vertices.is_empty() {
            return Vec3::ZERO;
        }
        vertices.iter().copied().sum::<Vec3>() / vertices.len() as f32
    }

    /// Uniform scale about the origin. Faces are unchanged.
    pub fn scaled(&self, factor: f32) -> Result<Self, GeometryError> {
        let factor = require_positive("factor", factor)?;
        let geometry = Geometry {
            vertices: self.geometry.vertices.iter().map(|v| *v * factor).collect(),
            faces: self.geometry.faces.clone(),
        };
        Ok(Self {
            geometry,
            color: self.color,
            colors: self.colors.clone(),
        })
    }

    pub fn recolored(&self, color: Color) -> Self {
        Self::new(self.geometry.clone(), color)
    }
}

impl Mesh for Shape {
    fn vertices(&self) -> &[Vec3] {
        self.geometry.vertices()
    }

    fn faces(&self) -> &[Face] {
        self.geometry.faces()
    }

    fn colors(&self) -> &[Color] {
        &self.colors
    }
}
