use fractalscape_common::{Color, Vec3};

use crate::GeometryError;

/// One planar convex face: a ring of indices into the vertex list, wound
/// counter-clockwise when seen from outside the solid.
pub type Face = Vec<usize>;

/// The capability the renderer consumes: three parallel sequences.
///
/// `vertices()[i]` is drawn with `colors()[i]`, and every face indexes into
/// `vertices()`. Implemented by [`Shape`](crate::Shape) and
/// [`CompositeShape`](crate::CompositeShape), so composites nest.
pub trait Mesh: Send + Sync {
    fn vertices(&self) -> &[Vec3];

    fn faces(&self) -> &[Face];

    fn colors(&self) -> &[Color];

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    fn face_count(&self) -> usize {
        self.faces().len()
    }
}

/// Full integrity pass over a mesh.
///
/// The composite merge trusts its own index arithmetic, so this only runs in
/// debug builds there. Call it directly from tests or tooling.
pub fn validate<M: Mesh + ?Sized>(mesh: &M) -> Result<(), GeometryError> {
    validate_parts(mesh.vertices(), mesh.faces(), mesh.colors())
}

pub(crate) fn validate_faces(vertex_count: usize, faces: &[Face]) -> Result<(), GeometryError> {
    for (face_index, face) in faces.iter().enumerate() {
        if face.len() < 3 {
            return Err(GeometryError::DegenerateFace {
                face: face_index,
                len: face.len(),
            });
        }
        if let Some(&index) = face.iter().find(|&&i| i >= vertex_count) {
            return Err(GeometryError::IndexOutOfRange {
                face: face_index,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

pub(crate) fn validate_parts(
    vertices: &[Vec3],
    faces: &[Face],
    colors: &[Color],
) -> Result<(), GeometryError> {
    if vertices.len() != colors.len() {
        return Err(GeometryError::ColorCountMismatch {
            vertices: vertices.len(),
            colors: colors.len(),
        });
    }
    validate_faces(vertices.len(), faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Vec3> {
        vec![Vec3::ZERO, Vec3::X, Vec3::Y]
    }

    #[test]
    fn accepts_well_formed_parts() {
        let colors = vec![Color::RED; 3];
        assert!(validate_parts(&triangle(), &[vec![0, 1, 2]], &colors).is_ok());
    }

    #[test]
    fn rejects_dangling_index() {
        let err = validate_faces(3, &[vec![0, 1, 2], vec![0, 2, 3]]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::IndexOutOfRange {
                face: 1,
                index: 3,
                vertex_count: 3,
            }
        );
    }

    #[test]
    fn rejects_two_index_face() {
        let err = validate_faces(3, &[vec![0, 1]]).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateFace { face: 0, len: 2 });
    }

    #[test]
    fn rejects_color_mismatch() {
        let err = validate_parts(&triangle(), &[], &[Color::RED]).unwrap_err();
        assert!(matches!(err, GeometryError::ColorCountMismatch { vertices: 3, colors: 1 }));
    }
}
