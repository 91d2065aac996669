use std::sync::Arc;

use fractalscape_common::{Color, EntityId, Quat, Vec3};
use fractalscape_geometry::{Face, Mesh};
use fractalscape_kernel::World;
use glam::Mat4;

/// One entity's mesh plus the transform it is drawn with.
#[derive(Clone)]
pub struct DrawItem {
    pub id: EntityId,
    pub position: Vec3,
    pub orientation: Quat,
    pub mesh: Arc<dyn Mesh>,
}

impl DrawItem {
    /// Every entity that has a shape, in world enumeration order. Entities
    /// with no position sit at the origin; no orientation means identity.
    pub fn collect(world: &World) -> Vec<DrawItem> {
        let items: Vec<DrawItem> = world
            .entities()
            .values()
            .filter_map(|entity| {
                entity.shape.as_ref().map(|mesh| DrawItem {
                    id: entity.id(),
                    position: entity.position_or_origin(),
                    orientation: entity.orientation_or_identity(),
                    mesh: Arc::clone(mesh),
                })
            })
            .collect();
        tracing::trace!(items = items.len(), "collected draw items");
        items
    }

    /// Model matrix: rotate, then translate.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }

    /// Mesh vertices in world space.
    pub fn world_vertices(&self) -> Vec<Vec3> {
        self.mesh
            .vertices()
            .iter()
            .map(|v| self.orientation * *v + self.position)
            .collect()
    }

    pub fn faces(&self) -> &[Face] {
        self.mesh.faces()
    }

    pub fn colors(&self) -> &[Color] {
        self.mesh.colors()
    }

    /// Triangle-fan indices for every face, for index-buffer renderers.
    pub fn triangle_indices(&self) -> Vec<u32> {
        let mut indices = Vec::new();
        for face in self.mesh.faces() {
            for pair in face[1..].windows(2) {
                indices.extend([face[0], pair[0], pair[1]].map(|i| i as u32));
            }
        }
        indices
    }
}

impl std::fmt::Debug for DrawItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawItem")
            .field("id", &self.id)
            .field("position", &self.position)
            .field("orientation", &self.orientation)
            .field("vertices", &self.mesh.vertex_count())
            .finish()
    }
}
