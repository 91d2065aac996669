use std::sync::Arc;

use fractalscape_common::{EntityId, Quat, Vec3};
use fractalscape_geometry::Mesh;

use crate::behavior::{Mover, Spin, TimeDilation};

/// Marks the entity the scene is viewed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// World-space point the camera looks at.
    pub target: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            target: Vec3::ZERO,
        }
    }
}

/// A scene object: an id plus independently optional component slots.
///
/// The world rewrites `position` each frame when a `mover` is present, and
/// `orientation` when a `spin` is present. Everything else is fixed once the
/// entity is added.
pub struct Entity {
    id: EntityId,
    pub shape: Option<Arc<dyn Mesh>>,
    pub position: Option<Vec3>,
    pub orientation: Option<Quat>,
    pub spin: Option<Box<dyn Spin>>,
    pub mover: Option<Box<dyn Mover>>,
    pub slowmo: Option<Box<dyn TimeDilation>>,
    pub camera: Option<Camera>,
}

impl Entity {
    /// An entity with a fresh id and every slot empty.
    pub fn new() -> Self {
        Self::with_id(EntityId::new())
    }

    /// An entity with a caller-chosen id. Adding two entities with the same id
    /// to a world replaces the first.
    pub fn with_id(id: EntityId) -> Self {
        Self {
            id,
            shape: None,
            position: None,
            orientation: None,
            spin: None,
            mover: None,
            slowmo: None,
            camera: None,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn with_shape<M: Mesh + 'static>(self, shape: M) -> Self {
        self.with_shared_shape(Arc::new(shape))
    }

    pub fn with_shared_shape(mut self, shape: Arc<dyn Mesh>) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    pub fn oriented(mut self, orientation: Quat) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn with_spin(mut self, spin: impl Spin + 'static) -> Self {
        self.spin = Some(Box::new(spin));
        self
    }

    pub fn with_mover(mut self, mover: impl Mover + 'static) -> Self {
        self.mover = Some(Box::new(mover));
        self
    }

    pub fn with_slowmo(mut self, slowmo: impl TimeDilation + 'static) -> Self {
        self.slowmo = Some(Box::new(slowmo));
        self
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Current position, the origin if none was ever set.
    pub fn position_or_origin(&self) -> Vec3 {
        self.position.unwrap_or(Vec3::ZERO)
    }

    /// Current orientation, identity if none was ever set.
    pub fn orientation_or_identity(&self) -> Quat {
        self.orientation.unwrap_or(Quat::IDENTITY)
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("shape", &self.shape.as_ref().map(|s| s.vertex_count()))
            .field("position", &self.position)
            .field("orientation", &self.orientation)
            .field("spin", &self.spin.is_some())
            .field("mover", &self.mover.is_some())
            .field("slowmo", &self.slowmo.is_some())
            .field("camera", &self.camera)
            .finish()
    }
}
