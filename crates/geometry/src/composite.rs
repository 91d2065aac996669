use std::sync::{Arc, OnceLock};

use fractalscape_common::{Color, Vec3};

use crate::{Face, Mesh};

/// A positioned child of a composite: any mesh plus a translation applied to
/// all of its vertices.
#[derive(Clone)]
pub struct Child {
    pub mesh: Arc<dyn Mesh>,
    pub offset: Vec3,
}

#[derive(Debug, Clone, Default)]
struct MergedMesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    colors: Vec<Color>,
}

/// A tree of positioned meshes, flattened into one mesh on demand.
///
/// Built through [`CompositeShapeBuilder`], which is consumed by `build()`, so
/// children can never be added after the merged mesh has been read. The merge
/// runs once, on the first call to any of the three accessors, and all three
/// read from that single result.
#[derive(Clone, Default)]
pub struct CompositeShape {
    children: Vec<Child>,
    merged: OnceLock<MergedMesh>,
}

impl CompositeShape {
    pub fn builder() -> CompositeShapeBuilder {
        CompositeShapeBuilder::new()
    }

    /// A composite with no children; all three sequences are empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True once the merged mesh has been computed.
    pub fn is_merged(&self) -> bool {
        self.merged.get().is_some()
    }

    fn merged(&self) -> &MergedMesh {
        self.merged.get_or_init(|| {
            let merged = merge(&self.children);
            debug_assert!(
                crate::mesh::validate_parts(&merged.vertices, &merged.faces, &merged.colors)
                    .is_ok(),
                "composite merge produced an invalid mesh"
            );
            merged
        })
    }
}

/// Concatenate children in order: vertices shifted by their offset, face
/// indices shifted by the vertex count of every preceding child.
fn merge(children: &[Child]) -> MergedMesh {
    let vertex_total: usize = children.iter().map(|c| c.mesh.vertex_count()).sum();
    let face_total: usize = children.iter().map(|c| c.mesh.face_count()).sum();

    let mut merged = MergedMesh {
        vertices: Vec::with_capacity(vertex_total),
        faces: Vec::with_capacity(face_total),
        colors: Vec::with_capacity(vertex_total),
    };

    for child in children {
        let base = merged.vertices.len();
        merged
            .vertices
            .extend(child.mesh.vertices().iter().map(|v| *v + child.offset));
        merged.faces.extend(
            child
                .mesh
                .faces()
                .iter()
                .map(|face| face.iter().map(|i| i + base).collect::<Face>()),
        );
        merged.colors.extend_from_slice(child.mesh.colors());
    }

    merged
}

impl Mesh for CompositeShape {
    fn vertices(&self) -> &[Vec3] {
        &self.merged().vertices
    }

    fn faces(&self) -> &[Face] {
        &self.merged().faces
    }

    fn colors(&self) -> &[Color] {
        &self.merged().colors
    }
}

impl std::fmt::Debug for CompositeShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeShape")
            .field("children", &self.children.len())
            .field("merged", &self.is_merged())
            .finish()
    }
}

/// Collects children for a [`CompositeShape`].
#[derive(Clone, Default)]
pub struct CompositeShapeBuilder {
    children: Vec<Child>,
}

impl CompositeShapeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child by value (chaining form).
    pub fn add<M: Mesh + 'static>(mut self, mesh: M, offset: Vec3) -> Self {
        self.push(mesh, offset);
        self
    }

    /// Add a child that is shared with other composites (chaining form).
    pub fn add_shared(mut self, mesh: Arc<dyn Mesh>, offset: Vec3) -> Self {
        self.push_shared(mesh, offset);
        self
    }

    pub fn push<M: Mesh + 'static>(&mut self, mesh: M, offset: Vec3) {
        self.push_shared(Arc::new(mesh), offset);
    }

    pub fn push_shared(&mut self, mesh: Arc<dyn Mesh>, offset: Vec3) {
        self.children.push(Child { mesh, offset });
    }

    pub fn build(self) -> CompositeShape {
        CompositeShape {
            children: self.children,
            merged: OnceLock::new(),
        }
    }
}
