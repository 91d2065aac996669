use std::fmt::Write;

use fractalscape_common::Vec3;
use fractalscape_kernel::World;

use crate::DrawItem;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, -10.0),
            target: Vec3::ZERO,
            fov_degrees: 45.0,
        }
    }
}

impl RenderView {
    /// View from the world's camera entity, or the default view when the
    /// world has none.
    pub fn from_world(world: &World) -> Self {
        match world.camera() {
            Some(entity) => {
                let camera = entity.camera.unwrap_or_default();
                Self {
                    eye: entity.position_or_origin(),
                    target: camera.target,
                    fov_degrees: camera.fov_degrees,
                }
            }
            None => Self::default(),
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads world state and a view configuration, then produces
/// output. It never mutates the world.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given world state and view.
    fn render(&self, world: &World, view: &RenderView) -> Self::Output;
}

/// Produces a human-readable frame summary: clock, camera and one line per
/// drawn entity. Used by the headless CLI and in tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, world: &World, view: &RenderView) -> String {
        let items = DrawItem::collect(world);
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "=== Frame {} (time={:.3}s, rate={:.2}) ===",
            world.frame(),
            world.time(),
            world.rate()
        );
        let _ = writeln!(
            out,
            "Entities: {} ({} drawn)",
            world.entity_count(),
            items.len()
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}",
            view.eye.x, view.eye.y, view.eye.z, view.target.x, view.target.y, view.target.z,
            view.fov_degrees
        );

        for item in &items {
            let p = item.position;
            let _ = writeln!(
                out,
                "  [{}] pos=({:.2}, {:.2}, {:.2}) vertices={} faces={}",
                item.id,
                p.x,
                p.y,
                p.z,
                item.mesh.vertex_count(),
                item.mesh.face_count()
            );
        }

        out
    }
}
