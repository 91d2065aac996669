use fractalscape_common::{Color, EntityId, Vec3};
use fractalscape_geometry::fractal::{CornerFractal, koch_cube, koch_tetra};
use fractalscape_geometry::primitives::{cube, tetrahedron};
use fractalscape_geometry::{CompositeShape, decor};
use fractalscape_kernel::{Camera, Entity, SlowMo, Spinner, WobblyOrbit, World};

use crate::{CameraTracker, SceneError};

/// Knobs for the demo scene.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoParams {
    pub koch_cube_depth: u32,
    pub koch_tetra_depth: u32,
    pub sierpinski_depth: u32,
    pub cluster_cubes: usize,
    pub cluster_edge: u32,
    pub cluster_seed: u64,
    /// Side of the lattice box. The clock slows while the camera is inside.
    pub lattice_edge: u32,
    /// Clock rate inside the lattice box.
    pub slowmo_rate: f32,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            koch_cube_depth: 4,
            koch_tetra_depth: 5,
            sierpinski_depth: 5,
            cluster_cubes: 1150,
            cluster_edge: 60,
            cluster_seed: 0,
            lattice_edge: 48,
            slowmo_rate: 0.2,
        }
    }
}

/// Add the camera and the demo exhibits to a running world. Returns the ids
/// in the order they were added; the camera comes first.
pub fn populate(world: &mut World, params: &DemoParams) -> Result<Vec<EntityId>, SceneError> {
    let _span = tracing::info_span!("populate").entered();
    let mut ids = Vec::new();

    // The orbit crosses the lattice wall, so the camera drifts in and out of
    // the slow-motion zone.
    let half_edge = params.lattice_edge as f32 / 2.0;
    let orbit = WobblyOrbit::new(half_edge + 6.0, 8.0).with_speed(0.3);
    let tracker = CameraTracker::new(orbit.position_at(0.0));
    ids.push(world.add(
        Entity::new()
            .with_camera(Camera::default())
            .at(orbit.position_at(0.0))
            .with_mover(tracker.follow(orbit)),
    )?);

    let koch = koch_cube(
        &cube(2.0, Color::ORANGE)?,
        params.koch_cube_depth,
        Some(Color::YELLOW),
    )?;
    ids.push(world.add(Entity::new().with_shape(koch).with_spin(Spinner::new(2.0)))?);

    let koch = koch_tetra(
        &tetrahedron(4.0, Color::PURPLE)?,
        params.koch_tetra_depth,
        Some(Color::WHITE),
    )?;
    ids.push(world.add(
        Entity::new()
            .with_shape(koch)
            .at(Vec3::new(0.0, 0.0, 8.0))
            .with_spin(Spinner::around(Vec3::new(1.0, 1.0, 0.0), 4.0)),
    )?);

    let gasket = CornerFractal::SIERPINSKI_TETRA.with_scale(0.52)?.generate(
        &tetrahedron(4.0, Color::YELLOW)?,
        params.sierpinski_depth,
        None,
    )?;
    ids.push(world.add(
        Entity::new()
            .with_shape(gasket)
            .at(Vec3::new(-8.0, 0.0, 0.0))
            .with_spin(Spinner::new(0.75)),
    )?);

    ids.push(world.add(
        Entity::new()
            .with_shape(decor::cube_cross()?)
            .at(Vec3::new(8.0, 0.0, 0.0))
            .with_spin(Spinner::around(Vec3::Z, 3.0)),
    )?);

    let cluster = decor::rgb_cube_cluster(
        1.0,
        params.cluster_edge,
        params.cluster_cubes,
        params.cluster_seed,
    )?;
    ids.push(world.add(Entity::new().with_shape(cluster))?);

    let edge = params.lattice_edge;
    let zone = CompositeShape::builder()
        .add(decor::cube_lattice(1.0, edge, 8, Color::WHITE)?, Vec3::ZERO)
        .add(cube(edge as f32, Color::new(20, 20, 20, 80))?, Vec3::ZERO)
        .build();
    let inside = tracker.clone();
    let slowmo = SlowMo::new(move || inside.is_inside_cube(edge as f32), params.slowmo_rate)?;
    ids.push(world.add(Entity::new().with_shape(zone).with_slowmo(slowmo))?);

    tracing::info!(entities = world.entity_count(), "scene populated");
    Ok(ids)
}
