//! Decorative composites built from cubes. Not part of the fractal family.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fractalscape_common::{Color, Vec3};

use crate::primitives::cube;
use crate::{CompositeShape, GeometryError};

/// A grey body cube with a smaller cube poking out along each axis.
pub fn cube_cross() -> Result<CompositeShape, GeometryError> {
    let outer = cube(1.0, Color::rgb(170, 170, 170))?;
    let mut builder =
        CompositeShape::builder().add(cube(2.0, Color::rgb(150, 150, 150))?, Vec3::ZERO);
    for axis in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::NEG_X, Vec3::NEG_Y, Vec3::NEG_Z] {
        builder.push(outer.clone(), axis);
    }
    Ok(builder.build())
}

/// Small cubes spaced every `freq` units over the six faces of a hollow cube
/// of side `cluster_edge`.
pub fn cube_lattice(
    edge: f32,
    cluster_edge: u32,
    freq: u32,
    color: Color,
) -> Result<CompositeShape, GeometryError> {
    if freq == 0 {
        return Err(GeometryError::invalid("freq", "must be at least 1"));
    }
    if cluster_edge == 0 {
        return Err(GeometryError::invalid("cluster_edge", "must be at least 1"));
    }
    let block = cube(edge, color)?;
    let half = cluster_edge as f32 / 2.0;
    let lo = -(cluster_edge as i32) / 2;
    let hi = cluster_edge as i32 / 2;

    let mut builder = CompositeShape::builder();
    for i in (lo..=hi).step_by(freq as usize) {
        for j in (lo..=hi).step_by(freq as usize) {
            let (i, j) = (i as f32, j as f32);
            for offset in [
                Vec3::new(i, j, -half),
                Vec3::new(i, j, half),
                Vec3::new(i, -half, j),
                Vec3::new(i, half, j),
                Vec3::new(-half, i, j),
                Vec3::new(half, i, j),
            ] {
                builder.push(block.clone(), offset);
            }
        }
    }
    Ok(builder.build())
}

/// `count` cubes scattered on the integer grid inside a cube of side
/// `cluster_edge`, each colored by its position (x to red, y to green,
/// z to blue). The same `seed` always yields the same cluster.
pub fn rgb_cube_cluster(
    edge: f32,
    cluster_edge: u32,
    count: usize,
    seed: u64,
) -> Result<CompositeShape, GeometryError> {
    if cluster_edge < 2 {
        return Err(GeometryError::invalid("cluster_edge", "must be at least 2"));
    }
    // Validates `edge` even when `count` is zero.
    cube(edge, Color::BLACK)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let span = cluster_edge as f32;
    let channel = |v: u32| (v as f32 / span * 255.0) as u8;

    let mut builder = CompositeShape::builder();
    for _ in 0..count {
        let r = rng.gen_range(1..cluster_edge);
        let g = rng.gen_range(1..cluster_edge);
        let b = rng.gen_range(1..cluster_edge);
        let position = Vec3::new(r as f32, g as f32, b as f32) - Vec3::splat(span / 2.0);
        builder.push(cube(edge, Color::rgb(channel(r), channel(g), channel(b)))?, position);
    }
    Ok(builder.build())
}
