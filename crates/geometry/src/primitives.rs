//! Hand-authored primitive solids. Every face is wound counter-clockwise when
//! viewed from outside, so back faces can be culled.

use std::f32::consts::{SQRT_2, TAU};

use fractalscape_common::{Color, Vec3};

use crate::error::require_positive;
use crate::{GeometryError, Shape};

/// Points on a circle outline.
pub const CIRCLE_SEGMENTS: usize = 32;

/// Axis-aligned rectangle on the XY plane, facing +Z.
pub fn rectangle(width: f32, height: f32, color: Color) -> Result<Shape, GeometryError> {
    let w2 = require_positive("width", width)? / 2.0;
    let h2 = require_positive("height", height)? / 2.0;
    Shape::from_parts(
        vec![
            Vec3::new(-w2, -h2, 0.0),
            Vec3::new(w2, -h2, 0.0),
            Vec3::new(w2, h2, 0.0),
            Vec3::new(-w2, h2, 0.0),
        ],
        vec![vec![0, 1, 2, 3]],
        color,
    )
}

/// Flat disc on the XY plane, facing +Z.
pub fn circle(radius: f32, color: Color) -> Result<Shape, GeometryError> {
    let radius = require_positive("radius", radius)?;
    let vertices = (0..CIRCLE_SEGMENTS)
        .map(|n| {
            let a = n as f32 * TAU / CIRCLE_SEGMENTS as f32;
            Vec3::new(radius * a.cos(), radius * a.sin(), 0.0)
        })
        .collect();
    Shape::from_parts(vertices, vec![(0..CIRCLE_SEGMENTS).collect()], color)
}

/// Axis-aligned cube centered on the origin.
pub fn cube(edge: f32, color: Color) -> Result<Shape, GeometryError> {
    let e2 = require_positive("edge", edge)? / 2.0;
    Shape::from_parts(
        vec![
            Vec3::new(-e2, -e2, -e2),
            Vec3::new(-e2, -e2, e2),
            Vec3::new(-e2, e2, -e2),
            Vec3::new(-e2, e2, e2),
            Vec3::new(e2, -e2, -e2),
            Vec3::new(e2, -e2, e2),
            Vec3::new(e2, e2, -e2),
            Vec3::new(e2, e2, e2),
        ],
        vec![
            vec![0, 1, 3, 2], // -x
            vec![4, 6, 7, 5], // +x
            vec![7, 3, 1, 5], // +z
            vec![0, 2, 6, 4], // -z
            vec![3, 7, 6, 2], // +y
            vec![1, 0, 4, 5], // -y
        ],
        color,
    )
}

/// Regular tetrahedron centered on the origin, its vertices on alternate
/// corners of a cube.
pub fn tetrahedron(edge: f32, color: Color) -> Result<Shape, GeometryError> {
    let s = require_positive("edge", edge)? / SQRT_2 / 2.0;
    Shape::from_parts(
        vec![
            Vec3::new(s, s, s),
            Vec3::new(-s, -s, s),
            Vec3::new(-s, s, -s),
            Vec3::new(s, -s, -s),
        ],
        vec![vec![0, 2, 1], vec![1, 3, 0], vec![2, 3, 1], vec![0, 3, 2]],
        color,
    )
}
