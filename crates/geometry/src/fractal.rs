//! Corner-replacement fractals.
//!
//! Each level replaces every corner of a shape with a scaled copy of the
//! shape, recursively. Koch variants keep the parent body under its corner
//! ornaments; the Sierpinski variant drops it, hollowing out the center.
//! Generation is deterministic.

use std::sync::Arc;

use fractalscape_common::{Color, Vec3};

use crate::{CompositeShape, GeometryError, Mesh, Shape};

/// Deepest recursion accepted. Mesh size grows as `corners^depth`.
pub const MAX_FRACTAL_DEPTH: u32 = 8;

/// Largest merged mesh a fractal may produce, in vertices. A depth-6 Koch
/// cube (2,396,744 vertices) fits; depth 7 does not.
pub const MAX_FRACTAL_VERTICES: usize = 1 << 22;

/// Where a scaled copy sits relative to the corner it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Copy centered on the corner.
    Centered,
    /// Copy pushed outward along the corner direction until it only touches
    /// the parent at the corner (exact for point-symmetric bases like a cube).
    Outward,
    /// Copy pulled inward so its matching corner coincides with the parent's.
    Inward,
}

impl Placement {
    /// Target centroid for the copy replacing `corner`.
    fn anchor(self, centroid: Vec3, corner: Vec3, scale: f32) -> Vec3 {
        let direction = corner - centroid;
        match self {
            Self::Centered => corner,
            Self::Outward => centroid + direction * (1.0 + scale),
            Self::Inward => centroid + direction * (1.0 - scale),
        }
    }
}

/// One fractal family: its per-level scale, corner placement, and whether the
/// parent body is retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerFractal {
    scale: f32,
    placement: Placement,
    keep_body: bool,
}

impl CornerFractal {
    /// Half-size cubes sprouting from every corner of a cube.
    pub const KOCH_CUBE: Self = Self {
        scale: 0.5,
        placement: Placement::Outward,
        keep_body: true,
    };

    /// Half-size tetrahedra centered on every vertex of a tetrahedron.
    pub const KOCH_TETRA: Self = Self {
        scale: 0.5,
        placement: Placement::Centered,
        keep_body: true,
    };

    /// The Sierpinski gasket: four half-size copies, no body.
    pub const SIERPINSKI_TETRA: Self = Self {
        scale: 0.5,
        placement: Placement::Inward,
        keep_body: false,
    };

    pub fn new(scale: f32, placement: Placement, keep_body: bool) -> Result<Self, GeometryError> {
        if !(scale > 0.0 && scale < 1.0) {
            return Err(GeometryError::invalid(
                "scale",
                format!("must lie strictly between 0 and 1, got {scale}"),
            ));
        }
        Ok(Self {
            scale,
            placement,
            keep_body,
        })
    }

    /// Same family with a different per-level scale, e.g. 0.52 for a gasket
    /// whose copies slightly overlap.
    pub fn with_scale(self, scale: f32) -> Result<Self, GeometryError> {
        Self::new(scale, self.placement, self.keep_body)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn keeps_body(&self) -> bool {
        self.keep_body
    }

    /// Children in a depth-1 result for a base with `corners` anchors.
    pub fn branching(&self, corners: usize) -> usize {
        corners + usize::from(self.keep_body)
    }

    /// Vertex count of the merged mesh at `depth` for a base with
    /// `base_vertices` vertices, or `None` on overflow.
    ///
    /// `V(0) = n`, `V(d) = n * V(d - 1) + n` when the body is kept.
    pub fn projected_vertices(&self, base_vertices: usize, depth: u32) -> Option<usize> {
        let body = if self.keep_body { base_vertices } else { 0 };
        (0..depth).try_fold(base_vertices, |v, _| {
            base_vertices.checked_mul(v)?.checked_add(body)
        })
    }

    /// Build the fractal. Every vertex of `base` is a corner anchor.
    ///
    /// At depth 0 the result holds `base` unchanged. Deeper, the smallest
    /// copies (the leaves) take `tip_color` when one is given.
    pub fn generate(
        &self,
        base: &Shape,
        depth: u32,
        tip_color: Option<Color>,
    ) -> Result<CompositeShape, GeometryError> {
        if depth > MAX_FRACTAL_DEPTH {
            return Err(GeometryError::invalid(
                "depth",
                format!("{depth} exceeds the maximum of {MAX_FRACTAL_DEPTH}"),
            ));
        }
        match self.projected_vertices(base.vertex_count(), depth) {
            Some(vertices) if vertices <= MAX_FRACTAL_VERTICES => {}
            projected => {
                return Err(GeometryError::invalid(
                    "depth",
                    format!(
                        "depth {depth} over {} corners needs {} vertices, more than {MAX_FRACTAL_VERTICES}",
                        base.vertex_count(),
                        projected.map_or_else(|| "too many".to_string(), |v| v.to_string()),
                    ),
                ));
            }
        }
        let _span = tracing::debug_span!("fractal", depth, scale = self.scale).entered();
        let shape = self.build(base, depth, tip_color)?;
        tracing::debug!(
            children = shape.child_count(),
            corners = base.vertex_count(),
            "fractal generated"
        );
        Ok(shape)
    }

    fn build(
        &self,
        shape: &Shape,
        depth: u32,
        tip_color: Option<Color>,
    ) -> Result<CompositeShape, GeometryError> {
        if depth == 0 {
            return Ok(CompositeShape::builder().add(shape.clone(), Vec3::ZERO).build());
        }

        let mut copy = shape.scaled(self.scale)?;
        if depth == 1 {
            if let Some(color) = tip_color {
                copy = copy.recolored(color);
            }
        }
        // One subtree, placed at every corner.
        let subtree: Arc<dyn Mesh> = Arc::new(self.build(&copy, depth - 1, tip_color)?);

        let centroid = shape.centroid();
        let copy_centroid = copy.centroid();
        let mut builder = CompositeShape::builder();
        if self.keep_body {
            builder.push(shape.clone(), Vec3::ZERO);
        }
        for &corner in shape.vertices() {
            let target = self.placement.anchor(centroid, corner, self.scale);
            builder.push_shared(Arc::clone(&subtree), target - copy_centroid);
        }
        Ok(builder.build())
    }
}

pub fn koch_cube(
    base: &Shape,
    depth: u32,
    tip_color: Option<Color>,
) -> Result<CompositeShape, GeometryError> {
    CornerFractal::KOCH_CUBE.generate(base, depth, tip_color)
}

pub fn koch_tetra(
    base: &Shape,
    depth: u32,
    tip_color: Option<Color>,
) -> Result<CompositeShape, GeometryError> {
    CornerFractal::KOCH_TETRA.generate(base, depth, tip_color)
}

pub fn sierpinski_tetra(
    base: &Shape,
    depth: u32,
    tip_color: Option<Color>,
) -> Result<CompositeShape, GeometryError> {
    CornerFractal::SIERPINSKI_TETRA.generate(base, depth, tip_color)
}
