/// Errors from mesh construction and validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    #[error("face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
    #[error("face {face} has {len} indices, at least 3 are required")]
    DegenerateFace { face: usize, len: usize },
    #[error("{colors} colors for {vertices} vertices")]
    ColorCountMismatch { vertices: usize, colors: usize },
}

impl GeometryError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Reject sizes that would produce an inside-out or degenerate primitive.
pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<f32, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::invalid(
            name,
            format!("must be finite and positive, got {value}"),
        ))
    }
}
