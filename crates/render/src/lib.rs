//! Rendering Adapter: what a rasterizer needs from the world, and nothing more.
//!
//! # Invariants
//! - Renderers only read the world; they never mutate entity state.
//! - Draw items carry world-space vertices, parallel colors and faces whose
//!   indices stay valid for those vertices.
//!
//! Window creation and draw-call issuance live outside this crate. The
//! `DebugTextRenderer` stands in for them in headless runs and tests.

mod draw;
mod renderer;

pub use draw::DrawItem;
pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "fractalscape-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
