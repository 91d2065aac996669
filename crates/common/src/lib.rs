//! Shared types: entity handles, colors and the math types every crate speaks.

mod color;
mod types;

pub use color::Color;
pub use glam::{Quat, Vec3};
pub use types::EntityId;
