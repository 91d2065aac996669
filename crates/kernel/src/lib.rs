//! World Kernel: the entity registry, the global clock and per-frame updates.
//!
//! # Invariants
//! - `time` only grows; each frame advances it by `dt * rate`, where `rate` is
//!   the minimum over all slow-motion entities (1 when there are none). A
//!   frame whose rate falls outside (0, 1] is rejected before anything moves.
//! - Every mover and spinner in a frame sees the same `(time, dt)` pair.
//! - Only positions, orientations and the clock change during `update`.

pub mod behavior;
pub mod entity;
pub mod event;
pub mod world;

pub use behavior::{Mover, SlowMo, Spin, Spinner, TimeDilation, WobblyOrbit};
pub use entity::{Camera, Entity};
pub use event::{Event, ListenerError};
pub use world::{World, WorldError, WorldState};
