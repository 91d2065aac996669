use std::cell::Cell;
use std::rc::Rc;

use fractalscape_common::Vec3;
use fractalscape_kernel::Mover;

/// Last known camera position, shared between the camera's mover (writer) and
/// slow-motion predicates (readers).
///
/// World rates are sampled before movers run, so readers see the position
/// from the previous frame.
#[derive(Debug, Clone, Default)]
pub struct CameraTracker(Rc<Cell<Vec3>>);

impl CameraTracker {
    pub fn new(start: Vec3) -> Self {
        Self(Rc::new(Cell::new(start)))
    }

    pub fn get(&self) -> Vec3 {
        self.0.get()
    }

    pub fn set(&self, position: Vec3) {
        self.0.set(position);
    }

    /// True while the camera is strictly inside an origin-centered cube of
    /// side `edge`.
    pub fn is_inside_cube(&self, edge: f32) -> bool {
        self.get().abs().max_element() < edge / 2.0
    }

    /// Wrap a mover so every position it produces is recorded here.
    pub fn follow<M: Mover>(&self, mover: M) -> TrackedMover<M> {
        TrackedMover {
            inner: mover,
            tracker: self.clone(),
        }
    }
}

/// A mover that reports its output to a [`CameraTracker`].
pub struct TrackedMover<M> {
    inner: M,
    tracker: CameraTracker,
}

impl<M: Mover> Mover for TrackedMover<M> {
    fn next_position(&mut self, current: Vec3, time: f32, dt: f32) -> Vec3 {
        let position = self.inner.next_position(current, time, dt);
        self.tracker.set(position);
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractalscape_kernel::WobblyOrbit;

    #[test]
    fn inside_test_uses_half_edge() {
        let tracker = CameraTracker::new(Vec3::new(0.0, 23.9, 0.0));
        assert!(tracker.is_inside_cube(48.0));
        tracker.set(Vec3::new(-24.0, 0.0, 0.0));
        assert!(!tracker.is_inside_cube(48.0));
    }

    #[test]
    fn followed_mover_records_its_output() {
        let tracker = CameraTracker::default();
        let orbit = WobblyOrbit::new(10.0, 0.0);
        let mut mover = tracker.follow(orbit);
        let p = mover.next_position(Vec3::ZERO, 1.0, 0.1);
        assert_eq!(p, orbit.position_at(1.0));
        assert_eq!(tracker.get(), p);
    }

    #[test]
    fn clones_share_state() {
        let a = CameraTracker::default();
        let b = a.clone();
        b.set(Vec3::ONE);
        assert_eq!(a.get(), Vec3::ONE);
    }
}
