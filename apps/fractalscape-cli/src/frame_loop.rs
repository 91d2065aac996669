use fractalscape_kernel::{World, WorldError};

/// Drives the world one frame at a time, capping each wall-clock delta so a
/// stall (a paused process, a dragged window) never turns into one huge step.
#[derive(Debug)]
pub struct FrameLoop {
    world: World,
    max_dt: f32,
    wall_time: f32,
}

impl FrameLoop {
    /// Takes a populated, running world and primes it with a zero-length
    /// frame so every mover and spinner has written its initial state.
    pub fn new(mut world: World, max_dt: f32) -> Result<Self, WorldError> {
        world.update(0.0)?;
        Ok(Self {
            world,
            max_dt,
            wall_time: 0.0,
        })
    }

    pub fn tick(&mut self, raw_dt: f32) -> Result<(), WorldError> {
        let dt = raw_dt.min(self.max_dt);
        self.wall_time += dt;
        self.world.update(dt)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Undilated seconds stepped so far.
    pub fn wall_time(&self) -> f32 {
        self.wall_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractalscape_kernel::{Entity, WobblyOrbit};

    fn running() -> World {
        let mut world = World::new();
        world.init();
        world
    }

    #[test]
    fn priming_frame_initializes_movers() {
        let mut world = running();
        let id = world
            .add(Entity::new().with_mover(WobblyOrbit::new(5.0, 0.0)))
            .unwrap();
        let frames = FrameLoop::new(world, 1.0 / 30.0).unwrap();
        assert!(frames.world().get(id).unwrap().position.is_some());
        assert_eq!(frames.world().time(), 0.0);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut frames = FrameLoop::new(running(), 0.5).unwrap();
        frames.tick(3.0).unwrap();
        frames.tick(0.25).unwrap();
        assert_eq!(frames.world().time(), 0.75);
        assert_eq!(frames.wall_time(), 0.75);
    }

    #[test]
    fn negative_frames_are_rejected() {
        let mut frames = FrameLoop::new(running(), 0.5).unwrap();
        assert!(frames.tick(-1.0).is_err());
    }

    #[test]
    fn uninitialized_world_cannot_be_driven() {
        assert!(FrameLoop::new(World::new(), 0.5).is_err());
    }
}
