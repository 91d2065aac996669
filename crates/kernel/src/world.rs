use std::collections::BTreeMap;

use fractalscape_common::EntityId;

use crate::{Entity, Event, ListenerError};

/// Errors from world operations.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("world is not initialized; call init() first")]
    NotInitialized,
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    #[error(transparent)]
    Listener(#[from] ListenerError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldState {
    Uninitialized,
    Running,
}

/// The live entity registry and the global clock.
///
/// Entities are keyed by id in a BTreeMap, so enumeration follows creation
/// order and is the same on every run. Nothing is ever removed while running.
pub struct World {
    state: WorldState,
    entities: BTreeMap<EntityId, Entity>,
    /// Accumulated dilated seconds.
    time: f32,
    frame: u64,
    camera: Option<EntityId>,
    entity_added: Event<Entity>,
}

impl World {
    /// An uninitialized world. Call [`World::init`] before adding or updating.
    pub fn new() -> Self {
        Self {
            state: WorldState::Uninitialized,
            entities: BTreeMap::new(),
            time: 0.0,
            frame: 0,
            camera: None,
            entity_added: Event::new(),
        }
    }

    /// Enter the running state with an empty registry and the clock at zero.
    /// Registered listeners are kept.
    pub fn init(&mut self) {
        self.entities.clear();
        self.time = 0.0;
        self.frame = 0;
        self.camera = None;
        self.state = WorldState::Running;
        tracing::debug!("world initialized");
    }

    pub fn state(&self) -> WorldState {
        self.state
    }

    /// Accumulated dilated time in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Number of completed updates since `init`.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Read-only access to all entities, in enumeration order.
    pub fn entities(&self) -> &BTreeMap<EntityId, Entity> {
        &self.entities
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// The most recently added entity carrying a camera.
    pub fn camera(&self) -> Option<&Entity> {
        self.camera.and_then(|id| self.entities.get(&id))
    }

    pub fn camera_id(&self) -> Option<EntityId> {
        self.camera
    }

    /// Register a listener for entity additions. Listeners run in
    /// registration order.
    pub fn on_entity_added(
        &mut self,
        listener: impl FnMut(&Entity) -> Result<(), ListenerError> + 'static,
    ) {
        self.entity_added.register(listener);
    }

    /// Register an entity and notify listeners.
    ///
    /// An entity whose id is already present replaces the old one. An entity
    /// with a camera becomes the world camera, replacing any earlier one. If a
    /// listener fails, the entity stays registered but the camera is not
    /// updated and the error is returned.
    pub fn add(&mut self, entity: Entity) -> Result<EntityId, WorldError> {
        self.ensure_running()?;
        let id = entity.id();
        let is_camera = entity.camera.is_some();

        if self.entities.insert(id, entity).is_some() {
            tracing::warn!(%id, "entity replaced an existing entity with the same id");
        }
        self.entity_added.fire(&self.entities[&id])?;

        if is_camera {
            if let Some(previous) = self.camera.replace(id).filter(|prev| *prev != id) {
                tracing::warn!(%previous, current = %id, "camera replaced");
            }
        } else if self.camera == Some(id) {
            tracing::warn!(%id, "camera entity replaced by one without a camera");
            self.camera = None;
        }
        tracing::debug!(%id, entities = self.entities.len(), "entity added");
        Ok(id)
    }

    /// The clock rate for the next frame: the minimum over every entity's
    /// slow-motion request, or 1 when no entity makes one.
    pub fn rate(&self) -> f32 {
        self.entities
            .values()
            .filter_map(|e| e.slowmo.as_ref())
            .map(|s| s.rate())
            .reduce(f32::min)
            .unwrap_or(1.0)
    }

    /// Advance one frame by `dt` wall-clock seconds.
    ///
    /// The clock advances by `dt * rate()`, then every mover and spinner is
    /// evaluated against that same `(time, dt)` pair, in enumeration order.
    /// Capping `dt` is the caller's job.
    pub fn update(&mut self, dt: f32) -> Result<(), WorldError> {
        self.ensure_running()?;
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(WorldError::InvalidArgument {
                name: "dt",
                reason: format!("must be finite and non-negative, got {dt}"),
            });
        }

        let rate = self.rate();
        if !(rate.is_finite() && rate > 0.0 && rate <= 1.0) {
            return Err(WorldError::InvalidArgument {
                name: "rate",
                reason: format!("slow-motion rate must lie in (0, 1], got {rate}"),
            });
        }
        let dt = dt * rate;
        self.time += dt;
        self.frame += 1;

        let time = self.time;
        for entity in self.entities.values_mut() {
            if let Some(mover) = entity.mover.as_mut() {
                let current = entity.position.unwrap_or_default();
                entity.position = Some(mover.next_position(current, time, dt));
            }
            if let Some(spin) = entity.spin.as_mut() {
                let current = entity.orientation.unwrap_or_default();
                entity.orientation = Some(spin.next_orientation(current, time, dt));
            }
        }

        tracing::trace!(frame = self.frame, time, rate, "world updated");
        Ok(())
    }

    fn ensure_running(&self) -> Result<(), WorldError> {
        match self.state {
            WorldState::Running => Ok(()),
            WorldState::Uninitialized => Err(WorldError::NotInitialized),
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("state", &self.state)
            .field("time", &self.time)
            .field("frame", &self.frame)
            .field("entities", &self.entities.len())
            .field("camera", &self.camera)
            .field("listeners", &self.entity_added.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, SlowMo, Spinner};
    use fractalscape_common::{Quat, Vec3};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn running() -> World {
        let mut w = World::new();
        w.init();
        w
    }

    #[test]
    fn world_starts_uninitialized() {
        let mut w = World::new();
        assert_eq!(w.state(), WorldState::Uninitialized);
        assert!(matches!(w.update(0.1), Err(WorldError::NotInitialized)));
        assert!(matches!(w.add(Entity::new()), Err(WorldError::NotInitialized)));
    }

    #[test]
    fn init_resets_clock_and_entities() {
        let mut w = running();
        w.add(Entity::new()).unwrap();
        w.update(0.5).unwrap();
        w.init();
        assert_eq!(w.state(), WorldState::Running);
        assert_eq!(w.time(), 0.0);
        assert_eq!(w.frame(), 0);
        assert_eq!(w.entity_count(), 0);
    }

    #[test]
    fn empty_world_still_advances_time() {
        let mut w = running();
        assert_eq!(w.rate(), 1.0);
        w.update(0.25).unwrap();
        w.update(0.25).unwrap();
        assert_eq!(w.time(), 0.5);
        assert_eq!(w.frame(), 2);
    }

    #[test]
    fn slowmo_scales_time_and_dt() {
        let mut w = running();
        let id = w
            .add(
                Entity::new()
                    .at(Vec3::ZERO)
                    .with_slowmo(|| 0.5_f32)
                    .with_mover(|p: Vec3, _t: f32, dt: f32| p + Vec3::new(dt, 0.0, 0.0)),
            )
            .unwrap();

        w.update(2.0).unwrap();

        assert_eq!(w.time(), 1.0);
        assert_eq!(w.get(id).unwrap().position.unwrap().x, 1.0);
    }

    #[test]
    fn rate_is_minimum_over_slowmo_entities() {
        let mut w = running();
        w.add(Entity::new().with_slowmo(|| 0.8_f32)).unwrap();
        w.add(Entity::new().with_slowmo(SlowMo::always(0.2).unwrap())).unwrap();
        w.add(Entity::new().with_slowmo(SlowMo::new(|| false, 0.1).unwrap()))
            .unwrap();
        assert_eq!(w.rate(), 0.2);
    }

    #[test]
    fn movers_and_spinners_share_the_frame_clock() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut w = running();
        for _ in 0..3 {
            let move_log = Rc::clone(&seen);
            let spin_log = Rc::clone(&seen);
            w.add(
                Entity::new()
                    .with_mover(move |p: Vec3, t: f32, dt: f32| {
                        move_log.borrow_mut().push((t, dt));
                        p
                    })
                    .with_spin(move |q: Quat, t: f32, dt: f32| {
                        spin_log.borrow_mut().push((t, dt));
                        q
                    }),
            )
            .unwrap();
        }
        w.update(0.5).unwrap();
        w.update(0.25).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 12);
        assert!(seen[..6].iter().all(|s| *s == (0.5, 0.5)));
        assert!(seen[6..].iter().all(|s| *s == (0.75, 0.25)));
    }

    #[test]
    fn spinner_writes_orientation() {
        let mut w = running();
        let id = w.add(Entity::new().with_spin(Spinner::new(2.0))).unwrap();
        w.update(0.5).unwrap();
        let expected = Quat::from_axis_angle(Vec3::Y, 1.0);
        assert!(w.get(id).unwrap().orientation.unwrap().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn entities_without_behaviors_are_untouched() {
        let mut w = running();
        let id = w.add(Entity::new().at(Vec3::ONE)).unwrap();
        w.update(1.0).unwrap();
        let e = w.get(id).unwrap();
        assert_eq!(e.position, Some(Vec3::ONE));
        assert_eq!(e.orientation, None);
    }

    #[test]
    fn negative_dt_is_rejected() {
        let mut w = running();
        assert!(matches!(
            w.update(-0.1),
            Err(WorldError::InvalidArgument { name: "dt", .. })
        ));
        assert!(w.update(f32::NAN).is_err());
        assert_eq!(w.time(), 0.0);
    }

    #[test]
    fn out_of_range_rate_is_rejected() {
        for bad in [-0.5_f32, 0.0, 2.0, f32::NAN] {
            let mut w = running();
            let id = w
                .add(
                    Entity::new()
                        .at(Vec3::ZERO)
                        .with_slowmo(move || bad)
                        .with_mover(|p: Vec3, _t: f32, dt: f32| p + Vec3::X * dt),
                )
                .unwrap();
            assert!(matches!(
                w.update(1.0),
                Err(WorldError::InvalidArgument { name: "rate", .. })
            ));
            assert_eq!(w.time(), 0.0);
            assert_eq!(w.frame(), 0);
            assert_eq!(w.get(id).unwrap().position, Some(Vec3::ZERO));
        }
    }

    #[test]
    fn add_fires_listeners_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut w = World::new();
        for tag in 0..2 {
            let log = Rc::clone(&log);
            w.on_entity_added(move |e: &Entity| {
                log.borrow_mut().push((tag, e.id()));
                Ok(())
            });
        }
        w.init();
        let id = w.add(Entity::new()).unwrap();
        assert_eq!(*log.borrow(), [(0, id), (1, id)]);
    }

    #[test]
    fn listener_failure_propagates_from_add() {
        let mut w = running();
        w.on_entity_added(|_| Err(ListenerError::msg("rejected")));
        let entity = Entity::new().with_camera(Camera::default());
        let id = entity.id();

        let err = w.add(entity).unwrap_err();
        assert!(matches!(err, WorldError::Listener(_)));
        assert!(w.get(id).is_some());
        assert!(w.camera().is_none());
    }

    #[test]
    fn last_camera_wins() {
        let mut w = running();
        let first = w.add(Entity::new().with_camera(Camera::default())).unwrap();
        assert_eq!(w.camera_id(), Some(first));
        w.add(Entity::new()).unwrap();
        assert_eq!(w.camera_id(), Some(first));
        let second = w.add(Entity::new().with_camera(Camera::default())).unwrap();
        assert_eq!(w.camera_id(), Some(second));
    }

    #[test]
    fn duplicate_id_overwrites() {
        let mut w = running();
        let id = EntityId::new();
        w.add(Entity::with_id(id).at(Vec3::X)).unwrap();
        w.add(Entity::with_id(id).at(Vec3::Y)).unwrap();
        assert_eq!(w.entity_count(), 1);
        assert_eq!(w.get(id).unwrap().position, Some(Vec3::Y));
    }

    #[test]
    fn replacing_the_camera_entity_without_a_camera_clears_it() {
        let mut w = running();
        let id = w.add(Entity::new().with_camera(Camera::default())).unwrap();
        w.add(Entity::with_id(id)).unwrap();
        assert_eq!(w.camera_id(), None);
        assert!(w.camera().is_none());
    }

    #[test]
    fn debug_output_counts_listeners() {
        let mut w = running();
        w.on_entity_added(|_| Ok(()));
        w.on_entity_added(|_| Ok(()));
        assert!(format!("{w:?}").contains("listeners: 2"));
    }

    #[test]
    fn enumeration_follows_creation_order() {
        let mut w = running();
        let entities: Vec<Entity> = (0..10).map(|_| Entity::new()).collect();
        let ids: Vec<EntityId> = entities.iter().map(Entity::id).collect();
        for e in entities.into_iter().rev() {
            w.add(e).unwrap();
        }
        let keys: Vec<EntityId> = w.entities().keys().copied().collect();
        assert_eq!(keys, ids);
    }
}
