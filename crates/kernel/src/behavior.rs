//! Per-entity behaviors. Closures work directly: any
//! `FnMut(Vec3, f32, f32) -> Vec3` is a [`Mover`], any
//! `FnMut(Quat, f32, f32) -> Quat` is a [`Spin`], and any `Fn() -> f32` is a
//! [`TimeDilation`].

use fractalscape_common::{Quat, Vec3};

use crate::WorldError;

/// Produces an entity's next position from the current one and the world
/// clock `(time, dt)`, both already time-dilated.
pub trait Mover {
    fn next_position(&mut self, current: Vec3, time: f32, dt: f32) -> Vec3;
}

impl<F> Mover for F
where
    F: FnMut(Vec3, f32, f32) -> Vec3,
{
    fn next_position(&mut self, current: Vec3, time: f32, dt: f32) -> Vec3 {
        self(current, time, dt)
    }
}

/// Produces an entity's next orientation.
pub trait Spin {
    fn next_orientation(&mut self, current: Quat, time: f32, dt: f32) -> Quat;
}

impl<F> Spin for F
where
    F: FnMut(Quat, f32, f32) -> Quat,
{
    fn next_orientation(&mut self, current: Quat, time: f32, dt: f32) -> Quat {
        self(current, time, dt)
    }
}

/// A request to slow the global clock. The world runs at the minimum rate
/// over every entity that carries one.
pub trait TimeDilation {
    fn rate(&self) -> f32;
}

impl<F> TimeDilation for F
where
    F: Fn() -> f32,
{
    fn rate(&self) -> f32 {
        self()
    }
}

/// Constant-speed rotation about a fixed axis, as a function of world time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spinner {
    axis: Vec3,
    speed: f32,
}

impl Spinner {
    /// Spin about +Y at `speed` radians per second.
    pub fn new(speed: f32) -> Self {
        Self::around(Vec3::Y, speed)
    }

    /// A zero axis falls back to +Y.
    pub fn around(axis: Vec3, speed: f32) -> Self {
        Self {
            axis: axis.try_normalize().unwrap_or(Vec3::Y),
            speed,
        }
    }

    pub fn orientation_at(&self, time: f32) -> Quat {
        Quat::from_axis_angle(self.axis, self.speed * time)
    }
}

impl Spin for Spinner {
    fn next_orientation(&mut self, _current: Quat, time: f32, _dt: f32) -> Quat {
        self.orientation_at(time)
    }
}

/// Orbit around the origin in the XZ plane whose radius and height drift
/// sinusoidally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WobblyOrbit {
    pub radius: f32,
    pub wobble: f32,
    pub speed: f32,
}

impl WobblyOrbit {
    pub fn new(radius: f32, wobble: f32) -> Self {
        Self {
            radius,
            wobble,
            speed: 0.5,
        }
    }

    pub fn with_speed(self, speed: f32) -> Self {
        Self { speed, ..self }
    }

    pub fn position_at(&self, time: f32) -> Vec3 {
        let angle = self.speed * time;
        let r = self.radius + self.wobble * (angle * 0.5).sin();
        Vec3::new(
            r * angle.cos(),
            self.wobble * (angle * 0.3).sin(),
            r * angle.sin(),
        )
    }
}

impl Mover for WobblyOrbit {
    fn next_position(&mut self, _current: Vec3, time: f32, _dt: f32) -> Vec3 {
        self.position_at(time)
    }
}

/// Slows the clock to `rate` while `predicate` holds.
pub struct SlowMo {
    predicate: Box<dyn Fn() -> bool>,
    rate: f32,
}

impl SlowMo {
    /// `rate` must lie in (0, 1].
    pub fn new(predicate: impl Fn() -> bool + 'static, rate: f32) -> Result<Self, WorldError> {
        if !(rate > 0.0 && rate <= 1.0) {
            return Err(WorldError::InvalidArgument {
                name: "rate",
                reason: format!("must lie in (0, 1], got {rate}"),
            });
        }
        Ok(Self {
            predicate: Box::new(predicate),
            rate,
        })
    }

    pub fn always(rate: f32) -> Result<Self, WorldError> {
        Self::new(|| true, rate)
    }
}

impl TimeDilation for SlowMo {
    fn rate(&self) -> f32 {
        if (self.predicate)() { self.rate } else { 1.0 }
    }
}

impl std::fmt::Debug for SlowMo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlowMo").field("rate", &self.rate).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::f32::consts::PI;
    use std::rc::Rc;

    #[test]
    fn closures_are_behaviors() {
        let mut mover = |p: Vec3, _t: f32, dt: f32| p + Vec3::X * dt;
        assert_eq!(mover.next_position(Vec3::ZERO, 0.0, 2.0), Vec3::new(2.0, 0.0, 0.0));

        let dilation = || 0.25_f32;
        assert_eq!(dilation.rate(), 0.25);
    }

    #[test]
    fn spinner_is_a_function_of_time() {
        let mut spinner = Spinner::new(PI);
        let half_turn = spinner.next_orientation(Quat::IDENTITY, 1.0, 0.1);
        let rotated = half_turn * Vec3::X;
        assert!((rotated - Vec3::NEG_X).length() < 1e-5);
        assert_eq!(spinner.orientation_at(0.0), Quat::IDENTITY);
    }

    #[test]
    fn spinner_zero_axis_falls_back_to_y() {
        let spinner = Spinner::around(Vec3::ZERO, 1.0);
        assert_eq!(spinner, Spinner::new(1.0));
    }

    #[test]
    fn orbit_starts_on_the_x_axis() {
        let orbit = WobblyOrbit::new(10.0, 8.0);
        assert_eq!(orbit.position_at(0.0), Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn orbit_radius_stays_within_wobble() {
        let orbit = WobblyOrbit::new(10.0, 2.0).with_speed(1.3);
        for step in 0..200 {
            let p = orbit.position_at(step as f32 * 0.1);
            let r = Vec3::new(p.x, 0.0, p.z).length();
            assert!((8.0 - 1e-4..=12.0 + 1e-4).contains(&r));
        }
    }

    #[test]
    fn slowmo_follows_its_predicate() {
        let inside = Rc::new(Cell::new(false));
        let flag = Rc::clone(&inside);
        let slowmo = SlowMo::new(move || flag.get(), 0.2).unwrap();
        assert_eq!(slowmo.rate(), 1.0);
        inside.set(true);
        assert_eq!(slowmo.rate(), 0.2);
    }

    #[test]
    fn slowmo_rejects_rates_outside_unit_interval() {
        assert!(SlowMo::always(0.0).is_err());
        assert!(SlowMo::always(1.5).is_err());
        assert!(SlowMo::always(f32::NAN).is_err());
        assert!(SlowMo::always(1.0).is_ok());
    }
}
