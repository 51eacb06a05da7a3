use glam::Vec3;

use crate::constants::{
    ACCELERATION, BRAKE_POWER, CAR_BOX_CENTER_Y, CAR_HALF_EXTENTS, FRICTION, MAX_SPEED,
    REVERSE_ACCELERATION, REVERSE_SPEED_RATIO, STEERING_DAMP, STEER_AUTHORITY_DIVISOR,
    STEER_STRENGTH,
};
use crate::geometry::Aabb;
use crate::input::InputState;

/// Player car state, integrated once per tick.
///
/// Only `integrate` mutates speed/heading/position; the collision resolver
/// may rewind `position` to `previous_position` afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub position: Vec3,
    pub previous_position: Vec3,
    pub heading: f32,
    pub speed: f32,
    pub steering: f32,
}

impl Vehicle {
    pub fn new() -> Self {
        Vehicle {
            position: Vec3::ZERO,
            previous_position: Vec3::ZERO,
            heading: 0.0,
            speed: 0.0,
            steering: 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Vehicle::new();
    }

    /// Advance one tick and return the displacement applied this tick.
    ///
    /// `dt` must already be clamped and finite (the simulation loop owns
    /// that); a zero `dt` is a safe no-op.
    pub fn integrate(&mut self, input: &InputState, dt: f32) -> Vec3 {
        // Throttle. Both intents may be held at once and simply sum.
        if input.accelerate {
            self.speed += ACCELERATION * dt;
        }
        if input.reverse {
            self.speed -= REVERSE_ACCELERATION * dt;
        }

        // Rolling friction only applies when coasting.
        if !input.accelerate && !input.reverse {
            self.speed = decay_toward_zero(self.speed, FRICTION * dt);
        }

        // Braking compounds with friction when coasting.
        if input.brake {
            self.speed = decay_toward_zero(self.speed, BRAKE_POWER * dt);
        }

        self.speed = self
            .speed
            .clamp(-MAX_SPEED * REVERSE_SPEED_RATIO, MAX_SPEED);

        // Steering authority ramps up with speed: a parked car barely turns.
        let authority = (self.speed.abs() / STEER_AUTHORITY_DIVISOR).min(1.0);
        let target_steer = input.steer_input() * authority;
        self.steering = damp(self.steering, target_steer, STEERING_DAMP, dt);

        // Zero speed counts as forward so the turn direction is defined.
        let travel_sign = if self.speed < 0.0 { -1.0 } else { 1.0 };
        self.heading += self.steering * STEER_STRENGTH * dt * travel_sign;

        self.previous_position = self.position;
        let displacement = self.forward() * self.speed * dt;
        self.position += displacement;
        displacement
    }

    /// Unit forward vector: canonical +Z rotated by `heading` around +Y.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.heading.sin(), 0.0, self.heading.cos())
    }

    /// Collision box for the current position. The vertical center is fixed
    /// to model ground clearance, independent of `position.y`.
    pub fn bounding_box(&self) -> Aabb {
        let mut center = self.position;
        center.y = CAR_BOX_CENTER_Y;
        Aabb::from_center_half_extents(center, CAR_HALF_EXTENTS)
    }
}

/// Shrink `value` toward zero by `amount`, never overshooting.
fn decay_toward_zero(value: f32, amount: f32) -> f32 {
    let magnitude = (value.abs() - amount).max(0.0);
    magnitude * value.signum()
}

/// Framerate-independent exponential approach of `current` toward `target`.
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    target + (current - target) * (-rate * dt).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn throttle() -> InputState {
        InputState {
            accelerate: true,
            ..InputState::default()
        }
    }

    const STEP: f32 = 1.0 / 60.0;

    #[test]
    fn accelerates_from_rest() {
        let mut car = Vehicle::new();
        // One second of held throttle at 60 Hz.
        let mut last = 0.0;
        for _ in 0..60 {
            car.integrate(&throttle(), STEP);
            assert!(car.speed > last, "speed must climb monotonically");
            assert!(car.speed <= MAX_SPEED);
            last = car.speed;
        }
        assert_relative_eq!(car.speed, 24.0, epsilon = 1e-3);
    }

    #[test]
    fn speed_never_leaves_clamp_range() {
        let mut car = Vehicle::new();
        for _ in 0..2000 {
            car.integrate(&throttle(), STEP);
        }
        assert_relative_eq!(car.speed, MAX_SPEED);

        let reverse = InputState {
            reverse: true,
            ..InputState::default()
        };
        for _ in 0..2000 {
            car.integrate(&reverse, STEP);
            assert!(car.speed >= -MAX_SPEED * REVERSE_SPEED_RATIO);
            assert!(car.speed <= MAX_SPEED);
            assert!(car.speed.is_finite());
        }
        assert_relative_eq!(car.speed, -MAX_SPEED * REVERSE_SPEED_RATIO);
    }

    #[test]
    fn friction_decays_linearly_and_stops_at_zero() {
        let mut car = Vehicle::new();
        car.speed = 3.0;
        let idle = InputState::default();

        car.integrate(&idle, 0.1);
        assert_relative_eq!(car.speed, 3.0 - FRICTION * 0.1, epsilon = 1e-6);

        // Burn off the rest; the sign must never flip.
        for _ in 0..100 {
            car.integrate(&idle, 0.1);
            assert!(car.speed >= 0.0);
        }
        assert_eq!(car.speed, 0.0);
    }

    #[test]
    fn brake_compounds_with_friction() {
        let mut coasting = Vehicle::new();
        coasting.speed = 20.0;
        let mut braking = coasting.clone();

        coasting.integrate(&InputState::default(), 0.1);
        let braked = InputState {
            brake: true,
            ..InputState::default()
        };
        braking.integrate(&braked, 0.1);

        assert_relative_eq!(
            coasting.speed,
            20.0 - FRICTION * 0.1,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            braking.speed,
            20.0 - FRICTION * 0.1 - BRAKE_POWER * 0.1,
            epsilon = 1e-6
        );
    }

    #[test]
    fn simultaneous_throttle_and_reverse_sum() {
        let mut car = Vehicle::new();
        let both = InputState {
            accelerate: true,
            reverse: true,
            ..InputState::default()
        };
        car.integrate(&both, 1.0);
        assert_relative_eq!(car.speed, ACCELERATION - REVERSE_ACCELERATION, epsilon = 1e-5);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut car = Vehicle::new();
        car.speed = 12.0;
        car.heading = 0.4;
        car.steering = 0.3;
        car.position = Vec3::new(5.0, 0.0, -2.0);
        let before = car.clone();

        let disp = car.integrate(&throttle(), 0.0);
        assert_eq!(disp, Vec3::ZERO);
        assert_eq!(car.speed, before.speed);
        assert_eq!(car.heading, before.heading);
        assert_eq!(car.steering, before.steering);
        assert_eq!(car.position, before.position);
    }

    #[test]
    fn stationary_car_does_not_turn() {
        let mut car = Vehicle::new();
        let hard_left = InputState {
            steer_left: true,
            ..InputState::default()
        };
        for _ in 0..120 {
            car.integrate(&hard_left, STEP);
        }
        // Steering authority is zero at zero speed, so heading stays put.
        assert_eq!(car.heading, 0.0);
        assert_eq!(car.position, Vec3::ZERO);
    }

    #[test]
    fn steering_turns_the_moving_car() {
        let mut car = Vehicle::new();
        let forward_left = InputState {
            accelerate: true,
            steer_left: true,
            ..InputState::default()
        };
        for _ in 0..120 {
            car.integrate(&forward_left, STEP);
        }
        assert!(car.heading > 0.1);
    }

    #[test]
    fn reverse_steering_flips_turn_direction() {
        let mut forward = Vehicle::new();
        let mut backward = Vehicle::new();
        let left_fwd = InputState {
            accelerate: true,
            steer_left: true,
            ..InputState::default()
        };
        let left_rev = InputState {
            reverse: true,
            steer_left: true,
            ..InputState::default()
        };
        for _ in 0..120 {
            forward.integrate(&left_fwd, STEP);
            backward.integrate(&left_rev, STEP);
        }
        assert!(forward.heading > 0.0);
        assert!(backward.heading < 0.0);
    }

    #[test]
    fn forward_vector_tracks_heading() {
        let mut car = Vehicle::new();
        assert_relative_eq!(car.forward().z, 1.0);
        car.heading = std::f32::consts::FRAC_PI_2;
        assert_relative_eq!(car.forward().x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(car.forward().z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn bounding_box_is_pinned_to_ground_clearance() {
        let mut car = Vehicle::new();
        car.position = Vec3::new(10.0, 0.0, -4.0);
        let aabb = car.bounding_box();
        let center = aabb.center();
        assert_relative_eq!(center.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(center.y, CAR_BOX_CENTER_Y, epsilon = 1e-5);
        assert_relative_eq!(center.z, -4.0, epsilon = 1e-5);
        // The corners round-trip through min/max, so compare with tolerance.
        let half = aabb.half_extents();
        assert_relative_eq!(half.x, CAR_HALF_EXTENTS.x, epsilon = 1e-5);
        assert_relative_eq!(half.y, CAR_HALF_EXTENTS.y, epsilon = 1e-5);
        assert_relative_eq!(half.z, CAR_HALF_EXTENTS.z, epsilon = 1e-5);
    }

    #[test]
    fn damp_converges_and_is_exact_at_zero_dt() {
        assert_eq!(damp(1.0, 0.0, STEERING_DAMP, 0.0), 1.0);
        let mut v = 1.0;
        for _ in 0..300 {
            v = damp(v, 0.0, STEERING_DAMP, STEP);
        }
        assert!(v.abs() < 1e-5);
    }
}
