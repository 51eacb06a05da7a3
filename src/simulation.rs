use glam::Vec3;
use tracing::info;

use crate::camera::rotate_y;
use crate::collision::CollisionResolver;
use crate::constants::{CAMERA_OFFSET, MAX_DT, WHEEL_RADIUS};
use crate::input::InputState;
use crate::vehicle::Vehicle;
use crate::world::World;

/// Per-tick output handed to the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub position: Vec3,
    pub heading: f32,
    /// Wheel-spin angular delta for this tick, radians.
    pub wheel_spin: f32,
    /// Rounded |speed| in km/h, safe to display directly.
    pub speed_kmh: u32,
    /// Floored accumulated distance in meters.
    pub distance_m: u64,
    /// Desired camera position in world space (behind and above the car).
    pub camera_focus: Vec3,
    pub collided: bool,
}

/// The simulation core: one car, one static world, one score.
pub struct Simulation {
    vehicle: Vehicle,
    world: World,
    distance: f32,
}

impl Simulation {
    pub fn new(world: World) -> Self {
        Simulation {
            vehicle: Vehicle::new(),
            world,
            distance: 0.0,
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Run one tick: sanitize dt, integrate dynamics, resolve collisions,
    /// accrue score and derive the presentation frame.
    pub fn tick(&mut self, input: &InputState, dt: f32) -> Frame {
        // A stalled or broken clock must not poison the state.
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_DT) } else { 0.0 };

        let displacement = self.vehicle.integrate(input, dt);
        let (_, collided) = CollisionResolver::resolve(&mut self.vehicle, &self.world);

        // Score accrues for the attempted displacement, reverse included.
        // A rewound tick still traveled before bouncing back.
        self.distance += displacement.length();

        Frame {
            position: self.vehicle.position,
            heading: self.vehicle.heading,
            wheel_spin: self.vehicle.speed * dt / WHEEL_RADIUS,
            speed_kmh: (self.vehicle.speed.abs() * 3.6).round() as u32,
            distance_m: self.distance.floor() as u64,
            camera_focus: self.vehicle.position + rotate_y(CAMERA_OFFSET, self.vehicle.heading),
            collided,
        }
    }

    /// Restart: car and score back to initial values. Held inputs and the
    /// frame cadence are untouched.
    pub fn reset(&mut self) {
        info!(distance = self.distance, "restart");
        self.vehicle.reset();
        self.distance = 0.0;
    }
}
