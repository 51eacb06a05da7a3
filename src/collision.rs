use tracing::debug;

use crate::constants::BOUNCE_FACTOR;
use crate::geometry::Aabb;
use crate::vehicle::Vehicle;
use crate::world::World;

pub struct CollisionResolver;

impl CollisionResolver {
    /// Test the vehicle at its freshly integrated position against every
    /// obstacle, in registry order, and resolve the first overlap by
    /// rewinding the displacement and bouncing the speed back.
    ///
    /// Returns the vehicle box valid after resolution and whether a hit
    /// occurred. Which obstacle hit first is irrelevant: the response never
    /// depends on it.
    pub fn resolve(vehicle: &mut Vehicle, world: &World) -> (Aabb, bool) {
        let car_box = vehicle.bounding_box();

        for obstacle in world.obstacles() {
            if car_box.intersects(&obstacle.bounds()) {
                debug!(
                    speed = vehicle.speed,
                    x = vehicle.position.x,
                    z = vehicle.position.z,
                    "collision, rewinding displacement"
                );
                // Full rewind, not a push-out: the pre-displacement position
                // is known to be legal.
                vehicle.position = vehicle.previous_position;
                vehicle.speed *= BOUNCE_FACTOR;
                return (vehicle.bounding_box(), true);
            }
        }

        (car_box, false)
    }
}
