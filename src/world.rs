use glam::Vec3;
use rand::Rng;

use crate::constants::{BUILDING_COUNT, WALL_DISTANCE};
use crate::geometry::Aabb;

/// One static piece of collidable geometry.
///
/// The box is recomputed from the stored transform on every query rather
/// than cached, so an obstacle whose transform changed would still report
/// correct bounds. Nothing moves today; the recompute is cheap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Obstacle {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Obstacle {
            center,
            half_extents,
        }
    }

    /// Current world-space bounds, derived fresh from the transform.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, self.half_extents)
    }
}

/// Decorative road strip, rendered but never collided with.
#[derive(Debug, Clone, Copy)]
pub struct Road {
    pub x: f32,
    pub z: f32,
    pub width: f32,
    pub length: f32,
    pub horizontal: bool,
}

/// World Geometry Registry: built once at startup, membership fixed for the
/// whole session.
pub struct World {
    obstacles: Vec<Obstacle>,
    roads: Vec<Road>,
}

impl World {
    /// Procedurally populated city: four perimeter walls, a road grid and
    /// randomly placed buildings along the roads.
    pub fn city<R: Rng>(rng: &mut R) -> Self {
        let mut obstacles = Vec::with_capacity(4 + BUILDING_COUNT);

        // Perimeter walls, one per map edge.
        let d = WALL_DISTANCE;
        let long = 98.0 * 5.0 / 2.0;
        let short = 98.0 / 2.0;
        let wall_half_height = 3.0;
        for (center, half_extents) in [
            (Vec3::new(0.0, 3.0, d), Vec3::new(long, wall_half_height, short)),
            (Vec3::new(0.0, 3.0, -d), Vec3::new(long, wall_half_height, short)),
            (Vec3::new(d, 3.0, 0.0), Vec3::new(short, wall_half_height, long)),
            (Vec3::new(-d, 3.0, 0.0), Vec3::new(short, wall_half_height, long)),
        ] {
            obstacles.push(Obstacle::new(center, half_extents));
        }

        // Buildings scattered along the four road corridors.
        for _ in 0..BUILDING_COUNT {
            let h = rng.gen_range(7.0..25.0);
            let w = rng.gen_range(8.0..20.0);
            let depth = rng.gen_range(8.0..20.0);

            let spread = rng.gen_range(-220.0..220.0);
            let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            let offset = rng.gen_range(20.0..70.0f32) * side;

            let center = match rng.gen_range(0..4) {
                0 => Vec3::new(spread, h / 2.0, offset),
                1 => Vec3::new(offset, h / 2.0, spread),
                2 => Vec3::new(spread, h / 2.0, offset + 160.0),
                _ => Vec3::new(offset + 160.0, h / 2.0, spread),
            };

            obstacles.push(Obstacle::new(
                center,
                Vec3::new(w / 2.0, h / 2.0, depth / 2.0),
            ));
        }

        let roads = vec![
            Road { x: 0.0, z: 0.0, width: 28.0, length: 360.0, horizontal: false },
            Road { x: 0.0, z: 0.0, width: 28.0, length: 360.0, horizontal: true },
            Road { x: 160.0, z: 0.0, width: 24.0, length: 300.0, horizontal: false },
            Road { x: -160.0, z: 0.0, width: 24.0, length: 300.0, horizontal: false },
            Road { x: 0.0, z: 160.0, width: 24.0, length: 300.0, horizontal: true },
            Road { x: 0.0, z: -160.0, width: 24.0, length: 300.0, horizontal: true },
        ];

        World { obstacles, roads }
    }

    /// Registry with an explicit obstacle set, mainly for tests and tools.
    pub fn from_obstacles(obstacles: Vec<Obstacle>) -> Self {
        World {
            obstacles,
            roads: Vec::new(),
        }
    }

    /// Obstacles in registry order; the collision sweep relies on this being
    /// a stable, ordered view.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn city_has_walls_and_buildings() {
        let world = World::city(&mut StdRng::seed_from_u64(7));
        assert_eq!(world.obstacles().len(), 4 + BUILDING_COUNT);
    }

    #[test]
    fn walls_sit_on_the_perimeter() {
        let world = World::city(&mut StdRng::seed_from_u64(7));
        let walls = &world.obstacles()[..4];
        assert_eq!(walls[0].center, Vec3::new(0.0, 3.0, WALL_DISTANCE));
        assert_eq!(walls[1].center, Vec3::new(0.0, 3.0, -WALL_DISTANCE));
        assert_eq!(walls[2].center, Vec3::new(WALL_DISTANCE, 3.0, 0.0));
        assert_eq!(walls[3].center, Vec3::new(-WALL_DISTANCE, 3.0, 0.0));
        // The z walls span east-west, the x walls north-south.
        assert!(walls[0].half_extents.x > walls[0].half_extents.z);
        assert!(walls[2].half_extents.z > walls[2].half_extents.x);
    }

    #[test]
    fn buildings_rest_on_the_ground() {
        let world = World::city(&mut StdRng::seed_from_u64(42));
        for building in &world.obstacles()[4..] {
            let bounds = building.bounds();
            assert!(bounds.min.y.abs() < 1e-4, "building must touch y = 0");
            assert!(bounds.max.y >= 7.0 && bounds.max.y <= 25.0);
        }
    }

    #[test]
    fn bounds_follow_a_moved_transform() {
        let mut obstacle = Obstacle::new(Vec3::ZERO, Vec3::ONE);
        let before = obstacle.bounds();
        obstacle.center = Vec3::new(50.0, 0.0, 0.0);
        let after = obstacle.bounds();
        assert_ne!(before, after);
        assert_eq!(after.center(), Vec3::new(50.0, 0.0, 0.0));
    }

    #[test]
    fn same_seed_builds_the_same_city() {
        let a = World::city(&mut StdRng::seed_from_u64(9));
        let b = World::city(&mut StdRng::seed_from_u64(9));
        assert_eq!(a.obstacles(), b.obstacles());
    }
}
