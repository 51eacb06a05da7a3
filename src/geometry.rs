use glam::Vec3;

/// Axis-aligned box in world space, stored as corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Aabb {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Half-open overlap test: boxes that merely touch do not intersect.
    /// All three axes must overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
            && self.min.z < other.max.z
            && other.min.z < self.max.z
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center_half_extents(Vec3::new(1.5, 0.0, 0.0), Vec3::ONE);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center_half_extents(Vec3::new(3.0, 0.0, 0.0), Vec3::ONE);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn touching_faces_do_not_intersect() {
        // Half-open test: a shared face is not an overlap.
        let a = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center_half_extents(Vec3::new(2.0, 0.0, 0.0), Vec3::ONE);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn overlap_required_on_every_axis() {
        let a = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
        // Overlaps on x and z but sits above on y.
        let b = Aabb::from_center_half_extents(Vec3::new(0.5, 5.0, 0.5), Vec3::ONE);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn center_and_half_extents_round_trip() {
        let b = Aabb::from_center_half_extents(Vec3::new(3.0, 1.0, -2.0), Vec3::new(4.0, 3.0, 0.5));
        assert_eq!(b.center(), Vec3::new(3.0, 1.0, -2.0));
        assert_eq!(b.half_extents(), Vec3::new(4.0, 3.0, 0.5));
    }
}
