use glam::Vec3;

use crate::constants::{CAMERA_DAMP, CAMERA_OFFSET};

/// Rotate `v` around the +Y axis by `angle` radians.
pub fn rotate_y(v: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}

/// Third-person follow camera. Eases toward a point behind and above the
/// car instead of snapping, so quick heading changes read smoothly.
#[derive(Debug, Clone, Copy)]
pub struct FollowCamera {
    pub position: Vec3,
}

impl FollowCamera {
    pub fn new() -> Self {
        FollowCamera {
            position: CAMERA_OFFSET,
        }
    }

    /// Move toward the desired focus point with framerate-independent
    /// exponential smoothing at the fixed follow rate.
    pub fn update(&mut self, focus: Vec3, dt: f32) {
        let t = 1.0 - (-dt * CAMERA_DAMP).exp();
        self.position = self.position.lerp(focus, t);
    }
}
