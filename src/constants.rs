use glam::Vec3;

pub const WINDOW_SIZE: u32 = 800;
pub const FPS: u32 = 60;
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(1000 / FPS as u64);

// Longest simulation step we accept; frame hitches beyond this are clamped.
pub const MAX_DT: f32 = 0.033;

// Arcade handling model. Tuned policy values, not derived physics.
pub const MAX_SPEED: f32 = 34.0;
pub const ACCELERATION: f32 = 24.0;
pub const REVERSE_ACCELERATION: f32 = 14.0;
pub const FRICTION: f32 = 7.0;
pub const BRAKE_POWER: f32 = 42.0;
pub const STEER_STRENGTH: f32 = 2.2;
pub const STEERING_DAMP: f32 = 6.0;
// Reverse tops out at 45% of forward speed.
pub const REVERSE_SPEED_RATIO: f32 = 0.45;
// Full steering authority is reached at |speed| = 6 m/s.
pub const STEER_AUTHORITY_DIVISOR: f32 = 6.0;
// Speed multiplier applied on impact: small inelastic bounce-back.
pub const BOUNCE_FACTOR: f32 = -0.16;

pub const WHEEL_RADIUS: f32 = 0.45;

pub const CAR_HALF_EXTENTS: Vec3 = Vec3::new(1.2, 0.9, 2.3);
pub const CAR_BOX_CENTER_Y: f32 = 1.0;

pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 5.5, -11.0);
pub const CAMERA_DAMP: f32 = 8.0;

// City layout: square ground with perimeter walls just inside the edge.
pub const GROUND_EXTENT: f32 = 300.0;
pub const WALL_DISTANCE: f32 = 245.0;
pub const BUILDING_COUNT: usize = 90;
