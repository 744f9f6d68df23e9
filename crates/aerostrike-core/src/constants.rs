//! Simulation constants and tuning parameters.
//!
//! Distances are scene units, angles radians, times seconds.

use std::f32::consts::PI;

/// Nominal display refresh rate the tuning is calibrated for (Hz).
pub const TARGET_FRAME_RATE: f32 = 60.0;

/// Nominal seconds per frame.
pub const NOMINAL_DT: f32 = 1.0 / TARGET_FRAME_RATE;

/// Frames longer than this are treated as a stall and discarded (seconds).
pub const MAX_FRAME_DT: f32 = 0.1;

// --- Flight dynamics ---

/// Minimum airspeed (units/s). The aircraft never stalls below this.
pub const MIN_SPEED: f32 = 20.0;

/// Maximum airspeed (units/s).
pub const MAX_SPEED: f32 = 80.0;

/// Airspeed at mission start (units/s).
pub const INITIAL_SPEED: f32 = 40.0;

/// Airspeed change per second at full throttle input.
pub const THROTTLE_RATE: f32 = 20.0;

/// Pitch rate at full stick (rad/s).
pub const PITCH_SENSITIVITY: f32 = 1.0;

/// Roll rate at full stick (rad/s). Deliberately higher than pitch.
pub const ROLL_SENSITIVITY: f32 = 2.0;

/// Yaw rate per radian of bank (1/s).
pub const TURN_SENSITIVITY: f32 = 1.2;

/// Rate at which released axes return to level (rad/s).
pub const AUTO_LEVEL_RATE: f32 = 1.5;

/// Maximum pitch magnitude (60°).
pub const MAX_PITCH: f32 = PI / 3.0;

/// Maximum roll magnitude (45°).
pub const MAX_ROLL: f32 = PI / 4.0;

/// Aircraft spawn altitude.
pub const INITIAL_ALTITUDE: f32 = 50.0;

// --- Camera ---

/// Follow-camera offset in aircraft space: behind (+Z) and above (+Y).
pub const CAMERA_OFFSET: [f32; 3] = [0.0, 5.0, 15.0];

/// Look-at offset in aircraft space, slightly ahead of the nose.
pub const CAMERA_LOOK_AHEAD: [f32; 3] = [0.0, 0.0, -10.0];

/// Fraction of the remaining gap closed per update in follow mode.
pub const CAMERA_DAMPING: f32 = 0.1;

/// Orbit rotation per unit of pointer delta (radians).
pub const ORBIT_ROTATE_SPEED: f32 = 0.005;

/// Orbit distance change per unit of zoom delta.
pub const ORBIT_ZOOM_SPEED: f32 = 0.05;

/// Closest the orbit camera may get to its anchor.
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;

/// Farthest the orbit camera may get from its anchor.
pub const ORBIT_MAX_DISTANCE: f32 = 200.0;

/// Polar angle margin kept away from straight up/down (radians).
pub const ORBIT_POLAR_MARGIN: f32 = 0.05;

// --- Weapons ---

/// Projectile speed in units per nominal frame.
pub const PROJECTILE_SPEED: f32 = 2.0;

/// Converts per-frame projectile velocity to per-second displacement.
pub const PROJECTILE_TIME_SCALE: f32 = TARGET_FRAME_RATE;

/// Projectile lifetime (seconds).
pub const PROJECTILE_MAX_AGE: f32 = 3.0;

/// Collision radius of a projectile.
pub const PROJECTILE_RADIUS: f32 = 0.5;

/// Collision radius of an aerial target.
pub const TARGET_RADIUS: f32 = 3.0;

/// Distance ahead of the aircraft origin where projectiles appear.
pub const MUZZLE_OFFSET: f32 = 3.0;

/// Delay between shots (seconds).
pub const FIRE_COOLDOWN_SECS: f32 = 0.2;

// --- Patrol ---

/// Fraction of the remaining heading error closed per update.
pub const HEADING_SMOOTHING: f32 = 0.1;

/// Horizontal displacement below which a heading is not derived.
pub const HEADING_MIN_DELTA: f32 = 1e-5;

// --- Explosions ---

/// Explosion lifetime (seconds).
pub const EXPLOSION_MAX_AGE: f32 = 1.0;

/// Particles per explosion.
pub const EXPLOSION_PARTICLE_COUNT: usize = 20;

/// Core glow scale at spawn.
pub const EXPLOSION_CORE_INITIAL_SCALE: f32 = 0.1;

/// Core glow scale growth over the full lifetime.
pub const EXPLOSION_CORE_GROWTH: f32 = 8.0;

/// Core opacity lost per unit of progress.
pub const EXPLOSION_CORE_FADE: f32 = 1.5;

/// Per-frame particle velocity damping.
pub const PARTICLE_FRICTION: f32 = 0.95;

/// Progress after which particles start to shrink.
pub const PARTICLE_SHRINK_START: f32 = 0.7;

/// Shrink rate once past `PARTICLE_SHRINK_START`.
pub const PARTICLE_SHRINK_RATE: f32 = 3.0;

/// Maximum initial particle distance from the blast center.
pub const PARTICLE_MAX_INITIAL_DISTANCE: f32 = 1.0;

/// Particle outward speed range (units/s).
pub const PARTICLE_MIN_SPEED: f32 = 5.0;
pub const PARTICLE_MAX_SPEED: f32 = 15.0;

/// Particle scale range.
pub const PARTICLE_MIN_SCALE: f32 = 0.2;
pub const PARTICLE_MAX_SCALE: f32 = 0.6;
