//! Chase camera with a free-orbit secondary mode.

use glam::{Mat3, Quat, Vec3};

use aerostrike_core::components::FlightState;
use aerostrike_core::constants::*;
use aerostrike_core::enums::CameraMode;
use aerostrike_core::input::OrbitInput;
use aerostrike_core::scene::{NodeId, SceneGraph};
use aerostrike_core::types::UP;

/// Pointer-driven orbit interaction around an anchor point.
pub trait OrbitControls {
    /// Re-anchor around `target`, keeping the camera at `position`.
    fn sync(&mut self, target: Vec3, position: Vec3);
    /// Apply this frame's pointer deltas.
    fn update(&mut self, dt: f32, input: &OrbitInput);
    fn position(&self) -> Vec3;
    fn target(&self) -> Vec3;
}

/// Spherical-coordinate orbit rig. Azimuth is measured about +Y from +Z,
/// polar angle down from +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeOrbit {
    target: Vec3,
    azimuth: f32,
    polar: f32,
    distance: f32,
}

impl Default for FreeOrbit {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            azimuth: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            distance: ORBIT_MIN_DISTANCE,
        }
    }
}

impl FreeOrbit {
    pub fn distance(&self) -> f32 {
        self.distance
    }

    fn clamp(&mut self) {
        self.polar = self
            .polar
            .clamp(ORBIT_POLAR_MARGIN, std::f32::consts::PI - ORBIT_POLAR_MARGIN);
        self.distance = self.distance.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }
}

impl OrbitControls for FreeOrbit {
    fn sync(&mut self, target: Vec3, position: Vec3) {
        self.target = target;
        let offset = position - target;
        let distance = offset.length();
        if distance > f32::EPSILON {
            self.distance = distance;
            self.azimuth = offset.x.atan2(offset.z);
            self.polar = (offset.y / distance).clamp(-1.0, 1.0).acos();
        }
        self.clamp();
    }

    fn update(&mut self, _dt: f32, input: &OrbitInput) {
        self.azimuth -= input.rotate_x * ORBIT_ROTATE_SPEED;
        self.polar -= input.rotate_y * ORBIT_ROTATE_SPEED;
        self.distance += input.zoom * ORBIT_ZOOM_SPEED * self.distance;
        self.clamp();
    }

    fn position(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        self.target + Vec3::new(sin_polar * sin_az, cos_polar, sin_polar * cos_az) * self.distance
    }

    fn target(&self) -> Vec3 {
        self.target
    }
}

/// Camera that trails the aircraft, or orbits a fixed anchor on request.
#[derive(Debug, Clone)]
pub struct ChaseCamera<O = FreeOrbit> {
    mode: CameraMode,
    /// Smoothed camera position; the follow accumulator.
    current_position: Vec3,
    look_at: Vec3,
    orbit: O,
}

impl<O: OrbitControls + Default> ChaseCamera<O> {
    /// Start in follow mode, already settled behind the aircraft.
    pub fn new(aircraft: &FlightState) -> Self {
        Self::with_orbit(aircraft, O::default())
    }
}

impl<O: OrbitControls> ChaseCamera<O> {
    pub fn with_orbit(aircraft: &FlightState, orbit: O) -> Self {
        Self {
            mode: CameraMode::Follow,
            current_position: follow_target(aircraft),
            look_at: look_ahead_point(aircraft),
            orbit,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn position(&self) -> Vec3 {
        self.current_position
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn orbit(&self) -> &O {
        &self.orbit
    }

    /// Advance the camera one frame.
    pub fn update(&mut self, dt: f32, aircraft: &FlightState, orbit_input: &OrbitInput) {
        match self.mode {
            CameraMode::Follow => {
                let target = follow_target(aircraft);
                // Fraction per update, not per second.
                self.current_position += (target - self.current_position) * CAMERA_DAMPING;
                self.look_at = look_ahead_point(aircraft);
            }
            CameraMode::Orbit => {
                self.orbit.update(dt, orbit_input);
                self.current_position = self.orbit.position();
                self.look_at = self.orbit.target();
            }
        }
    }

    /// Flip between follow and orbit. Always legal.
    pub fn toggle_mode(&mut self, aircraft: &FlightState) -> CameraMode {
        match self.mode {
            CameraMode::Follow => {
                self.orbit.sync(aircraft.position, self.current_position);
                self.current_position = self.orbit.position();
                self.look_at = self.orbit.target();
            }
            CameraMode::Orbit => {
                self.current_position = self.orbit.position();
            }
        }
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Publish the camera transform to its scene node.
    pub fn apply_to(&self, scene: &mut impl SceneGraph, node: NodeId) {
        scene.set_position(node, self.current_position);
        if let Some(rotation) = look_rotation(self.current_position, self.look_at) {
            scene.set_orientation(node, rotation);
        }
    }
}

/// Where the follow camera wants to be for this aircraft state.
pub fn follow_target(aircraft: &FlightState) -> Vec3 {
    aircraft.position + aircraft.orientation * Vec3::from_array(CAMERA_OFFSET)
}

/// Point slightly ahead of the nose the follow camera looks at.
pub fn look_ahead_point(aircraft: &FlightState) -> Vec3 {
    aircraft.position + aircraft.orientation * Vec3::from_array(CAMERA_LOOK_AHEAD)
}

/// Rotation that points a camera's -Z axis from `eye` to `target` with +Y
/// up. `None` if the direction is degenerate or vertical.
pub fn look_rotation(eye: Vec3, target: Vec3) -> Option<Quat> {
    let forward = (target - eye).normalize_or_zero();
    if forward == Vec3::ZERO {
        return None;
    }
    let right = forward.cross(UP).normalize_or_zero();
    if right == Vec3::ZERO {
        return None;
    }
    let up = right.cross(forward);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, -forward)))
}
