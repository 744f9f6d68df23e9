//! Scripted pilot used in place of keyboard and pointer input.
//!
//! Flies a slow weave: banks one way, levels, banks the other way, with the
//! trigger held in bursts. Switches to the orbit camera for a while each
//! cycle so both camera modes get exercised.

use aerostrike_core::input::{ControlInput, OrbitInput};

/// Length of one weave cycle in seconds.
const CYCLE_SECS: f32 = 12.0;
/// Trigger held for this long out of every burst period.
const BURST_SECS: f32 = 0.6;
const BURST_PERIOD_SECS: f32 = 2.0;
/// Orbit-camera window within each cycle.
const ORBIT_WINDOW: (f32, f32) = (8.0, 10.0);

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    elapsed: f32,
    orbiting: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the control state for the next frame.
    pub fn next_input(&mut self, dt: f32) -> ControlInput {
        self.elapsed += dt.max(0.0);
        let t = self.elapsed % CYCLE_SECS;

        let roll = match t {
            t if t < 3.0 => 0.5,
            t if t < 6.0 => 0.0,
            t if t < 9.0 => -0.5,
            _ => 0.0,
        };
        // Gentle porpoise so altitude wanders.
        let pitch = if (4.0..5.0).contains(&t) { 0.3 } else { 0.0 };
        let throttle = if t < CYCLE_SECS / 2.0 { 0.4 } else { -0.2 };
        let fire = self.elapsed % BURST_PERIOD_SECS < BURST_SECS;

        let want_orbit = (ORBIT_WINDOW.0..ORBIT_WINDOW.1).contains(&t);
        let camera_toggle = want_orbit != self.orbiting;
        self.orbiting = want_orbit;

        ControlInput {
            pitch,
            roll,
            throttle,
            fire,
            camera_toggle,
            orbit: if want_orbit {
                OrbitInput {
                    rotate_x: 2.0,
                    rotate_y: 0.0,
                    zoom: 0.0,
                }
            } else {
                OrbitInput::default()
            },
        }
    }
}
