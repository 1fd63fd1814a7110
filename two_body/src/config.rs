//! Fixed simulation and display parameters
//!
//! The simulation works in two unit systems. Positions live in simulation
//! space, which maps directly onto the window's [-1, 1] clip range. Forces
//! are computed in real units (meters, kilograms, seconds).

/// Simulation-space units per real meter (1 unit = 1 billion meters)
pub const SPACE_SCALE: f32 = 1.0e-9;

/// Simulated seconds advanced per rendered frame (about 14 hours)
pub const TIME_SCALE: f32 = 50_000.0;

pub const SECONDS_PER_DAY: f32 = 86_400.0;

pub const SCREEN_WIDTH: u32 = 400;
pub const SCREEN_HEIGHT: u32 = 300;
pub const WINDOW_TITLE: &str = "physics_sim";

/// Edge segments used to approximate each circle
pub const CIRCLE_SEGMENTS: u32 = 50;

pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const BODY_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Immutable parameters threaded through the integrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub space_scale: f32,
    pub time_scale: f32,
    pub gravitational_constant: f32,
}

impl SimConfig {
    /// Convert a simulation-space length to meters
    pub fn to_meters(&self, sim_length: f32) -> f32 {
        sim_length / self.space_scale
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            space_scale: SPACE_SCALE,
            time_scale: TIME_SCALE,
            gravitational_constant: common::constants::G,
        }
    }
}
