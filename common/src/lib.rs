//! Common utilities for the two-body simulation
//!
//! This crate provides the window/GPU setup, vertex layout and start-up error
//! type shared by the simulation binary.

pub mod error;
pub mod graphics;

pub use error::StartupError;
pub use graphics::*;

/// Physical constants used in simulations
pub mod constants {
    /// Gravitational constant in m³·kg⁻¹·s⁻²
    pub const G: f32 = 6.674e-11;
}
