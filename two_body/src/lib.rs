//! Two-body gravity simulation
//!
//! Newtonian gravity between a fixed set of bodies, integrated one frame at a
//! time with explicit Euler steps and drawn as filled circles.

pub mod canvas;
pub mod config;
pub mod physics;
pub mod simulation;

pub use canvas::{Canvas, CircleBatch};
pub use config::SimConfig;
pub use physics::{gravitational_acceleration, Body, BodyRegistry};
pub use simulation::Simulation;
