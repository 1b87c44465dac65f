//! Headless kinematics engine for the spinning-cone simulation.
//!
//! Owns the body geometry, the parameter store, and the trail buffers;
//! computes one `FrameSnapshot` per externally driven tick. Rendering,
//! input widgets, and the timing loop all live outside this crate.

pub mod engine;
pub mod trail;

pub use engine::SimulationEngine;
pub use gyrosim_core as core;

#[cfg(test)]
mod tests;
