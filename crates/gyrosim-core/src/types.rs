//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Time coordinates of a single computed frame.
///
/// The external driver owns the clock and supplies the frame index;
/// the core derives t = frame × dt and keeps no time accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Frame index supplied by the driver.
    pub frame: u64,
    /// Simulation time in seconds.
    pub secs: f64,
}

impl SimTime {
    pub fn at(frame: u64, dt: f64) -> Self {
        Self {
            frame,
            secs: frame as f64 * dt,
        }
    }
}
