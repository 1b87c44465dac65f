//! Frame snapshot — the complete per-tick output handed to the renderer.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::types::SimTime;

/// Line segment from the world origin to the apex.
///
/// A visual proxy for the body's symmetry axis: the apex lies on that axis
/// in body coordinates, so the segment always points along the instantaneous
/// orientation of the axis. It is not the angular-velocity axis of the
/// composed motion, which the engine never computes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSegment {
    pub start: DVec3,
    pub end: DVec3,
}

/// Complete output of one simulation tick.
///
/// What and how to redraw is entirely the renderer's decision; the engine
/// only reports the new state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    /// Every body point mapped to world coordinates, same order and length
    /// as the body geometry (rim first, apex last).
    pub world_points: Vec<DVec3>,
    /// World position of the apex (last world point).
    pub apex: DVec3,
    /// World position of the base reference point (first world point).
    pub base_point: DVec3,
    /// Origin→apex segment for drawing the symmetry axis.
    pub axis: AxisSegment,
    /// Apex trail, oldest→newest. `None` marks slots not written since the
    /// last reset; a renderer skips segments adjacent to them, so a rate
    /// change never draws a jump across the discontinuity.
    pub apex_trail: Vec<Option<DVec3>>,
    /// Base-point trail, same conventions as `apex_trail`.
    pub base_trail: Vec<Option<DVec3>>,
}
