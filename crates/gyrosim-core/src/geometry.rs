//! Body-frame geometry of the cone.

use std::f64::consts::TAU;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::CONE_POINTS_MIN;
use crate::error::SimError;

/// The cone's body-frame point set, built once and never mutated.
///
/// Indices `0..base_samples` lie on a circle of radius `radius` at z = 0,
/// sampled at evenly spaced angles over [0, 2π). The last index is the apex
/// at (0, 0, height). Downstream code relies on this ordering: first element
/// = base reference point, last element = apex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyGeometry {
    points: Vec<DVec3>,
}

impl BodyGeometry {
    /// Build the point set. Pure; no side effects.
    ///
    /// Fails with [`SimError::InvalidConfig`] when the radius or height is
    /// not positive (the body collapses to a point) or fewer than 3 rim
    /// samples are requested.
    pub fn build(radius: f64, height: f64, base_samples: usize) -> Result<Self, SimError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SimError::InvalidConfig {
                field: "cone_radius",
                value: radius,
                reason: "must be positive and finite",
            });
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(SimError::InvalidConfig {
                field: "cone_height",
                value: height,
                reason: "must be positive and finite",
            });
        }
        if base_samples < CONE_POINTS_MIN {
            return Err(SimError::InvalidConfig {
                field: "cone_points",
                value: base_samples as f64,
                reason: "a circle needs at least 3 samples",
            });
        }

        let mut points = Vec::with_capacity(base_samples + 1);
        for i in 0..base_samples {
            let angle = TAU * i as f64 / base_samples as f64;
            points.push(DVec3::new(
                radius * angle.cos(),
                radius * angle.sin(),
                0.0,
            ));
        }
        points.push(DVec3::new(0.0, 0.0, height));

        Ok(Self { points })
    }

    /// All body-frame points, rim first, apex last.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Number of points (base samples + 1 for the apex).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The tracked base reference point — always the first rim sample,
    /// at angle 0: (radius, 0, 0).
    pub fn base_point(&self) -> DVec3 {
        self.points[0]
    }

    /// The apex, always the last point: (0, 0, height).
    pub fn apex(&self) -> DVec3 {
        self.points[self.points.len() - 1]
    }
}
