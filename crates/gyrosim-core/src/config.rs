//! Engine configuration.
//!
//! A serde-friendly bag of the tunables the original exposed at the top of
//! its script: cone geometry, fixed angles, angular rates, timestep, and
//! trail window length. Unspecified fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::SimError;
use crate::params::{validate_rate, RotationParameters};

/// Configuration for constructing a simulation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Cone height along the body z axis.
    pub cone_height: f64,
    /// Base-rim radius.
    pub cone_radius: f64,
    /// Number of base-rim samples (≥ 3).
    pub cone_points: usize,
    /// Mean tilt angle (radians).
    pub theta_0: f64,
    /// Nutation amplitude (radians).
    pub a_n: f64,
    /// Spin rate (rad/s, 0–100).
    pub omega_rot: f64,
    /// Precession rate (rad/s, 0–10).
    pub omega_p: f64,
    /// Nutation rate (rad/s, 0–50).
    pub omega_n: f64,
    /// Timestep (seconds); t = frame × dt.
    pub dt: f64,
    /// Trail capacity per tracked point (≥ 1).
    pub trail_length: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cone_height: CONE_HEIGHT_DEFAULT,
            cone_radius: CONE_RADIUS_DEFAULT,
            cone_points: CONE_POINTS_DEFAULT,
            theta_0: THETA_0_DEFAULT,
            a_n: NUTATION_AMPLITUDE_DEFAULT,
            omega_rot: OMEGA_ROT_DEFAULT,
            omega_p: OMEGA_P_DEFAULT,
            omega_n: OMEGA_N_DEFAULT,
            dt: DT_DEFAULT,
            trail_length: TRAIL_LENGTH_DEFAULT,
        }
    }
}

impl SimConfig {
    /// The initial rotation parameters described by this config.
    pub fn rotation_parameters(&self) -> RotationParameters {
        RotationParameters {
            omega_rot: self.omega_rot,
            omega_p: self.omega_p,
            omega_n: self.omega_n,
            theta_0: self.theta_0,
            a_n: self.a_n,
        }
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.cone_radius.is_finite() || self.cone_radius <= 0.0 {
            return Err(SimError::InvalidConfig {
                field: "cone_radius",
                value: self.cone_radius,
                reason: "must be positive and finite",
            });
        }
        if !self.cone_height.is_finite() || self.cone_height <= 0.0 {
            return Err(SimError::InvalidConfig {
                field: "cone_height",
                value: self.cone_height,
                reason: "must be positive and finite",
            });
        }
        if self.cone_points < CONE_POINTS_MIN {
            return Err(SimError::InvalidConfig {
                field: "cone_points",
                value: self.cone_points as f64,
                reason: "a circle needs at least 3 samples",
            });
        }
        if !self.theta_0.is_finite() {
            return Err(SimError::InvalidConfig {
                field: "theta_0",
                value: self.theta_0,
                reason: "must be finite",
            });
        }
        if !self.a_n.is_finite() {
            return Err(SimError::InvalidConfig {
                field: "a_n",
                value: self.a_n,
                reason: "must be finite",
            });
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidConfig {
                field: "dt",
                value: self.dt,
                reason: "must be positive and finite",
            });
        }
        if self.trail_length < 1 {
            return Err(SimError::InvalidConfig {
                field: "trail_length",
                value: self.trail_length as f64,
                reason: "must hold at least one position",
            });
        }

        validate_rate("omega_rot", self.omega_rot, OMEGA_ROT_MAX)?;
        validate_rate("omega_p", self.omega_p, OMEGA_P_MAX)?;
        validate_rate("omega_n", self.omega_n, OMEGA_N_MAX)?;

        Ok(())
    }
}
