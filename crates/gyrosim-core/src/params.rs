//! Angular-rate parameters and their single owner.
//!
//! The original control surface mutated shared rate variables from slider
//! callbacks; here every write goes through [`ParameterStore::set`], which
//! validates against the control ranges and replaces the three rates
//! atomically.

use serde::{Deserialize, Serialize};

use crate::constants::{OMEGA_N_MAX, OMEGA_P_MAX, OMEGA_ROT_MAX};
use crate::error::SimError;

/// Prescribed rates and fixed angles for the Euler composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationParameters {
    /// Spin rate about the body's own symmetry axis (rad/s).
    pub omega_rot: f64,
    /// Precession rate about the global Z axis (rad/s).
    pub omega_p: f64,
    /// Nutation oscillation rate (rad/s).
    pub omega_n: f64,
    /// Mean tilt angle (radians). Fixed after construction.
    pub theta_0: f64,
    /// Nutation amplitude (radians). Fixed after construction.
    pub a_n: f64,
}

/// Obligation token returned by a successful rate update.
///
/// Every trail buffer must be reset before the next frame is computed,
/// otherwise the rendered trails jump across the rate discontinuity.
#[must_use = "a rate change obligates resetting every trail before the next frame"]
#[derive(Debug)]
pub struct TrailReset;

/// Single logical owner of the mutable angular rates.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    current: RotationParameters,
}

impl ParameterStore {
    pub fn new(params: RotationParameters) -> Self {
        Self { current: params }
    }

    /// Current parameters (copy).
    pub fn get(&self) -> RotationParameters {
        self.current
    }

    /// Replace all three rates atomically.
    ///
    /// Fails with [`SimError::InvalidParameterRange`] — leaving the store
    /// unchanged — if any rate lies outside its control range.
    pub fn set(
        &mut self,
        omega_rot: f64,
        omega_p: f64,
        omega_n: f64,
    ) -> Result<TrailReset, SimError> {
        validate_rate("omega_rot", omega_rot, OMEGA_ROT_MAX)?;
        validate_rate("omega_p", omega_p, OMEGA_P_MAX)?;
        validate_rate("omega_n", omega_n, OMEGA_N_MAX)?;

        self.current.omega_rot = omega_rot;
        self.current.omega_p = omega_p;
        self.current.omega_n = omega_n;
        Ok(TrailReset)
    }
}

/// Check one rate against its control range [0, max]. Non-finite values fail.
pub(crate) fn validate_rate(name: &'static str, value: f64, max: f64) -> Result<(), SimError> {
    if !value.is_finite() || value < 0.0 || value > max {
        return Err(SimError::InvalidParameterRange { name, value, max });
    }
    Ok(())
}
