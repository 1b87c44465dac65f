//! Default tuning parameters and control-range bounds.

use std::f64::consts::{FRAC_PI_6, PI};

/// Default simulation timestep (seconds).
pub const DT_DEFAULT: f64 = 0.02;

/// Default trail window length (frames of position history per tracked point).
pub const TRAIL_LENGTH_DEFAULT: usize = 200;

// --- Cone geometry ---

/// Default cone height along the body z axis.
pub const CONE_HEIGHT_DEFAULT: f64 = 4.0;

/// Default base-rim radius.
pub const CONE_RADIUS_DEFAULT: f64 = 1.0;

/// Default number of base-rim samples.
pub const CONE_POINTS_DEFAULT: usize = 50;

/// Minimum base-rim samples for a meaningful circle.
pub const CONE_POINTS_MIN: usize = 3;

// --- Fixed angles ---

/// Default mean tilt angle of the symmetry axis (radians).
pub const THETA_0_DEFAULT: f64 = FRAC_PI_6;

/// Default nutation amplitude (radians) — how strong the tilt wobble is.
pub const NUTATION_AMPLITUDE_DEFAULT: f64 = PI / 40.0;

// --- Angular rates (rad/s) ---

/// Default spin rate about the body's own symmetry axis.
pub const OMEGA_ROT_DEFAULT: f64 = 0.2;

/// Upper bound of the spin control range.
pub const OMEGA_ROT_MAX: f64 = 100.0;

/// Default precession rate about the global Z axis.
pub const OMEGA_P_DEFAULT: f64 = 2.0;

/// Upper bound of the precession control range.
pub const OMEGA_P_MAX: f64 = 10.0;

/// Default nutation oscillation rate.
pub const OMEGA_N_DEFAULT: f64 = 15.0;

/// Upper bound of the nutation control range.
pub const OMEGA_N_MAX: f64 = 50.0;
