//! Z-X-Z Euler composition of the prescribed spin/precession/nutation motion.

use glam::DMat3;

use crate::params::RotationParameters;

/// Instantaneous Euler angles in the Z-X-Z convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    /// Precession angle about the global Z axis.
    pub phi: f64,
    /// Tilt (nutation) angle about the intermediate X axis.
    pub theta: f64,
    /// Spin angle about the body's own symmetry axis.
    pub psi: f64,
}

/// Closed-form angles at time t:
/// φ = ω_p·t, θ = θ₀ + A·cos(ω_n·t), ψ = ω_rot·t.
pub fn euler_angles_at(params: &RotationParameters, t: f64) -> EulerAngles {
    EulerAngles {
        phi: params.omega_p * t,
        theta: params.theta_0 + params.a_n * (params.omega_n * t).cos(),
        psi: params.omega_rot * t,
    }
}

/// Body→world rotation at time t: Rz(φ) · Rx(θ) · Rz(ψ).
///
/// Applied right-to-left: spin about the body axis, tilt about the
/// intermediate X axis, then sweep about the global Z axis. Each factor is a
/// proper rotation, so the product is orthonormal with determinant +1 for
/// all t. Total over all real t; no failure modes.
pub fn rotation_at(params: &RotationParameters, t: f64) -> DMat3 {
    let angles = euler_angles_at(params, t);
    DMat3::from_rotation_z(angles.phi)
        * DMat3::from_rotation_x(angles.theta)
        * DMat3::from_rotation_z(angles.psi)
}
