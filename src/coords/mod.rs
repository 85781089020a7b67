//! Coordinate transforms between Cartesian and spherical representations,
//! and between astronomical and metric length units.
//!
//! Spherical triples are packed into a `DVec3` as `(r, θ, φ)`:
//! - `r` radial distance
//! - `θ` polar angle measured from +z, in `[0, π]`
//! - `φ` azimuth measured from +x towards +y, in `(-π, π]`
//!
//! Spherical velocities use the same packing: `(ṙ, θ̇, φ̇)`.

#[cfg(test)]
mod proptest_coords;

use bevy::math::DVec3;

use crate::types::{AU_TO_KM, KM_TO_AU};

/// Convert a Cartesian vector to spherical coordinates `(r, θ, φ)`.
///
/// `θ` equals `acos(z / r)`; it is evaluated as `atan2(√(x² + y²), z)`,
/// which keeps full precision close to the poles.
///
/// The origin maps to `(0, 0, 0)` so that no angle is evaluated on an
/// undefined direction.
pub fn cartesian_to_spherical(v: DVec3) -> DVec3 {
    if v == DVec3::ZERO {
        return DVec3::ZERO;
    }
    let r = v.length();
    let theta = v.x.hypot(v.y).atan2(v.z);
    let phi = v.y.atan2(v.x);
    DVec3::new(r, theta, phi)
}

/// Convert spherical coordinates `(r, θ, φ)` to a Cartesian vector.
pub fn spherical_to_cartesian(s: DVec3) -> DVec3 {
    let (r, theta, phi) = (s.x, s.y, s.z);
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    DVec3::new(r * sin_theta * cos_phi, r * sin_theta * sin_phi, r * cos_theta)
}

/// Convert polar coordinates in the xy-plane to a Cartesian vector (z = 0).
pub fn circular_to_cartesian(radius: f64, phi: f64) -> DVec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    DVec3::new(radius * cos_phi, radius * sin_phi, 0.0)
}

/// Convert a Cartesian position and velocity to spherical rates `(ṙ, θ̇, φ̇)`.
///
/// Uses the time derivatives of the spherical definitions:
/// - `ṙ = (x·vx + y·vy + z·vz) / r`
/// - `θ̇ = (z·ṙ/r − vz) / √(r² − z²)`
/// - `φ̇ = (x·vy − vx·y) / (x² + y²)`
///
/// A zero velocity yields `(0, 0, 0)`. At the origin every direction is
/// radial, so the result is `(|v|, 0, 0)`. Angular rates that are not finite
/// (position on the z-axis) are reported as `0`.
pub fn cartesian_to_spherical_velocity(pos: DVec3, vel: DVec3) -> DVec3 {
    if vel == DVec3::ZERO {
        return DVec3::ZERO;
    }
    if pos == DVec3::ZERO {
        return DVec3::new(vel.length(), 0.0, 0.0);
    }

    let r = pos.length();
    let r_dot = pos.dot(vel) / r;

    let theta_dot = ((pos.z * r_dot / r) - vel.z) / (r * r - pos.z * pos.z).sqrt();
    let phi_dot = (pos.x * vel.y - vel.x * pos.y) / (pos.x * pos.x + pos.y * pos.y);

    DVec3::new(r_dot, finite_or_zero(theta_dot), finite_or_zero(phi_dot))
}

/// Convert a spherical position `(r, θ, φ)` and rates `(ṙ, θ̇, φ̇)` to a
/// Cartesian velocity.
pub fn spherical_to_cartesian_velocity(s: DVec3, s_dot: DVec3) -> DVec3 {
    let (r, theta, phi) = (s.x, s.y, s.z);
    let (r_dot, theta_dot, phi_dot) = (s_dot.x, s_dot.y, s_dot.z);
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    let vx = r_dot * sin_theta * cos_phi + r * cos_theta * theta_dot * cos_phi
        - r * sin_theta * sin_phi * phi_dot;
    let vy = r_dot * sin_theta * sin_phi
        + r * cos_theta * theta_dot * sin_phi
        + r * sin_theta * cos_phi * phi_dot;
    let vz = r_dot * cos_theta - r * sin_theta * theta_dot;

    DVec3::new(vx, vy, vz)
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Astronomical units to kilometers.
#[inline]
pub fn au_to_km(v: DVec3) -> DVec3 {
    v * AU_TO_KM
}

/// Kilometers to astronomical units.
#[inline]
pub fn km_to_au(v: DVec3) -> DVec3 {
    v * KM_TO_AU
}

/// Meters (or m/s) to kilometers (or km/s).
#[inline]
pub fn meters_to_km(v: DVec3) -> DVec3 {
    v / 1000.0
}

/// Kilometers (or km/s) to meters (or m/s).
#[inline]
pub fn km_to_meters(v: DVec3) -> DVec3 {
    v * 1000.0
}
