//! Aerodynamic forces acting on a pitched baseball.
//!
//! All forces are returned in newtons as vectors in the field frame
//! (x lateral, y downrange, z up) for a ball of fixed mass, radius and
//! cross-sectional area (see [`crate::constants`]).
//!
//! ## Magnus direction
//!
//! The Magnus force direction depends only on the configured spin axis, not on
//! the instantaneous velocity. A spin axis of 180° is pure backspin and lifts
//! the ball straight up; axes away from 180° tilt the force sideways:
//!
//! ```text
//!             z (lift)
//!             ↑   axis 180°
//!   axis 150° ↖   ↗ axis 210°
//!        -x ←─┼─→ +x
//! ```
//!
//! This is a known physical approximation, kept as is.

use nalgebra::Vector3;

use crate::constants::{
    BALL_AREA_M2, BALL_RADIUS_M, DRAG_COEFFICIENT, LIFT_COEFFICIENT_BASE, LIFT_SPIN_SCALE,
    RPM_TO_RAD_S,
};
use crate::wind::WindDirection;

/// Dimensionless spin parameter S = ω·r / v.
///
/// `speed_mps` must be strictly positive.
#[inline]
pub fn spin_parameter(speed_mps: f64, spin_rate_rpm: f64) -> f64 {
    let omega = spin_rate_rpm * RPM_TO_RAD_S;
    omega * BALL_RADIUS_M / speed_mps
}

/// Lift coefficient for a given spin parameter.
#[inline]
pub fn lift_coefficient(spin_param: f64) -> f64 {
    LIFT_COEFFICIENT_BASE * spin_param * LIFT_SPIN_SCALE
}

/// Calculate the Magnus (lift) force.
///
/// # Arguments
/// * `speed_mps` - Ball speed, must be strictly positive
/// * `spin_rate_rpm` - Spin rate in revolutions per minute
/// * `spin_axis_deg` - Spin axis in degrees (180 = pure backspin)
/// * `air_density` - Air density in kg/m³
///
/// The spin parameter divides by speed, so a zero speed yields a non-finite
/// result. Callers guard against it.
pub fn magnus_force(
    speed_mps: f64,
    spin_rate_rpm: f64,
    spin_axis_deg: f64,
    air_density: f64,
) -> Vector3<f64> {
    let cl = lift_coefficient(spin_parameter(speed_mps, spin_rate_rpm));
    let magnitude = 0.5 * air_density * speed_mps * speed_mps * cl * BALL_AREA_M2;

    let phase = spin_axis_deg.to_radians() - std::f64::consts::PI;

    Vector3::new(magnitude * phase.sin(), 0.0, magnitude * phase.cos())
}

/// Calculate the quadratic drag force opposing the velocity.
///
/// F = -0.5 · ρ · Cd · A · |v|² · v̂
pub fn drag_force(velocity: &Vector3<f64>, air_density: f64) -> Vector3<f64> {
    let speed = velocity.norm();
    if speed == 0.0 {
        return Vector3::zeros();
    }

    let magnitude = 0.5 * air_density * speed * speed * DRAG_COEFFICIENT * BALL_AREA_M2;

    -magnitude * (velocity / speed)
}

/// Calculate the lateral force from a crosswind.
///
/// The magnitude is 0.5 · ρ · |w - v| · |w| · Cd · A, linear in the wind speed,
/// and acts entirely along x with the wind's sign.
pub fn wind_force(
    wind_speed_mps: f64,
    direction: WindDirection,
    ball_velocity: &Vector3<f64>,
    air_density: f64,
) -> Vector3<f64> {
    if wind_speed_mps == 0.0 {
        return Vector3::zeros();
    }

    let relative_wind = direction.wind_vector(wind_speed_mps) - ball_velocity;
    let relative_speed = relative_wind.norm();
    if relative_speed == 0.0 {
        return Vector3::zeros();
    }

    let magnitude =
        0.5 * air_density * relative_speed * wind_speed_mps * DRAG_COEFFICIENT * BALL_AREA_M2;

    Vector3::new(direction.sign() * magnitude, 0.0, 0.0)
}

/// Individual force contributions at one instant (N).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub magnus: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub wind: Vector3<f64>,
}

impl ForceBreakdown {
    /// Sum of the aerodynamic forces, excluding gravity.
    pub fn total(&self) -> Vector3<f64> {
        self.magnus + self.drag + self.wind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BALL_MASS_KG;
    use approx::assert_relative_eq;

    const RHO: f64 = 1.155;

    #[test]
    fn test_pure_backspin_lifts() {
        let f = magnus_force(40.0, 2200.0, 180.0, RHO);
        assert!(f.z > 0.0);
        assert!(f.x.abs() < 1e-12);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn test_magnus_magnitude() {
        let speed = 40.0;
        let rpm = 2100.0;
        let omega = rpm * 2.0 * std::f64::consts::PI / 60.0;
        let s = omega * 0.0365 / speed;
        let cl = 0.2 * s * 10.0;
        let expected = 0.5 * RHO * speed * speed * cl * BALL_AREA_M2;

        let f = magnus_force(speed, rpm, 200.0, RHO);
        assert_relative_eq!(f.norm(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_spin_axis_tilts_lateral_component() {
        // Axes on either side of backspin push the ball in opposite lateral directions
        let above = magnus_force(40.0, 2200.0, 210.0, RHO);
        let below = magnus_force(40.0, 2200.0, 150.0, RHO);
        assert!(above.x > 0.0);
        assert!(below.x < 0.0);
        assert_relative_eq!(above.x, -below.x, epsilon = 1e-12);
        assert_relative_eq!(above.z, below.z, epsilon = 1e-12);
    }

    #[test]
    fn test_magnus_axis_is_periodic() {
        let a = magnus_force(40.0, 2000.0, 200.0, RHO);
        let b = magnus_force(40.0, 2000.0, 560.0, RHO);
        assert_relative_eq!(a, b, epsilon = 1e-9);
    }

    #[test]
    fn test_no_spin_no_magnus() {
        assert_eq!(magnus_force(40.0, 0.0, 200.0, RHO).norm(), 0.0);
    }

    #[test]
    fn test_drag_opposes_velocity() {
        let v = Vector3::new(0.5, 40.0, -1.5);
        let f = drag_force(&v, RHO);
        assert!(f.dot(&v) < 0.0);
        assert_relative_eq!(f.normalize(), -v.normalize(), epsilon = 1e-12);

        let expected = 0.5 * RHO * v.norm_squared() * DRAG_COEFFICIENT * BALL_AREA_M2;
        assert_relative_eq!(f.norm(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_drag_at_rest_is_zero() {
        assert_eq!(drag_force(&Vector3::zeros(), RHO), Vector3::zeros());
    }

    #[test]
    fn test_drag_deceleration_is_plausible() {
        // A 40 m/s fastball loses roughly 9 m/s² to drag
        let f = drag_force(&Vector3::new(0.0, 40.0, 0.0), RHO);
        let decel = f.norm() / BALL_MASS_KG;
        assert!(decel > 5.0 && decel < 20.0, "deceleration {}", decel);
    }

    #[test]
    fn test_wind_force_follows_direction() {
        let v = Vector3::new(0.0, 40.0, -1.0);
        let ltr = wind_force(5.0, WindDirection::LeftToRight, &v, RHO);
        let rtl = wind_force(5.0, WindDirection::RightToLeft, &v, RHO);
        assert!(ltr.x < 0.0);
        assert!(rtl.x > 0.0);
        assert_eq!(ltr.y, 0.0);
        assert_eq!(ltr.z, 0.0);
    }

    #[test]
    fn test_wind_force_linear_in_wind_speed() {
        let v = Vector3::new(0.0, 40.0, 0.0);
        let w = 3.0;
        let rel = (w * w + 40.0 * 40.0_f64).sqrt();
        let expected = 0.5 * RHO * rel * w * DRAG_COEFFICIENT * BALL_AREA_M2;
        let f = wind_force(w, WindDirection::RightToLeft, &v, RHO);
        assert_relative_eq!(f.x, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_calm_wind_is_direction_independent() {
        let v = Vector3::new(0.1, 40.0, -1.0);
        let a = wind_force(0.0, WindDirection::LeftToRight, &v, RHO);
        let b = wind_force(0.0, WindDirection::RightToLeft, &v, RHO);
        assert_eq!(a, Vector3::zeros());
        assert_eq!(a, b);
    }

    #[test]
    fn test_wind_matching_ball_velocity_is_zero() {
        // Ball drifting with the wind sees no relative airflow
        let v = Vector3::new(4.0, 0.0, 0.0);
        let f = wind_force(4.0, WindDirection::RightToLeft, &v, RHO);
        assert_eq!(f, Vector3::zeros());
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = ForceBreakdown {
            magnus: Vector3::new(0.1, 0.0, 0.5),
            drag: Vector3::new(0.0, -1.0, 0.0),
            wind: Vector3::new(-0.2, 0.0, 0.0),
        };
        assert_relative_eq!(breakdown.total(), Vector3::new(-0.1, -1.0, 0.5), epsilon = 1e-12);
    }
}
