//! Average four-seam fastball model.
//!
//! Spin rate grows with velocity across the 135-170 km/h band, and the average
//! spin axis sits slightly past pure backspin.

/// Average four-seam spin axis (degrees); pure backspin is 180
pub const AVERAGE_SPIN_AXIS_DEG: f64 = 200.0;

/// Reference velocity for the spin model (km/h)
const REFERENCE_VELOCITY_KMH: f64 = 145.0;

/// Average spin rate at the reference velocity (rpm)
const REFERENCE_SPIN_RPM: f64 = 2100.0;

/// Spin rate gained per km/h above the reference (rpm)
const SPIN_PER_KMH: f64 = 8.0;

/// Spin rate at which the movement model is normalised (rpm)
const MOVEMENT_REFERENCE_SPIN_RPM: f64 = 2200.0;

/// Average spin rate (rpm) for a fastball thrown at `velocity_kmh`, rounded.
pub fn average_spin_rate(velocity_kmh: f64) -> f64 {
    (REFERENCE_SPIN_RPM + (velocity_kmh - REFERENCE_VELOCITY_KMH) * SPIN_PER_KMH).round()
}

/// Typical pitch movement in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchMovement {
    /// Horizontal movement (in)
    pub pfx_x: f64,
    /// Induced vertical movement (in)
    pub pfx_z: f64,
}

/// Average fastball movement for a given spin rate.
pub fn average_movement(spin_rate_rpm: f64) -> PitchMovement {
    let spin_factor = spin_rate_rpm / MOVEMENT_REFERENCE_SPIN_RPM;
    PitchMovement {
        pfx_x: -0.7 * spin_factor,
        pfx_z: 1.35 * spin_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_average_spin_rate() {
        assert_eq!(average_spin_rate(145.0), 2100.0);
        assert_eq!(average_spin_rate(155.0), 2180.0);
        assert_eq!(average_spin_rate(135.0), 2020.0);
        // Rounded to whole rpm
        assert_eq!(average_spin_rate(145.3), 2102.0);
    }

    #[test]
    fn test_average_movement_scales_with_spin() {
        let reference = average_movement(2200.0);
        assert_relative_eq!(reference.pfx_x, -0.7);
        assert_relative_eq!(reference.pfx_z, 1.35);

        let more_spin = average_movement(2640.0);
        assert!(more_spin.pfx_z > reference.pfx_z);
        assert!(more_spin.pfx_x < reference.pfx_x);
    }
}
