use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::constants::KMH_TO_MPS;
use crate::environment::{FIRST_MONTH, LAST_MONTH};
use crate::error::PitchError;
use crate::fastball::{average_spin_rate, AVERAGE_SPIN_AXIS_DEG};
use crate::wind::WindDirection;

/// Supported velocity range for input (km/h)
pub const VELOCITY_RANGE_KMH: RangeInclusive<f64> = 120.0..=170.0;

/// Supported spin rate range for input (rpm)
pub const SPIN_RATE_RANGE_RPM: RangeInclusive<f64> = 1500.0..=3000.0;

/// Supported spin axis range for input (degrees)
pub const SPIN_AXIS_RANGE_DEG: RangeInclusive<f64> = 0.0..=360.0;

/// Supported wind speed range for input (m/s)
pub const WIND_SPEED_RANGE_MPS: RangeInclusive<f64> = 0.0..=50.0;

// Pitch input parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchParameters {
    pub velocity: f64,                // km/h
    pub spin_rate: f64,               // rpm
    pub spin_axis: f64,               // degrees, 180 = pure backspin
    pub wind_speed: f64,              // m/s
    pub wind_direction: WindDirection,
    pub month: u32,                   // 4 (April) through 10 (October)
}

impl Default for PitchParameters {
    fn default() -> Self {
        let velocity = 145.0;
        Self {
            velocity,
            spin_rate: average_spin_rate(velocity),
            spin_axis: AVERAGE_SPIN_AXIS_DEG,
            wind_speed: 5.0,
            wind_direction: WindDirection::LeftToRight,
            month: 7,
        }
    }
}

impl PitchParameters {
    /// Release speed in m/s.
    pub fn velocity_mps(&self) -> f64 {
        self.velocity * KMH_TO_MPS
    }

    /// Same pitch with the wind switched off.
    pub fn without_wind(&self) -> Self {
        self.with_wind_speed(0.0)
    }

    /// Same pitch with a different wind speed.
    pub fn with_wind_speed(&self, wind_speed: f64) -> Self {
        Self {
            wind_speed,
            ..self.clone()
        }
    }

    /// Check the physical preconditions of the simulation.
    ///
    /// Velocity must be positive since the spin parameter divides by speed.
    pub fn validate(&self) -> Result<(), PitchError> {
        if !self.velocity.is_finite() || self.velocity <= 0.0 {
            return Err(PitchError::InvalidVelocity(self.velocity));
        }
        if !self.spin_rate.is_finite() || self.spin_rate < 0.0 {
            return Err(PitchError::InvalidSpinRate(self.spin_rate));
        }
        if !self.spin_axis.is_finite() {
            return Err(PitchError::InvalidSpinAxis(self.spin_axis));
        }
        if !self.wind_speed.is_finite() || self.wind_speed < 0.0 {
            return Err(PitchError::InvalidWindSpeed(self.wind_speed));
        }
        if !(FIRST_MONTH..=LAST_MONTH).contains(&self.month) {
            return Err(PitchError::InvalidMonth(self.month));
        }
        Ok(())
    }

    /// Names of fields that are valid but outside the supported input ranges.
    pub fn out_of_range_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if !VELOCITY_RANGE_KMH.contains(&self.velocity) {
            fields.push("velocity");
        }
        if !SPIN_RATE_RANGE_RPM.contains(&self.spin_rate) {
            fields.push("spin_rate");
        }
        if !SPIN_AXIS_RANGE_DEG.contains(&self.spin_axis) {
            fields.push("spin_axis");
        }
        if !WIND_SPEED_RANGE_MPS.contains(&self.wind_speed) {
            fields.push("wind_speed");
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_average_fastball() {
        let params = PitchParameters::default();
        assert_eq!(params.velocity, 145.0);
        assert_eq!(params.spin_rate, 2100.0);
        assert_eq!(params.spin_axis, 200.0);
        assert_eq!(params.month, 7);
        assert!(params.validate().is_ok());
        assert!(params.out_of_range_fields().is_empty());
    }

    #[test]
    fn test_velocity_conversion() {
        let params = PitchParameters {
            velocity: 144.0,
            ..Default::default()
        };
        assert!((params.velocity_mps() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        let base = PitchParameters::default();

        let zero_velocity = PitchParameters {
            velocity: 0.0,
            ..base.clone()
        };
        assert_eq!(zero_velocity.validate(), Err(PitchError::InvalidVelocity(0.0)));

        let negative_spin = PitchParameters {
            spin_rate: -1.0,
            ..base.clone()
        };
        assert_eq!(negative_spin.validate(), Err(PitchError::InvalidSpinRate(-1.0)));

        let nan_axis = PitchParameters {
            spin_axis: f64::NAN,
            ..base.clone()
        };
        assert!(matches!(nan_axis.validate(), Err(PitchError::InvalidSpinAxis(_))));

        let negative_wind = PitchParameters {
            wind_speed: -2.0,
            ..base.clone()
        };
        assert_eq!(negative_wind.validate(), Err(PitchError::InvalidWindSpeed(-2.0)));

        let winter = PitchParameters { month: 1, ..base };
        assert_eq!(winter.validate(), Err(PitchError::InvalidMonth(1)));
    }

    #[test]
    fn test_out_of_range_fields() {
        let params = PitchParameters {
            velocity: 100.0,
            spin_rate: 0.0,
            spin_axis: 400.0,
            wind_speed: 60.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
        assert_eq!(
            params.out_of_range_fields(),
            vec!["velocity", "spin_rate", "spin_axis", "wind_speed"]
        );
    }

    #[test]
    fn test_without_wind_keeps_everything_else() {
        let params = PitchParameters {
            wind_speed: 12.0,
            wind_direction: WindDirection::RightToLeft,
            ..Default::default()
        };
        let calm = params.without_wind();
        assert_eq!(calm.wind_speed, 0.0);
        assert_eq!(calm.wind_direction, WindDirection::RightToLeft);
        assert_eq!(calm.velocity, params.velocity);
        assert_eq!(calm.month, params.month);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let params: PitchParameters =
            serde_json::from_str(r#"{"velocity": 150.0, "wind_direction": "right_to_left"}"#)
                .unwrap();
        assert_eq!(params.velocity, 150.0);
        assert_eq!(params.wind_direction, WindDirection::RightToLeft);
        assert_eq!(params.month, 7);
    }
}
