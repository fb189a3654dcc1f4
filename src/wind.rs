use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PitchError;

/// Crosswind direction across the plate.
///
/// The field frame has x lateral, y downrange toward home plate and z up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindDirection {
    /// First base toward third base, blowing along -x
    #[default]
    LeftToRight,
    /// Third base toward first base, blowing along +x
    RightToLeft,
}

impl WindDirection {
    /// Sign of the wind's x component.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            WindDirection::LeftToRight => -1.0,
            WindDirection::RightToLeft => 1.0,
        }
    }

    /// Wind velocity vector (m/s) for a given wind speed.
    ///
    /// The crosswind is purely lateral; it has no downrange or vertical part.
    pub fn wind_vector(self, speed_mps: f64) -> Vector3<f64> {
        Vector3::new(self.sign() * speed_mps, 0.0, 0.0)
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WindDirection::LeftToRight => write!(f, "left-to-right"),
            WindDirection::RightToLeft => write!(f, "right-to-left"),
        }
    }
}

impl FromStr for WindDirection {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left-to-right" | "left_to_right" | "ltr" | "1to3" => Ok(WindDirection::LeftToRight),
            "right-to-left" | "right_to_left" | "rtl" | "3to1" => Ok(WindDirection::RightToLeft),
            _ => Err(PitchError::UnknownWindDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_vector_signs() {
        let ltr = WindDirection::LeftToRight.wind_vector(5.0);
        assert_eq!(ltr, Vector3::new(-5.0, 0.0, 0.0));

        let rtl = WindDirection::RightToLeft.wind_vector(5.0);
        assert_eq!(rtl, Vector3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_calm_wind_is_zero() {
        assert_eq!(WindDirection::LeftToRight.wind_vector(0.0).norm(), 0.0);
        assert_eq!(WindDirection::RightToLeft.wind_vector(0.0).norm(), 0.0);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("1to3".parse::<WindDirection>().unwrap(), WindDirection::LeftToRight);
        assert_eq!("3to1".parse::<WindDirection>().unwrap(), WindDirection::RightToLeft);
        assert_eq!(
            "Left-To-Right".parse::<WindDirection>().unwrap(),
            WindDirection::LeftToRight
        );
        assert!(matches!(
            "north".parse::<WindDirection>(),
            Err(PitchError::UnknownWindDirection(_))
        ));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for dir in [WindDirection::LeftToRight, WindDirection::RightToLeft] {
            assert_eq!(dir.to_string().parse::<WindDirection>().unwrap(), dir);
        }
    }
}
