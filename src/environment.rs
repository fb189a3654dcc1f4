//! Seasonal atmospheric conditions for pitch calculations.
//!
//! Two independent sources of air density are provided:
//!
//! - a static table of monthly averages (April through October) with a
//!   precomputed density for each month
//! - an ideal-gas formula with a water vapor partial pressure term that derives
//!   density from temperature and humidity
//!
//! The two sources are not guaranteed to agree numerically. The solver picks one
//! through [`DensitySource`]; the monthly table is the canonical choice.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{CELSIUS_TO_KELVIN, R_DRY, R_VAPOR, STANDARD_PRESSURE_PA};
use crate::error::PitchError;

/// First month covered by the table (April)
pub const FIRST_MONTH: u32 = 4;

/// Last month covered by the table (October)
pub const LAST_MONTH: u32 = 10;

/// Average ballpark conditions for one month of the season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentCondition {
    /// Display label
    pub name: &'static str,
    /// Temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Precomputed air density (kg/m³)
    pub air_density: f64,
}

/// Monthly table, built once and shared read-only.
static MONTHLY_CONDITIONS: Lazy<BTreeMap<u32, EnvironmentCondition>> = Lazy::new(|| {
    let rows = [
        (4, "April", 12.5, 55.0, 1.235),
        (5, "May", 18.0, 62.0, 1.205),
        (6, "June", 23.5, 72.0, 1.175),
        (7, "July", 26.5, 80.0, 1.155),
        (8, "August", 27.0, 78.0, 1.150),
        (9, "September", 22.5, 68.0, 1.180),
        (10, "October", 15.5, 58.0, 1.220),
    ];

    rows.iter()
        .map(|&(month, name, temperature, humidity, air_density)| {
            (
                month,
                EnvironmentCondition {
                    name,
                    temperature,
                    humidity,
                    air_density,
                },
            )
        })
        .collect()
});

/// Look up the average conditions for a month (4 = April ... 10 = October).
pub fn lookup(month: u32) -> Result<&'static EnvironmentCondition, PitchError> {
    MONTHLY_CONDITIONS
        .get(&month)
        .ok_or(PitchError::InvalidMonth(month))
}

/// Iterate over the full table in month order.
pub fn monthly_conditions() -> impl Iterator<Item = (u32, &'static EnvironmentCondition)> {
    MONTHLY_CONDITIONS.iter().map(|(month, condition)| (*month, condition))
}

/// Saturation vapor pressure over water (Pa), Magnus approximation.
#[inline]
pub fn saturation_vapor_pressure(temp_c: f64) -> f64 {
    611.2 * ((17.67 * temp_c) / (temp_c + 243.5)).exp()
}

/// Air density from temperature and relative humidity at standard pressure.
///
/// # Arguments
/// * `temp_c` - Temperature in Celsius
/// * `humidity_percent` - Relative humidity (0-100)
///
/// # Returns
/// Air density in kg/m³
pub fn density_from_conditions(temp_c: f64, humidity_percent: f64) -> f64 {
    let temp_k = temp_c + CELSIUS_TO_KELVIN;

    let vapor_pressure_pa = (humidity_percent / 100.0) * saturation_vapor_pressure(temp_c);
    let dry_pressure_pa = STANDARD_PRESSURE_PA - vapor_pressure_pa;

    dry_pressure_pa / (R_DRY * temp_k) + vapor_pressure_pa / (R_VAPOR * temp_k)
}

/// Where the solver takes its air density from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensitySource {
    /// Precomputed density from the monthly table
    #[default]
    MonthlyTable,
    /// Density derived from the month's temperature and humidity
    Formula,
}

impl DensitySource {
    /// Resolve the air density (kg/m³) for a month.
    pub fn air_density(self, month: u32) -> Result<f64, PitchError> {
        let condition = lookup(month)?;
        Ok(match self {
            DensitySource::MonthlyTable => condition.air_density,
            DensitySource::Formula => {
                density_from_conditions(condition.temperature, condition.humidity)
            }
        })
    }
}

impl fmt::Display for DensitySource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DensitySource::MonthlyTable => write!(f, "table"),
            DensitySource::Formula => write!(f, "formula"),
        }
    }
}

impl FromStr for DensitySource {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "monthly_table" | "monthly-table" => Ok(DensitySource::MonthlyTable),
            "formula" => Ok(DensitySource::Formula),
            _ => Err(PitchError::UnknownDensitySource(s.to_string())),
        }
    }
}
