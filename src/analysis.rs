//! Post-processing of completed pitch trajectories.
//!
//! The main use is comparing a pitch thrown in calm air with the same pitch
//! thrown into a crosswind: how far the wind moves the ball at the plate and
//! how long the pitch takes to get there.

use rayon::prelude::*;
use serde::Serialize;

use crate::constants::{M_TO_CM, STRIKE_ZONE_BOTTOM_M, STRIKE_ZONE_TOP_M, STRIKE_ZONE_WIDTH_M};
use crate::error::PitchError;
use crate::pitch::PitchParameters;
use crate::solver::{simulate_pitch_with, SolverConfig};
use crate::trajectory::{Trajectory, TrajectorySample};

/// Difference between the arrival points of two trajectories (cm)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DisplacementResult {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Euclidean norm of (x, y, z)
    pub total: f64,
}

/// Displacement of `trajectory_b`'s arrival point relative to `trajectory_a`'s.
///
/// Returns an all-zero result if either trajectory is empty.
pub fn compute_displacement(
    trajectory_a: &[TrajectorySample],
    trajectory_b: &[TrajectorySample],
) -> DisplacementResult {
    let (end_a, end_b) = match (trajectory_a.last(), trajectory_b.last()) {
        (Some(a), Some(b)) => (a, b),
        _ => return DisplacementResult::default(),
    };

    let delta = (end_b.position - end_a.position) * M_TO_CM;

    DisplacementResult {
        x: delta.x,
        y: delta.y,
        z: delta.z,
        total: delta.norm(),
    }
}

/// Time of the last sample (s), 0 for an empty trajectory.
pub fn flight_time(trajectory: &[TrajectorySample]) -> f64 {
    trajectory.last().map_or(0.0, |sample| sample.time)
}

/// Strike zone in the plate plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrikeZone {
    pub bottom: f64, // m above ground
    pub top: f64,    // m above ground
    pub width: f64,  // m, centered on x = 0
}

impl Default for StrikeZone {
    fn default() -> Self {
        Self {
            bottom: STRIKE_ZONE_BOTTOM_M,
            top: STRIKE_ZONE_TOP_M,
            width: STRIKE_ZONE_WIDTH_M,
        }
    }
}

impl StrikeZone {
    pub fn contains(&self, x: f64, z: f64) -> bool {
        x.abs() <= self.width / 2.0 && (self.bottom..=self.top).contains(&z)
    }
}

/// Where a pitch arrives at the plate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlateCrossing {
    /// Lateral offset from the middle of the plate (m)
    pub x: f64,
    /// Height above ground (m)
    pub z: f64,
    /// Flight time (s)
    pub time: f64,
    pub in_strike_zone: bool,
}

/// Arrival point of a trajectory checked against the default strike zone.
pub fn plate_crossing(trajectory: &[TrajectorySample]) -> Option<PlateCrossing> {
    let zone = StrikeZone::default();
    trajectory.last().map(|arrival| PlateCrossing {
        x: arrival.x(),
        z: arrival.z(),
        time: arrival.time,
        in_strike_zone: zone.contains(arrival.x(), arrival.z()),
    })
}

/// Calm-air and crosswind runs of the same pitch, side by side.
#[derive(Debug, Clone, Serialize)]
pub struct WindEffect {
    pub params: PitchParameters,
    pub no_wind: Trajectory,
    pub with_wind: Trajectory,
    /// With-wind arrival minus no-wind arrival (cm)
    pub displacement: DisplacementResult,
    /// Flight time of the with-wind run (s)
    pub flight_time: f64,
    pub plate_no_wind: Option<PlateCrossing>,
    pub plate_with_wind: Option<PlateCrossing>,
}

/// Simulate a pitch with and without its wind and compare the arrivals.
///
/// The two simulations are independent and run concurrently.
pub fn compare_wind_effect(
    params: &PitchParameters,
    config: &SolverConfig,
) -> Result<WindEffect, PitchError> {
    let calm = params.without_wind();

    let (no_wind, with_wind) = rayon::join(
        || simulate_pitch_with(&calm, config),
        || simulate_pitch_with(params, config),
    );
    let (no_wind, with_wind) = (no_wind?, with_wind?);

    let displacement = compute_displacement(no_wind.samples(), with_wind.samples());

    Ok(WindEffect {
        params: params.clone(),
        displacement,
        flight_time: flight_time(with_wind.samples()),
        plate_no_wind: plate_crossing(no_wind.samples()),
        plate_with_wind: plate_crossing(with_wind.samples()),
        no_wind,
        with_wind,
    })
}

/// One point of a wind-speed sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindSweepPoint {
    pub wind_speed: f64, // m/s
    pub displacement: DisplacementResult,
    pub flight_time: f64,
}

/// Displacement caused by each of several wind speeds, in input order.
///
/// The calm-air baseline is computed once and the wind speeds are evaluated
/// in parallel.
pub fn sweep_wind_speeds(
    params: &PitchParameters,
    config: &SolverConfig,
    wind_speeds: &[f64],
) -> Result<Vec<WindSweepPoint>, PitchError> {
    let baseline = simulate_pitch_with(&params.without_wind(), config)?;

    wind_speeds
        .par_iter()
        .map(|&wind_speed| -> Result<WindSweepPoint, PitchError> {
            let trajectory = simulate_pitch_with(&params.with_wind_speed(wind_speed), config)?;
            Ok(WindSweepPoint {
                wind_speed,
                displacement: compute_displacement(baseline.samples(), trajectory.samples()),
                flight_time: trajectory.flight_time(),
            })
        })
        .collect()
}
