//! # Pitch Engine
//!
//! Baseball pitch trajectory engine: gravity, quadratic drag, Magnus lift and
//! crosswind forces integrated from release to home plate.

// Re-export the main types and functions
pub use analysis::{
    compare_wind_effect, compute_displacement, flight_time, plate_crossing, sweep_wind_speeds,
    DisplacementResult, PlateCrossing, StrikeZone, WindEffect, WindSweepPoint,
};
pub use environment::{density_from_conditions, lookup, DensitySource, EnvironmentCondition};
pub use error::PitchError;
pub use pitch::PitchParameters;
pub use solver::{
    simulate_pitch, simulate_pitch_with, IntegratorState, PitchIntegrator, SolverConfig,
};
pub use trajectory::{Termination, Trajectory, TrajectorySample};
pub use wind::WindDirection;

// Module declarations
pub mod analysis;
pub mod constants;
pub mod environment;
mod error;
pub mod fastball;
pub mod forces;
pub mod pitch;
pub mod solver;
pub mod trajectory;
pub mod wind;
