use thiserror::Error;

/// Errors raised while validating inputs or configuring the solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PitchError {
    #[error("no environment data for month {0} (expected 4-10)")]
    InvalidMonth(u32),
    #[error("pitch velocity must be positive and finite, got {0} km/h")]
    InvalidVelocity(f64),
    #[error("spin rate must be non-negative and finite, got {0} rpm")]
    InvalidSpinRate(f64),
    #[error("spin axis must be finite, got {0} degrees")]
    InvalidSpinAxis(f64),
    #[error("wind speed must be non-negative and finite, got {0} m/s")]
    InvalidWindSpeed(f64),
    #[error("time step must be finite and at least 1e-6 s, got {0} s")]
    InvalidTimeStep(f64),
    #[error("flight time cap must be positive and finite, got {0} s")]
    InvalidFlightTimeCap(f64),
    #[error("a {max_flight_time} s cap at {time_step} s steps exceeds the integration step limit")]
    TooManySteps { time_step: f64, max_flight_time: f64 },
    #[error("unknown wind direction '{0}' (use left-to-right/1to3 or right-to-left/3to1)")]
    UnknownWindDirection(String),
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown density source '{0}' (use table or formula)")]
    UnknownDensitySource(String),
}
