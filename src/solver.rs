//! Fixed-step pitch trajectory integrator.
//!
//! The integrator is an explicit Euler scheme with a constant time step. It has
//! two states, [`IntegratorState::Running`] and [`IntegratorState::Terminated`].
//! While running, each step records the current sample and then advances
//! velocity and position under gravity, drag, Magnus lift and crosswind.
//!
//! The run terminates once the ball passes the plate's downrange distance or the
//! flight-time cap is reached. A final arrival sample is then appended with `y`
//! clamped to the plate distance while `x` and `z` keep the last integrated
//! values; they are not interpolated back to the exact crossing time.

use log::{debug, warn};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BALL_MASS_KG, DEFAULT_TIME_STEP_S, GRAVITY_MPS2, MAX_FLIGHT_TIME_S, MAX_INTEGRATION_STEPS,
    MIN_TIME_STEP_S, MIN_VELOCITY_THRESHOLD, MOUND_DISTANCE_M, RELEASE_AIM_FACTOR,
    RELEASE_EXTENSION_M, RELEASE_HEIGHT_M, STRIKE_ZONE_CENTER_M,
};
use crate::environment::DensitySource;
use crate::error::PitchError;
use crate::forces::{drag_force, magnus_force, wind_force, ForceBreakdown};
use crate::pitch::PitchParameters;
use crate::trajectory::{Termination, Trajectory, TrajectorySample};
use crate::wind::WindDirection;

/// Numerical settings for the integrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub time_step: f64,       // seconds
    pub max_flight_time: f64, // seconds, safety cap
    pub density_source: DensitySource,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP_S,
            max_flight_time: MAX_FLIGHT_TIME_S,
            density_source: DensitySource::MonthlyTable,
        }
    }
}

impl SolverConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, PitchError> {
        let config: SolverConfig =
            serde_json::from_str(json).map_err(|e| PitchError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PitchError> {
        if !self.time_step.is_finite() || self.time_step < MIN_TIME_STEP_S {
            return Err(PitchError::InvalidTimeStep(self.time_step));
        }
        if !self.max_flight_time.is_finite() || self.max_flight_time <= 0.0 {
            return Err(PitchError::InvalidFlightTimeCap(self.max_flight_time));
        }
        // Every step stores a sample
        if self.max_flight_time / self.time_step > MAX_INTEGRATION_STEPS as f64 {
            return Err(PitchError::TooManySteps {
                time_step: self.time_step,
                max_flight_time: self.max_flight_time,
            });
        }
        Ok(())
    }

    /// Upper bound on the number of integration steps.
    pub fn max_steps(&self) -> usize {
        (self.max_flight_time / self.time_step).ceil() as usize + 1
    }
}

/// Release angle (radians, negative = downward) aimed at the strike zone.
///
/// The straight-line drop from the release point to the zone center is scaled
/// by [`RELEASE_AIM_FACTOR`] so gravity and lift bring the ball down the rest.
pub fn release_angle() -> f64 {
    let flight_distance = MOUND_DISTANCE_M - RELEASE_EXTENSION_M;
    let height_drop = RELEASE_HEIGHT_M - STRIKE_ZONE_CENTER_M;
    (-height_drop * RELEASE_AIM_FACTOR).atan2(flight_distance)
}

/// Release point in the field frame (m)
pub fn release_point() -> Vector3<f64> {
    Vector3::new(0.0, RELEASE_EXTENSION_M, RELEASE_HEIGHT_M)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorState {
    Running,
    Terminated,
}

/// Step-by-step pitch integrator.
#[derive(Debug, Clone)]
pub struct PitchIntegrator {
    spin_rate: f64,
    spin_axis: f64,
    wind_speed: f64,
    wind_direction: WindDirection,
    air_density: f64,
    density_source: DensitySource,
    time_step: f64,
    max_flight_time: f64,
    max_steps: usize,

    position: Vector3<f64>,
    velocity: Vector3<f64>,
    time: f64,
    steps: usize,
    samples: Vec<TrajectorySample>,
    state: IntegratorState,
    termination: Option<Termination>,
}

impl PitchIntegrator {
    /// Set up the release state for a pitch.
    pub fn new(params: &PitchParameters, config: &SolverConfig) -> Result<Self, PitchError> {
        params.validate()?;
        config.validate()?;

        for field in params.out_of_range_fields() {
            warn!("pitch parameter '{}' is outside the supported input range", field);
        }

        let air_density = config.density_source.air_density(params.month)?;

        let speed = params.velocity_mps();
        let angle = release_angle();
        let velocity = Vector3::new(0.0, speed * angle.cos(), speed * angle.sin());

        debug!(
            "starting pitch: {:.1} km/h, {:.0} rpm @ {:.0} deg, wind {:.1} m/s {}, \
             air density {:.4} kg/m3 ({}), release angle {:.3} deg",
            params.velocity,
            params.spin_rate,
            params.spin_axis,
            params.wind_speed,
            params.wind_direction,
            air_density,
            config.density_source,
            angle.to_degrees(),
        );

        let max_steps = config.max_steps();

        Ok(Self {
            spin_rate: params.spin_rate,
            spin_axis: params.spin_axis,
            wind_speed: params.wind_speed,
            wind_direction: params.wind_direction,
            air_density,
            density_source: config.density_source,
            time_step: config.time_step,
            max_flight_time: config.max_flight_time,
            max_steps,
            position: release_point(),
            velocity,
            time: 0.0,
            steps: 0,
            samples: Vec::with_capacity(max_steps.min(4096) + 1),
            state: IntegratorState::Running,
            termination: None,
        })
    }

    pub fn state(&self) -> IntegratorState {
        self.state
    }

    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn air_density(&self) -> f64 {
        self.air_density
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    /// Forces acting on the ball in its current state (N).
    pub fn forces(&self) -> ForceBreakdown {
        let speed = self.velocity.norm();

        // Spin parameter is undefined at rest
        let magnus = if speed > MIN_VELOCITY_THRESHOLD {
            magnus_force(speed, self.spin_rate, self.spin_axis, self.air_density)
        } else {
            Vector3::zeros()
        };

        ForceBreakdown {
            magnus,
            drag: drag_force(&self.velocity, self.air_density),
            wind: wind_force(
                self.wind_speed,
                self.wind_direction,
                &self.velocity,
                self.air_density,
            ),
        }
    }

    /// Current acceleration including gravity (m/s²).
    pub fn acceleration(&self) -> Vector3<f64> {
        let mut acceleration = self.forces().total() / BALL_MASS_KG;
        acceleration.z -= GRAVITY_MPS2;
        acceleration
    }

    /// Advance one time step, or terminate if the run is over.
    pub fn step(&mut self) -> IntegratorState {
        if self.state == IntegratorState::Terminated {
            return self.state;
        }

        let in_flight = self.position.y < MOUND_DISTANCE_M
            && self.time < self.max_flight_time
            && self.steps < self.max_steps;
        if !in_flight {
            self.terminate();
            return self.state;
        }

        self.samples.push(TrajectorySample::new(self.position, self.time));

        let acceleration = self.acceleration();
        self.velocity += acceleration * self.time_step;
        self.position += self.velocity * self.time_step;
        self.time += self.time_step;
        self.steps += 1;

        self.state
    }

    fn terminate(&mut self) {
        let termination = if self.position.y >= MOUND_DISTANCE_M {
            Termination::ReachedPlate
        } else {
            warn!(
                "pitch stopped by the {:.2} s flight-time cap at y = {:.3} m",
                self.max_flight_time, self.position.y
            );
            Termination::TimeCap
        };

        if !self.samples.is_empty() {
            let arrival = Vector3::new(self.position.x, MOUND_DISTANCE_M, self.position.z);
            self.samples.push(TrajectorySample::new(arrival, self.time));
        }

        debug!(
            "pitch terminated after {} steps: {:?}, flight time {:.4} s, plate x = {:.4} m, z = {:.4} m",
            self.steps, termination, self.time, self.position.x, self.position.z
        );

        self.termination = Some(termination);
        self.state = IntegratorState::Terminated;
    }

    /// Run to termination and hand over the trajectory.
    pub fn run(mut self) -> Trajectory {
        while self.step() == IntegratorState::Running {}

        let termination = self.termination.unwrap_or(Termination::TimeCap);
        Trajectory::new(
            self.samples,
            self.air_density,
            self.density_source,
            termination,
        )
    }
}

/// Simulate a pitch with the default solver settings.
pub fn simulate_pitch(params: &PitchParameters) -> Result<Trajectory, PitchError> {
    simulate_pitch_with(params, &SolverConfig::default())
}

/// Simulate a pitch with explicit solver settings.
pub fn simulate_pitch_with(
    params: &PitchParameters,
    config: &SolverConfig,
) -> Result<Trajectory, PitchError> {
    Ok(PitchIntegrator::new(params, config)?.run())
}
