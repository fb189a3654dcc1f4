use nalgebra::Vector3;
use serde::Serialize;

use crate::environment::DensitySource;

/// Single time-stamped point on a pitch trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    /// Position (m): x lateral, y downrange from the rubber, z height above ground
    pub position: Vector3<f64>,
    /// Time since release (s)
    pub time: f64,
}

impl TrajectorySample {
    pub fn new(position: Vector3<f64>, time: f64) -> Self {
        Self { position, time }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.position.z
    }
}

/// Why the integrator stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The ball reached the plate's downrange distance
    ReachedPlate,
    /// The safety flight-time cap was hit first
    TimeCap,
}

/// Completed pitch trajectory.
///
/// Samples are strictly increasing in time, start at time 0 at the release
/// point and end with the arrival sample at the plate distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
    air_density: f64,
    density_source: DensitySource,
    termination: Termination,
}

impl Trajectory {
    pub(crate) fn new(
        samples: Vec<TrajectorySample>,
        air_density: f64,
        density_source: DensitySource,
        termination: Termination,
    ) -> Self {
        Self {
            samples,
            air_density,
            density_source,
            termination,
        }
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&TrajectorySample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectorySample> {
        self.samples.iter()
    }

    /// Air density the trajectory was computed with (kg/m³)
    pub fn air_density(&self) -> f64 {
        self.air_density
    }

    pub fn density_source(&self) -> DensitySource {
        self.density_source
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Time of the arrival sample (s), 0 when empty
    pub fn flight_time(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.time)
    }

    /// Highest point reached (m), 0 when empty
    pub fn max_height(&self) -> f64 {
        self.samples
            .iter()
            .map(TrajectorySample::z)
            .fold(None, |max: Option<f64>, z| Some(max.map_or(z, |m| m.max(z))))
            .unwrap_or(0.0)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectorySample;
    type IntoIter = std::slice::Iter<'a, TrajectorySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f64, y: f64, z: f64, time: f64) -> TrajectorySample {
        TrajectorySample::new(Vector3::new(x, y, z), time)
    }

    #[test]
    fn test_accessors() {
        let trajectory = Trajectory::new(
            vec![sample(0.0, 1.85, 2.054, 0.0), sample(0.1, 18.44, 0.9, 0.45)],
            1.155,
            DensitySource::MonthlyTable,
            Termination::ReachedPlate,
        );

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.first().unwrap().time, 0.0);
        assert_eq!(trajectory.last().unwrap().y(), 18.44);
        assert_eq!(trajectory.flight_time(), 0.45);
        assert_eq!(trajectory.max_height(), 2.054);
        assert_eq!(trajectory.air_density(), 1.155);
        assert_eq!(trajectory.termination(), Termination::ReachedPlate);
        assert_eq!((&trajectory).into_iter().count(), 2);
    }

    #[test]
    fn test_empty_trajectory() {
        let trajectory = Trajectory::new(
            Vec::new(),
            1.155,
            DensitySource::Formula,
            Termination::TimeCap,
        );
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.flight_time(), 0.0);
        assert_eq!(trajectory.max_height(), 0.0);
        assert!(trajectory.last().is_none());
    }

    #[test]
    fn test_sample_serializes_position_and_time() {
        let json = serde_json::to_value(sample(0.5, 10.0, 1.2, 0.25)).unwrap();
        assert_eq!(json["time"], 0.25);
        assert!(json.get("position").is_some());
    }
}
