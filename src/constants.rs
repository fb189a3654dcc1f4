/// Physical constants used in pitch trajectory calculations

/// Gravitational acceleration in m/s²
pub const GRAVITY_MPS2: f64 = 9.81;

/// Conversion factor: kilometers per hour to meters per second
pub const KMH_TO_MPS: f64 = 1.0 / 3.6;

/// Conversion factor: meters to centimeters
pub const M_TO_CM: f64 = 100.0;

/// Conversion factor: revolutions per minute to radians per second
pub const RPM_TO_RAD_S: f64 = 2.0 * std::f64::consts::PI / 60.0;

// Baseball properties

/// Official baseball mass (kg), 145 g
pub const BALL_MASS_KG: f64 = 0.145;

/// Baseball radius (m), from a 7.3 cm diameter
pub const BALL_RADIUS_M: f64 = 0.0365;

/// Baseball cross-sectional area (m²), π·r²
pub const BALL_AREA_M2: f64 = std::f64::consts::PI * BALL_RADIUS_M * BALL_RADIUS_M;

// Aerodynamic coefficients

/// Drag coefficient for a baseball at pitching speeds
pub const DRAG_COEFFICIENT: f64 = 0.35;

/// Base lift coefficient scaling the spin parameter
///
/// The effective lift coefficient is `LIFT_COEFFICIENT_BASE * S * LIFT_SPIN_SCALE`
/// where S is the dimensionless spin parameter ω·r/v.
pub const LIFT_COEFFICIENT_BASE: f64 = 0.2;

/// Multiplier applied to the spin parameter in the lift coefficient
pub const LIFT_SPIN_SCALE: f64 = 10.0;

// Field geometry

/// Pitching rubber to home plate (m), 60.5 ft
pub const MOUND_DISTANCE_M: f64 = 18.44;

/// Forward offset from the rubber where the ball leaves the hand (m), about 6 ft
pub const RELEASE_EXTENSION_M: f64 = 1.85;

/// Mound height above field level (m), 10 in
pub const MOUND_HEIGHT_M: f64 = 0.254;

/// Release height above the mound surface (m)
pub const RELEASE_HEIGHT_ABOVE_MOUND_M: f64 = 1.8;

/// Release height above field level (m)
pub const RELEASE_HEIGHT_M: f64 = MOUND_HEIGHT_M + RELEASE_HEIGHT_ABOVE_MOUND_M;

/// Strike zone bottom, knee height (m)
pub const STRIKE_ZONE_BOTTOM_M: f64 = 0.5;

/// Strike zone top, chest height (m)
pub const STRIKE_ZONE_TOP_M: f64 = 1.1;

/// Strike zone vertical center used to calibrate the release angle (m)
pub const STRIKE_ZONE_CENTER_M: f64 = 0.8;

/// Home plate width (m), 17 in
pub const STRIKE_ZONE_WIDTH_M: f64 = 0.43;

/// Calibration factor applied to the height drop when aiming the release
///
/// Aiming at only 60% of the straight-line drop lets gravity and lift settle
/// the ball near the zone center.
pub const RELEASE_AIM_FACTOR: f64 = 0.6;

// Atmosphere

/// Standard atmospheric pressure (Pa)
pub const STANDARD_PRESSURE_PA: f64 = 101325.0;

/// Specific gas constant for dry air (J/(kg·K))
pub const R_DRY: f64 = 287.05;

/// Specific gas constant for water vapor (J/(kg·K))
pub const R_VAPOR: f64 = 461.5;

/// Offset between Celsius and Kelvin
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

// Numerical settings

/// Default integration time step (s)
pub const DEFAULT_TIME_STEP_S: f64 = 0.001;

/// Smallest accepted integration time step (s)
pub const MIN_TIME_STEP_S: f64 = 1e-6;

/// Upper bound on integration steps for any solver configuration
pub const MAX_INTEGRATION_STEPS: usize = 10_000_000;

/// Safety cap on simulated flight time (s)
///
/// Realistic pitches reach the plate well under one second; the cap only
/// guarantees that the integration loop terminates.
pub const MAX_FLIGHT_TIME_S: f64 = 2.0;

/// Minimum speed below which the spin parameter is not evaluated (m/s)
pub const MIN_VELOCITY_THRESHOLD: f64 = 1e-6;
