/// Wind Effect Example
///
/// Throws the same fastball into calm air and into crosswinds of increasing
/// strength from both sides, then reports where each pitch crosses the plate.
use pitch_engine::{compare_wind_effect, PitchParameters, SolverConfig, WindDirection};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Crosswind Effect on a Fastball ===\n");

    let base = PitchParameters::default();
    let config = SolverConfig::default();

    println!("Pitch:");
    println!("  Velocity: {} km/h", base.velocity);
    println!("  Spin: {} rpm @ {} deg", base.spin_rate, base.spin_axis);
    println!("  Month: {}", base.month);
    println!();

    let scenarios = [
        (WindDirection::LeftToRight, 5.0),
        (WindDirection::LeftToRight, 10.0),
        (WindDirection::LeftToRight, 20.0),
        (WindDirection::RightToLeft, 5.0),
        (WindDirection::RightToLeft, 10.0),
        (WindDirection::RightToLeft, 20.0),
    ];

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(" Direction      | Wind (m/s) | dX (cm) | dZ (cm) | Strike | TOF (s)");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for (direction, wind_speed) in scenarios {
        let params = PitchParameters {
            wind_speed,
            wind_direction: direction,
            ..base.clone()
        };
        let effect = compare_wind_effect(&params, &config)?;
        let strike = effect
            .plate_with_wind
            .map_or(false, |crossing| crossing.in_strike_zone);

        println!(
            " {:14} | {:10.1} | {:7.2} | {:7.2} | {:6} | {:7.3}",
            direction.to_string(),
            wind_speed,
            effect.displacement.x,
            effect.displacement.z,
            if strike { "yes" } else { "no" },
            effect.flight_time
        );
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    Ok(())
}
