use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use pitch_engine::environment::monthly_conditions;
use pitch_engine::fastball::{average_movement, average_spin_rate};
use pitch_engine::{
    compare_wind_effect, density_from_conditions, plate_crossing, simulate_pitch_with,
    sweep_wind_speeds, DensitySource, PitchParameters, SolverConfig, Trajectory, WindDirection,
    WindEffect, WindSweepPoint,
};

#[derive(Parser)]
#[command(name = "pitch-cli")]
#[command(version = "0.1.0")]
#[command(about = "Baseball pitch trajectory calculator with crosswind effects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a single pitch trajectory
    Simulate {
        #[command(flatten)]
        pitch: PitchArgs,

        #[command(flatten)]
        solver: SolverArgs,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Full output (show all trajectory points)
        #[arg(long)]
        full: bool,
    },

    /// Compare the pitch in calm air against the same pitch in wind
    Compare {
        #[command(flatten)]
        pitch: PitchArgs,

        #[command(flatten)]
        solver: SolverArgs,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Sweep wind speeds and report the displacement at the plate
    Sweep {
        #[command(flatten)]
        pitch: PitchArgs,

        #[command(flatten)]
        solver: SolverArgs,

        /// First wind speed (m/s)
        #[arg(long, default_value = "0.0")]
        from: f64,

        /// Last wind speed (m/s)
        #[arg(long, default_value = "20.0")]
        to: f64,

        /// Wind speed increment (m/s)
        #[arg(long, default_value = "2.0")]
        step: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Show monthly ballpark conditions
    Environment,

    /// Display engine information
    Info,
}

/// Most wind speeds a single sweep evaluates
const MAX_SWEEP_POINTS: usize = 1000;

#[derive(Args)]
struct PitchArgs {
    /// Pitch velocity (km/h)
    #[arg(short = 'v', long, default_value = "145.0")]
    velocity: f64,

    /// Spin rate (rpm), defaults to the average fastball spin for the velocity
    #[arg(short = 's', long)]
    spin_rate: Option<f64>,

    /// Spin axis (degrees, 180 = pure backspin)
    #[arg(short = 'a', long, default_value = "200.0")]
    spin_axis: f64,

    /// Wind speed (m/s)
    #[arg(short = 'w', long, default_value = "5.0")]
    wind_speed: f64,

    /// Wind direction (left-to-right/1to3, right-to-left/3to1)
    #[arg(short = 'd', long, default_value = "left-to-right")]
    wind_direction: String,

    /// Month of the season (4-10)
    #[arg(short = 'm', long, default_value = "7")]
    month: u32,
}

impl PitchArgs {
    fn to_params(&self) -> Result<PitchParameters, Box<dyn Error>> {
        let wind_direction: WindDirection = self.wind_direction.parse()?;
        let params = PitchParameters {
            velocity: self.velocity,
            spin_rate: self
                .spin_rate
                .unwrap_or_else(|| average_spin_rate(self.velocity)),
            spin_axis: self.spin_axis,
            wind_speed: self.wind_speed,
            wind_direction,
            month: self.month,
        };
        params.validate()?;
        Ok(params)
    }
}

#[derive(Args)]
struct SolverArgs {
    /// Solver configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time step (seconds), overrides the configuration file
    #[arg(long)]
    time_step: Option<f64>,

    /// Air density source (table or formula), overrides the configuration file
    #[arg(long)]
    density: Option<String>,
}

impl SolverArgs {
    fn to_config(&self) -> Result<SolverConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => {
                info!("loading solver configuration from {}", path.display());
                SolverConfig::from_json_str(&fs::read_to_string(path)?)?
            }
            None => SolverConfig::default(),
        };

        if let Some(time_step) = self.time_step {
            config.time_step = time_step;
        }
        if let Some(density) = &self.density {
            config.density_source = density.parse::<DensitySource>()?;
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            pitch,
            solver,
            output,
            full,
        } => {
            let params = pitch.to_params()?;
            let config = solver.to_config()?;

            let trajectory = simulate_pitch_with(&params, &config)?;

            display_trajectory(&params, &trajectory, output, full)?;
        }

        Commands::Compare {
            pitch,
            solver,
            output,
        } => {
            let params = pitch.to_params()?;
            let config = solver.to_config()?;

            let effect = compare_wind_effect(&params, &config)?;

            display_comparison(&effect, output)?;
        }

        Commands::Sweep {
            pitch,
            solver,
            from,
            to,
            step,
            output,
        } => {
            let finite = from.is_finite() && to.is_finite() && step.is_finite();
            if !finite || step <= 0.0 || from < 0.0 || to < from {
                return Err("sweep needs finite 0 <= from <= to and a positive step".into());
            }

            let intervals = ((to - from) / step + 1e-9).floor();
            if intervals >= MAX_SWEEP_POINTS as f64 {
                return Err(format!(
                    "sweep would evaluate more than {} wind speeds, use a larger step",
                    MAX_SWEEP_POINTS
                )
                .into());
            }

            let params = pitch.to_params()?;
            let config = solver.to_config()?;

            let count = intervals as usize + 1;
            let speeds: Vec<f64> = (0..count).map(|i| from + i as f64 * step).collect();

            let sweep = sweep_wind_speeds(&params, &config, &speeds)?;

            display_sweep(&params, &sweep, output)?;
        }

        Commands::Environment => {
            println!("┌───────┬───────────┬──────────┬──────────┬───────────────┬───────────────┐");
            println!("│ Month │ Name      │ Temp (C) │ Hum (%)  │ Table (kg/m3) │ Formula       │");
            println!("├───────┼───────────┼──────────┼──────────┼───────────────┼───────────────┤");
            for (month, condition) in monthly_conditions() {
                let formula = density_from_conditions(condition.temperature, condition.humidity);
                println!(
                    "│ {:>5} │ {:<9} │ {:>8.1} │ {:>8.0} │ {:>13.3} │ {:>13.4} │",
                    month,
                    condition.name,
                    condition.temperature,
                    condition.humidity,
                    condition.air_density,
                    formula
                );
            }
            println!("└───────┴───────────┴──────────┴──────────┴───────────────┴───────────────┘");
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║          PITCH ENGINE v0.1.0           ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Baseball pitch trajectory calculator.  ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Magnus lift from spin rate and axis  ║");
            println!("║ • Quadratic drag                       ║");
            println!("║ • Crosswind displacement at the plate  ║");
            println!("║ • Monthly ballpark air density         ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_trajectory(
    params: &PitchParameters,
    trajectory: &Trajectory,
    format: OutputFormat,
    full: bool,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(trajectory)?);
        }

        OutputFormat::Csv => {
            println!("time,x,y,z");
            for s in trajectory {
                println!("{:.3},{:.4},{:.4},{:.4}", s.time, s.x(), s.y(), s.z());
            }
        }

        OutputFormat::Table => {
            let crossing = plate_crossing(trajectory.samples());
            let movement = average_movement(params.spin_rate);

            println!("╔════════════════════════════════════════╗");
            println!("║          PITCH TRAJECTORY              ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Velocity:          {:>8.1} km/h       ║", params.velocity);
            println!("║ Spin:              {:>8.0} rpm        ║", params.spin_rate);
            println!("║ Spin Axis:         {:>8.0} deg        ║", params.spin_axis);
            println!("║ Wind:              {:>8.1} m/s        ║", params.wind_speed);
            println!("║ Air Density:       {:>8.4} kg/m3      ║", trajectory.air_density());
            println!("║ Avg pfx_x:         {:>8.2} in         ║", movement.pfx_x);
            println!("║ Avg pfx_z:         {:>8.2} in         ║", movement.pfx_z);
            println!("╠════════════════════════════════════════╣");
            println!("║ Flight Time:       {:>8.3} s          ║", trajectory.flight_time());
            println!("║ Max Height:        {:>8.3} m          ║", trajectory.max_height());
            if let Some(crossing) = crossing {
                println!("║ Plate X:           {:>8.3} m          ║", crossing.x);
                println!("║ Plate Height:      {:>8.3} m          ║", crossing.z);
                println!(
                    "║ Strike Zone:       {:>8}            ║",
                    if crossing.in_strike_zone { "yes" } else { "no" }
                );
            }
            println!("╚════════════════════════════════════════╝");

            let samples = trajectory.samples();
            let step = if full { 1 } else { (samples.len() / 10).max(1) };

            println!("\nTrajectory Points:");
            println!("┌──────────┬──────────┬──────────┬──────────┐");
            println!("│ Time (s) │  X (m)   │  Y (m)   │  Z (m)   │");
            println!("├──────────┼──────────┼──────────┼──────────┤");
            for (i, s) in samples.iter().enumerate() {
                if i % step == 0 || i == samples.len() - 1 {
                    println!(
                        "│ {:>8.3} │ {:>8.3} │ {:>8.3} │ {:>8.3} │",
                        s.time,
                        s.x(),
                        s.y(),
                        s.z()
                    );
                }
            }
            println!("└──────────┴──────────┴──────────┴──────────┘");
        }
    }

    Ok(())
}

fn display_comparison(effect: &WindEffect, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(effect)?);
        }

        OutputFormat::Csv => {
            println!("metric,value");
            println!("wind_speed,{:.2}", effect.params.wind_speed);
            println!("displacement_x_cm,{:.3}", effect.displacement.x);
            println!("displacement_y_cm,{:.3}", effect.displacement.y);
            println!("displacement_z_cm,{:.3}", effect.displacement.z);
            println!("displacement_total_cm,{:.3}", effect.displacement.total);
            println!("flight_time_s,{:.4}", effect.flight_time);
        }

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║          WIND EFFECT ANALYSIS          ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Wind:              {:>8.1} m/s        ║", effect.params.wind_speed);
            println!("║ Direction:    {:>15}          ║", effect.params.wind_direction.to_string());
            println!("║ Flight Time:       {:>8.3} s          ║", effect.flight_time);
            println!("╠════════════════════════════════════════╣");
            println!("║ DISPLACEMENT AT THE PLATE              ║");
            println!("║ Lateral (x):       {:>8.2} cm         ║", effect.displacement.x);
            println!("║ Vertical (z):      {:>8.2} cm         ║", effect.displacement.z);
            println!("║ Total:             {:>8.2} cm         ║", effect.displacement.total);
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_sweep(
    params: &PitchParameters,
    sweep: &[WindSweepPoint],
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(sweep)?);
        }

        OutputFormat::Csv => {
            println!("wind_speed,dx_cm,dz_cm,total_cm,flight_time");
            for p in sweep {
                println!(
                    "{:.2},{:.3},{:.3},{:.3},{:.4}",
                    p.wind_speed,
                    p.displacement.x,
                    p.displacement.z,
                    p.displacement.total,
                    p.flight_time
                );
            }
        }

        OutputFormat::Table => {
            println!(
                "Wind sweep, {} ({:.0} km/h, {:.0} rpm @ {:.0} deg)",
                params.wind_direction, params.velocity, params.spin_rate, params.spin_axis
            );
            println!("┌──────────┬──────────┬──────────┬──────────┐");
            println!("│ Wind m/s │  dX (cm) │  dZ (cm) │ Tot (cm) │");
            println!("├──────────┼──────────┼──────────┼──────────┤");
            for p in sweep {
                println!(
                    "│ {:>8.1} │ {:>8.2} │ {:>8.2} │ {:>8.2} │",
                    p.wind_speed, p.displacement.x, p.displacement.z, p.displacement.total
                );
            }
            println!("└──────────┴──────────┴──────────┴──────────┘");
        }
    }

    Ok(())
}
