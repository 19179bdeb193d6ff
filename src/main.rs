//! Boostsim - Boost Converter Design and Startup Simulator
//!
//! Sizes a DC-DC boost converter and simulates its open-loop startup.
//!
//! # Usage
//!
//! ```bash
//! boostsim design.boost --csv startup.csv --decimate 20
//! boostsim --vin 12 --vout 48 --pout 100 --fs 250k --design-only
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use boostsim::{
    converter::design,
    dsl,
    error::{BoostError, Result},
    report::{write_design_report, write_summary, write_trajectory_csv},
    SimulationConfig, Simulator, Specification,
};
use clap::Parser;
use tracing::{info, warn};

/// Boost converter design and startup simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Design file with .spec/.tran directives (defaults to the 48 V -> 200 V reference design)
    #[arg(value_name = "DESIGN_FILE")]
    design_file: Option<PathBuf>,

    /// Input voltage in volts
    #[arg(long, value_parser = parse_number)]
    vin: Option<f64>,

    /// Output voltage in volts
    #[arg(long, value_parser = parse_number)]
    vout: Option<f64>,

    /// Output power in watts
    #[arg(long, value_parser = parse_number)]
    pout: Option<f64>,

    /// Switching frequency in Hz (suffixes allowed, e.g. 100k)
    #[arg(long, value_parser = parse_number)]
    fs: Option<f64>,

    /// Inductor current ripple fraction
    #[arg(long, value_parser = parse_number)]
    ripple_i: Option<f64>,

    /// Output voltage ripple fraction
    #[arg(long, value_parser = parse_number)]
    ripple_v: Option<f64>,

    /// Simulated duration in seconds (e.g. 15m)
    #[arg(long, value_parser = parse_number)]
    t_end: Option<f64>,

    /// Integration step in seconds
    #[arg(long, value_parser = parse_number, conflicts_with = "divisions")]
    dt: Option<f64>,

    /// Integration steps per switching period
    #[arg(long)]
    divisions: Option<usize>,

    /// Write the trajectory as CSV to this path ('-' for stdout)
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Keep every Nth sample in the CSV output
    #[arg(long, default_value_t = 1)]
    decimate: usize,

    /// Only print the design, skip the transient simulation
    #[arg(long)]
    design_only: bool,
}

fn parse_number(text: &str) -> std::result::Result<f64, String> {
    dsl::parse_value(text).ok_or_else(|| format!("invalid number '{}'", text))
}

impl Args {
    /// Resolve specification and simulation settings: defaults, then the
    /// design file, then command-line overrides.
    fn resolve(&self) -> Result<(Specification, SimulationConfig)> {
        let (mut spec, mut config) = match &self.design_file {
            Some(path) => {
                let ast = dsl::parse_file(path)?;
                (ast.specification()?, ast.simulation_config()?)
            }
            None => (Specification::default(), SimulationConfig::default()),
        };

        let overrides = [
            (self.vin, &mut spec.vin),
            (self.vout, &mut spec.vout),
            (self.pout, &mut spec.pout),
            (self.fs, &mut spec.fs),
            (self.ripple_i, &mut spec.ripple_current),
            (self.ripple_v, &mut spec.ripple_voltage),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }

        if let Some(t_end) = self.t_end {
            config = config.with_t_end(t_end);
        }
        if let Some(dt) = self.dt {
            config = config.with_dt(dt);
        }
        if let Some(divisions) = self.divisions {
            config = config.with_divisions(divisions);
        }

        Ok((spec, config))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let (spec, config) = args.resolve()?;
    info!(?spec, ?config, "resolved inputs");

    // Size the converter
    let params = design(&spec)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_design_report(&params, &mut out)?;

    if args.design_only {
        return Ok(());
    }

    // Simulate startup
    let simulator = Simulator::with_config(params, &config)?;
    let trajectory = simulator.run();

    if let Err(e) = trajectory.check_finite() {
        warn!("{}", e);
    }

    if let Some(summary) = trajectory.summary(&params) {
        writeln!(out)?;
        write_summary(&summary, &mut out)?;
    }

    // Export
    match args.csv.as_deref() {
        Some(path) if path.as_os_str() == "-" => {
            writeln!(out)?;
            write_trajectory_csv(&trajectory, args.decimate, &mut out)?;
        }
        Some(path) => {
            let file = File::create(path).map_err(|e| BoostError::OutputError {
                message: format!("cannot create '{}': {}", path.display(), e),
            })?;
            write_trajectory_csv(&trajectory, args.decimate, &mut BufWriter::new(file))?;
            info!(path = %path.display(), samples = trajectory.len(), "trajectory written");
        }
        None => {}
    }

    out.flush()?;
    Ok(())
}
