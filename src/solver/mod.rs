//! Fixed-step transient solver.
//!
//! This module provides the numerical engine for the startup simulation.
//!
//! ## Switched-State Model
//!
//! The converter alternates between two linear circuits selected by an
//! open-loop switch. With `t_cycle = t mod Ts`:
//!
//! ```text
//! t_cycle <  D·Ts   (conducting):  vL = Vin        iC = -vO/R
//! t_cycle >= D·Ts   (blocking):    vL = Vin - vO   iC = iL - vO/R
//! ```
//!
//! The state `(iL, vO)` starts at rest and is advanced with forward Euler
//! by a pure [`step`] function. [`Simulator`] owns the output buffers and
//! drives the step over `ceil(t_end/dt)` samples.

mod euler;
mod simulator;
mod trajectory;

pub use euler::{step, switch_mode, switching_phase, ConverterState};
pub use simulator::{sample_count, simulate, SimulationConfig, Simulator, StepSize};
pub use trajectory::{PeriodStatistics, Trajectory, TrajectorySummary};

/// Default simulated duration (s).
pub const DEFAULT_T_END: f64 = 15e-3;

/// Default number of steps per switching period.
pub const DEFAULT_DIVISIONS: usize = 200;

/// Below this many steps per period a warning is logged.
pub const MIN_RECOMMENDED_DIVISIONS: usize = 10;

/// A step above this fraction of the smallest circuit time constant logs a warning.
pub const STABILITY_MARGIN: f64 = 0.1;

/// Relative tolerance when rounding `t_end/dt` up to a sample count.
pub const SAMPLE_COUNT_TOLERANCE: f64 = 1e-9;

/// Relative tolerance for treating a phase position as a period boundary.
pub const PHASE_SNAP_TOLERANCE: f64 = 1e-9;

/// Upper bound on samples per run (three `f64` buffers of this length).
pub const MAX_SAMPLES: usize = 20_000_000;
