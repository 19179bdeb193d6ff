//! # Boostsim
//!
//! Design calculator and transient simulator for DC-DC boost converters.
//!
//! This library provides:
//! - Closed-form steady-state sizing of the inductor, capacitor and load
//! - A fixed-step forward Euler simulation of the switched power stage
//! - A small text language for describing designs
//! - Plain-text reports and CSV export of trajectories
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Parser for the design file language
//! - [`converter`] - Specification, design parameters and the design calculator
//! - [`components`] - Element models (inductor, capacitor, load, switch)
//! - [`solver`] - Euler step, simulation driver and trajectories
//! - [`report`] - Report and CSV writers
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! RUST_LOG=debug boostsim design.boost --csv startup.csv --decimate 20
//! ```
//!
//! ### Library
//!
//! ```
//! use boostsim::{design, simulate, SimulationConfig, Specification};
//!
//! let spec = Specification::new(48.0, 200.0, 800.0, 100e3, 0.25, 0.015);
//! let params = design(&spec).unwrap();
//! let trajectory = simulate(&params, &SimulationConfig::new().with_t_end(1e-3)).unwrap();
//! assert_eq!(trajectory.len(), trajectory.output_voltage().len());
//! ```
//!
//! ## Simulation Method
//!
//! For each sample `t_k = k·dt`:
//!
//! 1. Locate the phase `t_k mod Ts` and pick the switch mode
//!    (conducting while the phase is below `D·Ts`, blocking after)
//! 2. Evaluate inductor voltage and capacitor current for that mode
//! 3. Advance `(iL, vO)` with one explicit Euler step
//!
//! The converter starts from rest and the duty ratio is fixed, so the
//! output settles near `Vin/(1-D)` without any regulation loop.

pub mod components;
pub mod converter;
pub mod dsl;
pub mod error;
pub mod report;
pub mod solver;

// Re-export main types for convenience
pub use converter::{design, DesignParameters, Specification};
pub use error::{BoostError, Result};
pub use solver::{simulate, SimulationConfig, Simulator, Trajectory};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmBoostSim;
