//! Component models for the boost power stage.
//!
//! This module provides models for the elements of the converter:
//! - Linear: Resistor (load), Capacitor (output filter), Inductor
//! - Switching: the idealized power switch and its two modes
//!
//! Components supply state derivatives; the solver integrates them.

mod linear;
mod switch;

pub use linear::{Capacitor, Inductor, Resistor};
pub use switch::{BranchDrive, SwitchMode};
