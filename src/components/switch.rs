//! The idealized power switch and the two circuit topologies it selects.
//!
//! ```text
//! Vin ----[L]----+----|>|----+-------+
//!                |           |       |
//!               SW          [C]     [R]
//!                |           |       |
//! GND -----------+-----------+-------+
//! ```
//!
//! - Conducting: SW closed, the inductor charges from `Vin`, the diode
//!   blocks and the capacitor alone feeds the load.
//! - Blocking: SW open, the inductor discharges through the diode into the
//!   capacitor and load.
//!
//! The switch is driven open-loop: its state depends only on the position
//! within the switching period, never on circuit state.

use super::linear::Resistor;

/// Switch state within one switching period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchMode {
    /// Switch closed (ON)
    Conducting,
    /// Switch open (OFF)
    Blocking,
}

/// Inductor voltage and capacitor current imposed by a switch mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchDrive {
    /// Voltage across the inductor `vL` (V)
    pub inductor_voltage: f64,
    /// Current into the output capacitor `iC` (A)
    pub capacitor_current: f64,
}

impl SwitchMode {
    /// Select the mode for a phase position inside the period.
    ///
    /// Conducting for `phase < on_time`, blocking otherwise. No hysteresis.
    pub fn at_phase(phase: f64, on_time: f64) -> Self {
        if phase < on_time {
            SwitchMode::Conducting
        } else {
            SwitchMode::Blocking
        }
    }

    /// Inductor voltage and capacitor current for this mode.
    ///
    /// # Arguments
    /// * `vin` - Input voltage
    /// * `inductor_current` - Present inductor current `iL`
    /// * `output_voltage` - Present capacitor/output voltage `vO`
    /// * `load` - The load resistor
    pub fn drive(
        &self,
        vin: f64,
        inductor_current: f64,
        output_voltage: f64,
        load: &Resistor,
    ) -> BranchDrive {
        let load_current = load.current(output_voltage);
        match self {
            SwitchMode::Conducting => BranchDrive {
                inductor_voltage: vin,
                capacitor_current: -load_current,
            },
            SwitchMode::Blocking => BranchDrive {
                inductor_voltage: vin - output_voltage,
                capacitor_current: inductor_current - load_current,
            },
        }
    }
}
