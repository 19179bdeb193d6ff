//! Linear passive components: Resistor, Capacitor, Inductor.
//!
//! Each element only knows its own constitutive law. The explicit
//! integrator asks them for state derivatives and does the stepping itself.

/// The converter load, an ideal resistor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistor {
    pub resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    pub fn new(resistance: f64) -> Self {
        Self { resistance }
    }

    /// Current drawn at the given voltage (Ohm's law).
    pub fn current(&self, voltage: f64) -> f64 {
        voltage / self.resistance
    }
}

/// The output filter capacitor.
///
/// `i = C·dv/dt`, so the voltage slope for a given capacitor current is `i/C`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacitor {
    pub capacitance: f64,
}

impl Capacitor {
    /// Create a new capacitor.
    pub fn new(capacitance: f64) -> Self {
        Self { capacitance }
    }

    /// Rate of change of the capacitor voltage (V/s).
    pub fn voltage_slope(&self, current: f64) -> f64 {
        current / self.capacitance
    }
}

/// The boost inductor.
///
/// `v = L·di/dt`, so the current slope for a given inductor voltage is `v/L`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inductor {
    pub inductance: f64,
}

impl Inductor {
    /// Create a new inductor.
    pub fn new(inductance: f64) -> Self {
        Self { inductance }
    }

    /// Rate of change of the inductor current (A/s).
    pub fn current_slope(&self, voltage: f64) -> f64 {
        voltage / self.inductance
    }
}
