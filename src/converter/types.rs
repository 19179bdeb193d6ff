//! Core types for converter design.

use std::fmt;

/// User-supplied operating requirements for a boost converter.
///
/// All quantities are in SI units. Ripple targets are peak-to-peak
/// fractions of the nominal inductor current and output voltage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Specification {
    /// Input voltage (V)
    pub vin: f64,
    /// Output voltage (V), must exceed `vin`
    pub vout: f64,
    /// Output power (W)
    pub pout: f64,
    /// Switching frequency (Hz)
    pub fs: f64,
    /// Inductor current ripple fraction, in (0, 1)
    pub ripple_current: f64,
    /// Output voltage ripple fraction, in (0, 1)
    pub ripple_voltage: f64,
}

impl Specification {
    /// Create a new specification.
    pub fn new(
        vin: f64,
        vout: f64,
        pout: f64,
        fs: f64,
        ripple_current: f64,
        ripple_voltage: f64,
    ) -> Self {
        Self {
            vin,
            vout,
            pout,
            fs,
            ripple_current,
            ripple_voltage,
        }
    }
}

impl Default for Specification {
    /// 48 V battery feeding a 200 V, 800 W bus at 100 kHz.
    fn default() -> Self {
        Self::new(48.0, 200.0, 800.0, 100e3, 0.25, 0.015)
    }
}

/// Nominal operating point and component values derived from a [`Specification`].
///
/// Produced by [`design`](super::design); fields are public for inspection
/// and so that hand-built parameter sets can be fed to the simulator, which
/// re-checks them before running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignParameters {
    /// Input voltage (V)
    pub vin: f64,
    /// Target output voltage (V)
    pub vout: f64,
    /// Duty ratio, `1 - vin/vout`
    pub duty: f64,
    /// Switching period (s)
    pub period: f64,
    /// Load resistance (Ω)
    pub load_resistance: f64,
    /// Average input current (A)
    pub input_current: f64,
    /// Average output current (A)
    pub output_current: f64,
    /// Inductance (H)
    pub inductance: f64,
    /// Capacitance (F)
    pub capacitance: f64,
}

impl DesignParameters {
    /// Conducting interval within one switching period, `D·Ts`.
    pub fn on_time(&self) -> f64 {
        self.duty * self.period
    }

    /// Inductor time constant `L/R` (s).
    pub fn inductor_time_constant(&self) -> f64 {
        self.inductance / self.load_resistance
    }

    /// Output time constant `R·C` (s).
    pub fn output_time_constant(&self) -> f64 {
        self.load_resistance * self.capacitance
    }
}

impl fmt::Display for DesignParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "D={:.3} L={:.2}uH C={:.2}uF R={:.2}ohm",
            self.duty,
            self.inductance * 1e6,
            self.capacitance * 1e6,
            self.load_resistance
        )
    }
}
