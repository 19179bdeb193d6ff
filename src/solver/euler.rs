//! Forward Euler step for the switched converter model.
//!
//! The state equations are piecewise linear in `(iL, vO)`:
//!
//! ```text
//! L·diL/dt = vL(mode, vO)
//! C·dvO/dt = iC(mode, iL, vO)
//! ```
//!
//! One explicit step advances the state using only derivatives evaluated at
//! the current sample:
//!
//! ```text
//! iL[k+1] = iL[k] + (vL/L)·dt
//! vO[k+1] = vO[k] + (iC/C)·dt
//! ```
//!
//! Forward Euler is conditionally stable. The caller must keep
//! `dt ≪ min(Ts, L/R, R·C)`; growth with a coarse step is expected behavior.

use std::fmt;

use crate::components::{Capacitor, Inductor, Resistor, SwitchMode};
use crate::converter::DesignParameters;

use super::PHASE_SNAP_TOLERANCE;

/// Converter state at one time sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConverterState {
    /// Inductor current `iL` (A)
    pub inductor_current: f64,
    /// Output (capacitor) voltage `vO` (V)
    pub output_voltage: f64,
}

impl ConverterState {
    /// Converter at rest: no inductor current, discharged output.
    pub const INITIAL: ConverterState = ConverterState {
        inductor_current: 0.0,
        output_voltage: 0.0,
    };

    /// Create a new state.
    pub fn new(inductor_current: f64, output_voltage: f64) -> Self {
        Self {
            inductor_current,
            output_voltage,
        }
    }

    /// Check that both state variables are finite.
    pub fn is_finite(&self) -> bool {
        self.inductor_current.is_finite() && self.output_voltage.is_finite()
    }
}

impl fmt::Display for ConverterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "iL={:.4} A, vO={:.4} V",
            self.inductor_current, self.output_voltage
        )
    }
}

/// Position of time `t` inside the switching period, in `[0, period)`.
///
/// Positions within a relative [`PHASE_SNAP_TOLERANCE`] of a full period are
/// treated as the start of the next period, so rounding in `k·dt` cannot
/// move a switching instant by a whole step.
pub fn switching_phase(t: f64, period: f64) -> f64 {
    let phase = t.rem_euclid(period);
    if period - phase <= PHASE_SNAP_TOLERANCE * period {
        0.0
    } else {
        phase
    }
}

/// Switch mode at time `t` for the given design.
///
/// The turn-off instant gets the same relative tolerance as the period
/// boundary: a phase within [`PHASE_SNAP_TOLERANCE`]`·Ts` of `D·Ts` is
/// already blocking.
pub fn switch_mode(t: f64, params: &DesignParameters) -> SwitchMode {
    let turn_off = params.on_time() - PHASE_SNAP_TOLERANCE * params.period;
    SwitchMode::at_phase(switching_phase(t, params.period), turn_off)
}

/// Advance the converter state by one explicit Euler step.
///
/// Pure: the result depends only on the arguments. `t` is the time of the
/// current sample and selects the switch mode for the whole step.
pub fn step(state: ConverterState, t: f64, params: &DesignParameters, dt: f64) -> ConverterState {
    let load = Resistor::new(params.load_resistance);
    let inductor = Inductor::new(params.inductance);
    let capacitor = Capacitor::new(params.capacitance);

    let drive = switch_mode(t, params).drive(
        params.vin,
        state.inductor_current,
        state.output_voltage,
        &load,
    );

    ConverterState {
        inductor_current: state.inductor_current
            + inductor.current_slope(drive.inductor_voltage) * dt,
        output_voltage: state.output_voltage
            + capacitor.voltage_slope(drive.capacitor_current) * dt,
    }
}
