//! Steady-state design calculator.
//!
//! Sizes the converter from its continuous-conduction steady state:
//!
//! ```text
//! D    = 1 - Vin/Vout
//! Iout = Pout/Vout          Iin = Pout/Vin
//! R    = Vout²/Pout
//! L    = Vin·D / (Fs·ΔI·Iin)
//! C    = Iout·D / (Fs·ΔV·Vout)
//! ```

use tracing::debug;

use super::validate::validate_specification;
use super::{DesignParameters, Specification};
use crate::error::Result;

/// Compute nominal design parameters for a specification.
///
/// Fails with [`BoostError::InvalidSpecification`](crate::BoostError::InvalidSpecification)
/// before any arithmetic if the specification is not a valid boost
/// operating point.
pub fn design(spec: &Specification) -> Result<DesignParameters> {
    validate_specification(spec)?;

    let duty = 1.0 - spec.vin / spec.vout;
    let period = 1.0 / spec.fs;
    let output_current = spec.pout / spec.vout;
    let input_current = spec.pout / spec.vin;
    let load_resistance = spec.vout * spec.vout / spec.pout;
    let inductance = (spec.vin * duty) / (spec.fs * spec.ripple_current * input_current);
    let capacitance = (output_current * duty) / (spec.fs * spec.ripple_voltage * spec.vout);

    let params = DesignParameters {
        vin: spec.vin,
        vout: spec.vout,
        duty,
        period,
        load_resistance,
        input_current,
        output_current,
        inductance,
        capacitance,
    };

    debug!(%params, "converter designed");

    Ok(params)
}
