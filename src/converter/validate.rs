//! Specification and design parameter validation.

use crate::error::{BoostError, Result};

use super::{DesignParameters, Specification};

/// Validate a specification for design.
///
/// Checks:
/// - All fields are finite
/// - `vout > vin > 0` (a boost converter cannot step down)
/// - Output power and switching frequency are positive
/// - Ripple fractions lie in (0, 1)
pub fn validate_specification(spec: &Specification) -> Result<()> {
    let fields = [
        ("vin", spec.vin),
        ("vout", spec.vout),
        ("pout", spec.pout),
        ("fs", spec.fs),
        ("ripple_i", spec.ripple_current),
        ("ripple_v", spec.ripple_voltage),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(BoostError::invalid_spec(name, format!("must be finite, got {}", value)));
        }
    }

    if spec.vin <= 0.0 {
        return Err(BoostError::invalid_spec("vin", "must be positive"));
    }

    if spec.vout <= spec.vin {
        return Err(BoostError::invalid_spec(
            "vout",
            format!(
                "must exceed vin ({} V <= {} V gives a non-positive duty ratio)",
                spec.vout, spec.vin
            ),
        ));
    }

    for (name, value) in [("pout", spec.pout), ("fs", spec.fs)] {
        if value <= 0.0 {
            return Err(BoostError::invalid_spec(name, "must be positive"));
        }
    }

    for (name, value) in [("ripple_i", spec.ripple_current), ("ripple_v", spec.ripple_voltage)] {
        if value <= 0.0 || value >= 1.0 {
            return Err(BoostError::invalid_spec(
                name,
                format!("must lie strictly between 0 and 1, got {}", value),
            ));
        }
    }

    Ok(())
}

/// Validate design parameters before simulation.
///
/// Every quantity that appears in a denominator of the state equations, or
/// that sets the switching instants, must be finite and strictly positive.
pub fn validate_design(params: &DesignParameters) -> Result<()> {
    let checks = [
        ("load_resistance", params.load_resistance),
        ("inductance", params.inductance),
        ("capacitance", params.capacitance),
        ("period", params.period),
    ];
    for (name, value) in checks {
        if !value.is_finite() || value <= 0.0 {
            return Err(BoostError::InvalidDesignParameters {
                param: name.to_string(),
                value,
            });
        }
    }

    if !params.vin.is_finite() {
        return Err(BoostError::InvalidDesignParameters {
            param: "vin".to_string(),
            value: params.vin,
        });
    }

    // A duty ratio outside [0, 1] has no conducting interval to speak of.
    if !params.duty.is_finite() || !(0.0..=1.0).contains(&params.duty) {
        return Err(BoostError::InvalidDesignParameters {
            param: "duty".to_string(),
            value: params.duty,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_spec_is_valid() {
        assert!(validate_specification(&Specification::default()).is_ok());
    }

    #[test]
    fn test_step_down_rejected() {
        let spec = Specification {
            vout: 24.0,
            ..Specification::default()
        };
        let err = validate_specification(&spec).unwrap_err();
        assert!(matches!(err, BoostError::InvalidSpecification { ref param, .. } if param == "vout"));
    }

    #[test]
    fn test_equal_voltages_rejected() {
        let spec = Specification {
            vout: 48.0,
            ..Specification::default()
        };
        assert!(validate_specification(&spec).is_err());
    }

    #[test]
    fn test_zero_power_rejected() {
        let spec = Specification {
            pout: 0.0,
            ..Specification::default()
        };
        let err = validate_specification(&spec).unwrap_err();
        assert!(matches!(err, BoostError::InvalidSpecification { ref param, .. } if param == "pout"));
    }

    #[test]
    fn test_ripple_bounds() {
        for ripple in [0.0, -0.1, 1.0, 2.5] {
            let spec = Specification {
                ripple_current: ripple,
                ..Specification::default()
            };
            assert!(validate_specification(&spec).is_err(), "ripple_i = {}", ripple);

            let spec = Specification {
                ripple_voltage: ripple,
                ..Specification::default()
            };
            assert!(validate_specification(&spec).is_err(), "ripple_v = {}", ripple);
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let spec = Specification {
            fs: f64::NAN,
            ..Specification::default()
        };
        let err = validate_specification(&spec).unwrap_err();
        assert!(matches!(err, BoostError::InvalidSpecification { ref param, .. } if param == "fs"));
    }

    #[test]
    fn test_zero_capacitance_rejected() {
        let params = DesignParameters {
            vin: 12.0,
            vout: 24.0,
            duty: 0.5,
            period: 1e-5,
            load_resistance: 10.0,
            input_current: 4.8,
            output_current: 2.4,
            inductance: 1e-4,
            capacitance: 0.0,
        };
        let err = validate_design(&params).unwrap_err();
        assert!(matches!(err, BoostError::InvalidDesignParameters { ref param, .. } if param == "capacitance"));
    }
}
