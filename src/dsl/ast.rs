//! Abstract Syntax Tree types for the design file language.

use std::collections::HashMap;

use crate::converter::Specification;
use crate::error::{BoostError, Result};
use crate::solver::SimulationConfig;

/// Complete AST representation of a parsed design file.
#[derive(Debug, Clone, Default)]
pub struct DesignAst {
    /// `.spec` parameters
    pub spec: HashMap<SpecKey, ParamValue>,
    /// `.tran` parameters
    pub tran: HashMap<TranKey, ParamValue>,
}

/// A parameter value with its source line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamValue {
    pub value: f64,
    pub line: usize,
}

impl DesignAst {
    /// Create a new empty design AST.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the converter specification.
    ///
    /// Every `.spec` key is required. Physical validity is checked later by
    /// the design calculator.
    pub fn specification(&self) -> Result<Specification> {
        let get = |key: SpecKey| {
            self.spec
                .get(&key)
                .map(|p| p.value)
                .ok_or_else(|| BoostError::MissingParameter {
                    param: key.name().to_string(),
                })
        };

        Ok(Specification {
            vin: get(SpecKey::Vin)?,
            vout: get(SpecKey::Vout)?,
            pout: get(SpecKey::Pout)?,
            fs: get(SpecKey::Fs)?,
            ripple_current: get(SpecKey::RippleCurrent)?,
            ripple_voltage: get(SpecKey::RippleVoltage)?,
        })
    }

    /// Build the simulation configuration, falling back to defaults for
    /// anything `.tran` leaves out.
    pub fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = SimulationConfig::default();

        if let Some(p) = self.tran.get(&TranKey::TStop) {
            config = config.with_t_end(p.value);
        }

        match (self.tran.get(&TranKey::Dt), self.tran.get(&TranKey::Divisions)) {
            (Some(_), Some(p)) => {
                return Err(BoostError::parse(
                    p.line,
                    "'dt' and 'divisions' are mutually exclusive",
                ));
            }
            (Some(p), None) => config = config.with_dt(p.value),
            (None, Some(p)) => {
                if p.value < 1.0 || p.value.fract() != 0.0 {
                    return Err(BoostError::parse(
                        p.line,
                        format!("'divisions' must be a positive integer, got {}", p.value),
                    ));
                }
                config = config.with_divisions(p.value as usize);
            }
            (None, None) => {}
        }

        Ok(config)
    }
}

/// Keys accepted by the `.spec` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecKey {
    /// Input voltage
    Vin,
    /// Output voltage
    Vout,
    /// Output power
    Pout,
    /// Switching frequency
    Fs,
    /// Inductor current ripple fraction
    RippleCurrent,
    /// Output voltage ripple fraction
    RippleVoltage,
}

impl SpecKey {
    /// Parse a key from its name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "vin" => Some(Self::Vin),
            "vout" => Some(Self::Vout),
            "pout" => Some(Self::Pout),
            "fs" => Some(Self::Fs),
            "ripple_i" | "dil" | "vil" => Some(Self::RippleCurrent),
            "ripple_v" | "dvl" | "vvl" => Some(Self::RippleVoltage),
            _ => None,
        }
    }

    /// Canonical key name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vin => "vin",
            Self::Vout => "vout",
            Self::Pout => "pout",
            Self::Fs => "fs",
            Self::RippleCurrent => "ripple_i",
            Self::RippleVoltage => "ripple_v",
        }
    }
}

/// Keys accepted by the `.tran` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranKey {
    /// Simulated duration
    TStop,
    /// Explicit step size
    Dt,
    /// Steps per switching period
    Divisions,
}

impl TranKey {
    /// Parse a key from its name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "tstop" | "t_end" => Some(Self::TStop),
            "dt" | "tstep" => Some(Self::Dt),
            "divisions" | "steps" => Some(Self::Divisions),
            _ => None,
        }
    }

    /// Canonical key name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TStop => "tstop",
            Self::Dt => "dt",
            Self::Divisions => "divisions",
        }
    }
}
