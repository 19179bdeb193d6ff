//! Error types for the boost converter toolkit.
//!
//! This module provides a unified error type [`BoostError`] that covers
//! all error conditions that can occur during design file parsing, converter
//! design, simulation and report output.

use thiserror::Error;

/// Result type alias using [`BoostError`].
pub type Result<T> = std::result::Result<T, BoostError>;

/// Unified error type for all boostsim operations.
#[derive(Error, Debug)]
pub enum BoostError {
    // ============ Design File Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Key not recognised by its directive
    #[error("Unknown parameter '{param}' for '{directive}' at line {line}")]
    UnknownParameter {
        directive: String,
        param: String,
        line: usize,
    },

    /// Same key given twice
    #[error("Duplicate parameter '{param}' at line {line}")]
    DuplicateParameter { param: String, line: usize },

    /// Required specification key never given
    #[error("Missing required parameter '{param}'")]
    MissingParameter { param: String },

    // ============ Design Errors ============
    /// Physically inconsistent or non-positive design input
    #[error("Invalid specification: {param} {message}")]
    InvalidSpecification { param: String, message: String },

    /// Derived parameter that would make the state equations non-finite
    #[error("Invalid design parameter '{param}' (value: {value:e}) - must be finite and positive")]
    InvalidDesignParameters { param: String, value: f64 },

    // ============ Simulation Errors ============
    /// Invalid time horizon or step size
    #[error("Invalid simulation config: {message}")]
    InvalidSimulationConfig { message: String },

    /// Non-finite value found in a finished trajectory
    #[error("Numeric instability at step {step} (t = {time:.3e} s): {quantity} = {value}")]
    NumericInstability {
        step: usize,
        time: f64,
        quantity: String,
        value: f64,
    },

    // ============ I/O Errors ============
    /// Error reading design file
    #[error("Failed to read design file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a report or trajectory
    #[error("Output error: {message}")]
    OutputError { message: String },
}

impl BoostError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid specification error
    pub fn invalid_spec(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSpecification {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an invalid simulation config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidSimulationConfig {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for BoostError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError {
            message: err.to_string(),
        }
    }
}
