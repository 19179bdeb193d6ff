//! Parser for converter design files.
//!
//! A design file holds the converter [`Specification`](crate::converter::Specification)
//! and, optionally, the [`SimulationConfig`](crate::solver::SimulationConfig)
//! in a small line-oriented, SPICE-flavoured language.
//!
//! # Grammar Overview
//!
//! ```text
//! design      = { line }
//! line        = comment | directive | empty
//! comment     = ('#' | ';') { any_char }
//! directive   = '.' directive_name param { param }
//! param       = key '=' value
//!
//! directive_name = "spec" | "tran"
//! value       = number [unit_suffix]
//! number      = ['-'|'+'] digit+ ['.' digit+] [('e'|'E') ['-'|'+'] digit+]
//! unit_suffix = 'p' | 'n' | 'u' | 'µ' | 'm' | 'k' | 'K' | 'M' | 'G'
//! ```
//!
//! # Directives
//!
//! | Directive | Keys | Notes |
//! |-----------|------|-------|
//! | .spec | `vin vout pout fs ripple_i ripple_v` | all required, may span several lines |
//! | .tran | `tstop dt divisions` | optional, `dt` and `divisions` are exclusive |
//!
//! Keys are case-insensitive. A key may appear only once per file.
//!
//! # Example
//!
//! ```text
//! # 48 V battery to 200 V bus
//! .spec vin=48 vout=200 pout=800 fs=100k
//! .spec ripple_i=0.25 ripple_v=0.015
//! .tran tstop=15m divisions=200
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a design file string into an AST.
pub fn parse(input: &str) -> Result<DesignAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a design file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<DesignAst> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::BoostError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
