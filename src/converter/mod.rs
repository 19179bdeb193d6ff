//! Converter specification and steady-state design.
//!
//! This module turns user requirements ([`Specification`]) into the
//! nominal operating point and component values ([`DesignParameters`])
//! that the transient simulator consumes.

mod design;
mod types;
mod validate;

pub use design::design;
pub use types::*;
pub use validate::{validate_design, validate_specification};
