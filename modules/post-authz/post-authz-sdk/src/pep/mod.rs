//! PEP (Policy Enforcement Point) helpers.
//!
//! - [`PostEnforcer`] - PEP object (decide → map to `Result`)
//! - [`EnforcerError`] - denied vs. undeterminable

pub mod enforcer;

pub use enforcer::{EnforcerError, PostEnforcer};
