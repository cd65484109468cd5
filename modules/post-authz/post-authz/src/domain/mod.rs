//! Domain layer for post authorization.

pub mod engine;
pub mod error;
pub mod local_client;
pub mod rules;

pub use engine::{DecisionEngine, RULE_CHAIN};
pub use error::DomainError;
pub use local_client::PostAuthzLocalClient;
