#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Post Authorization Decision Engine
//!
//! Answers "may this actor perform this privilege on this post" by running
//! a fixed, ordered rule chain ([`RULE_CHAIN`]). The first rule with a
//! verdict wins; later rules never run.
//!
//! ## Wiring
//!
//! ```ignore
//! let engine = Arc::new(DecisionEngine::new(permissions, posts, forms, config));
//! let client: Arc<dyn PostAuthorizerClient> = Arc::new(PostAuthzLocalClient::new(engine));
//! ```
//!
//! ## Configuration
//!
//! ```yaml
//! private_deployment: false
//! admin_role: "admin"
//! missing_parent: unrestricted
//! ```

pub mod config;
pub mod domain;

pub use config::{MissingParentPolicy, PostAuthzConfig};
pub use domain::{DecisionEngine, DomainError, PostAuthzLocalClient, RULE_CHAIN};
