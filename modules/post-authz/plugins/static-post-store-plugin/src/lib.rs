#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Post Store Plugin
//!
//! Serves posts, form creation policies and role permissions from
//! configuration, implementing the collaborator traits the `post_authz`
//! decision engine consumes. Intended for development and testing.
//!
//! ## Configuration
//!
//! ```yaml
//! posts:
//!   - id: "33333333-3333-3333-3333-333333333333"
//!     owner_id: "11111111-1111-1111-1111-111111111111"
//!     status: published
//!     published_to: ["member"]
//! forms:
//!   - id: 5
//!     everyone_can_create: false
//!     roles: ["editor"]
//! role_permissions:
//!   - role: "editor"
//!     permissions: ["Manage Posts"]
//! ```

pub mod config;
pub mod domain;

pub use config::{PostConfig, StaticPostStoreConfig};
pub use domain::Service;
