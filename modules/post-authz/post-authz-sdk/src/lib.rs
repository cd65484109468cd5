#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Post Authz SDK
//!
//! This crate provides the public API for the `post_authz` module:
//!
//! - [`PostAuthorizerClient`] - Public API trait for consumers
//! - [`PermissionChecker`], [`ParentResolver`], [`FormAccessResolver`] -
//!   Collaborator traits the decision engine consumes
//! - [`Actor`], [`Post`], [`Privilege`], [`Decision`] - Models
//! - [`PostAuthzError`], [`CollaboratorError`] - Error types
//! - [`pep`] - PEP helpers (enforcer)
//!
//! ## Usage
//!
//! ```ignore
//! use post_authz_sdk::{pep::PostEnforcer, Privilege};
//!
//! let enforcer = PostEnforcer::new(authz.clone());
//!
//! // Denied → 403, EvaluationFailed → 503
//! enforcer.enforce(&actor, &post, Privilege::Update).await?;
//! ```

pub mod api;
pub mod collaborators;
pub mod error;
pub mod models;
pub mod pep;
pub mod privilege;

// Re-export main types at crate root
pub use api::PostAuthorizerClient;
pub use collaborators::{FormAccessResolver, ParentResolver, PermissionChecker};
pub use error::{CollaboratorError, PostAuthzError};
pub use models::{
    Actor, Decision, FormAccessPolicy, FormId, OWNER_FIELD, Permission, Post, PostStatus, Role,
    RuleId,
};
pub use privilege::{ParsePrivilegeError, Privilege};
