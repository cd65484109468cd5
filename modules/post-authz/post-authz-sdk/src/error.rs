//! Error types for the `post_authz` module.
//!
//! A denial is never an error: it is `Ok(false)` / a denying [`Decision`].
//! Errors mean the verdict could not be determined.
//!
//! [`Decision`]: crate::models::Decision

use uuid::Uuid;

/// Failure reported by a collaborator (permission store, post store, form
/// store). Absence is not a failure: resolvers return `Ok(None)`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CollaboratorError {
    /// The backing store could not answer (unreachable, timed out).
    #[error("{collaborator} unavailable: {message}")]
    Unavailable {
        collaborator: &'static str,
        message: String,
    },
}

impl CollaboratorError {
    #[must_use]
    pub fn unavailable(collaborator: &'static str, message: impl Into<String>) -> Self {
        Self::Unavailable {
            collaborator,
            message: message.into(),
        }
    }
}

/// Errors surfaced by the decision engine and its clients.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PostAuthzError {
    /// A collaborator lookup failed; access could not be determined.
    #[error("access could not be determined: {0}")]
    CollaboratorUnavailable(#[from] CollaboratorError),

    /// The parent chain revisits a post. Data integrity problem.
    #[error("cyclic parent chain detected at post {post_id}")]
    CyclicParent { post_id: Uuid },
}
