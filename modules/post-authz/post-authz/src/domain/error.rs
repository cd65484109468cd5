//! Domain errors for the decision engine.

use post_authz_sdk::{CollaboratorError, PostAuthzError};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("collaborator failure: {0}")]
    Collaborator(#[from] CollaboratorError),

    #[error("cyclic parent chain detected at post {post_id}")]
    CyclicParent { post_id: Uuid },
}

impl From<DomainError> for PostAuthzError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Collaborator(source) => Self::CollaboratorUnavailable(source),
            DomainError::CyclicParent { post_id } => Self::CyclicParent { post_id },
        }
    }
}
