//! Collaborator contracts consumed by the decision engine.
//!
//! Implementations must be safe for concurrent reads; the engine shares a
//! single instance of each across all evaluations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CollaboratorError;
use crate::models::{Actor, FormAccessPolicy, FormId, Permission, Post};

/// Answers whether an actor holds a named permission through their role.
#[async_trait]
pub trait PermissionChecker: Send + Sync {
    /// # Errors
    ///
    /// Returns an error only when the permission store cannot answer.
    async fn has_permission(
        &self,
        actor: &Actor,
        permission: Permission,
    ) -> Result<bool, CollaboratorError>;
}

/// Loads parent posts.
#[async_trait]
pub trait ParentResolver: Send + Sync {
    /// Returns `Ok(None)` when no post with this id exists.
    ///
    /// # Errors
    ///
    /// Returns an error only when the post store cannot answer.
    async fn get(&self, id: Uuid) -> Result<Option<Post>, CollaboratorError>;
}

/// Resolves per-form creation policies.
#[async_trait]
pub trait FormAccessResolver: Send + Sync {
    /// Returns `Ok(None)` when the form is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error only when the form store cannot answer.
    async fn create_roles(
        &self,
        form_id: FormId,
    ) -> Result<Option<FormAccessPolicy>, CollaboratorError>;
}
