//! Policy Enforcement Point (`PEP`) object.
//!
//! [`PostEnforcer`] turns a decision into a `Result` request handlers can
//! propagate with `?`, keeping "denied" and "could not determine" apart.

use std::sync::Arc;

use crate::api::PostAuthorizerClient;
use crate::error::PostAuthzError;
use crate::models::{Actor, Post, Privilege, RuleId};

/// Error from the PEP enforcement flow.
#[derive(Debug, thiserror::Error)]
pub enum EnforcerError {
    /// The rule chain denied access. Map to `403`.
    #[error("{privilege} denied by rule {rule}")]
    Denied { privilege: Privilege, rule: RuleId },

    /// Access could not be determined. Map to `503`/`500`, never `403`.
    #[error("authorization evaluation failed: {0}")]
    EvaluationFailed(#[from] PostAuthzError),
}

/// Policy Enforcement Point for posts.
///
/// Constructed once during service init; cloneable and cheap to pass
/// around (`Arc` inside).
#[derive(Clone)]
pub struct PostEnforcer {
    authz: Arc<dyn PostAuthorizerClient>,
}

impl PostEnforcer {
    pub fn new(authz: Arc<dyn PostAuthorizerClient>) -> Self {
        Self { authz }
    }

    /// Succeed only if the actor may perform `privilege` on `post`.
    ///
    /// # Errors
    ///
    /// - [`EnforcerError::Denied`] if the rule chain denies access
    /// - [`EnforcerError::EvaluationFailed`] if the decision could not be made
    pub async fn enforce(
        &self,
        actor: &Actor,
        post: &Post,
        privilege: Privilege,
    ) -> Result<(), EnforcerError> {
        let decision = self.authz.decide(actor, post, privilege).await?;
        if decision.allowed {
            return Ok(());
        }
        tracing::debug!(
            privilege = %privilege,
            rule = %decision.rule,
            post_id = ?post.id,
            "post access denied"
        );
        Err(EnforcerError::Denied {
            privilege,
            rule: decision.rule,
        })
    }

    /// Privileges to render in a post's `allowed_privileges` field.
    ///
    /// # Errors
    ///
    /// Returns [`EnforcerError::EvaluationFailed`] if any decision could
    /// not be made.
    pub async fn allowed_privileges(
        &self,
        actor: &Actor,
        post: &Post,
    ) -> Result<Vec<Privilege>, EnforcerError> {
        Ok(self.authz.allowed_privileges(actor, post).await?)
    }
}

impl std::fmt::Debug for PostEnforcer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostEnforcer").finish_non_exhaustive()
    }
}
