//! Public API trait for the post authorizer.

use async_trait::async_trait;

use crate::error::PostAuthzError;
use crate::models::{Actor, Decision, Post, Privilege};

/// Public API trait for post authorization.
///
/// Consumed by request handlers acting as PEPs, usually through
/// [`PostEnforcer`](crate::pep::PostEnforcer):
///
/// ```ignore
/// let decision = authz.decide(&actor, &post, Privilege::Update).await?;
/// if !decision.allowed {
///     return Err(forbidden(decision.rule));
/// }
/// ```
#[async_trait]
pub trait PostAuthorizerClient: Send + Sync {
    /// Evaluate the rule chain and report the deciding rule.
    ///
    /// # Errors
    ///
    /// - `CollaboratorUnavailable` if a collaborator lookup failed
    /// - `CyclicParent` if the parent chain loops
    async fn decide(
        &self,
        actor: &Actor,
        post: &Post,
        privilege: Privilege,
    ) -> Result<Decision, PostAuthzError>;

    /// # Errors
    ///
    /// Same as [`PostAuthorizerClient::decide`].
    async fn is_allowed(
        &self,
        actor: &Actor,
        post: &Post,
        privilege: Privilege,
    ) -> Result<bool, PostAuthzError> {
        Ok(self.decide(actor, post, privilege).await?.allowed)
    }

    /// Privileges from [`Privilege::REPORTABLE`] the actor holds on the post.
    ///
    /// # Errors
    ///
    /// Same as [`PostAuthorizerClient::decide`].
    async fn allowed_privileges(
        &self,
        actor: &Actor,
        post: &Post,
    ) -> Result<Vec<Privilege>, PostAuthzError>;
}
