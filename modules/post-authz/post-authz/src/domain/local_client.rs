//! Local (in-process) client for the post authorizer.

use std::sync::Arc;

use async_trait::async_trait;
use post_authz_sdk::{Actor, Decision, Post, PostAuthorizerClient, PostAuthzError, Privilege};

use super::{DecisionEngine, DomainError};

/// Local client wrapping the decision engine.
pub struct PostAuthzLocalClient {
    engine: Arc<DecisionEngine>,
}

impl PostAuthzLocalClient {
    #[must_use]
    pub fn new(engine: Arc<DecisionEngine>) -> Self {
        Self { engine }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> PostAuthzError {
    tracing::error!(operation = op, error = ?e, "post_authz call failed");
    e.into()
}

#[async_trait]
impl PostAuthorizerClient for PostAuthzLocalClient {
    async fn decide(
        &self,
        actor: &Actor,
        post: &Post,
        privilege: Privilege,
    ) -> Result<Decision, PostAuthzError> {
        self.engine
            .decide(actor, post, privilege)
            .await
            .map_err(|e| log_and_convert("decide", e))
    }

    async fn allowed_privileges(
        &self,
        actor: &Actor,
        post: &Post,
    ) -> Result<Vec<Privilege>, PostAuthzError> {
        self.engine
            .allowed_privileges(actor, post)
            .await
            .map_err(|e| log_and_convert("allowed_privileges", e))
    }
}
