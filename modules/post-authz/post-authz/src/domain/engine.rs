//! Post authorization decision engine.
//!
//! ## Rule chain
//!
//! Rules run in [`RULE_CHAIN`] order and the first rule with a verdict
//! wins. The chain is not commutative:
//!
//! | rule | verdict | note |
//! |------|---------|------|
//! | `private_deployment` | deny | absolute |
//! | `manage_posts`, `delete_posts`, `admin_role` | allow | absolute |
//! | `parent_gate` | deny | absolute, even for public children |
//! | `create_ownership`, `form_restriction` | deny | |
//! | `open_create_search`, `published_visibility`, `preflight_read` | allow | |
//! | `change_status_lockout`, `ownership_change_lockout` | deny | |
//! | `owner_edit`, `owner_delete`, `owner_read` | allow | |
//! | (end of chain) | deny | `default_deny` |
//!
//! Collaborator failures abort the chain with an error; they never turn
//! into a deny on their own. Use [`DecisionEngine::is_allowed_or_deny`]
//! where a fail-closed `bool` is needed.

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use post_authz_sdk::{
    Actor, Decision, FormAccessResolver, ParentResolver, Permission, PermissionChecker, Post,
    Privilege, RuleId,
};
use tracing::instrument;
use uuid::Uuid;

use crate::config::{MissingParentPolicy, PostAuthzConfig};
use crate::domain::error::DomainError;
use crate::domain::rules;

/// Evaluation order of the rule chain.
pub const RULE_CHAIN: [RuleId; 15] = [
    RuleId::PrivateDeployment,
    RuleId::ManagePosts,
    RuleId::DeletePosts,
    RuleId::AdminRole,
    RuleId::ParentGate,
    RuleId::CreateOwnership,
    RuleId::FormRestriction,
    RuleId::OpenCreateSearch,
    RuleId::PublishedVisibility,
    RuleId::PreflightRead,
    RuleId::ChangeStatusLockout,
    RuleId::OwnershipChangeLockout,
    RuleId::OwnerEdit,
    RuleId::OwnerDelete,
    RuleId::OwnerRead,
];

/// Outcome of a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Allow,
    Deny,
    Continue,
}

impl Step {
    fn allow_if(cond: bool) -> Self {
        if cond { Self::Allow } else { Self::Continue }
    }

    fn deny_if(cond: bool) -> Self {
        if cond { Self::Deny } else { Self::Continue }
    }
}

/// Decision engine for post access.
///
/// Holds collaborator handles only; every evaluation is independent, so a
/// single instance can be shared across tasks.
pub struct DecisionEngine {
    permissions: Arc<dyn PermissionChecker>,
    posts: Arc<dyn ParentResolver>,
    forms: Arc<dyn FormAccessResolver>,
    config: PostAuthzConfig,
}

impl DecisionEngine {
    #[must_use]
    pub fn new(
        permissions: Arc<dyn PermissionChecker>,
        posts: Arc<dyn ParentResolver>,
        forms: Arc<dyn FormAccessResolver>,
        config: PostAuthzConfig,
    ) -> Self {
        Self {
            permissions,
            posts,
            forms,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PostAuthzConfig {
        &self.config
    }

    /// Whether `actor` may perform `privilege` on `post`.
    ///
    /// # Errors
    ///
    /// - [`DomainError::Collaborator`] if a collaborator could not answer
    /// - [`DomainError::CyclicParent`] if the parent chain loops
    pub async fn evaluate(
        &self,
        actor: &Actor,
        post: &Post,
        privilege: Privilege,
    ) -> Result<bool, DomainError> {
        Ok(self.decide(actor, post, privilege).await?.allowed)
    }

    /// Run the rule chain and report the deciding rule.
    ///
    /// # Errors
    ///
    /// Same as [`DecisionEngine::evaluate`].
    #[instrument(skip_all, fields(privilege = %privilege, post_id = ?post.id))]
    pub async fn decide(
        &self,
        actor: &Actor,
        post: &Post,
        privilege: Privilege,
    ) -> Result<Decision, DomainError> {
        let mut chain: Vec<Uuid> = post.id.into_iter().collect();
        let decision = self.decide_in_chain(actor, post, privilege, &mut chain).await?;

        tracing::debug!(
            allowed = decision.allowed,
            rule = %decision.rule,
            "post authorization decided"
        );
        Ok(decision)
    }

    /// Fail-closed variant of [`DecisionEngine::evaluate`].
    ///
    /// Errors are logged and reported as a denial.
    pub async fn is_allowed_or_deny(
        &self,
        actor: &Actor,
        post: &Post,
        privilege: Privilege,
    ) -> bool {
        match self.evaluate(actor, post, privilege).await {
            Ok(allowed) => allowed,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    privilege = %privilege,
                    post_id = ?post.id,
                    "post access undeterminable, denying"
                );
                false
            }
        }
    }

    /// Every [`Privilege::REPORTABLE`] privilege the actor holds on the post.
    ///
    /// # Errors
    ///
    /// Same as [`DecisionEngine::evaluate`]; the first failure aborts.
    pub async fn allowed_privileges(
        &self,
        actor: &Actor,
        post: &Post,
    ) -> Result<Vec<Privilege>, DomainError> {
        let mut allowed = Vec::with_capacity(Privilege::REPORTABLE.len());
        for privilege in Privilege::REPORTABLE {
            if self.evaluate(actor, post, privilege).await? {
                allowed.push(privilege);
            }
        }
        Ok(allowed)
    }

    /// `chain` holds the ids of the posts already on the current parent path.
    fn decide_in_chain<'a>(
        &'a self,
        actor: &'a Actor,
        post: &'a Post,
        privilege: Privilege,
        chain: &'a mut Vec<Uuid>,
    ) -> BoxFuture<'a, Result<Decision, DomainError>> {
        async move {
            for rule in RULE_CHAIN {
                match self.apply(rule, actor, post, privilege, chain).await? {
                    Step::Allow => return Ok(Decision::allow(rule)),
                    Step::Deny => return Ok(Decision::deny(rule)),
                    Step::Continue => {}
                }
            }
            Ok(Decision::deny(RuleId::DefaultDeny))
        }
        .boxed()
    }

    async fn apply(
        &self,
        rule: RuleId,
        actor: &Actor,
        post: &Post,
        privilege: Privilege,
        chain: &mut Vec<Uuid>,
    ) -> Result<Step, DomainError> {
        let step = match rule {
            RuleId::PrivateDeployment => Step::deny_if(!rules::can_access_deployment(
                actor,
                self.config.private_deployment,
            )),
            RuleId::ManagePosts => Step::allow_if(
                privilege != Privilege::Delete
                    && self.has_permission(actor, Permission::ManagePosts).await?,
            ),
            RuleId::DeletePosts => Step::allow_if(
                privilege == Privilege::Delete
                    && self.has_permission(actor, Permission::DeletePosts).await?,
            ),
            RuleId::AdminRole => Step::allow_if(rules::is_admin(actor, &self.config.admin_role)),
            RuleId::ParentGate => {
                Step::deny_if(!self.parent_allows(actor, post, privilege, chain).await?)
            }
            RuleId::CreateOwnership => Step::deny_if(
                privilege == Privilege::Create
                    && !rules::is_owner(post, actor)
                    && !rules::is_anonymous_and_unowned(post, actor),
            ),
            RuleId::FormRestriction => Step::deny_if(
                matches!(
                    privilege,
                    Privilege::Create | Privilege::Update | Privilege::Lock
                ) && self.form_restricts(post, actor).await?,
            ),
            RuleId::OpenCreateSearch => Step::allow_if(matches!(
                privilege,
                Privilege::Create | Privilege::Search
            )),
            RuleId::PublishedVisibility => {
                Step::allow_if(privilege == Privilege::Read && rules::is_visible_to(post, actor))
            }
            RuleId::PreflightRead => {
                Step::allow_if(privilege == Privilege::Read && !post.is_persisted())
            }
            RuleId::ChangeStatusLockout => Step::deny_if(privilege == Privilege::ChangeStatus),
            RuleId::OwnershipChangeLockout => {
                Step::deny_if(rules::attempts_ownership_change(post))
            }
            RuleId::OwnerEdit => Step::allow_if(
                matches!(privilege, Privilege::Update | Privilege::Lock)
                    && rules::is_owner(post, actor)
                    && self.has_permission(actor, Permission::EditOwnPosts).await?,
            ),
            RuleId::OwnerDelete => Step::allow_if(
                privilege == Privilege::Delete
                    && rules::is_owner(post, actor)
                    && self.has_permission(actor, Permission::DeleteOwnPosts).await?,
            ),
            RuleId::OwnerRead => {
                Step::allow_if(privilege == Privilege::Read && rules::is_owner(post, actor))
            }
            RuleId::DefaultDeny => Step::Deny,
        };
        Ok(step)
    }

    async fn has_permission(
        &self,
        actor: &Actor,
        permission: Permission,
    ) -> Result<bool, DomainError> {
        Ok(self.permissions.has_permission(actor, permission).await?)
    }

    /// No parent, or a parent the actor may access with the same privilege.
    async fn parent_allows(
        &self,
        actor: &Actor,
        post: &Post,
        privilege: Privilege,
        chain: &mut Vec<Uuid>,
    ) -> Result<bool, DomainError> {
        let Some(parent_id) = post.parent_id else {
            return Ok(true);
        };

        if chain.contains(&parent_id) {
            tracing::error!(
                post_id = %parent_id,
                chain = ?chain,
                "cyclic parent chain in post hierarchy (data integrity), failing closed"
            );
            return Err(DomainError::CyclicParent { post_id: parent_id });
        }

        let Some(parent) = self.posts.get(parent_id).await? else {
            tracing::debug!(parent_id = %parent_id, "parent post not found");
            return Ok(self.config.missing_parent == MissingParentPolicy::Unrestricted);
        };

        chain.push(parent_id);
        let decision = self.decide_in_chain(actor, &parent, privilege, chain).await?;
        Ok(decision.allowed)
    }

    async fn form_restricts(&self, post: &Post, actor: &Actor) -> Result<bool, DomainError> {
        let Some(form_id) = post.form_id else {
            return Ok(false);
        };
        let Some(policy) = self.forms.create_roles(form_id).await? else {
            return Ok(false);
        };
        Ok(rules::is_form_restricted(&policy, actor))
    }
}

impl std::fmt::Debug for DecisionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
