//! Rule fragments composed by the decision engine.
//!
//! Each fragment is a pure predicate over explicit `(actor, post)` inputs.
//! Collaborator lookups happen in the engine; fragments only see their
//! answers.

use post_authz_sdk::{Actor, FormAccessPolicy, OWNER_FIELD, Post, PostStatus};

/// Private deployments admit authenticated actors only.
#[must_use]
pub fn can_access_deployment(actor: &Actor, private_deployment: bool) -> bool {
    !private_deployment || !actor.is_anonymous()
}

#[must_use]
pub fn is_admin(actor: &Actor, admin_role: &str) -> bool {
    actor.has_role(admin_role)
}

/// The actor is the (prospective) owner of the post.
///
/// Anonymous actors never own anything, even an ownerless post.
#[must_use]
pub fn is_owner(post: &Post, actor: &Actor) -> bool {
    match (actor.id, post.owner_id) {
        (Some(actor_id), Some(owner_id)) => actor_id == owner_id,
        _ => false,
    }
}

/// Anonymous actor submitting a post without an owner.
#[must_use]
pub fn is_anonymous_and_unowned(post: &Post, actor: &Actor) -> bool {
    actor.is_anonymous() && post.owner_id.is_none()
}

#[must_use]
pub fn attempts_ownership_change(post: &Post) -> bool {
    post.has_changed(OWNER_FIELD)
}

/// Whether a resolved form policy keeps this actor from creating posts.
#[must_use]
pub fn is_form_restricted(policy: &FormAccessPolicy, actor: &Actor) -> bool {
    if policy.everyone_can_create {
        return false;
    }
    !actor
        .role
        .as_ref()
        .is_some_and(|role| policy.roles.contains(role))
}

/// Published and either public or published to the actor's role.
#[must_use]
pub fn is_visible_to(post: &Post, actor: &Actor) -> bool {
    if post.status != PostStatus::Published {
        return false;
    }
    if post.published_to.is_empty() {
        return true;
    }
    actor
        .role
        .as_ref()
        .is_some_and(|role| post.published_to.contains(role))
}
