//! Domain models for the `post_authz` module.
//!
//! An authorization question is always `(Actor, Post, Privilege)`; the
//! answer is a [`Decision`] attributed to the rule that produced it.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use crate::privilege::{ParsePrivilegeError, Privilege};

/// Name of the post field holding the owner id.
///
/// A post whose `changed_fields` contains this name is attempting an
/// ownership change.
pub const OWNER_FIELD: &str = "user_id";

/// Role name as configured by the deployment (e.g. `"admin"`, `"member"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The party requesting access.
///
/// An actor without an id is anonymous: they could not be authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Actor {
    /// User id; `None` for anonymous actors.
    pub id: Option<Uuid>,
    /// Role of the user, if any.
    pub role: Option<Role>,
}

impl Actor {
    /// An authenticated user with the given role.
    #[must_use]
    pub fn user(id: Uuid, role: impl Into<Role>) -> Self {
        Self {
            id: Some(id),
            role: Some(role.into()),
        }
    }

    /// An anonymous (unauthenticated) actor without a role.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.id.is_none()
    }

    /// Whether the actor holds exactly this role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_ref().is_some_and(|r| r.as_str() == role)
    }
}

/// Publication status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    UnderReview,
    Archived,
}

/// Identifier of a survey form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(pub u64);

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The content item being authorized.
///
/// This is a snapshot: for updates it carries the proposed values plus the
/// set of fields that differ from the stored version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    /// Present only once the post has been persisted.
    pub id: Option<Uuid>,
    /// Owning user; `None` for posts submitted anonymously.
    pub owner_id: Option<Uuid>,
    pub status: PostStatus,
    /// Roles the published post is visible to. Empty means public.
    pub published_to: BTreeSet<Role>,
    pub parent_id: Option<Uuid>,
    pub form_id: Option<FormId>,
    /// Fields mutated relative to the stored version.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub changed_fields: BTreeSet<String>,
}

impl Post {
    /// A persisted post with the given id and default (draft) state.
    #[must_use]
    pub fn with_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn owned_by(mut self, owner_id: Uuid) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    #[must_use]
    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    /// Restrict visibility of the published post to the given roles.
    #[must_use]
    pub fn published_to<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Role>,
    {
        self.published_to = roles.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn child_of(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    #[must_use]
    pub fn in_form(mut self, form_id: FormId) -> Self {
        self.form_id = Some(form_id);
        self
    }

    /// Mark a field as changed relative to the stored version.
    #[must_use]
    pub fn changed(mut self, field: impl Into<String>) -> Self {
        self.changed_fields.insert(field.into());
        self
    }

    #[must_use]
    pub fn has_changed(&self, field: &str) -> bool {
        self.changed_fields.contains(field)
    }

    #[inline]
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Named capability held through a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ManagePosts,
    DeletePosts,
    EditOwnPosts,
    DeleteOwnPosts,
}

impl Permission {
    pub const ALL: [Self; 4] = [
        Self::ManagePosts,
        Self::DeletePosts,
        Self::EditOwnPosts,
        Self::DeleteOwnPosts,
    ];

    /// Display name as stored in the deployment's permission table.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ManagePosts => "Manage Posts",
            Self::DeletePosts => "Delete Posts",
            Self::EditOwnPosts => "Edit their own posts",
            Self::DeleteOwnPosts => "Delete Their Own Posts",
        }
    }

    /// Look up a permission by display name or `snake_case` variant name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| {
            p.as_str().eq_ignore_ascii_case(name) || p.variant_name() == name
        })
    }

    fn variant_name(self) -> &'static str {
        match self {
            Self::ManagePosts => "manage_posts",
            Self::DeletePosts => "delete_posts",
            Self::EditOwnPosts => "edit_own_posts",
            Self::DeleteOwnPosts => "delete_own_posts",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-form creation policy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormAccessPolicy {
    pub everyone_can_create: bool,
    /// Roles allowed to create posts when `everyone_can_create` is false.
    pub roles: BTreeSet<Role>,
}

impl FormAccessPolicy {
    #[must_use]
    pub fn everyone() -> Self {
        Self {
            everyone_can_create: true,
            roles: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn restricted_to<I, R>(roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Role>,
    {
        Self {
            everyone_can_create: false,
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}

/// Identifies the rule of the decision chain that produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    PrivateDeployment,
    ManagePosts,
    DeletePosts,
    AdminRole,
    ParentGate,
    CreateOwnership,
    FormRestriction,
    OpenCreateSearch,
    PublishedVisibility,
    PreflightRead,
    ChangeStatusLockout,
    OwnershipChangeLockout,
    OwnerEdit,
    OwnerDelete,
    OwnerRead,
    DefaultDeny,
}

impl RuleId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrivateDeployment => "private_deployment",
            Self::ManagePosts => "manage_posts",
            Self::DeletePosts => "delete_posts",
            Self::AdminRole => "admin_role",
            Self::ParentGate => "parent_gate",
            Self::CreateOwnership => "create_ownership",
            Self::FormRestriction => "form_restriction",
            Self::OpenCreateSearch => "open_create_search",
            Self::PublishedVisibility => "published_visibility",
            Self::PreflightRead => "preflight_read",
            Self::ChangeStatusLockout => "change_status_lockout",
            Self::OwnershipChangeLockout => "ownership_change_lockout",
            Self::OwnerEdit => "owner_edit",
            Self::OwnerDelete => "owner_delete",
            Self::OwnerRead => "owner_read",
            Self::DefaultDeny => "default_deny",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub allowed: bool,
    /// The rule that short-circuited the chain.
    pub rule: RuleId,
}

impl Decision {
    #[must_use]
    pub fn allow(rule: RuleId) -> Self {
        Self {
            allowed: true,
            rule,
        }
    }

    #[must_use]
    pub fn deny(rule: RuleId) -> Self {
        Self {
            allowed: false,
            rule,
        }
    }
}
