//! Configuration for the static post store plugin.

use std::collections::BTreeSet;

use post_authz_sdk::{FormId, Post, PostStatus, Role};
use serde::Deserialize;
use uuid::Uuid;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticPostStoreConfig {
    /// Posts served to the parent resolver.
    pub posts: Vec<PostConfig>,

    /// Per-form creation policies.
    pub forms: Vec<FormConfig>,

    /// Permissions held by each role.
    pub role_permissions: Vec<RolePermissionsConfig>,
}

impl StaticPostStoreConfig {
    /// Parse configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or has unknown fields.
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| anyhow::anyhow!("invalid static post store configuration: {e}"))
    }
}

/// A stored post.
///
/// Unlike [`Post`], a stored post always has an id and never carries
/// pending changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostConfig {
    pub id: Uuid,

    #[serde(default)]
    pub owner_id: Option<Uuid>,

    #[serde(default)]
    pub status: PostStatus,

    /// Roles the published post is visible to. Empty means public.
    #[serde(default)]
    pub published_to: Vec<Role>,

    #[serde(default)]
    pub parent_id: Option<Uuid>,

    #[serde(default)]
    pub form_id: Option<FormId>,
}

impl PostConfig {
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            owner_id: None,
            status: PostStatus::default(),
            published_to: Vec::new(),
            parent_id: None,
            form_id: None,
        }
    }
}

impl From<&PostConfig> for Post {
    fn from(cfg: &PostConfig) -> Self {
        Self {
            id: Some(cfg.id),
            owner_id: cfg.owner_id,
            status: cfg.status,
            published_to: cfg.published_to.iter().cloned().collect(),
            parent_id: cfg.parent_id,
            form_id: cfg.form_id,
            changed_fields: BTreeSet::new(),
        }
    }
}

/// Creation policy of a single form.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormConfig {
    pub id: FormId,

    #[serde(default)]
    pub everyone_can_create: bool,

    /// Roles allowed to create posts when `everyone_can_create` is false.
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// Permissions granted to a role.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RolePermissionsConfig {
    pub role: Role,

    /// Permission display names (`"Manage Posts"`) or variant names
    /// (`manage_posts`), validated at init.
    pub permissions: Vec<String>,
}
