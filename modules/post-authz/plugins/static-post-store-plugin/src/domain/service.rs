//! Service implementation for the static post store plugin.

use std::collections::{HashMap, HashSet};

use anyhow::{Context, bail};
use post_authz_sdk::{FormAccessPolicy, FormId, Permission, Post, Role};
use uuid::Uuid;

use crate::config::StaticPostStoreConfig;

/// Static post store service.
///
/// Lookups never fail: a missing post or form is `None`, and a role that
/// is not configured holds no permissions.
#[derive(Debug, Default)]
pub struct Service {
    posts: HashMap<Uuid, Post>,
    forms: HashMap<FormId, FormAccessPolicy>,
    role_permissions: HashMap<Role, HashSet<Permission>>,
}

impl Service {
    /// Build the service from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if post or form ids repeat, or if a permission name
    /// is unknown.
    pub fn from_config(cfg: &StaticPostStoreConfig) -> anyhow::Result<Self> {
        let mut posts = HashMap::with_capacity(cfg.posts.len());
        for (index, post) in cfg.posts.iter().enumerate() {
            if posts.insert(post.id, Post::from(post)).is_some() {
                bail!("posts[{index}]: duplicate post id {}", post.id);
            }
        }

        let mut forms = HashMap::with_capacity(cfg.forms.len());
        for form in &cfg.forms {
            let policy = FormAccessPolicy {
                everyone_can_create: form.everyone_can_create,
                roles: form.roles.iter().cloned().collect(),
            };
            if forms.insert(form.id, policy).is_some() {
                bail!("duplicate form id {}", form.id);
            }
        }

        let mut role_permissions: HashMap<Role, HashSet<Permission>> = HashMap::new();
        for entry in &cfg.role_permissions {
            let granted = role_permissions.entry(entry.role.clone()).or_default();
            for name in &entry.permissions {
                let permission = Permission::from_name(name).with_context(|| {
                    format!("role '{}': unknown permission '{name}'", entry.role)
                })?;
                granted.insert(permission);
            }
        }

        tracing::info!(
            post_count = posts.len(),
            form_count = forms.len(),
            role_count = role_permissions.len(),
            "Loaded static post store"
        );

        Ok(Self {
            posts,
            forms,
            role_permissions,
        })
    }

    #[must_use]
    pub fn post(&self, id: Uuid) -> Option<&Post> {
        self.posts.get(&id)
    }

    #[must_use]
    pub fn form_policy(&self, id: FormId) -> Option<&FormAccessPolicy> {
        self.forms.get(&id)
    }

    /// Actors without a role hold no permissions.
    #[must_use]
    pub fn role_has_permission(&self, role: Option<&Role>, permission: Permission) -> bool {
        role.and_then(|r| self.role_permissions.get(r))
            .is_some_and(|granted| granted.contains(&permission))
    }
}
