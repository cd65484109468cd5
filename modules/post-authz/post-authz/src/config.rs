//! Configuration for the post authorization engine.

use serde::Deserialize;

/// Engine configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostAuthzConfig {
    /// Only authenticated actors may access anything when set.
    pub private_deployment: bool,

    /// Role granted unconditional access.
    pub admin_role: String,

    /// How to treat a `parent_id` that resolves to no post.
    pub missing_parent: MissingParentPolicy,
}

impl Default for PostAuthzConfig {
    fn default() -> Self {
        Self {
            private_deployment: false,
            admin_role: "admin".to_owned(),
            missing_parent: MissingParentPolicy::Unrestricted,
        }
    }
}

impl PostAuthzConfig {
    /// Parse configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or has unknown fields.
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| anyhow::anyhow!("invalid post_authz configuration: {e}"))
    }
}

/// Policy for dangling parent references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingParentPolicy {
    /// A parent that cannot be found imposes no constraint.
    #[default]
    Unrestricted,
    /// A parent that cannot be found denies access (fail closed).
    Deny,
}
