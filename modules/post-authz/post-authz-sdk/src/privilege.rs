//! Privileges that can be requested against a post.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The action being requested against a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Privilege {
    Read,
    Create,
    Update,
    Delete,
    Search,
    ChangeStatus,
    Lock,
    ReadFull,
}

impl Privilege {
    pub const ALL: [Self; 8] = [
        Self::Read,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Search,
        Self::ChangeStatus,
        Self::Lock,
        Self::ReadFull,
    ];

    /// Privileges reported to API clients in `allowed_privileges`.
    ///
    /// `lock` is an internal privilege checked by the edit-lock flow and is
    /// never advertised.
    pub const REPORTABLE: [Self; 7] = [
        Self::Read,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Search,
        Self::ChangeStatus,
        Self::ReadFull,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Search => "search",
            Self::ChangeStatus => "change_status",
            Self::Lock => "lock",
            Self::ReadFull => "read_full",
        }
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known privilege.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown privilege: {0}")]
pub struct ParsePrivilegeError(pub String);

impl FromStr for Privilege {
    type Err = ParsePrivilegeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePrivilegeError(s.to_owned()))
    }
}
