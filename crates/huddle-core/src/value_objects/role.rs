//! Membership roles and the actions they gate
//!
//! Authorization is a pure function over a closed role enumeration: no
//! role hierarchy, no virtual dispatch. Services look a member up, then ask
//! `role.allows(action)`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a user holds within a workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

/// Actions gated by workspace membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceAction {
    /// Read workspace contents (channels, members, history)
    Read,
    /// Rename the workspace
    Rename,
    /// Rotate the join code
    RotateJoinCode,
    /// Delete the workspace and everything in it
    Delete,
    /// Create, rename, or remove channels
    ManageChannels,
}

impl Role {
    /// Whether this role permits the given action
    #[must_use]
    pub fn allows(self, action: WorkspaceAction) -> bool {
        match action {
            WorkspaceAction::Read => true,
            WorkspaceAction::Rename
            | WorkspaceAction::RotateJoinCode
            | WorkspaceAction::Delete
            | WorkspaceAction::ManageChannels => matches!(self, Self::Admin),
        }
    }

    /// Stable storage representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a role from its storage representation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleParseError {
    #[error("unknown role: {0}")]
    Unknown(String),
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            other => Err(RoleParseError::Unknown(other.to_string())),
        }
    }
}
