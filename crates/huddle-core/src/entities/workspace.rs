//! Workspace entity - the root tenant container
//!
//! Every other stored entity is owned, directly or transitively, by a
//! workspace; none may outlive it.

use chrono::{DateTime, Utc};

use crate::value_objects::{JoinCode, UserId, WorkspaceId};

/// Workspace entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub owner_id: UserId,
    pub join_code: JoinCode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workspace {
    /// Create a new Workspace
    pub fn new(id: WorkspaceId, name: String, owner_id: UserId, join_code: JoinCode) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            owner_id,
            join_code,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user is the workspace creator
    #[inline]
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    /// Update the workspace name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Replace the join code; the previous code is invalid from here on
    pub fn set_join_code(&mut self, code: JoinCode) {
        self.join_code = code;
        self.updated_at = Utc::now();
    }
}
