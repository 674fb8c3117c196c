//! Member entity - binds a user identity to a workspace with a role
//!
//! At most one member row exists per `(workspace_id, user_id)` pair; the
//! store enforces this with a unique index rather than trusting
//! check-then-insert callers.

use chrono::{DateTime, Utc};

use crate::value_objects::{MemberId, Role, UserId, WorkspaceAction, WorkspaceId};

/// Workspace member entity (junction between a user and a workspace)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub workspace_id: WorkspaceId,
    pub user_id: UserId,
    pub role: Role,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Create a new Member with the given role
    pub fn new(id: MemberId, workspace_id: WorkspaceId, user_id: UserId, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id,
            workspace_id,
            user_id,
            role,
            joined_at: now,
            updated_at: now,
        }
    }

    /// The creator's membership: role `admin`
    pub fn admin(id: MemberId, workspace_id: WorkspaceId, user_id: UserId) -> Self {
        Self::new(id, workspace_id, user_id, Role::Admin)
    }

    /// A joined membership: role `member`
    pub fn member(id: MemberId, workspace_id: WorkspaceId, user_id: UserId) -> Self {
        Self::new(id, workspace_id, user_id, Role::Member)
    }

    /// Whether this member holds the admin role
    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    /// Whether this member may perform the given action
    #[inline]
    pub fn may(&self, action: WorkspaceAction) -> bool {
        self.role.allows(action)
    }
}
