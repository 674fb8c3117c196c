//! Conversation entity - a direct thread between two workspace members
//!
//! Conversations are shaped by the messaging layer; the lifecycle engine only
//! cares about the workspace back-reference.

use chrono::{DateTime, Utc};

use crate::value_objects::{ConversationId, MemberId, WorkspaceId};

/// Conversation entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: ConversationId,
    pub workspace_id: WorkspaceId,
    pub member_one_id: MemberId,
    pub member_two_id: MemberId,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new Conversation
    pub fn new(
        id: ConversationId,
        workspace_id: WorkspaceId,
        member_one_id: MemberId,
        member_two_id: MemberId,
    ) -> Self {
        Self {
            id,
            workspace_id,
            member_one_id,
            member_two_id,
            created_at: Utc::now(),
        }
    }

    /// Whether the given member participates in this conversation
    #[inline]
    pub fn involves(&self, member_id: MemberId) -> bool {
        self.member_one_id == member_id || self.member_two_id == member_id
    }
}
