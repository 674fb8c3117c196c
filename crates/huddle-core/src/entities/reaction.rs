//! Reaction entity - an emoji reaction on a message

use chrono::{DateTime, Utc};

use crate::value_objects::{MemberId, MessageId, ReactionId, WorkspaceId};

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: ReactionId,
    pub workspace_id: WorkspaceId,
    pub message_id: MessageId,
    pub member_id: MemberId,
    pub value: String,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(
        id: ReactionId,
        workspace_id: WorkspaceId,
        message_id: MessageId,
        member_id: MemberId,
        value: String,
    ) -> Self {
        Self {
            id,
            workspace_id,
            message_id,
            member_id,
            value,
            created_at: Utc::now(),
        }
    }

    /// Check if the reaction carries a specific emoji
    #[inline]
    pub fn is_value(&self, value: &str) -> bool {
        self.value == value
    }
}
