//! Message entity - posted into a channel or a conversation
//!
//! The body is opaque rich text owned by the editor layer. The lifecycle
//! engine only depends on the workspace (and channel) back-references.

use chrono::{DateTime, Utc};

use crate::value_objects::{ChannelId, ConversationId, MemberId, MessageId, WorkspaceId};

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub workspace_id: WorkspaceId,
    pub member_id: MemberId,
    pub channel_id: Option<ChannelId>,
    pub conversation_id: Option<ConversationId>,
    pub parent_id: Option<MessageId>,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Create a message posted in a channel
    pub fn in_channel(
        id: MessageId,
        workspace_id: WorkspaceId,
        channel_id: ChannelId,
        member_id: MemberId,
        body: String,
    ) -> Self {
        Self {
            id,
            workspace_id,
            member_id,
            channel_id: Some(channel_id),
            conversation_id: None,
            parent_id: None,
            body,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Create a message posted in a direct conversation
    pub fn in_conversation(
        id: MessageId,
        workspace_id: WorkspaceId,
        conversation_id: ConversationId,
        member_id: MemberId,
        body: String,
    ) -> Self {
        Self {
            id,
            workspace_id,
            member_id,
            channel_id: None,
            conversation_id: Some(conversation_id),
            parent_id: None,
            body,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Mark this message as a threaded reply
    pub fn with_parent(mut self, parent_id: MessageId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Whether this message is a threaded reply
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Replace the body, recording the edit time
    pub fn edit(&mut self, body: String) {
        self.body = body;
        self.updated_at = Some(Utc::now());
    }
}
