//! Message entity <-> model mapper

use huddle_core::entities::Message;
use huddle_core::value_objects::{ChannelId, ConversationId, MemberId, MessageId, WorkspaceId};

use crate::models::MessageModel;

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: MessageId::from_uuid(model.id),
            workspace_id: WorkspaceId::from_uuid(model.workspace_id),
            member_id: MemberId::from_uuid(model.member_id),
            channel_id: model.channel_id.map(ChannelId::from_uuid),
            conversation_id: model.conversation_id.map(ConversationId::from_uuid),
            parent_id: model.parent_id.map(MessageId::from_uuid),
            body: model.body,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
