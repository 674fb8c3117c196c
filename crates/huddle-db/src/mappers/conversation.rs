//! Conversation entity <-> model mapper

use huddle_core::entities::Conversation;
use huddle_core::value_objects::{ConversationId, MemberId, WorkspaceId};

use crate::models::ConversationModel;

impl From<ConversationModel> for Conversation {
    fn from(model: ConversationModel) -> Self {
        Conversation {
            id: ConversationId::from_uuid(model.id),
            workspace_id: WorkspaceId::from_uuid(model.workspace_id),
            member_one_id: MemberId::from_uuid(model.member_one_id),
            member_two_id: MemberId::from_uuid(model.member_two_id),
            created_at: model.created_at,
        }
    }
}
