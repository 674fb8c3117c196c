//! Reaction entity <-> model mapper

use huddle_core::entities::Reaction;
use huddle_core::value_objects::{MemberId, MessageId, ReactionId, WorkspaceId};

use crate::models::ReactionModel;

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: ReactionId::from_uuid(model.id),
            workspace_id: WorkspaceId::from_uuid(model.workspace_id),
            message_id: MessageId::from_uuid(model.message_id),
            member_id: MemberId::from_uuid(model.member_id),
            value: model.value,
            created_at: model.created_at,
        }
    }
}
