//! Channel entity <-> model mapper

use huddle_core::entities::Channel;
use huddle_core::value_objects::{ChannelId, WorkspaceId};

use crate::models::ChannelModel;

impl From<ChannelModel> for Channel {
    fn from(model: ChannelModel) -> Self {
        Channel {
            id: ChannelId::from_uuid(model.id),
            workspace_id: WorkspaceId::from_uuid(model.workspace_id),
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
