//! Workspace entity <-> model mapper

use huddle_core::entities::Workspace;
use huddle_core::value_objects::{JoinCode, UserId, WorkspaceId};

use crate::models::WorkspaceModel;

impl From<WorkspaceModel> for Workspace {
    fn from(model: WorkspaceModel) -> Self {
        Workspace {
            id: WorkspaceId::from_uuid(model.id),
            name: model.name,
            owner_id: UserId::new(model.owner_user_id),
            join_code: JoinCode::from_stored(model.join_code),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
