//! Member entity <-> model mapper

use huddle_core::entities::Member;
use huddle_core::error::DomainError;
use huddle_core::traits::RepoResult;
use huddle_core::value_objects::{MemberId, Role, UserId, WorkspaceId};

use crate::models::MemberModel;

/// Convert a MemberModel to a Member entity.
///
/// Fallible: the stored role text must parse into the closed `Role` enum.
pub fn member_from_model(model: MemberModel) -> RepoResult<Member> {
    let role: Role = model
        .role
        .parse()
        .map_err(|e| DomainError::store(format!("corrupt member row: {e}")))?;

    Ok(Member {
        id: MemberId::from_uuid(model.id),
        workspace_id: WorkspaceId::from_uuid(model.workspace_id),
        user_id: UserId::new(model.user_id),
        role,
        joined_at: model.joined_at,
        updated_at: model.updated_at,
    })
}
