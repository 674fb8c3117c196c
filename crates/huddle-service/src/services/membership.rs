//! Membership service
//!
//! Resolves whether a user holds a role in a workspace and gates actions on
//! it. Every mutating workspace operation consults this service before
//! touching data.

use huddle_core::entities::Member;
use huddle_core::value_objects::{Role, UserId, WorkspaceAction, WorkspaceId};
use huddle_core::DomainError;
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::ServiceResult;

/// Membership service for access control
pub struct MembershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MembershipService<'a> {
    /// Create a new MembershipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Look up the caller's role in a workspace, if any. No side effects.
    #[instrument(skip(self))]
    pub async fn role_of(
        &self,
        user_id: &UserId,
        workspace_id: WorkspaceId,
    ) -> ServiceResult<Option<Role>> {
        let member = self.ctx.member_repo().find(workspace_id, user_id).await?;
        Ok(member.map(|m| m.role))
    }

    /// Whether the user holds any role in the workspace
    #[instrument(skip(self))]
    pub async fn is_member(
        &self,
        user_id: &UserId,
        workspace_id: WorkspaceId,
    ) -> ServiceResult<bool> {
        Ok(self
            .ctx
            .member_repo()
            .find(workspace_id, user_id)
            .await?
            .is_some())
    }

    /// Resolve the member row, failing `Unauthorized` when there is none
    #[instrument(skip(self))]
    pub async fn require_member(
        &self,
        user_id: &UserId,
        workspace_id: WorkspaceId,
    ) -> ServiceResult<Member> {
        self.ctx
            .member_repo()
            .find(workspace_id, user_id)
            .await?
            .ok_or(DomainError::Unauthorized)
    }

    /// Resolve the member row and check that its role permits `action`,
    /// failing `Unauthorized` otherwise
    #[instrument(skip(self))]
    pub async fn require(
        &self,
        user_id: &UserId,
        workspace_id: WorkspaceId,
        action: WorkspaceAction,
    ) -> ServiceResult<Member> {
        let member = self.require_member(user_id, workspace_id).await?;

        if !member.may(action) {
            debug!(
                user_id = %user_id,
                workspace_id = %workspace_id,
                role = %member.role,
                ?action,
                "action denied"
            );
            return Err(DomainError::Unauthorized);
        }

        Ok(member)
    }
}
