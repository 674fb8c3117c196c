//! Workspace service
//!
//! Orchestrates the workspace lifecycle: creation with its implicit admin
//! membership and default channel, join-code based joining, rename, join-code
//! rotation, reads, and cascading deletion across every dependent collection.

use huddle_core::entities::{Channel, Member, Workspace};
use huddle_core::value_objects::{ChannelId, JoinCode, MemberId, WorkspaceAction, WorkspaceId};
use huddle_core::{Caller, DomainError};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateWorkspaceRequest, RenameWorkspaceRequest, WorkspacePreview};

use super::context::ServiceContext;
use super::membership::MembershipService;
use super::ServiceResult;

/// Workspace service
pub struct WorkspaceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WorkspaceService<'a> {
    /// Create a new WorkspaceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn membership(&self) -> MembershipService<'a> {
        MembershipService::new(self.ctx)
    }

    /// Create a workspace. The caller becomes its sole admin and a `general`
    /// channel is created alongside.
    ///
    /// The three inserts run in sequence without a surrounding transaction;
    /// each step is logged so an interrupted sequence can be traced and
    /// finished by a recovery sweep.
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        caller: &Caller,
        request: CreateWorkspaceRequest,
    ) -> ServiceResult<WorkspaceId> {
        let user_id = caller.user_id()?.clone();
        request
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let workspace = Workspace::new(
            WorkspaceId::generate(),
            request.name,
            user_id.clone(),
            JoinCode::generate(),
        );
        self.ctx.workspace_repo().create(&workspace).await?;
        info!(workspace_id = %workspace.id, owner = %user_id, "workspace created");

        let member = Member::admin(MemberId::generate(), workspace.id, user_id);
        self.ctx.member_repo().create(&member).await?;
        info!(workspace_id = %workspace.id, member_id = %member.id, "creator admin membership recorded");

        let channel = Channel::general(ChannelId::generate(), workspace.id);
        self.ctx.channel_repo().create(&channel).await?;
        info!(workspace_id = %workspace.id, channel_id = %channel.id, "default channel created");

        Ok(workspace.id)
    }

    /// Join a workspace with its join code. Comparison is case-insensitive.
    #[instrument(skip(self, join_code))]
    pub async fn join(
        &self,
        caller: &Caller,
        workspace_id: WorkspaceId,
        join_code: &str,
    ) -> ServiceResult<WorkspaceId> {
        let user_id = caller.user_id()?.clone();

        let workspace = self
            .ctx
            .workspace_repo()
            .find_by_id(workspace_id)
            .await?
            .ok_or(DomainError::WorkspaceNotFound(workspace_id))?;

        if !workspace.join_code.matches(join_code) {
            return Err(DomainError::InvalidJoinCode);
        }

        // Friendly pre-check for error ordering; correctness rests on the
        // store's (workspace_id, user_id) uniqueness, not on this read.
        if self
            .ctx
            .member_repo()
            .find(workspace_id, &user_id)
            .await?
            .is_some()
        {
            return Err(DomainError::AlreadyMember);
        }

        let member = Member::member(MemberId::generate(), workspace_id, user_id);
        self.ctx.member_repo().create(&member).await?;
        info!(workspace_id = %workspace_id, member_id = %member.id, "member joined");

        Ok(workspace.id)
    }

    /// Replace the join code with a freshly generated one. The old code is
    /// invalid for everyone from this point, including in-flight invitees.
    #[instrument(skip(self))]
    pub async fn rotate_join_code(
        &self,
        caller: &Caller,
        workspace_id: WorkspaceId,
    ) -> ServiceResult<WorkspaceId> {
        let user_id = caller.user_id()?;
        self.membership()
            .require(user_id, workspace_id, WorkspaceAction::RotateJoinCode)
            .await?;

        let code = JoinCode::generate();
        self.ctx
            .workspace_repo()
            .set_join_code(workspace_id, &code)
            .await?;
        info!(workspace_id = %workspace_id, "join code rotated");

        Ok(workspace_id)
    }

    /// Rename the workspace. No uniqueness constraint across workspaces.
    #[instrument(skip(self, request))]
    pub async fn rename(
        &self,
        caller: &Caller,
        workspace_id: WorkspaceId,
        request: RenameWorkspaceRequest,
    ) -> ServiceResult<WorkspaceId> {
        let user_id = caller.user_id()?;
        request
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.membership()
            .require(user_id, workspace_id, WorkspaceAction::Rename)
            .await?;

        self.ctx
            .workspace_repo()
            .rename(workspace_id, &request.name)
            .await?;
        info!(workspace_id = %workspace_id, "workspace renamed");

        Ok(workspace_id)
    }

    /// List every workspace the caller belongs to. An anonymous caller gets
    /// an empty list rather than an error (discovery-safe default). Dangling
    /// membership rows are skipped silently.
    #[instrument(skip(self))]
    pub async fn list_for_caller(&self, caller: &Caller) -> ServiceResult<Vec<Workspace>> {
        let Some(user_id) = caller.user_id_opt() else {
            return Ok(Vec::new());
        };

        let members = self.ctx.member_repo().find_by_user(user_id).await?;

        let mut workspaces = Vec::with_capacity(members.len());
        for member in members {
            if let Some(workspace) = self
                .ctx
                .workspace_repo()
                .find_by_id(member.workspace_id)
                .await?
            {
                workspaces.push(workspace);
            }
        }

        Ok(workspaces)
    }

    /// Preview a workspace before joining: name plus whether the caller is
    /// already a member. Deliberately leaks the name to authenticated
    /// non-members so invitees can see what they are joining, and nothing
    /// else. Anonymous callers get `None`.
    #[instrument(skip(self))]
    pub async fn preview(
        &self,
        caller: &Caller,
        workspace_id: WorkspaceId,
    ) -> ServiceResult<Option<WorkspacePreview>> {
        let Some(user_id) = caller.user_id_opt() else {
            return Ok(None);
        };

        let is_member = self.membership().is_member(user_id, workspace_id).await?;
        let workspace = self.ctx.workspace_repo().find_by_id(workspace_id).await?;

        Ok(workspace.map(|ws| WorkspacePreview {
            name: ws.name,
            is_member,
        }))
    }

    /// Fetch the full workspace for a member. Non-members get `None` rather
    /// than a hard failure: this read backs optional UI state.
    #[instrument(skip(self))]
    pub async fn get_full(
        &self,
        caller: &Caller,
        workspace_id: WorkspaceId,
    ) -> ServiceResult<Option<Workspace>> {
        let user_id = caller.user_id()?;

        if !self.membership().is_member(user_id, workspace_id).await? {
            return Ok(None);
        }

        Ok(self.ctx.workspace_repo().find_by_id(workspace_id).await?)
    }

    /// Delete a workspace and every entity referencing it.
    ///
    /// Dependent collections go first, the workspace row last, so dependents
    /// never reference a vanished workspace. The steps are sequential, not
    /// transactional; each logs the rows it removed so an interrupted cascade
    /// can be finished by a recovery sweep.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        caller: &Caller,
        workspace_id: WorkspaceId,
    ) -> ServiceResult<WorkspaceId> {
        let user_id = caller.user_id()?;
        self.membership()
            .require(user_id, workspace_id, WorkspaceAction::Delete)
            .await?;

        let members = self
            .ctx
            .member_repo()
            .delete_by_workspace(workspace_id)
            .await?;
        info!(workspace_id = %workspace_id, count = members, "members removed");

        let channels = self
            .ctx
            .channel_repo()
            .delete_by_workspace(workspace_id)
            .await?;
        info!(workspace_id = %workspace_id, count = channels, "channels removed");

        let reactions = self
            .ctx
            .reaction_repo()
            .delete_by_workspace(workspace_id)
            .await?;
        info!(workspace_id = %workspace_id, count = reactions, "reactions removed");

        let conversations = self
            .ctx
            .conversation_repo()
            .delete_by_workspace(workspace_id)
            .await?;
        info!(workspace_id = %workspace_id, count = conversations, "conversations removed");

        let messages = self
            .ctx
            .message_repo()
            .delete_by_workspace(workspace_id)
            .await?;
        info!(workspace_id = %workspace_id, count = messages, "messages removed");

        self.ctx.workspace_repo().delete(workspace_id).await?;
        info!(workspace_id = %workspace_id, "workspace deleted");

        Ok(workspace_id)
    }
}
