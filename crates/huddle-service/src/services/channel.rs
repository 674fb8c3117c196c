//! Channel service
//!
//! Channel management beyond the implicit `general` channel: creation,
//! listing, rename, and removal. Admin-gated mutations, member-gated reads.

use huddle_core::entities::Channel;
use huddle_core::value_objects::{ChannelId, WorkspaceAction, WorkspaceId};
use huddle_core::{Caller, DomainError};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateChannelRequest, RenameChannelRequest};

use super::context::ServiceContext;
use super::membership::MembershipService;
use super::ServiceResult;

/// Channel service
pub struct ChannelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChannelService<'a> {
    /// Create a new ChannelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn membership(&self) -> MembershipService<'a> {
        MembershipService::new(self.ctx)
    }

    /// Create a channel in a workspace. The stored name is normalized
    /// (lowercased, whitespace collapsed to dashes).
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        caller: &Caller,
        workspace_id: WorkspaceId,
        request: CreateChannelRequest,
    ) -> ServiceResult<ChannelId> {
        let user_id = caller.user_id()?;
        request
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.membership()
            .require(user_id, workspace_id, WorkspaceAction::ManageChannels)
            .await?;

        let channel = Channel::new(
            ChannelId::generate(),
            workspace_id,
            Channel::normalize_name(&request.name),
        );
        self.ctx.channel_repo().create(&channel).await?;
        info!(workspace_id = %workspace_id, channel_id = %channel.id, name = %channel.name, "channel created");

        Ok(channel.id)
    }

    /// List the channels of a workspace. Non-members get an empty list
    /// rather than a hard failure, the same decay rule as workspace reads.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        caller: &Caller,
        workspace_id: WorkspaceId,
    ) -> ServiceResult<Vec<Channel>> {
        let user_id = caller.user_id()?;

        if !self.membership().is_member(user_id, workspace_id).await? {
            return Ok(Vec::new());
        }

        self.ctx.channel_repo().find_by_workspace(workspace_id).await
    }

    /// Rename a channel
    #[instrument(skip(self, request))]
    pub async fn rename(
        &self,
        caller: &Caller,
        channel_id: ChannelId,
        request: RenameChannelRequest,
    ) -> ServiceResult<ChannelId> {
        let user_id = caller.user_id()?;
        request
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let channel = self
            .ctx
            .channel_repo()
            .find_by_id(channel_id)
            .await?
            .ok_or(DomainError::ChannelNotFound(channel_id))?;

        self.membership()
            .require(user_id, channel.workspace_id, WorkspaceAction::ManageChannels)
            .await?;

        self.ctx
            .channel_repo()
            .rename(channel_id, &Channel::normalize_name(&request.name))
            .await?;
        info!(channel_id = %channel_id, "channel renamed");

        Ok(channel_id)
    }

    /// Remove a channel together with its messages, channel row last
    #[instrument(skip(self))]
    pub async fn delete(&self, caller: &Caller, channel_id: ChannelId) -> ServiceResult<ChannelId> {
        let user_id = caller.user_id()?;

        let channel = self
            .ctx
            .channel_repo()
            .find_by_id(channel_id)
            .await?
            .ok_or(DomainError::ChannelNotFound(channel_id))?;

        self.membership()
            .require(user_id, channel.workspace_id, WorkspaceAction::ManageChannels)
            .await?;

        let messages = self.ctx.message_repo().delete_by_channel(channel_id).await?;
        info!(channel_id = %channel_id, count = messages, "channel messages removed");

        self.ctx.channel_repo().delete(channel_id).await?;
        info!(channel_id = %channel_id, "channel deleted");

        Ok(channel_id)
    }
}
