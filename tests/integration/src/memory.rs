//! In-memory entity store
//!
//! Implements every repository port over plain hash maps. Mirrors the
//! PostgreSQL adapter's observable behavior, including the
//! `(workspace_id, user_id)` uniqueness on members and not-found errors on
//! targeted updates and deletes.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use huddle_core::entities::{Channel, Conversation, Member, Message, Reaction, Workspace};
use huddle_core::traits::{
    ChannelRepository, ConversationRepository, MemberRepository, MessageRepository,
    ReactionRepository, RepoResult, WorkspaceRepository,
};
use huddle_core::value_objects::{
    ChannelId, ConversationId, JoinCode, MemberId, MessageId, ReactionId, UserId, WorkspaceId,
};
use huddle_core::DomainError;

/// In-memory store implementing all repository ports
#[derive(Default)]
pub struct MemStore {
    workspaces: Mutex<HashMap<WorkspaceId, Workspace>>,
    members: Mutex<HashMap<MemberId, Member>>,
    channels: Mutex<HashMap<ChannelId, Channel>>,
    conversations: Mutex<HashMap<ConversationId, Conversation>>,
    messages: Mutex<HashMap<MessageId, Message>>,
    reactions: Mutex<HashMap<ReactionId, Reaction>>,
}

impl MemStore {
    /// Create a new empty store behind an Arc, ready to share across ports
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl WorkspaceRepository for MemStore {
    async fn find_by_id(&self, id: WorkspaceId) -> RepoResult<Option<Workspace>> {
        Ok(self.workspaces.lock().get(&id).cloned())
    }

    async fn create(&self, workspace: &Workspace) -> RepoResult<()> {
        self.workspaces
            .lock()
            .insert(workspace.id, workspace.clone());
        Ok(())
    }

    async fn rename(&self, id: WorkspaceId, name: &str) -> RepoResult<()> {
        let mut workspaces = self.workspaces.lock();
        let workspace = workspaces
            .get_mut(&id)
            .ok_or(DomainError::WorkspaceNotFound(id))?;
        workspace.set_name(name.to_string());
        Ok(())
    }

    async fn set_join_code(&self, id: WorkspaceId, code: &JoinCode) -> RepoResult<()> {
        let mut workspaces = self.workspaces.lock();
        let workspace = workspaces
            .get_mut(&id)
            .ok_or(DomainError::WorkspaceNotFound(id))?;
        workspace.set_join_code(code.clone());
        Ok(())
    }

    async fn delete(&self, id: WorkspaceId) -> RepoResult<()> {
        self.workspaces
            .lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::WorkspaceNotFound(id))
    }
}

#[async_trait]
impl MemberRepository for MemStore {
    async fn find(
        &self,
        workspace_id: WorkspaceId,
        user_id: &UserId,
    ) -> RepoResult<Option<Member>> {
        Ok(self
            .members
            .lock()
            .values()
            .find(|m| m.workspace_id == workspace_id && &m.user_id == user_id)
            .cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> RepoResult<Vec<Member>> {
        let mut members: Vec<Member> = self
            .members
            .lock()
            .values()
            .filter(|m| &m.user_id == user_id)
            .cloned()
            .collect();
        members.sort_by(|a, b| b.joined_at.cmp(&a.joined_at));
        Ok(members)
    }

    async fn find_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<Vec<Member>> {
        let mut members: Vec<Member> = self
            .members
            .lock()
            .values()
            .filter(|m| m.workspace_id == workspace_id)
            .cloned()
            .collect();
        members.sort_by(|a, b| a.joined_at.cmp(&b.joined_at));
        Ok(members)
    }

    async fn create(&self, member: &Member) -> RepoResult<()> {
        let mut members = self.members.lock();

        // Same invariant the unique index enforces in PostgreSQL
        let duplicate = members
            .values()
            .any(|m| m.workspace_id == member.workspace_id && m.user_id == member.user_id);
        if duplicate {
            return Err(DomainError::AlreadyMember);
        }

        members.insert(member.id, member.clone());
        Ok(())
    }

    async fn delete_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<u64> {
        let mut members = self.members.lock();
        let before = members.len();
        members.retain(|_, m| m.workspace_id != workspace_id);
        Ok((before - members.len()) as u64)
    }
}

#[async_trait]
impl ChannelRepository for MemStore {
    async fn find_by_id(&self, id: ChannelId) -> RepoResult<Option<Channel>> {
        Ok(self.channels.lock().get(&id).cloned())
    }

    async fn find_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<Vec<Channel>> {
        let mut channels: Vec<Channel> = self
            .channels
            .lock()
            .values()
            .filter(|c| c.workspace_id == workspace_id)
            .cloned()
            .collect();
        channels.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(channels)
    }

    async fn create(&self, channel: &Channel) -> RepoResult<()> {
        self.channels.lock().insert(channel.id, channel.clone());
        Ok(())
    }

    async fn rename(&self, id: ChannelId, name: &str) -> RepoResult<()> {
        let mut channels = self.channels.lock();
        let channel = channels
            .get_mut(&id)
            .ok_or(DomainError::ChannelNotFound(id))?;
        channel.set_name(name.to_string());
        Ok(())
    }

    async fn delete(&self, id: ChannelId) -> RepoResult<()> {
        self.channels
            .lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::ChannelNotFound(id))
    }

    async fn delete_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<u64> {
        let mut channels = self.channels.lock();
        let before = channels.len();
        channels.retain(|_, c| c.workspace_id != workspace_id);
        Ok((before - channels.len()) as u64)
    }
}

#[async_trait]
impl ConversationRepository for MemStore {
    async fn find_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<Vec<Conversation>> {
        Ok(self
            .conversations
            .lock()
            .values()
            .filter(|c| c.workspace_id == workspace_id)
            .cloned()
            .collect())
    }

    async fn create(&self, conversation: &Conversation) -> RepoResult<()> {
        self.conversations
            .lock()
            .insert(conversation.id, conversation.clone());
        Ok(())
    }

    async fn delete_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<u64> {
        let mut conversations = self.conversations.lock();
        let before = conversations.len();
        conversations.retain(|_, c| c.workspace_id != workspace_id);
        Ok((before - conversations.len()) as u64)
    }
}

#[async_trait]
impl MessageRepository for MemStore {
    async fn find_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<Vec<Message>> {
        Ok(self
            .messages
            .lock()
            .values()
            .filter(|m| m.workspace_id == workspace_id)
            .cloned()
            .collect())
    }

    async fn find_by_channel(&self, channel_id: ChannelId) -> RepoResult<Vec<Message>> {
        Ok(self
            .messages
            .lock()
            .values()
            .filter(|m| m.channel_id == Some(channel_id))
            .cloned()
            .collect())
    }

    async fn create(&self, message: &Message) -> RepoResult<()> {
        self.messages.lock().insert(message.id, message.clone());
        Ok(())
    }

    async fn delete_by_channel(&self, channel_id: ChannelId) -> RepoResult<u64> {
        let mut messages = self.messages.lock();
        let before = messages.len();
        messages.retain(|_, m| m.channel_id != Some(channel_id));
        Ok((before - messages.len()) as u64)
    }

    async fn delete_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<u64> {
        let mut messages = self.messages.lock();
        let before = messages.len();
        messages.retain(|_, m| m.workspace_id != workspace_id);
        Ok((before - messages.len()) as u64)
    }
}

#[async_trait]
impl ReactionRepository for MemStore {
    async fn find_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<Vec<Reaction>> {
        Ok(self
            .reactions
            .lock()
            .values()
            .filter(|r| r.workspace_id == workspace_id)
            .cloned()
            .collect())
    }

    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        self.reactions.lock().insert(reaction.id, reaction.clone());
        Ok(())
    }

    async fn delete_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<u64> {
        let mut reactions = self.reactions.lock();
        let before = reactions.len();
        reactions.retain(|_, r| r.workspace_id != workspace_id);
        Ok((before - reactions.len()) as u64)
    }
}
