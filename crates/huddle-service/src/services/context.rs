//! Service context - dependency container for services
//!
//! Holds the repository ports every service operates through. Each operation
//! is an independent request-scoped unit against the entity store; the
//! context itself carries no mutable state.

use std::sync::Arc;

use huddle_core::traits::{
    ChannelRepository, ConversationRepository, MemberRepository, MessageRepository,
    ReactionRepository, WorkspaceRepository,
};
use huddle_core::DomainError;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    workspace_repo: Arc<dyn WorkspaceRepository>,
    member_repo: Arc<dyn MemberRepository>,
    channel_repo: Arc<dyn ChannelRepository>,
    conversation_repo: Arc<dyn ConversationRepository>,
    message_repo: Arc<dyn MessageRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        workspace_repo: Arc<dyn WorkspaceRepository>,
        member_repo: Arc<dyn MemberRepository>,
        channel_repo: Arc<dyn ChannelRepository>,
        conversation_repo: Arc<dyn ConversationRepository>,
        message_repo: Arc<dyn MessageRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
    ) -> Self {
        Self {
            workspace_repo,
            member_repo,
            channel_repo,
            conversation_repo,
            message_repo,
            reaction_repo,
        }
    }

    /// Get the workspace repository
    pub fn workspace_repo(&self) -> &dyn WorkspaceRepository {
        self.workspace_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the channel repository
    pub fn channel_repo(&self) -> &dyn ChannelRepository {
        self.channel_repo.as_ref()
    }

    /// Get the conversation repository
    pub fn conversation_repo(&self) -> &dyn ConversationRepository {
        self.conversation_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    workspace_repo: Option<Arc<dyn WorkspaceRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    channel_repo: Option<Arc<dyn ChannelRepository>>,
    conversation_repo: Option<Arc<dyn ConversationRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workspace_repo(mut self, repo: Arc<dyn WorkspaceRepository>) -> Self {
        self.workspace_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn channel_repo(mut self, repo: Arc<dyn ChannelRepository>) -> Self {
        self.channel_repo = Some(repo);
        self
    }

    pub fn conversation_repo(mut self, repo: Arc<dyn ConversationRepository>) -> Self {
        self.conversation_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns a validation error if any required dependency is missing
    pub fn build(self) -> Result<ServiceContext, DomainError> {
        Ok(ServiceContext::new(
            self.workspace_repo
                .ok_or_else(|| DomainError::validation("workspace_repo is required"))?,
            self.member_repo
                .ok_or_else(|| DomainError::validation("member_repo is required"))?,
            self.channel_repo
                .ok_or_else(|| DomainError::validation("channel_repo is required"))?,
            self.conversation_repo
                .ok_or_else(|| DomainError::validation("conversation_repo is required"))?,
            self.message_repo
                .ok_or_else(|| DomainError::validation("message_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| DomainError::validation("reaction_repo is required"))?,
        ))
    }
}
