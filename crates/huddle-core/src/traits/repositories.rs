//! Repository traits (ports) - define the interface for the entity store
//!
//! The domain layer defines what it needs from the store; an adapter crate
//! provides the implementation. The store is document-shaped: indexed lookup
//! by single field, compound-key lookup, get-by-id, insert, partial update,
//! delete-by-id and indexed bulk delete. No cross-collection transaction
//! boundary is assumed by these ports.

use async_trait::async_trait;

use crate::entities::{Channel, Conversation, Member, Message, Reaction, Workspace};
use crate::error::DomainError;
use crate::value_objects::{ChannelId, JoinCode, UserId, WorkspaceId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Workspace Repository
// ============================================================================

#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// Find workspace by ID
    async fn find_by_id(&self, id: WorkspaceId) -> RepoResult<Option<Workspace>>;

    /// Create a new workspace
    async fn create(&self, workspace: &Workspace) -> RepoResult<()>;

    /// Overwrite the workspace name
    async fn rename(&self, id: WorkspaceId, name: &str) -> RepoResult<()>;

    /// Overwrite the join code; the previous code becomes invalid immediately
    async fn set_join_code(&self, id: WorkspaceId, code: &JoinCode) -> RepoResult<()>;

    /// Delete the workspace row. Dependents must already be gone; this row
    /// goes last so dependents never reference a vanished workspace.
    async fn delete(&self, id: WorkspaceId) -> RepoResult<()>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find the unique member row for a `(workspace, user)` pair
    async fn find(&self, workspace_id: WorkspaceId, user_id: &UserId)
        -> RepoResult<Option<Member>>;

    /// List all memberships held by a user
    async fn find_by_user(&self, user_id: &UserId) -> RepoResult<Vec<Member>>;

    /// List all members of a workspace
    async fn find_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<Vec<Member>>;

    /// Insert a member row. The store enforces `(workspace_id, user_id)`
    /// uniqueness and surfaces a duplicate as `AlreadyMember`.
    async fn create(&self, member: &Member) -> RepoResult<()>;

    /// Remove every member of a workspace, returning the count removed
    async fn delete_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<u64>;
}

// ============================================================================
// Channel Repository
// ============================================================================

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Find channel by ID
    async fn find_by_id(&self, id: ChannelId) -> RepoResult<Option<Channel>>;

    /// List all channels in a workspace
    async fn find_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<Vec<Channel>>;

    /// Create a new channel
    async fn create(&self, channel: &Channel) -> RepoResult<()>;

    /// Overwrite the channel name
    async fn rename(&self, id: ChannelId, name: &str) -> RepoResult<()>;

    /// Delete a channel by ID
    async fn delete(&self, id: ChannelId) -> RepoResult<()>;

    /// Remove every channel of a workspace, returning the count removed
    async fn delete_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<u64>;
}

// ============================================================================
// Conversation Repository
// ============================================================================

#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// List all conversations in a workspace
    async fn find_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<Vec<Conversation>>;

    /// Create a new conversation
    async fn create(&self, conversation: &Conversation) -> RepoResult<()>;

    /// Remove every conversation of a workspace, returning the count removed
    async fn delete_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<u64>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// List all messages in a workspace
    async fn find_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<Vec<Message>>;

    /// List all messages in a channel
    async fn find_by_channel(&self, channel_id: ChannelId) -> RepoResult<Vec<Message>>;

    /// Create a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Remove every message in a channel, returning the count removed
    async fn delete_by_channel(&self, channel_id: ChannelId) -> RepoResult<u64>;

    /// Remove every message of a workspace, returning the count removed
    async fn delete_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<u64>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// List all reactions in a workspace
    async fn find_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<Vec<Reaction>>;

    /// Create a new reaction
    async fn create(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Remove every reaction of a workspace, returning the count removed
    async fn delete_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<u64>;
}
