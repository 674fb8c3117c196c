//! Test fixtures and data generators
//!
//! Provides a ready-to-use service context over the in-memory store plus
//! helpers for unique test data and seeded workspace content.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use huddle_core::entities::{Conversation, Message, Reaction};
use huddle_core::value_objects::{
    ConversationId, MemberId, MessageId, ReactionId, UserId, WorkspaceId,
};
use huddle_core::Caller;
use huddle_service::{ServiceContext, ServiceContextBuilder};

use crate::memory::MemStore;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Generate a unique workspace name
pub fn unique_workspace_name() -> String {
    format!("Workspace {}", unique_suffix())
}

/// An authenticated caller with the given provider id
pub fn caller(user_id: &str) -> Caller {
    Caller::User(UserId::new(user_id))
}

/// A caller the identity provider could not resolve
pub fn anonymous() -> Caller {
    Caller::Anonymous
}

/// Service context wired to a shared in-memory store
pub struct TestBackend {
    pub store: Arc<MemStore>,
    pub ctx: ServiceContext,
}

impl TestBackend {
    pub fn new() -> Self {
        let store = MemStore::shared();
        let ctx = ServiceContextBuilder::new()
            .workspace_repo(store.clone())
            .member_repo(store.clone())
            .channel_repo(store.clone())
            .conversation_repo(store.clone())
            .message_repo(store.clone())
            .reaction_repo(store.clone())
            .build()
            .expect("all repositories provided");

        Self { store, ctx }
    }
}

impl Default for TestBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed a workspace with one conversation, one channel message, and one
/// reaction, so cascading deletion has something in every collection.
pub async fn seed_content(
    ctx: &ServiceContext,
    workspace_id: WorkspaceId,
    member_one: MemberId,
    member_two: MemberId,
) {
    let channels = ctx
        .channel_repo()
        .find_by_workspace(workspace_id)
        .await
        .expect("channels query");
    let channel = channels.first().expect("seeded workspace has a channel");

    let message = Message::in_channel(
        MessageId::generate(),
        workspace_id,
        channel.id,
        member_one,
        "hello there".to_string(),
    );
    ctx.message_repo().create(&message).await.expect("message insert");

    let conversation = Conversation::new(
        ConversationId::generate(),
        workspace_id,
        member_one,
        member_two,
    );
    ctx.conversation_repo()
        .create(&conversation)
        .await
        .expect("conversation insert");

    let reaction = Reaction::new(
        ReactionId::generate(),
        workspace_id,
        message.id,
        member_two,
        "👍".to_string(),
    );
    ctx.reaction_repo().create(&reaction).await.expect("reaction insert");
}
