//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use huddle_core::entities::Message;
use huddle_core::traits::{MessageRepository, RepoResult};
use huddle_core::value_objects::{ChannelId, WorkspaceId};

use crate::models::MessageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<Vec<Message>> {
        let results = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, workspace_id, member_id, channel_id, conversation_id, parent_id,
                   body, created_at, updated_at
            FROM messages
            WHERE workspace_id = $1
            ORDER BY created_at
            ",
        )
        .bind(workspace_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_channel(&self, channel_id: ChannelId) -> RepoResult<Vec<Message>> {
        let results = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, workspace_id, member_id, channel_id, conversation_id, parent_id,
                   body, created_at, updated_at
            FROM messages
            WHERE channel_id = $1
            ORDER BY created_at
            ",
        )
        .bind(channel_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self, message))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO messages (id, workspace_id, member_id, channel_id, conversation_id,
                                  parent_id, body, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(message.id.into_inner())
        .bind(message.workspace_id.into_inner())
        .bind(message.member_id.into_inner())
        .bind(message.channel_id.map(huddle_core::ChannelId::into_inner))
        .bind(
            message
                .conversation_id
                .map(huddle_core::ConversationId::into_inner),
        )
        .bind(message.parent_id.map(huddle_core::MessageId::into_inner))
        .bind(&message.body)
        .bind(message.created_at)
        .bind(message.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_channel(&self, channel_id: ChannelId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM messages WHERE channel_id = $1
            ",
        )
        .bind(channel_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM messages WHERE workspace_id = $1
            ",
        )
        .bind(workspace_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
