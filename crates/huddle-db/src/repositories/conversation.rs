//! PostgreSQL implementation of ConversationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use huddle_core::entities::Conversation;
use huddle_core::traits::{ConversationRepository, RepoResult};
use huddle_core::value_objects::WorkspaceId;

use crate::models::ConversationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ConversationRepository
#[derive(Clone)]
pub struct PgConversationRepository {
    pool: PgPool,
}

impl PgConversationRepository {
    /// Create a new PgConversationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationRepository for PgConversationRepository {
    #[instrument(skip(self))]
    async fn find_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<Vec<Conversation>> {
        let results = sqlx::query_as::<_, ConversationModel>(
            r"
            SELECT id, workspace_id, member_one_id, member_two_id, created_at
            FROM conversations
            WHERE workspace_id = $1
            ORDER BY created_at
            ",
        )
        .bind(workspace_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Conversation::from).collect())
    }

    #[instrument(skip(self, conversation))]
    async fn create(&self, conversation: &Conversation) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO conversations (id, workspace_id, member_one_id, member_two_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(conversation.id.into_inner())
        .bind(conversation.workspace_id.into_inner())
        .bind(conversation.member_one_id.into_inner())
        .bind(conversation.member_two_id.into_inner())
        .bind(conversation.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM conversations WHERE workspace_id = $1
            ",
        )
        .bind(workspace_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
