//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use huddle_core::entities::Member;
use huddle_core::error::DomainError;
use huddle_core::traits::{MemberRepository, RepoResult};
use huddle_core::value_objects::{UserId, WorkspaceId};

use crate::mappers::member_from_model;
use crate::models::MemberModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        workspace_id: WorkspaceId,
        user_id: &UserId,
    ) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, workspace_id, user_id, role, joined_at, updated_at
            FROM members
            WHERE workspace_id = $1 AND user_id = $2
            ",
        )
        .bind(workspace_id.into_inner())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(member_from_model).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: &UserId) -> RepoResult<Vec<Member>> {
        let results = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, workspace_id, user_id, role, joined_at, updated_at
            FROM members
            WHERE user_id = $1
            ORDER BY joined_at DESC
            ",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(member_from_model).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<Vec<Member>> {
        let results = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, workspace_id, user_id, role, joined_at, updated_at
            FROM members
            WHERE workspace_id = $1
            ORDER BY joined_at
            ",
        )
        .bind(workspace_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(member_from_model).collect()
    }

    #[instrument(skip(self, member))]
    async fn create(&self, member: &Member) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO members (id, workspace_id, user_id, role, joined_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(member.id.into_inner())
        .bind(member.workspace_id.into_inner())
        .bind(member.user_id.as_str())
        .bind(member.role.as_str())
        .bind(member.joined_at)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyMember))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_workspace(&self, workspace_id: WorkspaceId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM members WHERE workspace_id = $1
            ",
        )
        .bind(workspace_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
