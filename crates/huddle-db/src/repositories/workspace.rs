//! PostgreSQL implementation of WorkspaceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use huddle_core::entities::Workspace;
use huddle_core::traits::{RepoResult, WorkspaceRepository};
use huddle_core::value_objects::{JoinCode, WorkspaceId};

use crate::models::WorkspaceModel;

use super::error::{map_db_error, workspace_not_found};

/// PostgreSQL implementation of WorkspaceRepository
#[derive(Clone)]
pub struct PgWorkspaceRepository {
    pool: PgPool,
}

impl PgWorkspaceRepository {
    /// Create a new PgWorkspaceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkspaceRepository for PgWorkspaceRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: WorkspaceId) -> RepoResult<Option<Workspace>> {
        let result = sqlx::query_as::<_, WorkspaceModel>(
            r"
            SELECT id, name, owner_user_id, join_code, created_at, updated_at
            FROM workspaces
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Workspace::from))
    }

    #[instrument(skip(self, workspace))]
    async fn create(&self, workspace: &Workspace) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO workspaces (id, name, owner_user_id, join_code, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(workspace.id.into_inner())
        .bind(&workspace.name)
        .bind(workspace.owner_id.as_str())
        .bind(workspace.join_code.as_str())
        .bind(workspace.created_at)
        .bind(workspace.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn rename(&self, id: WorkspaceId, name: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE workspaces
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(workspace_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, code))]
    async fn set_join_code(&self, id: WorkspaceId, code: &JoinCode) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE workspaces
            SET join_code = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(code.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(workspace_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: WorkspaceId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM workspaces WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(workspace_not_found(id));
        }

        Ok(())
    }
}
