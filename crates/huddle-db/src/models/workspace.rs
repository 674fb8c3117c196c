//! Workspace database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the workspaces table
#[derive(Debug, Clone, FromRow)]
pub struct WorkspaceModel {
    pub id: Uuid,
    pub name: String,
    pub owner_user_id: String,
    pub join_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
