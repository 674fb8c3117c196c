//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub message_id: Uuid,
    pub member_id: Uuid,
    pub value: String,
    pub created_at: DateTime<Utc>,
}
