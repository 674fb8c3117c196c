//! Conversation database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the conversations table
#[derive(Debug, Clone, FromRow)]
pub struct ConversationModel {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub member_one_id: Uuid,
    pub member_two_id: Uuid,
    pub created_at: DateTime<Utc>,
}
