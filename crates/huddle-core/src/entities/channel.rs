//! Channel entity - a named conversation surface within a workspace

use chrono::{DateTime, Utc};

use crate::value_objects::{ChannelId, WorkspaceId};

/// Name of the channel created implicitly with every workspace
pub const DEFAULT_CHANNEL_NAME: &str = "general";

/// Channel entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: ChannelId,
    pub workspace_id: WorkspaceId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Channel {
    /// Create a new Channel
    pub fn new(id: ChannelId, workspace_id: WorkspaceId, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            workspace_id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// The implicit channel every fresh workspace gets
    pub fn general(id: ChannelId, workspace_id: WorkspaceId) -> Self {
        Self::new(id, workspace_id, DEFAULT_CHANNEL_NAME.to_string())
    }

    /// Update the channel name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Normalize a user-supplied channel name: lowercase, whitespace to dashes
    #[must_use]
    pub fn normalize_name(raw: &str) -> String {
        raw.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }
}
