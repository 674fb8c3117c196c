//! Error handling utilities for repositories

use huddle_core::error::DomainError;
use huddle_core::value_objects::{ChannelId, WorkspaceId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Store(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::Store(e.to_string())
}

/// Create a "workspace not found" error
pub fn workspace_not_found(id: WorkspaceId) -> DomainError {
    DomainError::WorkspaceNotFound(id)
}

/// Create a "channel not found" error
pub fn channel_not_found(id: ChannelId) -> DomainError {
    DomainError::ChannelNotFound(id)
}
