//! Domain errors - error types for the domain layer
//!
//! Every failure here is terminal from the caller's point of view; none of
//! these conditions are transient, so no operation retries internally.

use thiserror::Error;

use crate::value_objects::{ChannelId, WorkspaceId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Authentication / Authorization
    // =========================================================================
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Not authorized for this workspace")]
    Unauthorized,

    // =========================================================================
    // Not Found
    // =========================================================================
    #[error("Workspace not found: {0}")]
    WorkspaceNotFound(WorkspaceId),

    #[error("Channel not found: {0}")]
    ChannelNotFound(ChannelId),

    // =========================================================================
    // Join Conflicts
    // =========================================================================
    #[error("Invalid join code")]
    InvalidJoinCode,

    #[error("Already a member of this workspace")]
    AlreadyMember,

    // =========================================================================
    // Validation
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    // =========================================================================
    // Infrastructure (wrapped)
    // =========================================================================
    #[error("Store error: {0}")]
    Store(String),
}

impl DomainError {
    /// Get an error code string for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::WorkspaceNotFound(_) => "UNKNOWN_WORKSPACE",
            Self::ChannelNotFound(_) => "UNKNOWN_CHANNEL",
            Self::InvalidJoinCode => "INVALID_JOIN_CODE",
            Self::AlreadyMember => "ALREADY_MEMBER",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Store(_) => "STORE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::WorkspaceNotFound(_) | Self::ChannelNotFound(_))
    }

    /// Check if this is an authentication error (no identity at all)
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// Check if this is an authorization error (identity without the role)
    #[must_use]
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Check if this is a conflict error
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyMember)
    }

    /// Check if this is a validation error (includes join-code mismatch)
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidJoinCode)
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
