//! Request DTOs for service operations
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Workspace Requests
// ============================================================================

/// Create workspace request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkspaceRequest {
    #[validate(length(min = 3, max = 80, message = "Workspace name must be 3-80 characters"))]
    pub name: String,
}

/// Rename workspace request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RenameWorkspaceRequest {
    #[validate(length(min = 3, max = 80, message = "Workspace name must be 3-80 characters"))]
    pub name: String,
}

// ============================================================================
// Channel Requests
// ============================================================================

/// Create channel request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateChannelRequest {
    #[validate(length(min = 1, max = 80, message = "Channel name must be 1-80 characters"))]
    pub name: String,
}

/// Rename channel request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RenameChannelRequest {
    #[validate(length(min = 1, max = 80, message = "Channel name must be 1-80 characters"))]
    pub name: String,
}
