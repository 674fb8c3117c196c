//! Response DTOs for service operations

use serde::Serialize;

/// What a prospective member may see before joining: the workspace name and
/// whether the caller already belongs. Nothing else leaks to non-members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspacePreview {
    pub name: String,
    pub is_member: bool,
}
