//! Caller identity
//!
//! The external identity provider resolves each request to an opaque user id,
//! or to nothing. That result is threaded explicitly through every operation
//! as a `Caller` - there is no ambient "current user" state.

use crate::error::DomainError;
use crate::value_objects::UserId;

/// Resolved identity of the caller for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    /// No resolvable identity
    Anonymous,
    /// Identity resolved by the provider
    User(UserId),
}

impl Caller {
    /// Build a caller from the provider's optional identifier
    #[must_use]
    pub fn from_provider(user_id: Option<UserId>) -> Self {
        match user_id {
            Some(id) => Self::User(id),
            None => Self::Anonymous,
        }
    }

    /// The caller's user id, or `Unauthenticated`
    pub fn user_id(&self) -> Result<&UserId, DomainError> {
        match self {
            Self::User(id) => Ok(id),
            Self::Anonymous => Err(DomainError::Unauthenticated),
        }
    }

    /// The caller's user id if authenticated
    #[must_use]
    pub fn user_id_opt(&self) -> Option<&UserId> {
        match self {
            Self::User(id) => Some(id),
            Self::Anonymous => None,
        }
    }

    /// Whether no identity was resolved
    #[inline]
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}
