//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! authorization, validation, and orchestration of domain operations.

pub mod channel;
pub mod context;
pub mod membership;
pub mod workspace;

// Re-export all services for convenience
pub use channel::ChannelService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use membership::MembershipService;
pub use workspace::WorkspaceService;

/// Result type for service operations
///
/// Services speak the domain error taxonomy directly; the transport boundary
/// maps it onward via `huddle-common::AppError`.
pub type ServiceResult<T> = Result<T, huddle_core::DomainError>;
