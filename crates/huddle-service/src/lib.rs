//! # huddle-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    ChannelService, MembershipService, ServiceContext, ServiceContextBuilder, ServiceResult,
    WorkspaceService,
};
