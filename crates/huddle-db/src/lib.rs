//! # huddle-db
//!
//! Entity-store layer implementing the repository traits with PostgreSQL via
//! SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository ports
//! defined in `huddle-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - Repository implementations
//! - Schema migrations (including the `(workspace_id, user_id)` unique index
//!   that closes the membership check-then-insert race)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use huddle_db::pool::{create_pool, DatabaseConfig};
//! use huddle_db::repositories::PgWorkspaceRepository;
//! use huddle_core::traits::WorkspaceRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     huddle_db::run_migrations(&pool).await?;
//!     let workspace_repo = PgWorkspaceRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgChannelRepository, PgConversationRepository, PgMemberRepository, PgMessageRepository,
    PgReactionRepository, PgWorkspaceRepository,
};

/// Apply pending schema migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
