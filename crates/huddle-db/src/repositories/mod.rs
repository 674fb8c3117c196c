//! Repository implementations
//!
//! PostgreSQL implementations of the repository ports defined in huddle-core.
//! Each repository handles database operations for a specific collection.

mod channel;
mod conversation;
mod error;
mod member;
mod message;
mod reaction;
mod workspace;

pub use channel::PgChannelRepository;
pub use conversation::PgConversationRepository;
pub use member::PgMemberRepository;
pub use message::PgMessageRepository;
pub use reaction::PgReactionRepository;
pub use workspace::PgWorkspaceRepository;
