//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ChannelRepository, ConversationRepository, MemberRepository, MessageRepository,
    ReactionRepository, RepoResult, WorkspaceRepository,
};
