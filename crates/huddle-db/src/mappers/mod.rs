//! Model -> entity mappers

mod channel;
mod conversation;
mod member;
mod message;
mod reaction;
mod workspace;

pub use member::member_from_model;
