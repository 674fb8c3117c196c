//! Data transfer objects for the service layer

mod requests;
mod responses;

pub use requests::{
    CreateChannelRequest, CreateWorkspaceRequest, RenameChannelRequest, RenameWorkspaceRequest,
};
pub use responses::WorkspacePreview;
