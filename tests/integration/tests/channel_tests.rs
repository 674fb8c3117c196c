//! Channel management integration tests
//!
//! Run with: cargo test -p integration-tests --test channel_tests

use huddle_core::entities::Message;
use huddle_core::{ChannelId, DomainError, MessageId};
use huddle_service::dto::{CreateChannelRequest, CreateWorkspaceRequest, RenameChannelRequest};
use huddle_service::{ChannelService, WorkspaceService};
use integration_tests::{anonymous, caller, unique_workspace_name, TestBackend};

async fn workspace_with_member(
    backend: &TestBackend,
) -> (huddle_core::WorkspaceId, huddle_core::Caller, huddle_core::Caller) {
    let workspaces = WorkspaceService::new(&backend.ctx);
    let alice = caller("alice");
    let bob = caller("bob");

    let workspace_id = workspaces
        .create(
            &alice,
            CreateWorkspaceRequest {
                name: unique_workspace_name(),
            },
        )
        .await
        .unwrap();

    let code = workspaces
        .get_full(&alice, workspace_id)
        .await
        .unwrap()
        .unwrap()
        .join_code
        .as_str()
        .to_string();
    workspaces.join(&bob, workspace_id, &code).await.unwrap();

    (workspace_id, alice, bob)
}

#[tokio::test]
async fn test_create_normalizes_name() {
    let backend = TestBackend::new();
    let (workspace_id, alice, _) = workspace_with_member(&backend).await;
    let service = ChannelService::new(&backend.ctx);

    let channel_id = service
        .create(
            &alice,
            workspace_id,
            CreateChannelRequest {
                name: "Team Updates".to_string(),
            },
        )
        .await
        .unwrap();

    let channel = backend
        .ctx
        .channel_repo()
        .find_by_id(channel_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(channel.name, "team-updates");
}

#[tokio::test]
async fn test_create_is_admin_gated() {
    let backend = TestBackend::new();
    let (workspace_id, _, bob) = workspace_with_member(&backend).await;
    let service = ChannelService::new(&backend.ctx);

    let result = service
        .create(
            &bob,
            workspace_id,
            CreateChannelRequest {
                name: "sneaky".to_string(),
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::Unauthorized)));

    let result = service
        .create(
            &anonymous(),
            workspace_id,
            CreateChannelRequest {
                name: "ghost".to_string(),
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::Unauthenticated)));
}

#[tokio::test]
async fn test_list_decays_for_non_members() {
    let backend = TestBackend::new();
    let (workspace_id, alice, bob) = workspace_with_member(&backend).await;
    let service = ChannelService::new(&backend.ctx);

    service
        .create(
            &alice,
            workspace_id,
            CreateChannelRequest {
                name: "random".to_string(),
            },
        )
        .await
        .unwrap();

    // Members see general plus the new channel
    let listed = service.list(&bob, workspace_id).await.unwrap();
    assert_eq!(listed.len(), 2);

    // A non-member gets an empty list, not an error
    let listed = service.list(&caller("mallory"), workspace_id).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_rename_unknown_channel() {
    let backend = TestBackend::new();
    let (_, alice, _) = workspace_with_member(&backend).await;
    let service = ChannelService::new(&backend.ctx);

    let missing = ChannelId::generate();
    let result = service
        .rename(
            &alice,
            missing,
            RenameChannelRequest {
                name: "whatever".to_string(),
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::ChannelNotFound(id)) if id == missing));
}

#[tokio::test]
async fn test_delete_removes_channel_messages() {
    let backend = TestBackend::new();
    let (workspace_id, alice, _) = workspace_with_member(&backend).await;
    let service = ChannelService::new(&backend.ctx);

    let channels = backend
        .ctx
        .channel_repo()
        .find_by_workspace(workspace_id)
        .await
        .unwrap();
    let general = channels[0].clone();

    let keeper = service
        .create(
            &alice,
            workspace_id,
            CreateChannelRequest {
                name: "keeper".to_string(),
            },
        )
        .await
        .unwrap();

    let members = backend
        .ctx
        .member_repo()
        .find_by_workspace(workspace_id)
        .await
        .unwrap();

    for (channel, body) in [(general.id, "doomed"), (keeper, "survives")] {
        let message = Message::in_channel(
            MessageId::generate(),
            workspace_id,
            channel,
            members[0].id,
            body.to_string(),
        );
        backend.ctx.message_repo().create(&message).await.unwrap();
    }

    service.delete(&alice, general.id).await.unwrap();

    assert!(backend
        .ctx
        .channel_repo()
        .find_by_id(general.id)
        .await
        .unwrap()
        .is_none());
    assert!(backend
        .ctx
        .message_repo()
        .find_by_channel(general.id)
        .await
        .unwrap()
        .is_empty());

    let remaining = backend
        .ctx
        .message_repo()
        .find_by_channel(keeper)
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].body, "survives");
}
