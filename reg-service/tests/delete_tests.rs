mod common;

use common::{FailingRemote, InMemoryRemote, registration, remote_user_fields, service_with};
use reg_service::{RemoteOutcome, ServiceError};
use reg_store::RemoteStoreError;

use std::sync::Arc;

use googletest::prelude::*;

#[tokio::test]
async fn given_registered_record_when_deleting_then_removed_from_local_store() {
    // Given: Two registered records
    let remote = Arc::new(InMemoryRemote::default());
    let (service, _, _) = service_with(remote).await;
    let first = service
        .register(registration("Maria Silva", "maria@example.com"))
        .await
        .unwrap()
        .record;
    service
        .register(registration("Joao Pedro", "joao@example.com"))
        .await
        .unwrap();

    // When: Deleting the first
    let outcome = service.delete(&first.id).await.unwrap();

    // Then: Only the second remains
    assert_that!(outcome.record.email, eq("maria@example.com"));
    let records = service.load_merged().await.unwrap();
    assert_that!(records, len(eq(1)));
    assert_that!(records[0].email, eq("joao@example.com"));
}

#[tokio::test]
async fn given_record_synced_remotely_when_deleting_then_remote_document_goes_too() {
    // Given: A local record whose id also exists remotely
    let remote = Arc::new(InMemoryRemote::default());
    let (service, _, _) = service_with(remote.clone()).await;
    let registered = service
        .register(registration("Maria Silva", "maria@example.com"))
        .await
        .unwrap()
        .record;
    remote.insert_with_id(
        &registered.id,
        remote_user_fields("Maria Silva", "maria@example.com"),
    );

    // When: Deleting
    let outcome = service.delete(&registered.id).await.unwrap();

    // Then: Gone on both sides
    assert_that!(outcome.remote.is_applied(), is_true());
    assert_that!(remote.contains(&registered.id), is_false());
    assert_that!(service.load_merged().await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_remote_only_record_when_deleting_then_succeeds_via_merged_view() {
    // Given: A record that exists only in the remote collection
    let remote = Arc::new(InMemoryRemote::default());
    let (service, _, _) = service_with(remote.clone()).await;
    remote.insert_with_id("abc123", remote_user_fields("Ana Costa", "ana@example.com"));

    // When: Deleting by its document id
    let outcome = service.delete("abc123").await.unwrap();

    // Then: The remote document is gone and the merged view is empty
    assert_that!(outcome.record.email, eq("ana@example.com"));
    assert_that!(remote.contains("abc123"), is_false());
    assert_that!(service.load_merged().await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_signed_in_session_when_deleting_own_record_then_refused_and_local_untouched() {
    // Given: A registered, signed-in user
    let remote = Arc::new(InMemoryRemote::default());
    let (service, slots, _) = service_with(remote).await;
    let registered = service
        .register(registration("Maria Silva", "maria@example.com"))
        .await
        .unwrap()
        .record;
    service.login("maria@example.com", "secret1").await.unwrap();
    let before = slots.get(common::SLOT).await.unwrap();

    // When: Deleting the record behind the session
    let error = service.delete(&registered.id).await.unwrap_err();

    // Then: Refused, raw slot byte-for-byte unchanged
    assert_that!(
        error,
        matches_pattern!(ServiceError::SelfDeleteForbidden {
            email: eq("maria@example.com"),
            ..
        })
    );
    assert_that!(slots.get(common::SLOT).await.unwrap(), eq(&before));
}

#[tokio::test]
async fn given_self_delete_refusal_when_record_was_synced_then_remote_attempt_already_happened() {
    // The remote delete fires before the self guard, as this flow
    // always has; the refusal protects the local store only.
    let remote = Arc::new(InMemoryRemote::default());
    let (service, _, _) = service_with(remote.clone()).await;
    let registered = service
        .register(registration("Maria Silva", "maria@example.com"))
        .await
        .unwrap()
        .record;
    remote.insert_with_id(
        &registered.id,
        remote_user_fields("Maria Silva", "maria@example.com"),
    );
    service.login("maria@example.com", "secret1").await.unwrap();

    let error = service.delete(&registered.id).await.unwrap_err();

    assert_that!(error, matches_pattern!(ServiceError::SelfDeleteForbidden { .. }));
    assert_that!(remote.contains(&registered.id), is_false());
    assert_that!(service.load_merged().await.unwrap(), len(eq(1)));
}

#[tokio::test]
async fn given_other_signed_in_user_when_deleting_then_allowed() {
    // Given: Two users, one signed in
    let remote = Arc::new(InMemoryRemote::default());
    let (service, _, _) = service_with(remote).await;
    service
        .register(registration("Maria Silva", "maria@example.com"))
        .await
        .unwrap();
    let other = service
        .register(registration("Joao Pedro", "joao@example.com"))
        .await
        .unwrap()
        .record;
    service.login("maria@example.com", "secret1").await.unwrap();

    // When: Deleting the other user's record
    service.delete(&other.id).await.unwrap();

    // Then: It is gone
    let records = service.load_merged().await.unwrap();
    assert_that!(records, len(eq(1)));
    assert_that!(records[0].email, eq("maria@example.com"));
}

#[tokio::test]
async fn given_remote_delete_failure_when_deleting_then_local_delete_stands_with_warning() {
    // Given: A registered record behind a failing remote
    let (service, slots, session) = service_with(Arc::new(InMemoryRemote::default())).await;
    let registered = service
        .register(registration("Maria Silva", "maria@example.com"))
        .await
        .unwrap()
        .record;
    let local = reg_store::LocalRecordStore::new(slots, common::SLOT);
    let service = reg_service::RecordService::new(
        local,
        Arc::new(FailingRemote),
        Arc::new(FailingRemote),
        session,
    );

    // When: Deleting
    let outcome = service.delete(&registered.id).await.unwrap();

    // Then: Local removal succeeded; the remote failure is a warning
    assert_that!(
        outcome.remote_warning(),
        some(matches_pattern!(RemoteStoreError::Network { .. }))
    );
    assert_that!(service.load_merged().await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_unknown_id_when_deleting_then_not_found() {
    let remote = Arc::new(InMemoryRemote::default());
    let (service, _, _) = service_with(remote.clone()).await;

    let error = service.delete("missing").await.unwrap_err();

    assert_that!(error, matches_pattern!(ServiceError::NotFound { id: eq("missing"), .. }));
    // Nothing was attempted against the remote collection
    assert_that!(remote.len(), eq(0));
}

#[tokio::test]
async fn given_idempotent_remote_when_deleting_unsynced_record_then_outcome_is_applied() {
    // A record that never reached the remote store still deletes
    // cleanly; the remote delete of a missing document is a no-op.
    let remote = Arc::new(InMemoryRemote::default());
    let (service, _, _) = service_with(remote).await;
    let registered = service
        .register(registration("Maria Silva", "maria@example.com"))
        .await
        .unwrap()
        .record;

    let outcome = service.delete(&registered.id).await.unwrap();

    assert_that!(outcome.remote, matches_pattern!(RemoteOutcome::Applied));
}
