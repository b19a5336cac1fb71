//! Macro-generated test suite for `DataService` contract validation.
//!
//! The `data_service_tests!` macro generates a test module that validates a
//! storage backend against the `DataService` contract for every resource:
//! id assignment, CRUD, ordering, timestamps and not-found behaviour.
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_and_get`: create then retrieve, verify all fields
//! - `test_get_nonexistent`: get with unknown id returns None
//! - `test_list_empty`: list on empty table returns empty vec
//! - `test_list_ordered_by_id`: list returns records in id order
//! - `test_update_existing`: replace fields, verify persisted
//! - `test_update_nonexistent`: update unknown id is NotFound
//! - `test_delete_existing`: delete then get returns None
//! - `test_delete_nonexistent`: delete unknown id is NotFound
//!
//! ## Identity and timestamps
//! - `test_ids_are_not_reused`: an id freed by delete is never handed out again
//! - `test_update_keeps_created_at`
//! - `test_exists`
//! - `test_missing_keeps_input_order`: batched lookup of absent ids
//!
//! ## Unique keys
//! - `test_unique_username_on_create`: a taken username is AlreadyExists
//! - `test_unique_username_on_update`: renaming onto a taken username fails,
//!   deleting frees the name
//!
//! ## Other resources
//! - `test_user_round_trip`
//! - `test_purchase_request_round_trip`
//! - `test_demand_medicine_list_round_trip`: order is preserved, empty lists survive
//!
//! ## Concurrency
//! - `test_concurrent_creates`: parallel creates get distinct ids

/// Generate a full `DataService` conformance test suite.
///
/// `$backend` must be an expression that evaluates to a `Backend`. It is
/// re-evaluated for each test to ensure isolation.
#[macro_export]
macro_rules! data_service_tests {
    ($backend:expr) => {
        mod data_service_contract_tests {
            use super::*;
            use pharmacy::core::{EntityError, PharmacyError};

            fn assert_not_found(err: PharmacyError) {
                assert!(
                    matches!(err, PharmacyError::Entity(EntityError::NotFound { .. })),
                    "Expected NotFound, got {:?}",
                    err
                );
            }

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get() {
                let backend = $backend;
                let service = backend.medicines.clone();

                let created = service
                    .create(medicine_fields("Aspirin", "Used to reduce pain and fever.", 9.99, 100))
                    .await
                    .unwrap();
                assert!(created.id > 0);
                assert_eq!(created.name, "Aspirin");
                assert_eq!(created.description, "Used to reduce pain and fever.");
                assert_price(created.price, 9.99);
                assert_eq!(created.count, 100);
                assert_eq!(created.created_at, created.updated_at);

                let retrieved = service.get(created.id).await.unwrap();
                assert!(retrieved.is_some(), "Record should exist after create");
                let retrieved = retrieved.unwrap();
                assert_eq!(retrieved.id, created.id);
                assert_eq!(retrieved.name, "Aspirin");
                assert_price(retrieved.price, 9.99);
                assert_eq!(retrieved.count, 100);
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let backend = $backend;
                let result = backend.medicines.get(99999).await.unwrap();
                assert!(result.is_none(), "Getting an unknown id should return None");
            }

            #[tokio::test]
            async fn test_list_empty() {
                let backend = $backend;
                assert_count(&backend.medicines.list().await.unwrap(), 0);
                assert_count(&backend.demands.list().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_list_ordered_by_id() {
                let backend = $backend;
                for fields in sample_medicines(5) {
                    backend.medicines.create(fields).await.unwrap();
                }

                let all = backend.medicines.list().await.unwrap();
                assert_count(&all, 5);
                assert!(all.windows(2).all(|w| w[0].id < w[1].id));
                assert_eq!(all[0].name, "Medicine_0");
                assert_eq!(all[4].name, "Medicine_4");
            }

            #[tokio::test]
            async fn test_update_existing() {
                let backend = $backend;
                let service = backend.medicines.clone();
                let created = service
                    .create(medicine_fields("Ibuprofen", "Used to reduce fever and treat pain", 20.0, 30))
                    .await
                    .unwrap();

                let updated = service
                    .update(
                        created.id,
                        medicine_fields("Ibuprofen", "Pain reliever and fever reducer", 25.0, 25),
                    )
                    .await
                    .unwrap();
                assert_eq!(updated.id, created.id);
                assert_eq!(updated.description, "Pain reliever and fever reducer");

                let reread = service.get(created.id).await.unwrap().unwrap();
                assert_eq!(reread.description, "Pain reliever and fever reducer");
                assert_price(reread.price, 25.0);
                assert_eq!(reread.count, 25);
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let backend = $backend;
                let err = backend
                    .medicines
                    .update(99999, medicine_fields("Ghost", "", 1.0, 1))
                    .await
                    .unwrap_err();
                assert_not_found(err);
            }

            #[tokio::test]
            async fn test_delete_existing() {
                let backend = $backend;
                let created = backend
                    .medicines
                    .create(medicine_fields("Paracetamol", "Pain reliever", 15.99, 50))
                    .await
                    .unwrap();

                backend.medicines.delete(created.id).await.unwrap();
                assert!(backend.medicines.get(created.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let backend = $backend;
                assert_not_found(backend.medicines.delete(99999).await.unwrap_err());
                assert_not_found(backend.demands.delete(99999).await.unwrap_err());
            }

            // ==================================================================
            // Identity and timestamps
            // ==================================================================

            #[tokio::test]
            async fn test_ids_are_not_reused() {
                let backend = $backend;
                let first = backend
                    .medicines
                    .create(medicine_fields("First", "", 1.0, 1))
                    .await
                    .unwrap();
                backend.medicines.delete(first.id).await.unwrap();

                let second = backend
                    .medicines
                    .create(medicine_fields("Second", "", 1.0, 1))
                    .await
                    .unwrap();
                assert!(second.id > first.id);
            }

            #[tokio::test]
            async fn test_update_keeps_created_at() {
                let backend = $backend;
                let created = backend
                    .medicines
                    .create(medicine_fields("Stable", "", 1.0, 1))
                    .await
                    .unwrap();

                let updated = backend
                    .medicines
                    .update(created.id, medicine_fields("Stable", "changed", 1.0, 1))
                    .await
                    .unwrap();
                assert_eq!(
                    updated.created_at.timestamp_micros(),
                    created.created_at.timestamp_micros()
                );
                assert!(updated.updated_at >= created.updated_at);
            }

            #[tokio::test]
            async fn test_exists() {
                let backend = $backend;
                let created = backend
                    .users
                    .create(user_fields("present"))
                    .await
                    .unwrap();
                assert!(backend.users.exists(created.id).await.unwrap());
                assert!(!backend.users.exists(created.id + 1000).await.unwrap());
            }

            #[tokio::test]
            async fn test_missing_keeps_input_order() {
                let backend = $backend;
                let kept = backend
                    .medicines
                    .create(medicine_fields("Aspirin", "", 9.99, 100))
                    .await
                    .unwrap();
                let gone = backend
                    .medicines
                    .create(medicine_fields("Zinc", "", 3.5, 7))
                    .await
                    .unwrap();
                backend.medicines.delete(gone.id).await.unwrap();

                let absent = kept.id + 1000;
                let missing = backend
                    .medicines
                    .missing(&[absent, kept.id, gone.id])
                    .await
                    .unwrap();
                assert_eq!(missing, vec![absent, gone.id]);
                assert!(backend.medicines.missing(&[]).await.unwrap().is_empty());
            }

            // ==================================================================
            // Unique keys
            // ==================================================================

            fn assert_already_exists(err: PharmacyError) {
                assert!(
                    matches!(err, PharmacyError::Entity(EntityError::AlreadyExists { .. })),
                    "Expected AlreadyExists, got {:?}",
                    err
                );
            }

            #[tokio::test]
            async fn test_unique_username_on_create() {
                let backend = $backend;
                backend.users.create(user_fields("alice")).await.unwrap();

                let err = backend.users.create(user_fields("alice")).await.unwrap_err();
                assert_already_exists(err);
                assert_count(&backend.users.list().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_unique_username_on_update() {
                let backend = $backend;
                let alice = backend.users.create(user_fields("alice")).await.unwrap();
                let bob = backend.users.create(user_fields("bob")).await.unwrap();

                backend.users.update(alice.id, user_fields("alice")).await.unwrap();
                let err = backend
                    .users
                    .update(bob.id, user_fields("alice"))
                    .await
                    .unwrap_err();
                assert_already_exists(err);
                assert_eq!(backend.users.fetch(bob.id).await.unwrap().username, "bob");

                backend.users.delete(alice.id).await.unwrap();
                backend.users.update(bob.id, user_fields("alice")).await.unwrap();
            }

            // ==================================================================
            // Other resources
            // ==================================================================

            #[tokio::test]
            async fn test_user_round_trip() {
                let backend = $backend;
                let created = backend.users.create(user_fields("testuser")).await.unwrap();
                let fetched = backend.users.fetch(created.id).await.unwrap();
                assert_eq!(fetched.username, "testuser");
            }

            #[tokio::test]
            async fn test_purchase_request_round_trip() {
                let backend = $backend;
                let created = backend
                    .purchase_requests
                    .create(purchase_request_fields(7, 11))
                    .await
                    .unwrap();

                let updated = backend
                    .purchase_requests
                    .update(created.id, purchase_request_fields(8, 12))
                    .await
                    .unwrap();
                assert_eq!(updated.user, 8);
                assert_eq!(updated.medicine_id, 12);
            }

            #[tokio::test]
            async fn test_demand_medicine_list_round_trip() {
                let backend = $backend;
                let empty = backend
                    .demands
                    .create(demand_fields(1, vec![]))
                    .await
                    .unwrap();
                let filled = backend
                    .demands
                    .create(demand_fields(1, vec![5, 2, 9]))
                    .await
                    .unwrap();

                let empty = backend.demands.fetch(empty.id).await.unwrap();
                assert!(empty.medicines.is_empty());
                let filled = backend.demands.fetch(filled.id).await.unwrap();
                assert_eq!(filled.medicines, vec![5, 2, 9]);
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_creates() {
                let backend = $backend;
                let mut handles = Vec::new();
                for fields in sample_medicines(10) {
                    let service = backend.medicines.clone();
                    handles.push(tokio::spawn(async move { service.create(fields).await }));
                }

                let mut ids = Vec::new();
                for handle in handles {
                    ids.push(handle.await.unwrap().unwrap().id);
                }
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), 10, "Every create should get a distinct id");
                assert_count(&backend.medicines.list().await.unwrap(), 10);
            }
        }
    };
}
