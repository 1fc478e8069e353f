//! Workflow tests for the claimant service
//!
//! These tests drive the service through mock ports: a Vec-backed store
//! and a scripted verifier that records how often it was called, so the
//! conditional verification gate can be asserted precisely.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;
use uuid::Uuid;

use domain_claimant::{
    Claimant, ClaimantError, ClaimantQuery, ClaimantService, ClaimantStore, ClaimantUpdate,
    CreateClaimant, LicenceVerifier, NewClaimant, StoreError, VerificationOutcome,
    VerificationRequest,
};

/// Vec-backed store preserving insertion order.
#[derive(Default)]
struct MockStore {
    records: Mutex<Vec<Claimant>>,
}

impl MockStore {
    async fn len(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[async_trait]
impl ClaimantStore for MockStore {
    async fn find_all(&self) -> Result<Vec<Claimant>, StoreError> {
        Ok(self.records.lock().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Claimant, StoreError> {
        self.records
            .lock()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn find_one(&self, query: ClaimantQuery) -> Result<Claimant, StoreError> {
        self.records
            .lock()
            .await
            .iter()
            .find(|c| match &query {
                ClaimantQuery::RefNo(v) => &c.ref_no == v,
                ClaimantQuery::Nino(v) => c.nino.as_ref() == Some(v),
            })
            .cloned()
            .ok_or_else(|| StoreError::not_found(query.value()))
    }

    async fn create(&self, claimant: NewClaimant) -> Result<Claimant, StoreError> {
        let created = claimant.into_claimant(Uuid::new_v4());
        self.records.lock().await.push(created.clone());
        Ok(created)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        update: ClaimantUpdate,
    ) -> Result<Claimant, StoreError> {
        let mut records = self.records.lock().await;
        let claimant = records
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        update.apply_to(claimant);
        Ok(claimant.clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Claimant, StoreError> {
        let mut records = self.records.lock().await;
        let position = records
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        Ok(records.remove(position))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Verifier returning a fixed outcome and counting invocations.
struct ScriptedVerifier {
    outcome: VerificationOutcome,
    calls: AtomicUsize,
}

impl ScriptedVerifier {
    fn new(outcome: VerificationOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    fn valid() -> Self {
        Self::new(VerificationOutcome::Valid {
            message: "Driving Licence is valid".to_string(),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LicenceVerifier for ScriptedVerifier {
    async fn validate(&self, _request: &VerificationRequest) -> VerificationOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

fn service_with(
    verifier: Arc<ScriptedVerifier>,
) -> (ClaimantService, Arc<MockStore>, Arc<ScriptedVerifier>) {
    let store = Arc::new(MockStore::default());
    let service = ClaimantService::new(store.clone(), verifier.clone());
    (service, store, verifier)
}

fn create_request() -> CreateClaimant {
    CreateClaimant {
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        street: Some("Test Street".to_string()),
        city: Some("Manchester".to_string()),
        post_code: Some("M3 4RF".to_string()),
        ref_no: Some("AS234567H".to_string()),
        driving_licence_no: None,
        nino: None,
        dob: Some("2011-10-31".to_string()),
    }
}

fn create_request_with_licence() -> CreateClaimant {
    CreateClaimant {
        driving_licence_no: Some("JONES123456AB7CD8".to_string()),
        ..create_request()
    }
}

#[tokio::test]
async fn create_without_licence_skips_verification() {
    let (service, store, verifier) = service_with(Arc::new(ScriptedVerifier::valid()));

    let created = service.create(create_request()).await.unwrap();
    assert_eq!(created.first_name, "John");
    assert_eq!(verifier.call_count(), 0);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn create_with_empty_licence_string_skips_verification() {
    let (service, _store, verifier) = service_with(Arc::new(ScriptedVerifier::valid()));

    let mut input = create_request();
    input.driving_licence_no = Some(String::new());
    service.create(input).await.unwrap();
    assert_eq!(verifier.call_count(), 0);
}

#[tokio::test]
async fn create_with_valid_licence_verifies_then_persists() {
    let (service, store, verifier) = service_with(Arc::new(ScriptedVerifier::valid()));

    let created = service.create(create_request_with_licence()).await.unwrap();
    assert_eq!(verifier.call_count(), 1);
    assert_eq!(
        created.driving_licence_no.as_deref(),
        Some("JONES123456AB7CD8")
    );
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn create_with_rejected_licence_fails_without_persisting() {
    let rejection = json!({
        "httpStatus": 400,
        "status": 1,
        "message": "Driving Licence is invalid",
        "reason": "Driver details do not match licence number",
    });
    let (service, store, _verifier) = service_with(Arc::new(ScriptedVerifier::new(
        VerificationOutcome::Invalid {
            http_status: 400,
            body: rejection.clone(),
        },
    )));

    let err = service
        .create(create_request_with_licence())
        .await
        .unwrap_err();
    match err {
        ClaimantError::LicenceRejected { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body["reason"], "Driver details do not match licence number");
        }
        other => panic!("expected LicenceRejected, got {other:?}"),
    }
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn create_with_unreachable_verifier_defaults_to_503() {
    let (service, store, _verifier) = service_with(Arc::new(ScriptedVerifier::new(
        VerificationOutcome::ServiceFailure {
            http_status: None,
            body: json!({"name": "RequestError", "message": "ETIMEDOUT"}),
        },
    )));

    let err = service
        .create(create_request_with_licence())
        .await
        .unwrap_err();
    match err {
        ClaimantError::VerificationUnavailable { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body["message"], "ETIMEDOUT");
        }
        other => panic!("expected VerificationUnavailable, got {other:?}"),
    }
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn create_with_invalid_payload_never_touches_store_or_verifier() {
    let (service, store, verifier) = service_with(Arc::new(ScriptedVerifier::valid()));

    let mut input = create_request_with_licence();
    input.ref_no = Some("ASDF".to_string());
    let err = service.create(input).await.unwrap_err();
    assert!(matches!(err, ClaimantError::Validation(_)));
    assert_eq!(verifier.call_count(), 0);
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn round_trip_by_id_and_ref_no() {
    let (service, _store, _verifier) = service_with(Arc::new(ScriptedVerifier::valid()));

    let created = service.create(create_request()).await.unwrap();

    let by_id = service.get(&created.id.to_string()).await.unwrap();
    let by_ref = service.get_by_ref_no("AS234567H").await.unwrap();
    assert_eq!(by_id, created);
    assert_eq!(by_ref, created);
}

#[tokio::test]
async fn lookup_by_nino() {
    let (service, _store, _verifier) = service_with(Arc::new(ScriptedVerifier::valid()));

    let mut input = create_request();
    input.nino = Some("QQ123456C".to_string());
    let created = service.create(input).await.unwrap();

    let found = service.get_by_nino("QQ123456C").await.unwrap();
    assert_eq!(found, created);

    let err = service.get_by_nino("ZZ999999Z").await.unwrap_err();
    match err {
        ClaimantError::NotFound(message) => assert!(message.contains("ZZ999999Z")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn get_with_malformed_id_is_not_found() {
    let (service, _store, _verifier) = service_with(Arc::new(ScriptedVerifier::valid()));

    let err = service.get("not-a-uuid").await.unwrap_err();
    match err {
        ClaimantError::NotFound(message) => assert!(message.contains("not-a-uuid")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn update_merges_allowed_fields() {
    let (service, _store, _verifier) = service_with(Arc::new(ScriptedVerifier::valid()));

    let created = service.create(create_request()).await.unwrap();
    let updated = service
        .update(
            &created.id.to_string(),
            &json!({"city": "Leeds", "postCode": "LS1 4AP"}),
        )
        .await
        .unwrap();

    assert_eq!(updated.city, "Leeds");
    assert_eq!(updated.post_code, "LS1 4AP");
    assert_eq!(updated.first_name, "John");
    assert_eq!(updated.ref_no, "AS234567H");
}

#[tokio::test]
async fn update_with_ref_no_is_rejected_before_the_store() {
    let (service, store, _verifier) = service_with(Arc::new(ScriptedVerifier::valid()));

    let created = service.create(create_request()).await.unwrap();
    let err = service
        .update(
            &created.id.to_string(),
            &json!({"firstName": "Jane", "refNo": "ZX987654"}),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ClaimantError::Validation(_)));

    // record untouched
    let records = store.find_all().await.unwrap();
    assert_eq!(records[0].first_name, "John");
}

#[tokio::test]
async fn update_and_delete_missing_id_name_the_id() {
    let (service, _store, _verifier) = service_with(Arc::new(ScriptedVerifier::valid()));
    let missing = Uuid::new_v4().to_string();

    let err = service
        .update(&missing, &json!({"city": "Leeds"}))
        .await
        .unwrap_err();
    match err {
        ClaimantError::NotFound(message) => assert!(message.contains(&missing)),
        other => panic!("expected NotFound, got {other:?}"),
    }

    let err = service.delete(&missing).await.unwrap_err();
    match err {
        ClaimantError::NotFound(message) => assert!(message.contains(&missing)),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_returns_the_removed_record() {
    let (service, store, _verifier) = service_with(Arc::new(ScriptedVerifier::valid()));

    let created = service.create(create_request()).await.unwrap();
    let deleted = service.delete(&created.id.to_string()).await.unwrap();
    assert_eq!(deleted, created);
    assert_eq!(store.len().await, 0);

    // terminal: a second delete misses
    let err = service.delete(&created.id.to_string()).await.unwrap_err();
    assert!(matches!(err, ClaimantError::NotFound(_)));
}

#[tokio::test]
async fn list_returns_records_in_insertion_order() {
    let (service, _store, _verifier) = service_with(Arc::new(ScriptedVerifier::valid()));

    service.create(create_request()).await.unwrap();
    let mut second = create_request();
    second.first_name = Some("Jane".to_string());
    second.ref_no = Some("ZX111111".to_string());
    service.create(second).await.unwrap();

    let all = service.list().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].first_name, "John");
    assert_eq!(all[1].first_name, "Jane");
}
