use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::applicants::domain::{Applicant, ApplicantId, ApplicantSubmission, NewApplicant};
use crate::applicants::store::{ApplicantStore, StoreError};
use crate::applicants::{applicant_router, IntakeService};

pub(super) fn submission() -> ApplicantSubmission {
    ApplicantSubmission {
        email: Some("john.doe@example.com".to_string()),
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        comment: None,
    }
}

pub(super) fn submission_with_comment(comment: &str) -> ApplicantSubmission {
    ApplicantSubmission {
        comment: Some(comment.to_string()),
        ..submission()
    }
}

pub(super) fn build_service() -> (IntakeService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = IntakeService::new(store.clone());
    (service, store)
}

pub(super) fn intake_router_with_service(service: IntakeService<MemoryStore>) -> axum::Router {
    applicant_router(Arc::new(service))
}

#[derive(Default)]
pub(super) struct MemoryStore {
    records: Mutex<HashMap<ApplicantId, Applicant>>,
    sequence: AtomicU64,
}

impl MemoryStore {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("store mutex poisoned").len()
    }
}

impl ApplicantStore for MemoryStore {
    fn create(&self, applicant: NewApplicant) -> Result<Applicant, StoreError> {
        let NewApplicant {
            email,
            first_name,
            last_name,
            comment,
        } = applicant;

        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let record = Applicant {
            id: ApplicantId(format!("applicant-{sequence:06}")),
            email,
            first_name,
            last_name,
            comment,
            submitted_at: Utc::now(),
        };

        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ApplicantId) -> Result<Option<Applicant>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictStore;

impl ApplicantStore for ConflictStore {
    fn create(&self, _applicant: NewApplicant) -> Result<Applicant, StoreError> {
        Err(StoreError::Conflict)
    }

    fn fetch(&self, _id: &ApplicantId) -> Result<Option<Applicant>, StoreError> {
        Ok(None)
    }
}

pub(super) struct UnavailableStore;

impl ApplicantStore for UnavailableStore {
    fn create(&self, _applicant: NewApplicant) -> Result<Applicant, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicantId) -> Result<Option<Applicant>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
