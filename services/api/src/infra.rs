use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use applicant_intake::applicants::{
    Applicant, ApplicantId, ApplicantStore, NewApplicant, StoreError,
};
use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local applicant store backing the service binary and the CLI demo.
#[derive(Default)]
pub(crate) struct InMemoryApplicantStore {
    records: Mutex<HashMap<ApplicantId, Applicant>>,
    sequence: AtomicU64,
}

impl InMemoryApplicantStore {
    fn next_id(&self) -> ApplicantId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        ApplicantId(format!("applicant-{id:06}"))
    }
}

impl ApplicantStore for InMemoryApplicantStore {
    fn create(&self, applicant: NewApplicant) -> Result<Applicant, StoreError> {
        let NewApplicant {
            email,
            first_name,
            last_name,
            comment,
        } = applicant;

        let record = Applicant {
            id: self.next_id(),
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
