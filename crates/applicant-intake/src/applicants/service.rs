use std::sync::Arc;

use super::domain::{Applicant, ApplicantId, ApplicantSubmission};
use super::store::{ApplicantStore, StoreError};
use super::validation::{screen_submission, ValidationRejection};

/// Intake service composing the screening pass with the applicant store.
///
/// The service only holds shared handles, so concurrent requests never
/// coordinate beyond what the store itself guarantees.
pub struct IntakeService<S> {
    store: Arc<S>,
}

impl<S> IntakeService<S>
where
    S: ApplicantStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Screen a submission and persist it.
    ///
    /// A submission that breaks any rule is rejected before the store is
    /// touched, so no partial record is ever written.
    pub fn create(&self, submission: ApplicantSubmission) -> Result<Applicant, IntakeError> {
        let applicant = screen_submission(submission)?;
        let stored = self.store.create(applicant)?;
        Ok(stored)
    }

    /// Fetch a stored applicant by id.
    pub fn get(&self, id: &ApplicantId) -> Result<Applicant, IntakeError> {
        let applicant = self.store.fetch(id)?.ok_or(StoreError::NotFound)?;
        Ok(applicant)
    }
}

/// Error raised by intake operations.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationRejection),
    #[error(transparent)]
    Store(#[from] StoreError),
}
