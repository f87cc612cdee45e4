use super::domain::{Applicant, ApplicantId, NewApplicant};

/// Persistence boundary for applicants.
///
/// Implementations own id allocation and the `submitted_at` stamp; ids handed
/// out by `create` must stay unique under concurrent calls.
pub trait ApplicantStore: Send + Sync {
    /// Persist screened applicant data under a freshly allocated id.
    fn create(&self, applicant: NewApplicant) -> Result<Applicant, StoreError>;

    /// Look up a stored applicant. `Ok(None)` means the id is unknown.
    fn fetch(&self, id: &ApplicantId) -> Result<Option<Applicant>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("applicant already exists")]
    Conflict,
    #[error("applicant not found")]
    NotFound,
    #[error("applicant store unavailable: {0}")]
    Unavailable(String),
}
