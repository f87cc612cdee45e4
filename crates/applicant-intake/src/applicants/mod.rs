//! Applicant intake: screening, the persistence boundary, and the HTTP routes
//! that expose them.

pub mod domain;
pub mod router;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Applicant, ApplicantCreatedView, ApplicantId, ApplicantSubmission, ApplicantView, NewApplicant,
};
pub use router::applicant_router;
pub use service::{IntakeError, IntakeService};
pub use store::{ApplicantStore, StoreError};
pub use validation::{screen_submission, FieldViolation, ValidationRejection};
