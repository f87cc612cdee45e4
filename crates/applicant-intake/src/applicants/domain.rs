use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Identifier wrapper for persisted applicants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

/// Raw body of `POST /applicants` before screening.
///
/// Required fields deserialize as `Option` so that a missing field reaches the
/// screening pass and is reported together with format problems, instead of
/// failing opaquely at the JSON layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantSubmission {
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    #[validate(custom(function = "not_blank"))]
    pub first_name: Option<String>,
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    #[validate(custom(function = "not_blank"))]
    pub last_name: Option<String>,
    pub comment: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Screened applicant data, ready for persistence.
///
/// Values of this type only come out of a successful screening pass, so every
/// field already satisfies the intake rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplicant {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub comment: Option<String>,
}

/// Persisted applicant record as owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub comment: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl Applicant {
    /// Wire representation returned by lookups.
    pub fn view(&self) -> ApplicantView {
        ApplicantView {
            id: self.id.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            comment: self.comment.clone(),
            submitted_at: self.submitted_at,
        }
    }
}

/// Body of a successful create response.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantCreatedView {
    pub id: ApplicantId,
}

/// Full applicant payload for `GET /applicants/:applicant_id`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantView {
    pub id: ApplicantId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub submitted_at: DateTime<Utc>,
}
