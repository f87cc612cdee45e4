use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use super::domain::{ApplicantSubmission, NewApplicant};

/// Rule code attached to violations raised for absent required fields.
const REQUIRED_RULE: &str = "required";

/// One broken rule on one submission field, reported with wire-facing names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
    pub message: String,
}

/// Every rule a submission broke, collected in a single screening pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRejection {
    pub violations: Vec<FieldViolation>,
}

impl ValidationRejection {
    /// Offending field names in report order, without repeats.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self
            .violations
            .iter()
            .map(|violation| violation.field.as_str())
            .collect();
        fields.dedup();
        fields
    }
}

impl fmt::Display for ValidationRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "submission failed validation: {}",
            self.fields().join(", ")
        )
    }
}

impl std::error::Error for ValidationRejection {}

/// Screen a raw submission into persistable applicant data.
///
/// Presence and format rules are checked in one pass; the rejection carries a
/// violation per broken rule rather than stopping at the first failure. Format
/// rules only run on fields that are present, so an absent field is reported
/// once as `required`.
pub fn screen_submission(
    submission: ApplicantSubmission,
) -> Result<NewApplicant, ValidationRejection> {
    let mut violations = match submission.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => collect_violations(&errors),
    };

    let ApplicantSubmission {
        email,
        first_name,
        last_name,
        comment,
    } = submission;

    let email = require_present("email", email, &mut violations);
    let first_name = require_present("firstName", first_name, &mut violations);
    let last_name = require_present("lastName", last_name, &mut violations);

    match (email, first_name, last_name) {
        (Some(email), Some(first_name), Some(last_name)) if violations.is_empty() => {
            Ok(NewApplicant {
                email,
                first_name,
                last_name,
                comment,
            })
        }
        _ => Err(ValidationRejection { violations }),
    }
}

fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    // BTreeMap keeps the report order stable across runs.
    let field_errors: BTreeMap<_, _> = errors.field_errors().into_iter().collect();

    let mut violations = Vec::new();
    for (field, rule_errors) in field_errors {
        for error in rule_errors {
            violations.push(FieldViolation {
                field: wire_field(field.as_ref()).to_string(),
                rule: error.code.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("violates the {} rule", error.code)),
            });
        }
    }
    violations
}

fn require_present(
    field: &'static str,
    value: Option<String>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    if value.is_none() {
        violations.push(FieldViolation {
            field: field.to_string(),
            rule: REQUIRED_RULE.to_string(),
            message: "is required".to_string(),
        });
    }
    value
}

fn wire_field(field: &str) -> &str {
    match field {
        "first_name" => "firstName",
        "last_name" => "lastName",
        other => other,
    }
}
