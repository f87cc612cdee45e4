use crate::infra::InMemoryApplicantStore;
use applicant_intake::applicants::{ApplicantSubmission, IntakeError, IntakeService};
use applicant_intake::error::AppError;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the rejected-submission portion of the demo.
    #[arg(long)]
    pub(crate) skip_rejection: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { skip_rejection } = args;

    println!("Applicant intake demo");

    let store = Arc::new(InMemoryApplicantStore::default());
    let service = IntakeService::new(store);

    let submission = ApplicantSubmission {
        email: Some("john.doe@example.com".to_string()),
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        comment: None,
    };
    let applicant = match service.create(submission) {
        Ok(applicant) => applicant,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Stored {} ({} {})",
        applicant.id.0, applicant.first_name, applicant.last_name
    );

    let commented = ApplicantSubmission {
        email: Some("jane.roe@example.com".to_string()),
        first_name: Some("Jane".to_string()),
        last_name: Some("Roe".to_string()),
        comment: Some("Available from October".to_string()),
    };
    match service.create(commented) {
        Ok(second) => println!(
            "- Stored {} with comment {:?}",
            second.id.0,
            second.comment.as_deref().unwrap_or_default()
        ),
        Err(err) => println!("  Submission rejected: {}", err),
    }

    let stored = service.get(&applicant.id)?;
    match serde_json::to_string_pretty(&stored.view()) {
        Ok(json) => println!("  Stored applicant payload:\n{}", json),
        Err(err) => println!("  Stored applicant payload unavailable: {}", err),
    }

    if skip_rejection {
        return Ok(());
    }

    println!("\nRejected submission walkthrough");
    let broken = ApplicantSubmission {
        email: Some("not-an-email".to_string()),
        first_name: None,
        last_name: Some(" ".to_string()),
        comment: None,
    };
    match service.create(broken) {
        Ok(unexpected) => println!("  Unexpectedly stored {}", unexpected.id.0),
        Err(IntakeError::Validation(rejection)) => {
            println!("- {}", rejection);
            for violation in &rejection.violations {
                println!(
                    "  - {} {} [{}]",
                    violation.field, violation.message, violation.rule
                );
            }
        }
        Err(err) => println!("  Intake unavailable: {}", err),
    }

    Ok(())
}
