use super::super::domain::{Application, ApplicationId, ApplicationStatus};
use serde::Serialize;

/// Record shapes that break the expected lifecycle but are still reported on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyIssue {
    DraftWithSubmitDate,
    MissingSubmitDate,
    SubmittedBeforeCreated,
    ResponseDueBeforeSubmission,
}

impl ConsistencyIssue {
    pub const fn label(self) -> &'static str {
        match self {
            Self::DraftWithSubmitDate => "Draft already carries a submit date",
            Self::MissingSubmitDate => "Submitted application has no submit date",
            Self::SubmittedBeforeCreated => "Submit date precedes creation date",
            Self::ResponseDueBeforeSubmission => "Response deadline precedes submit date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsistencyNote {
    pub application_id: ApplicationId,
    pub issue: ConsistencyIssue,
    pub issue_label: &'static str,
}

pub fn consistency_notes(applications: &[Application]) -> Vec<ConsistencyNote> {
    let mut notes = Vec::new();

    for application in applications {
        let mut flag = |issue: ConsistencyIssue| {
            notes.push(ConsistencyNote {
                application_id: application.id.clone(),
                issue,
                issue_label: issue.label(),
            })
        };

        match (application.app_status, application.submit_date) {
            (ApplicationStatus::Draft, Some(_)) => flag(ConsistencyIssue::DraftWithSubmitDate),
            (status, None) if status.is_submitted() => flag(ConsistencyIssue::MissingSubmitDate),
            _ => {}
        }

        if let Some(submitted) = application.submit_date {
            if submitted < application.creation_date {
                flag(ConsistencyIssue::SubmittedBeforeCreated);
            }
            if application
                .response_deadline
                .is_some_and(|deadline| deadline < submitted)
            {
                flag(ConsistencyIssue::ResponseDueBeforeSubmission);
            }
        }
    }

    notes
}
