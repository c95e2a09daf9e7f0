use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::TrackerError;

/// Identifier wrapper for tracked applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

/// Normalizes a raw tag so `under review`, `under-review` and `UNDER_REVIEW` parse alike.
fn normalize_tag(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationType {
    Job,
    University,
    Lycee,
    Course,
}

impl ApplicationType {
    pub const fn ordered() -> [Self; 4] {
        [Self::Job, Self::University, Self::Lycee, Self::Course]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Job => "Job",
            Self::University => "University",
            Self::Lycee => "Lycée",
            Self::Course => "Course",
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Job => "JOB",
            Self::University => "UNIVERSITY",
            Self::Lycee => "LYCEE",
            Self::Course => "COURSE",
        }
    }

    /// Everything that is not a job counts as education.
    pub const fn is_job(self) -> bool {
        matches!(self, Self::Job)
    }
}

impl FromStr for ApplicationType {
    type Err = TrackerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let tag = normalize_tag(raw);
        Self::ordered()
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| TrackerError::UnknownApplicationType(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Draft,
    Submitted,
    UnderReview,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Draft,
            Self::Submitted,
            Self::UnderReview,
            Self::Accepted,
            Self::Rejected,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::UnderReview => "Under Review",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::UnderReview => "UNDER_REVIEW",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Statuses that imply the application has left the draft stage.
    pub const fn is_submitted(self) -> bool {
        !matches!(self, Self::Draft)
    }

    /// Statuses still waiting on an outcome from the other party.
    pub const fn awaits_response(self) -> bool {
        matches!(self, Self::Submitted | Self::UnderReview)
    }
}

impl FromStr for ApplicationStatus {
    type Err = TrackerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let tag = normalize_tag(raw);
        Self::ordered()
            .into_iter()
            .find(|status| status.tag() == tag)
            .ok_or_else(|| TrackerError::UnknownApplicationStatus(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanyType {
    Employer,
    University,
    Lycee,
    Course,
}

impl CompanyType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Employer => "Employer",
            Self::University => "University",
            Self::Lycee => "Lycée",
            Self::Course => "Course",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    Draft,
    Final,
    Archived,
}

impl DocumentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Final => "Final",
            Self::Archived => "Archived",
        }
    }
}

/// Optional contact details kept alongside a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Employer or school an application is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    #[serde(rename = "type")]
    pub company_type: CompanyType,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, flatten)]
    pub contact: ContactDetails,
}

/// Supporting file attached to one or more applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub file_name: String,
    pub doc_status: DocumentStatus,
    pub upload_date: DateTime<Utc>,
    pub content_type: String,
}

/// A tracked job or education application as handed over by the persistence layer.
///
/// The engine never rejects a record: missing dates or an unlinked company only exclude the
/// record from the computations that need them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub title: String,
    pub application_type: ApplicationType,
    pub app_status: ApplicationStatus,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub submit_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub submit_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub response_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub result_notes: Option<String>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl Application {
    pub fn is_job(&self) -> bool {
        self.application_type.is_job()
    }

    /// Company name, or the empty string for unlinked applications.
    pub fn company_name(&self) -> &str {
        self.company
            .as_ref()
            .map(|company| company.name.as_str())
            .unwrap_or("")
    }

    /// Trimmed company country; `None` when unlinked or blank.
    pub fn country(&self) -> Option<&str> {
        self.company
            .as_ref()
            .and_then(|company| company.country.as_deref())
            .map(str::trim)
            .filter(|country| !country.is_empty())
    }
}
