use super::super::domain::{Application, ApplicationId, ApplicationStatus, ApplicationType};
use super::super::listing::{DomainPartition, ListingQuery};
use super::aggregates::{CountryPyramid, StatusBreakdown, TimelineBucket};
use super::consistency::ConsistencyNote;
use super::summary::SummaryCounts;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TypeCountEntry {
    pub application_type: ApplicationType,
    pub type_label: &'static str,
    pub count: usize,
}

/// Compact row used by triage lists.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationDigest {
    pub id: ApplicationId,
    pub title: String,
    pub application_type: ApplicationType,
    pub type_label: &'static str,
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

impl ApplicationDigest {
    pub fn with_deadline(application: &Application, deadline: Option<DateTime<Utc>>) -> Self {
        Self {
            id: application.id.clone(),
            title: application.title.clone(),
            application_type: application.application_type,
            type_label: application.application_type.label(),
            status: application.app_status,
            status_label: application.app_status.label(),
            company_name: application.company_name().to_string(),
            deadline,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub summary: SummaryCounts,
    pub types: Vec<TypeCountEntry>,
    pub statuses: StatusBreakdown,
    pub countries: CountryPyramid,
    pub timeline: Vec<TimelineBucket>,
    pub drafts_expiring: Vec<ApplicationDigest>,
    pub responses_due: Vec<ApplicationDigest>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consistency_notes: Vec<ConsistencyNote>,
}

/// Owned list view split into job and education sections.
#[derive(Debug, Clone, Serialize)]
pub struct ListingView {
    pub query: ListingQuery,
    pub total: usize,
    pub jobs: Vec<Application>,
    pub education: Vec<Application>,
}

impl ListingView {
    pub fn new(query: ListingQuery, partition: DomainPartition<'_>) -> Self {
        Self {
            query,
            total: partition.len(),
            jobs: partition.jobs.into_iter().cloned().collect(),
            education: partition.education.into_iter().cloned().collect(),
        }
    }
}
