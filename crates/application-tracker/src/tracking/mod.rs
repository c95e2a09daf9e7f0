//! Analytics, list views and deadline triage over a snapshot of tracked applications.
//!
//! Every computation here is a pure function of its inputs: records are borrowed, never
//! mutated, and results are freshly allocated.

mod collation;
pub mod domain;
pub mod error;
pub mod listing;
pub mod report;
pub mod router;
pub mod service;
pub mod source;
pub mod triage;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, ApplicationStatus, ApplicationType, Company, CompanyId,
    CompanyType, ContactDetails, Document, DocumentId, DocumentStatus,
};
pub use error::TrackerError;
pub use listing::{
    filter_and_sort, partition_by_domain, DomainPartition, ListingQuery, SortKey, StatusFilter,
    TypeFilter,
};
pub use report::views::{ApplicationDigest, DashboardView, ListingView, TypeCountEntry};
pub use report::{
    aggregate_countries, aggregate_statuses, aggregate_timeline, aggregate_timeline_local,
    aggregate_types, consistency_notes, summarize, ApplicationReport, ConsistencyIssue,
    ConsistencyNote, CountryGroup, CountryPyramid, StatusBreakdown, StatusBucket, SummaryCounts,
    TimelineBucket,
};
pub use router::{tracker_router, ListingParams};
pub use service::{TrackerService, TrackerServiceError};
pub use source::{ApplicationSnapshot, ApplicationSource, SourceError};
pub use triage::{
    triage_drafts, triage_responses, DeadlineTriage, TriageBuckets, DEFAULT_DRAFT_WINDOW_DAYS,
};
