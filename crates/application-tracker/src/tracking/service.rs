use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use tracing::{debug, warn};

use super::listing::{partition_by_domain, ListingQuery};
use super::report::views::{DashboardView, ListingView};
use super::report::ApplicationReport;
use super::source::{ApplicationSource, SourceError};
use super::triage::DeadlineTriage;

/// Pulls one snapshot per call from the source and derives the requested view from it.
pub struct TrackerService<S> {
    source: Arc<S>,
    triage: DeadlineTriage,
}

impl<S> TrackerService<S>
where
    S: ApplicationSource + 'static,
{
    pub fn new(source: Arc<S>, triage: DeadlineTriage) -> Self {
        Self { source, triage }
    }

    pub fn triage(&self) -> &DeadlineTriage {
        &self.triage
    }

    /// Aggregates, totals and triage buckets for the whole collection at `now`.
    pub fn dashboard<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> Result<DashboardView, TrackerServiceError> {
        let snapshot = self.source.snapshot()?;
        let report = ApplicationReport::build(
            &snapshot.applications,
            snapshot.document_count(),
            snapshot.company_count(),
            &self.triage,
            now,
        );

        if !report.consistency_notes.is_empty() {
            warn!(
                notes = report.consistency_notes.len(),
                "snapshot contains inconsistent application records"
            );
        }
        debug!(
            applications = report.summary.applications,
            drafts_expiring = report.triage.drafts_expiring.len(),
            responses_due = report.triage.responses_due.len(),
            "dashboard computed"
        );

        Ok(report.summary())
    }

    /// Filtered, sorted and partitioned list view.
    pub fn listing(&self, query: ListingQuery) -> Result<ListingView, TrackerServiceError> {
        let snapshot = self.source.snapshot()?;
        let ordered = query.apply(&snapshot.applications);
        let view = ListingView::new(query, partition_by_domain(ordered));

        debug!(
            status = %query.status,
            application_type = %query.application_type,
            sort = query.sort.tag(),
            total = view.total,
            "listing computed"
        );

        Ok(view)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TrackerServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
}
