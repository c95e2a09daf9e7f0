use super::super::domain::{Application, ApplicationType};
use super::super::triage::{DeadlineTriage, TriageBuckets};
use super::aggregates::{
    aggregate_countries, aggregate_statuses, aggregate_timeline, aggregate_types, CountryPyramid,
    StatusBreakdown, TimelineBucket,
};
use super::consistency::{consistency_notes, ConsistencyNote};
use super::views::{ApplicationDigest, DashboardView, TypeCountEntry};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Headline totals shown next to the aggregates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub applications: usize,
    pub documents: usize,
    pub companies: usize,
}

pub fn summarize(
    applications: &[Application],
    document_count: usize,
    company_count: usize,
) -> SummaryCounts {
    SummaryCounts {
        applications: applications.len(),
        documents: document_count,
        companies: company_count,
    }
}

/// Every dashboard figure computed from one snapshot.
#[derive(Debug)]
pub struct ApplicationReport<'a> {
    pub summary: SummaryCounts,
    pub types: BTreeMap<ApplicationType, usize>,
    pub statuses: StatusBreakdown,
    pub countries: CountryPyramid,
    pub timeline: Vec<TimelineBucket>,
    pub triage: TriageBuckets<'a>,
    pub consistency_notes: Vec<ConsistencyNote>,
}

impl<'a> ApplicationReport<'a> {
    /// Builds the report; the timeline is bucketed on calendar days in the time zone of `now`.
    pub fn build<Tz: TimeZone>(
        applications: &'a [Application],
        document_count: usize,
        company_count: usize,
        triage: &DeadlineTriage,
        now: &DateTime<Tz>,
    ) -> Self {
        Self {
            summary: summarize(applications, document_count, company_count),
            types: aggregate_types(applications),
            statuses: aggregate_statuses(applications),
            countries: aggregate_countries(applications),
            timeline: aggregate_timeline(applications, &now.timezone()),
            triage: triage.classify(applications, now),
            consistency_notes: consistency_notes(applications),
        }
    }

    pub fn summary(&self) -> DashboardView {
        let types = ApplicationType::ordered()
            .into_iter()
            .filter_map(|kind| {
                self.types.get(&kind).map(|count| TypeCountEntry {
                    application_type: kind,
                    type_label: kind.label(),
                    count: *count,
                })
            })
            .collect();

        let drafts_expiring = self
            .triage
            .drafts_expiring
            .iter()
            .map(|application| {
                ApplicationDigest::with_deadline(application, application.submit_deadline)
            })
            .collect();

        let responses_due = self
            .triage
            .responses_due
            .iter()
            .map(|application| {
                ApplicationDigest::with_deadline(application, application.response_deadline)
            })
            .collect();

        DashboardView {
            summary: self.summary,
            types,
            statuses: self.statuses,
            countries: self.countries.clone(),
            timeline: self.timeline.clone(),
            drafts_expiring,
            responses_due,
            consistency_notes: self.consistency_notes.clone(),
        }
    }
}
