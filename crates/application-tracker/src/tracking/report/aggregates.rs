use super::super::domain::{Application, ApplicationStatus, ApplicationType};
use chrono::{Local, NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Key used for applications without a company country before truncation.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Share of the widest bar reserved as blank space either side of the pyramid axis.
pub const PYRAMID_GAP_RATIO: f64 = 0.25;

const COUNTRY_CODE_LEN: usize = 2;

/// Job versus education split used by the country and timeline series.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainCounts {
    pub job: usize,
    pub edu: usize,
}

impl DomainCounts {
    fn record(&mut self, kind: ApplicationType) {
        if kind.is_job() {
            self.job += 1;
        } else {
            self.edu += 1;
        }
    }

    fn widest(self) -> usize {
        self.job.max(self.edu)
    }
}

pub fn aggregate_types(applications: &[Application]) -> BTreeMap<ApplicationType, usize> {
    let mut counts = BTreeMap::new();
    for application in applications {
        *counts.entry(application.application_type).or_insert(0) += 1;
    }
    counts
}

/// Collapsed outcome taxonomy reported on dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    Accepted,
    Rejected,
    Unknown,
}

impl StatusBucket {
    pub const fn ordered() -> [Self; 3] {
        [Self::Accepted, Self::Rejected, Self::Unknown]
    }

    pub const fn of(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Accepted => Self::Accepted,
            ApplicationStatus::Rejected => Self::Rejected,
            ApplicationStatus::Draft
            | ApplicationStatus::Submitted
            | ApplicationStatus::UnderReview => Self::Unknown,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub accepted: usize,
    pub rejected: usize,
    pub unknown: usize,
}

impl StatusBreakdown {
    pub fn count(&self, bucket: StatusBucket) -> usize {
        match bucket {
            StatusBucket::Accepted => self.accepted,
            StatusBucket::Rejected => self.rejected,
            StatusBucket::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> usize {
        self.accepted + self.rejected + self.unknown
    }

    fn record(&mut self, bucket: StatusBucket) {
        match bucket {
            StatusBucket::Accepted => self.accepted += 1,
            StatusBucket::Rejected => self.rejected += 1,
            StatusBucket::Unknown => self.unknown += 1,
        }
    }
}

pub fn aggregate_statuses(applications: &[Application]) -> StatusBreakdown {
    let mut breakdown = StatusBreakdown::default();
    for application in applications {
        breakdown.record(StatusBucket::of(application.app_status));
    }
    breakdown
}

/// One mirrored bar pair of the country pyramid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryGroup {
    pub code: String,
    pub job: usize,
    pub edu: usize,
    pub job_value: f64,
    pub edu_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CountryPyramid {
    pub gap: f64,
    pub groups: Vec<CountryGroup>,
}

/// Upper-cased first two characters of the company country.
///
/// This is a truncation, not an ISO 3166 lookup: countries sharing a prefix share a code.
pub fn country_code(application: &Application) -> String {
    application
        .country()
        .unwrap_or(UNKNOWN_COUNTRY)
        .chars()
        .take(COUNTRY_CODE_LEN)
        .collect::<String>()
        .to_uppercase()
}

pub fn aggregate_countries(applications: &[Application]) -> CountryPyramid {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut tallies: Vec<(String, DomainCounts)> = Vec::new();

    for application in applications {
        let code = country_code(application);
        let slot = match index.get(&code).copied() {
            Some(slot) => slot,
            None => {
                index.insert(code.clone(), tallies.len());
                tallies.push((code, DomainCounts::default()));
                tallies.len() - 1
            }
        };
        tallies[slot].1.record(application.application_type);
    }

    tallies.sort_by(|(_, left), (_, right)| right.job.cmp(&left.job));

    let widest = tallies
        .iter()
        .map(|(_, counts)| counts.widest())
        .max()
        .unwrap_or(0)
        .max(1);
    let gap = widest as f64 * PYRAMID_GAP_RATIO;

    let groups = tallies
        .into_iter()
        .map(|(code, counts)| CountryGroup {
            code,
            job: counts.job,
            edu: counts.edu,
            job_value: counts.job as f64 + gap,
            edu_value: -(counts.edu as f64 + gap),
        })
        .collect();

    CountryPyramid { gap, groups }
}

/// Applications created on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineBucket {
    pub date: NaiveDate,
    pub job: usize,
    pub edu: usize,
}

/// Sparse, date-ascending creation series bucketed on calendar days in `tz`.
pub fn aggregate_timeline<Tz: TimeZone>(
    applications: &[Application],
    tz: &Tz,
) -> Vec<TimelineBucket> {
    let mut days: BTreeMap<NaiveDate, DomainCounts> = BTreeMap::new();
    for application in applications {
        let day = application.creation_date.with_timezone(tz).date_naive();
        days.entry(day)
            .or_default()
            .record(application.application_type);
    }

    days.into_iter()
        .map(|(date, counts)| TimelineBucket {
            date,
            job: counts.job,
            edu: counts.edu,
        })
        .collect()
}

pub fn aggregate_timeline_local(applications: &[Application]) -> Vec<TimelineBucket> {
    aggregate_timeline(applications, &Local)
}
