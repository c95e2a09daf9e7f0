use super::domain::{Application, ApplicationStatus};
use chrono::{DateTime, Duration, NaiveTime, TimeZone};

/// Default look-ahead for drafts whose submission deadline is approaching.
pub const DEFAULT_DRAFT_WINDOW_DAYS: i64 = 7;

/// Deadline rules that sort applications into "needs attention" buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineTriage {
    draft_window: Duration,
}

impl Default for DeadlineTriage {
    fn default() -> Self {
        Self::new(Duration::days(DEFAULT_DRAFT_WINDOW_DAYS))
    }
}

impl DeadlineTriage {
    pub fn new(draft_window: Duration) -> Self {
        Self { draft_window }
    }

    pub fn draft_window(&self) -> Duration {
        self.draft_window
    }

    /// Drafts due within the window, overdue drafts included.
    pub fn drafts_expiring<'a, Tz: TimeZone>(
        &self,
        applications: &'a [Application],
        now: &DateTime<Tz>,
    ) -> Vec<&'a Application> {
        // A window reaching past chrono's range has no upper bound.
        let horizon = now.clone().checked_add_signed(self.draft_window);
        applications
            .iter()
            .filter(|application| application.app_status == ApplicationStatus::Draft)
            .filter(|application| {
                application.submit_deadline.is_some_and(|deadline| match &horizon {
                    Some(end) => deadline <= *end,
                    None => true,
                })
            })
            .collect()
    }

    /// Submitted or in-review applications whose response is expected today or is overdue.
    pub fn responses_due<'a, Tz: TimeZone>(
        &self,
        applications: &'a [Application],
        now: &DateTime<Tz>,
    ) -> Vec<&'a Application> {
        let end_of_today = end_of_day(now);
        let today = now.date_naive();
        applications
            .iter()
            .filter(|application| application.app_status.awaits_response())
            .filter(|application| {
                application
                    .response_deadline
                    .is_some_and(|deadline| match &end_of_today {
                        Some(end) => deadline <= *end,
                        None => deadline.with_timezone(&now.timezone()).date_naive() <= today,
                    })
            })
            .collect()
    }

    pub fn classify<'a, Tz: TimeZone>(
        &self,
        applications: &'a [Application],
        now: &DateTime<Tz>,
    ) -> TriageBuckets<'a> {
        TriageBuckets {
            drafts_expiring: self.drafts_expiring(applications, now),
            responses_due: self.responses_due(applications, now),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriageBuckets<'a> {
    pub drafts_expiring: Vec<&'a Application>,
    pub responses_due: Vec<&'a Application>,
}

impl TriageBuckets<'_> {
    pub fn is_empty(&self) -> bool {
        self.drafts_expiring.is_empty() && self.responses_due.is_empty()
    }
}

pub fn triage_drafts<'a, Tz: TimeZone>(
    applications: &'a [Application],
    now: &DateTime<Tz>,
) -> Vec<&'a Application> {
    DeadlineTriage::default().drafts_expiring(applications, now)
}

pub fn triage_responses<'a, Tz: TimeZone>(
    applications: &'a [Application],
    now: &DateTime<Tz>,
) -> Vec<&'a Application> {
    DeadlineTriage::default().responses_due(applications, now)
}

/// 23:59:59.999 on the local day of `now`. `None` only when that wall-clock time is skipped.
fn end_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let last_millisecond = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?;
    now.timezone()
        .from_local_datetime(&now.date_naive().and_time(last_millisecond))
        .latest()
}
