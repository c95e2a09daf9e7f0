mod aggregates;
mod consistency;
mod summary;
pub mod views;

pub use aggregates::{
    aggregate_countries, aggregate_statuses, aggregate_timeline, aggregate_timeline_local,
    aggregate_types, country_code, CountryGroup, CountryPyramid, DomainCounts, StatusBreakdown,
    StatusBucket, TimelineBucket, PYRAMID_GAP_RATIO, UNKNOWN_COUNTRY,
};
pub use consistency::{consistency_notes, ConsistencyIssue, ConsistencyNote};
pub use summary::{summarize, ApplicationReport, SummaryCounts};
