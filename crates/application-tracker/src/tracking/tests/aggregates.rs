use chrono::{FixedOffset, NaiveDate};

use super::common::*;
use crate::tracking::domain::{ApplicationStatus, ApplicationType};
use crate::tracking::report::{
    aggregate_countries, aggregate_statuses, aggregate_timeline, aggregate_types,
    consistency_notes, summarize, ConsistencyIssue, StatusBucket,
};

#[test]
fn type_breakdown_omits_absent_types() {
    let applications = vec![
        job("j1", ApplicationStatus::Draft),
        job("j2", ApplicationStatus::Submitted),
        application(
            "c1",
            ApplicationType::Course,
            ApplicationStatus::Draft,
            at(2026, 1, 1, 9, 0),
        ),
    ];

    let types = aggregate_types(&applications);
    assert_eq!(types.get(&ApplicationType::Job), Some(&2));
    assert_eq!(types.get(&ApplicationType::Course), Some(&1));
    assert!(!types.contains_key(&ApplicationType::University));
    assert!(!types.contains_key(&ApplicationType::Lycee));
    assert_eq!(types.values().sum::<usize>(), applications.len());
}

#[test]
fn status_breakdown_always_has_three_buckets() {
    let statuses = aggregate_statuses(&[]);
    assert_eq!(statuses.accepted, 0);
    assert_eq!(statuses.rejected, 0);
    assert_eq!(statuses.unknown, 0);

    let json = serde_json::to_value(statuses).expect("serializes");
    assert_eq!(
        json,
        serde_json::json!({ "accepted": 0, "rejected": 0, "unknown": 0 })
    );
}

#[test]
fn every_status_falls_into_exactly_one_bucket() {
    let applications: Vec<_> = ApplicationStatus::ordered()
        .into_iter()
        .enumerate()
        .map(|(index, status)| job(&format!("app-{index}"), status))
        .collect();

    let statuses = aggregate_statuses(&applications);
    assert_eq!(statuses.accepted, 1);
    assert_eq!(statuses.rejected, 1);
    assert_eq!(statuses.unknown, 3);
    assert_eq!(statuses.total(), applications.len());
    assert_eq!(
        StatusBucket::of(ApplicationStatus::UnderReview),
        StatusBucket::Unknown
    );
    assert_eq!(statuses.count(StatusBucket::Rejected), 1);
}

#[test]
fn scenario_produces_expected_dashboard_aggregates() {
    let applications = dashboard_scenario();

    let statuses = aggregate_statuses(&applications);
    assert_eq!(
        (statuses.accepted, statuses.rejected, statuses.unknown),
        (1, 1, 1)
    );

    let pyramid = aggregate_countries(&applications);
    let codes: Vec<&str> = pyramid
        .groups
        .iter()
        .map(|group| group.code.as_str())
        .collect();
    assert_eq!(codes, vec!["LU", "UN", "DE"]);

    let lu = &pyramid.groups[0];
    assert_eq!((lu.job, lu.edu), (1, 0));
    let de = &pyramid.groups[2];
    assert_eq!((de.job, de.edu), (0, 1));
}

#[test]
fn pyramid_values_are_offset_by_a_shared_gap() {
    let mut applications = Vec::new();
    for index in 0..4 {
        applications.push(at_company(
            job(&format!("fr-{index}"), ApplicationStatus::Submitted),
            company("co-fr", "Paris Tech", Some("France")),
        ));
    }
    applications.push(at_company(
        application(
            "fr-edu",
            ApplicationType::University,
            ApplicationStatus::Submitted,
            at(2026, 1, 5, 9, 0),
        ),
        company("co-fr-u", "Sorbonne", Some("france")),
    ));
    applications.push(at_company(
        application(
            "it-edu",
            ApplicationType::Lycee,
            ApplicationStatus::Draft,
            at(2026, 1, 6, 9, 0),
        ),
        company("co-it", "Liceo", Some("Italy")),
    ));

    let pyramid = aggregate_countries(&applications);
    assert_eq!(pyramid.gap, 1.0);
    assert_eq!(pyramid.groups.len(), 2);

    let france = &pyramid.groups[0];
    assert_eq!(france.code, "FR");
    assert_eq!((france.job, france.edu), (4, 1));
    assert_eq!(france.job_value, 5.0);
    assert_eq!(france.edu_value, -2.0);

    for group in &pyramid.groups {
        assert_eq!(group.job_value - pyramid.gap, group.job as f64);
        assert_eq!(group.edu_value + pyramid.gap, -(group.edu as f64));
    }
}

#[test]
fn pyramid_sort_is_stable_on_equal_job_counts() {
    let applications = vec![
        at_company(
            application(
                "se",
                ApplicationType::Course,
                ApplicationStatus::Draft,
                at(2026, 1, 1, 9, 0),
            ),
            company("co-se", "KTH", Some("Sweden")),
        ),
        at_company(
            application(
                "no",
                ApplicationType::Course,
                ApplicationStatus::Draft,
                at(2026, 1, 2, 9, 0),
            ),
            company("co-no", "NTNU", Some("Norway")),
        ),
    ];

    let pyramid = aggregate_countries(&applications);
    let codes: Vec<&str> = pyramid
        .groups
        .iter()
        .map(|group| group.code.as_str())
        .collect();
    assert_eq!(codes, vec!["SW", "NO"]);
    assert_eq!(pyramid.gap, 0.25);
}

#[test]
fn countries_sharing_a_prefix_share_a_code() {
    let applications = vec![
        at_company(
            job("lu-1", ApplicationStatus::Submitted),
            company("co-1", "A", Some("Luxembourg")),
        ),
        at_company(
            job("lu-2", ApplicationStatus::Submitted),
            company("co-2", "B", Some("Luxemburg-adjacent-region")),
        ),
        at_company(
            job("blank", ApplicationStatus::Submitted),
            company("co-3", "C", Some("   ")),
        ),
    ];

    let pyramid = aggregate_countries(&applications);
    assert_eq!(pyramid.groups.len(), 2);
    assert_eq!(pyramid.groups[0].code, "LU");
    assert_eq!(pyramid.groups[0].job, 2);
    assert_eq!(pyramid.groups[1].code, "UN");
}

#[test]
fn empty_collection_has_no_pyramid_groups() {
    let pyramid = aggregate_countries(&[]);
    assert!(pyramid.groups.is_empty());
    assert_eq!(pyramid.gap, 0.25);
}

#[test]
fn timeline_is_sparse_and_date_ascending() {
    let applications = vec![
        application(
            "late",
            ApplicationType::Job,
            ApplicationStatus::Draft,
            at(2026, 3, 5, 14, 0),
        ),
        application(
            "early-job",
            ApplicationType::Job,
            ApplicationStatus::Draft,
            at(2026, 3, 1, 8, 0),
        ),
        application(
            "early-edu",
            ApplicationType::University,
            ApplicationStatus::Draft,
            at(2026, 3, 1, 17, 0),
        ),
    ];

    let timeline = aggregate_timeline(&applications, &chrono::Utc);
    assert_eq!(timeline.len(), 2);
    assert_eq!(
        timeline[0].date,
        NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
    );
    assert_eq!((timeline[0].job, timeline[0].edu), (1, 1));
    assert_eq!(
        timeline[1].date,
        NaiveDate::from_ymd_opt(2026, 3, 5).expect("valid date")
    );
    assert_eq!((timeline[1].job, timeline[1].edu), (1, 0));
}

#[test]
fn timeline_buckets_on_the_consumer_calendar_day() {
    let applications = vec![application(
        "late-evening-utc",
        ApplicationType::Job,
        ApplicationStatus::Draft,
        at(2026, 3, 1, 23, 30),
    )];

    let luxembourg = FixedOffset::east_opt(2 * 3600).expect("valid offset");
    let timeline = aggregate_timeline(&applications, &luxembourg);
    assert_eq!(
        timeline[0].date,
        NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
    );
}

#[test]
fn aggregates_are_deterministic() {
    let applications = dashboard_scenario();
    assert_eq!(
        aggregate_countries(&applications),
        aggregate_countries(&applications)
    );
    assert_eq!(
        aggregate_timeline(&applications, &chrono::Utc),
        aggregate_timeline(&applications, &chrono::Utc)
    );
    assert_eq!(aggregate_types(&applications), aggregate_types(&applications));
}

#[test]
fn summary_passes_companion_counts_through() {
    let applications = dashboard_scenario();
    let summary = summarize(&applications, 12, 5);
    assert_eq!(summary.applications, 3);
    assert_eq!(summary.documents, 12);
    assert_eq!(summary.companies, 5);
}

#[test]
fn consistency_notes_flag_without_rejecting() {
    let mut draft = job("draft-with-date", ApplicationStatus::Draft);
    draft.submit_date = Some(at(2026, 4, 21, 9, 0));

    let mut undated = job("undated", ApplicationStatus::UnderReview);
    undated.submit_date = None;

    let mut backwards = job("backwards", ApplicationStatus::Submitted);
    backwards.submit_date = Some(at(2026, 4, 1, 9, 0));
    backwards.response_deadline = Some(at(2026, 3, 1, 9, 0));

    let clean = job("clean", ApplicationStatus::Submitted);

    let notes = consistency_notes(&[draft, undated, backwards, clean]);
    let issues: Vec<(&str, ConsistencyIssue)> = notes
        .iter()
        .map(|note| (note.application_id.0.as_str(), note.issue))
        .collect();

    assert_eq!(
        issues,
        vec![
            ("draft-with-date", ConsistencyIssue::DraftWithSubmitDate),
            ("undated", ConsistencyIssue::MissingSubmitDate),
            ("backwards", ConsistencyIssue::SubmittedBeforeCreated),
            ("backwards", ConsistencyIssue::ResponseDueBeforeSubmission),
        ]
    );
}
