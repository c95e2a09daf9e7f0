use crate::infra::{resolve_snapshot_path, JsonFileSource};
use application_tracker::config::{AppConfig, MAX_DRAFT_WINDOW_DAYS};
use application_tracker::error::AppError;
use application_tracker::tracking::{
    Application, ApplicationDigest, DashboardView, ListingQuery, ListingView, SortKey,
    StatusBreakdown, StatusBucket, StatusFilter, TrackerService, TypeFilter,
};
use chrono::{DateTime, Local, Utc};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// JSON snapshot of the tracked applications (defaults to APP_SNAPSHOT_PATH)
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
    /// Override the draft expiry window in days
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_DRAFT_WINDOW_DAYS))
    )]
    pub(crate) draft_window_days: Option<u32>,
}

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    /// JSON snapshot of the tracked applications (defaults to APP_SNAPSHOT_PATH)
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
    /// Status filter: all, draft, submitted, under_review, accepted or rejected
    #[arg(long, default_value = "all")]
    pub(crate) status: StatusFilter,
    /// Type filter: all, job, university, lycee or course
    #[arg(long = "type", default_value = "all")]
    pub(crate) application_type: TypeFilter,
    /// Sort order: date_newest, date_oldest, company_asc, company_desc, title_asc, title_desc
    #[arg(long, default_value = "date_newest")]
    pub(crate) sort: SortKey,
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let DashboardArgs {
        snapshot,
        draft_window_days,
    } = args;

    let mut config = AppConfig::load()?;
    if let Some(days) = draft_window_days {
        config.triage.draft_window_days = days;
    }

    let source = JsonFileSource::new(resolve_snapshot_path(&config, snapshot)?);
    let service = TrackerService::new(Arc::new(source), config.triage.deadline_triage());
    let now = Local::now();
    let dashboard = service.dashboard(&now)?;

    render_dashboard(&dashboard, &now);
    Ok(())
}

pub(crate) fn run_listing(args: ListArgs) -> Result<(), AppError> {
    let ListArgs {
        snapshot,
        status,
        application_type,
        sort,
    } = args;

    let config = AppConfig::load()?;
    let source = JsonFileSource::new(resolve_snapshot_path(&config, snapshot)?);
    let service = TrackerService::new(Arc::new(source), config.triage.deadline_triage());
    let view = service.listing(ListingQuery {
        status,
        application_type,
        sort,
    })?;

    render_listing(&view);
    Ok(())
}

pub(crate) fn render_dashboard(dashboard: &DashboardView, now: &DateTime<Local>) {
    println!("Application dashboard ({})", now.format("%Y-%m-%d %H:%M"));
    println!(
        "{} applications | {} documents | {} companies",
        dashboard.summary.applications, dashboard.summary.documents, dashboard.summary.companies
    );

    println!("\nBy type");
    for entry in &dashboard.types {
        println!("- {}: {}", entry.type_label, entry.count);
    }

    println!("\nOutcomes");
    println!("- {}", outcome_line(&dashboard.statuses));

    if !dashboard.countries.groups.is_empty() {
        println!("\nBy country (jobs | education)");
        for group in &dashboard.countries.groups {
            println!("- {}: {} | {}", group.code, group.job, group.edu);
        }
    }

    if !dashboard.timeline.is_empty() {
        println!("\nCreated per day (jobs | education)");
        for bucket in &dashboard.timeline {
            println!("- {}: {} | {}", bucket.date, bucket.job, bucket.edu);
        }
    }

    render_digests("Drafts expiring soon", &dashboard.drafts_expiring);
    render_digests("Responses due", &dashboard.responses_due);

    if !dashboard.consistency_notes.is_empty() {
        println!("\nData notes");
        for note in &dashboard.consistency_notes {
            println!("- {}: {}", note.application_id.0, note.issue_label);
        }
    }
}

fn outcome_line(statuses: &StatusBreakdown) -> String {
    StatusBucket::ordered()
        .into_iter()
        .map(|bucket| format!("{}: {}", bucket.label(), statuses.count(bucket)))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_digests(heading: &str, digests: &[ApplicationDigest]) {
    if digests.is_empty() {
        println!("\n{heading}: none");
        return;
    }

    println!("\n{heading}");
    for digest in digests {
        println!(
            "- {} [{}] {}{} ({})",
            digest.title,
            digest.type_label,
            company_suffix(&digest.company_name),
            format_deadline(digest.deadline),
            digest.status_label
        );
    }
}

pub(crate) fn render_listing(view: &ListingView) {
    println!(
        "Applications: status {} | type {} | {} ({} shown)",
        view.query.status,
        view.query.application_type,
        view.query.sort.label(),
        view.total
    );

    render_section("Jobs", &view.jobs);
    render_section("Education", &view.education);
}

fn render_section(heading: &str, applications: &[Application]) {
    if applications.is_empty() {
        println!("\n{heading}: none");
        return;
    }

    println!("\n{heading}");
    for application in applications {
        println!(
            "- {} [{}] {}created {} ({})",
            application.title,
            application.application_type.label(),
            company_suffix(&company_descriptor(application)),
            application.creation_date.format("%Y-%m-%d"),
            application.app_status.label()
        );
        if !application.documents.is_empty() {
            println!("    documents: {}", document_line(application));
        }
    }
}

fn company_descriptor(application: &Application) -> String {
    match &application.company {
        Some(company) => format!("{} ({})", company.name, company.company_type.label()),
        None => String::new(),
    }
}

fn document_line(application: &Application) -> String {
    application
        .documents
        .iter()
        .map(|document| format!("{} ({})", document.file_name, document.doc_status.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn company_suffix(company_name: &str) -> String {
    if company_name.is_empty() {
        String::new()
    } else {
        format!("at {company_name}, ")
    }
}

fn format_deadline(deadline: Option<DateTime<Utc>>) -> String {
    match deadline {
        Some(deadline) => format!(
            "due {}",
            deadline.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ),
        None => "no deadline".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_suffix_skips_unlinked_records() {
        assert_eq!(company_suffix(""), "");
        assert_eq!(company_suffix("Spree Cloud"), "at Spree Cloud, ");
    }

    #[test]
    fn outcomes_use_the_collapsed_bucket_names() {
        let statuses = StatusBreakdown {
            accepted: 1,
            rejected: 2,
            unknown: 3,
        };
        assert_eq!(
            outcome_line(&statuses),
            "Accepted: 1 | Rejected: 2 | Unknown: 3"
        );
    }

    #[test]
    fn list_rows_describe_company_and_documents() {
        let source = crate::infra::JsonFileSource::new(crate::infra::fixture_path());
        let snapshot =
            application_tracker::tracking::ApplicationSource::snapshot(&source).expect("fixture");
        let msc = snapshot
            .applications
            .iter()
            .find(|application| application.id.0 == "app-msc-informatics")
            .expect("fixture record");

        assert_eq!(
            company_descriptor(msc),
            "Technische Universität München (University)"
        );
        assert_eq!(
            document_line(msc),
            "transcript.pdf (Final), motivation.pdf (Archived)"
        );

        let draft = snapshot
            .applications
            .iter()
            .find(|application| application.id.0 == "app-data-analyst")
            .expect("fixture record");
        assert_eq!(company_descriptor(draft), "");
    }

    #[test]
    fn missing_deadline_is_spelled_out() {
        assert_eq!(format_deadline(None), "no deadline");
        let deadline = Utc::now();
        assert!(format_deadline(Some(deadline)).starts_with("due "));
    }
}
