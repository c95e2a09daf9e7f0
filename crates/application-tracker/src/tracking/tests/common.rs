use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::tracking::domain::{
    Application, ApplicationId, ApplicationStatus, ApplicationType, Company, CompanyId,
    CompanyType, ContactDetails, Document, DocumentId, DocumentStatus,
};

pub(super) fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn now() -> DateTime<Utc> {
    at(2026, 5, 12, 10, 30)
}

pub(super) fn company(id: &str, name: &str, country: Option<&str>) -> Company {
    Company {
        id: CompanyId(id.to_string()),
        name: name.to_string(),
        company_type: CompanyType::Employer,
        country: country.map(str::to_string),
        contact: ContactDetails::default(),
    }
}

pub(super) fn document(id: &str) -> Document {
    Document {
        id: DocumentId(id.to_string()),
        file_name: format!("{id}.pdf"),
        doc_status: DocumentStatus::Final,
        upload_date: at(2026, 4, 1, 9, 0),
        content_type: "application/pdf".to_string(),
    }
}

pub(super) fn application(
    id: &str,
    application_type: ApplicationType,
    app_status: ApplicationStatus,
    creation_date: DateTime<Utc>,
) -> Application {
    let submit_date = app_status
        .is_submitted()
        .then(|| creation_date + Duration::days(1));

    Application {
        id: ApplicationId(id.to_string()),
        title: format!("Application {id}"),
        application_type,
        app_status,
        creation_date,
        submit_date,
        submit_deadline: None,
        response_deadline: None,
        result_notes: None,
        company: None,
        documents: Vec::new(),
    }
}

pub(super) fn job(id: &str, app_status: ApplicationStatus) -> Application {
    application(id, ApplicationType::Job, app_status, at(2026, 4, 20, 9, 0))
}

pub(super) fn titled(mut application: Application, title: &str) -> Application {
    application.title = title.to_string();
    application
}

pub(super) fn at_company(mut application: Application, company: Company) -> Application {
    application.company = Some(company);
    application
}

pub(super) fn draft_due(id: &str, submit_deadline: DateTime<Utc>) -> Application {
    let mut draft = job(id, ApplicationStatus::Draft);
    draft.submit_deadline = Some(submit_deadline);
    draft
}

pub(super) fn awaiting_response(
    id: &str,
    app_status: ApplicationStatus,
    response_deadline: DateTime<Utc>,
) -> Application {
    let mut application = job(id, app_status);
    application.response_deadline = Some(response_deadline);
    application
}

pub(super) fn ids(applications: &[&Application]) -> Vec<String> {
    applications
        .iter()
        .map(|application| application.id.0.clone())
        .collect()
}

/// Accepted job in Luxembourg, rejected university in Germany, unlinked job draft due soon.
pub(super) fn dashboard_scenario() -> Vec<Application> {
    let accepted = at_company(
        job("lux-job", ApplicationStatus::Accepted),
        company("co-lu", "Banque Lux", Some("Luxembourg")),
    );
    let rejected = at_company(
        application(
            "de-uni",
            ApplicationType::University,
            ApplicationStatus::Rejected,
            at(2026, 3, 2, 8, 0),
        ),
        company("co-de", "TU Berlin", Some("Germany")),
    );
    let draft = draft_due("unlinked-draft", now() + Duration::days(3));

    vec![accepted, rejected, draft]
}
