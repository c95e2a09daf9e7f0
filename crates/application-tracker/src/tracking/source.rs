use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::domain::Application;

/// One consistent read of the persistence layer: every application visible to the user
/// together with the companion collection sizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSnapshot {
    pub applications: Vec<Application>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_count: Option<usize>,
}

impl ApplicationSnapshot {
    pub fn new(applications: Vec<Application>, document_count: usize, company_count: usize) -> Self {
        Self {
            applications,
            document_count: Some(document_count),
            company_count: Some(company_count),
        }
    }

    /// Snapshot whose companion counts are derived from the records it references.
    pub fn from_applications(applications: Vec<Application>) -> Self {
        Self {
            applications,
            document_count: None,
            company_count: None,
        }
    }

    /// Exported total, or the number of distinct documents referenced when none was exported.
    pub fn document_count(&self) -> usize {
        self.document_count.unwrap_or_else(|| {
            self.applications
                .iter()
                .flat_map(|application| application.documents.iter())
                .map(|document| &document.id)
                .collect::<HashSet<_>>()
                .len()
        })
    }

    /// Exported total, or the number of distinct companies referenced when none was exported.
    pub fn company_count(&self) -> usize {
        self.company_count.unwrap_or_else(|| {
            self.applications
                .iter()
                .filter_map(|application| application.company.as_ref())
                .map(|company| &company.id)
                .collect::<HashSet<_>>()
                .len()
        })
    }
}

/// Read-only access to the persistence layer.
pub trait ApplicationSource: Send + Sync {
    fn snapshot(&self) -> Result<ApplicationSnapshot, SourceError>;
}

impl ApplicationSource for ApplicationSnapshot {
    fn snapshot(&self) -> Result<ApplicationSnapshot, SourceError> {
        Ok(self.clone())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("application source unavailable: {0}")]
    Unavailable(String),
    #[error("application snapshot is malformed: {0}")]
    Malformed(String),
}
