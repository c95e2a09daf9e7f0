use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::collation;
use super::domain::{Application, ApplicationStatus, ApplicationType};
use super::error::TrackerError;

/// Status criterion for the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ApplicationStatus),
}

impl StatusFilter {
    pub fn matches(self, status: ApplicationStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TrackerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        raw.parse().map(Self::Only)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("ALL"),
            Self::Only(status) => f.write_str(status.tag()),
        }
    }
}

/// Application type criterion for the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ApplicationType),
}

impl TypeFilter {
    pub fn matches(self, kind: ApplicationType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == kind,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = TrackerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        raw.parse().map(Self::Only)
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("ALL"),
            Self::Only(kind) => f.write_str(kind.tag()),
        }
    }
}

macro_rules! filter_serde {
    ($filter:ty) => {
        impl Serialize for $filter {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $filter {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

filter_serde!(StatusFilter);
filter_serde!(TypeFilter);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortKey {
    #[default]
    DateNewest,
    DateOldest,
    CompanyAsc,
    CompanyDesc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::DateNewest,
            Self::DateOldest,
            Self::CompanyAsc,
            Self::CompanyDesc,
            Self::TitleAsc,
            Self::TitleDesc,
        ]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::DateNewest => "DATE_NEWEST",
            Self::DateOldest => "DATE_OLDEST",
            Self::CompanyAsc => "COMPANY_ASC",
            Self::CompanyDesc => "COMPANY_DESC",
            Self::TitleAsc => "TITLE_ASC",
            Self::TitleDesc => "TITLE_DESC",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DateNewest => "Newest first",
            Self::DateOldest => "Oldest first",
            Self::CompanyAsc => "Company A-Z",
            Self::CompanyDesc => "Company Z-A",
            Self::TitleAsc => "Title A-Z",
            Self::TitleDesc => "Title Z-A",
        }
    }

    fn compare(self, left: &Application, right: &Application) -> std::cmp::Ordering {
        match self {
            Self::DateNewest => right.creation_date.cmp(&left.creation_date),
            Self::DateOldest => left.creation_date.cmp(&right.creation_date),
            Self::CompanyAsc => collation::compare(left.company_name(), right.company_name()),
            Self::CompanyDesc => collation::compare(right.company_name(), left.company_name()),
            Self::TitleAsc => collation::compare(&left.title, &right.title),
            Self::TitleDesc => collation::compare(&right.title, &left.title),
        }
    }
}

impl FromStr for SortKey {
    type Err = TrackerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let tag = raw.trim().replace(['-', ' '], "_").to_ascii_uppercase();
        Self::ordered()
            .into_iter()
            .find(|key| key.tag() == tag)
            .ok_or_else(|| TrackerError::UnknownSortKey(raw.to_string()))
    }
}

/// Parameters for one list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default, rename = "type")]
    pub application_type: TypeFilter,
    #[serde(default)]
    pub sort: SortKey,
}

impl ListingQuery {
    /// Builds a query from raw request parameters; absent parameters take their defaults.
    pub fn from_params(
        status: Option<&str>,
        application_type: Option<&str>,
        sort: Option<&str>,
    ) -> Result<Self, TrackerError> {
        Ok(Self {
            status: status
                .map(str::parse::<StatusFilter>)
                .transpose()?
                .unwrap_or_default(),
            application_type: application_type
                .map(str::parse::<TypeFilter>)
                .transpose()?
                .unwrap_or_default(),
            sort: sort
                .map(str::parse::<SortKey>)
                .transpose()?
                .unwrap_or_default(),
        })
    }

    pub fn matches(&self, application: &Application) -> bool {
        self.status.matches(application.app_status)
            && self.application_type.matches(application.application_type)
    }

    pub fn apply<'a>(&self, applications: &'a [Application]) -> Vec<&'a Application> {
        filter_and_sort(
            applications,
            self.status,
            self.application_type,
            self.sort,
        )
    }
}

/// Records passing both filters, ordered by `sort`. Ties keep their input order.
pub fn filter_and_sort(
    applications: &[Application],
    status: StatusFilter,
    application_type: TypeFilter,
    sort: SortKey,
) -> Vec<&Application> {
    let query = ListingQuery {
        status,
        application_type,
        sort,
    };
    let mut selected: Vec<&Application> = applications
        .iter()
        .filter(|application| query.matches(application))
        .collect();

    selected.sort_by(|left, right| sort.compare(left, right));
    selected
}

/// Job and education halves of an already ordered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainPartition<'a> {
    pub jobs: Vec<&'a Application>,
    pub education: Vec<&'a Application>,
}

impl DomainPartition<'_> {
    pub fn len(&self) -> usize {
        self.jobs.len() + self.education.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty() && self.education.is_empty()
    }
}

pub fn partition_by_domain<'a, I>(ordered: I) -> DomainPartition<'a>
where
    I: IntoIterator<Item = &'a Application>,
{
    let (jobs, education): (Vec<_>, Vec<_>) = ordered
        .into_iter()
        .partition(|application| application.is_job());
    DomainPartition { jobs, education }
}
