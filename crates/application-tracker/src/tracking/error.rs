/// Contract violations raised when a caller hands the engine a value outside its closed
/// vocabularies. Data-quality problems in records are never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("unknown application type '{0}'")]
    UnknownApplicationType(String),
    #[error("unknown application status '{0}'")]
    UnknownApplicationStatus(String),
    #[error("unknown sort key '{0}'")]
    UnknownSortKey(String),
}
