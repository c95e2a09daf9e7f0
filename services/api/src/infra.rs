use application_tracker::config::{AppConfig, ConfigError};
use application_tracker::tracking::{ApplicationSnapshot, ApplicationSource, SourceError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads the JSON export of the persistence layer on every snapshot request, so edits to
/// the file show up on the next dashboard or list request.
#[derive(Debug, Clone)]
pub(crate) struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl ApplicationSource for JsonFileSource {
    fn snapshot(&self) -> Result<ApplicationSnapshot, SourceError> {
        let raw = fs::read_to_string(&self.path).map_err(|err| {
            SourceError::Unavailable(format!("{}: {}", self.path.display(), err))
        })?;
        let snapshot: ApplicationSnapshot = serde_json::from_str(&raw).map_err(|err| {
            SourceError::Malformed(format!("{}: {}", self.path.display(), err))
        })?;

        debug!(
            path = %self.path.display(),
            applications = snapshot.applications.len(),
            "loaded application snapshot"
        );
        Ok(snapshot)
    }
}

/// Command-line override first, then `APP_SNAPSHOT_PATH`.
pub(crate) fn resolve_snapshot_path(
    config: &AppConfig,
    cli_override: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    cli_override
        .or_else(|| config.data.snapshot_path.clone())
        .ok_or(ConfigError::MissingSnapshotPath)
}

#[cfg(test)]
pub(crate) fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/snapshot.json")
}
