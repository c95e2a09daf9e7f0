use crate::tracking::{DeadlineTriage, DEFAULT_DRAFT_WINDOW_DAYS};
use chrono::Duration;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub triage: TriageConfig,
    pub data: DataConfig,
}

impl AppConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            environment: AppEnvironment::from_str(&env_or("APP_ENV", "development")),
            server: ServerConfig::from_env()?,
            telemetry: TelemetryConfig {
                log_level: env_or("APP_LOG_LEVEL", "info"),
            },
            triage: TriageConfig::from_env()?,
            data: DataConfig::from_env(),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let port = env_or("APP_PORT", "3000")
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        Ok(Self {
            host: env_or("APP_HOST", "127.0.0.1"),
            port,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Deadline triage thresholds.
#[derive(Debug, Clone, Copy)]
pub struct TriageConfig {
    pub draft_window_days: u32,
}

impl TriageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let draft_window_days = match env::var("APP_DRAFT_WINDOW_DAYS") {
            Ok(raw) => parse_window_days(&raw)?,
            Err(_) => DEFAULT_DRAFT_WINDOW_DAYS as u32,
        };
        Ok(Self { draft_window_days })
    }

    pub fn deadline_triage(&self) -> DeadlineTriage {
        DeadlineTriage::new(Duration::days(i64::from(self.draft_window_days)))
    }
}

/// Upper bound on the draft window, roughly a century.
pub const MAX_DRAFT_WINDOW_DAYS: u32 = 36_500;

fn parse_window_days(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|days| *days <= MAX_DRAFT_WINDOW_DAYS)
        .ok_or_else(|| ConfigError::InvalidDraftWindow {
            value: raw.to_string(),
        })
}

/// Where the exported application snapshot lives.
#[derive(Debug, Clone, Default)]
pub struct DataConfig {
    pub snapshot_path: Option<PathBuf>,
}

impl DataConfig {
    fn from_env() -> Self {
        let snapshot_path = env::var_os("APP_SNAPSHOT_PATH")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self { snapshot_path }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidDraftWindow { value: String },
    MissingSnapshotPath,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDraftWindow { value } => write!(
                f,
                "APP_DRAFT_WINDOW_DAYS must be a number of days between 0 and {}, got '{}'",
                MAX_DRAFT_WINDOW_DAYS, value
            ),
            ConfigError::MissingSnapshotPath => write!(
                f,
                "no application snapshot configured; set APP_SNAPSHOT_PATH or pass --snapshot"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidDraftWindow { .. }
            | ConfigError::MissingSnapshotPath => None,
        }
    }
}
