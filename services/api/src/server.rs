use crate::cli::ServeArgs;
use crate::infra::{resolve_snapshot_path, AppState, JsonFileSource};
use crate::routes::with_tracker_routes;
use application_tracker::config::AppConfig;
use application_tracker::error::AppError;
use application_tracker::telemetry;
use application_tracker::tracking::TrackerService;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let snapshot_path = resolve_snapshot_path(&config, args.snapshot.take())?;
    let source = Arc::new(JsonFileSource::new(snapshot_path));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let tracker_service = Arc::new(TrackerService::new(
        source.clone(),
        config.triage.deadline_triage(),
    ));

    let draft_window_days = tracker_service.triage().draft_window().num_days();
    let app = with_tracker_routes(tracker_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        snapshot = %source.path().display(),
        draft_window_days,
        "application tracker ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
