use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_quiz_routes;
use archetype_quiz::config::AppConfig;
use archetype_quiz::error::AppError;
use archetype_quiz::submission::{SheetContactStore, SubmissionGateway};
use archetype_quiz::telemetry;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(SheetContactStore::new(
        config.contact_store.sheet_path.clone(),
    ));
    let gateway = Arc::new(SubmissionGateway::new(store));

    let app = with_quiz_routes(gateway)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, sheet = %config.contact_store.sheet_path.display(), "quiz lead-capture service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
