use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryProfileRepository};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use campus_connect::catalog::CatalogStore;
use campus_connect::config::AppConfig;
use campus_connect::error::AppError;
use campus_connect::profiles::RecommendationService;
use campus_connect::telemetry;
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
    if let Some(directory) = args.catalog_dir.take() {
        config.catalog.directory = directory;
    }

    telemetry::init(&config.telemetry)?;

    let catalogs = Arc::new(CatalogStore::load(config.catalog.clone())?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        catalogs: catalogs.clone(),
    };

    let repository = Arc::new(InMemoryProfileRepository::default());
    let service = Arc::new(RecommendationService::new(repository, catalogs));

    let app = with_service_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "campus connect recommendation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
