use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, InMemoryProfileArchive, InMemorySchemeCatalog};
use crate::routes::with_scheme_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use scheme_finder::config::AppConfig;
use scheme_finder::error::AppError;
use scheme_finder::schemes::{MatchPolicy, SchemeFinderService};
use scheme_finder::telemetry;
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

    let snapshot = load_catalog(config.catalog.source.as_deref())?;
    let scheme_count = snapshot.schemes.len();
    let catalog = Arc::new(InMemorySchemeCatalog::new(snapshot));
    let archive = Arc::new(InMemoryProfileArchive::new(&config.archive));
    let policy = MatchPolicy::from(&config.matching);
    let scheme_service = Arc::new(SchemeFinderService::new(
        catalog,
        archive,
        policy,
        config.catalog.forms_dir.clone(),
    ));

    let app = with_scheme_routes(scheme_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        schemes = scheme_count,
        high_min_reasons = policy.high_min_reasons(),
        "scheme finder ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
