use crate::cli::ServeArgs;
use crate::infra::{AppState, DiagnosisState};
use crate::routes::router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use maturity_diagnosis::config::AppConfig;
use maturity_diagnosis::diagnosis::DiagnosisEngine;
use maturity_diagnosis::error::AppError;
use maturity_diagnosis::telemetry::{self, LogSink};
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

    telemetry::init(&config.telemetry, LogSink::Stdout)?;

    let profile = config.diagnosis.build_profile()?;
    info!(
        questionnaire = %profile.questionnaire().name,
        questions = profile.questionnaire().question_count(),
        warnings = profile.warnings().len(),
        "diagnosis profile loaded"
    );
    let diagnosis = DiagnosisState::new(
        DiagnosisEngine::new(profile),
        config.diagnosis.fallback_seed,
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = router(diagnosis)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "maturity diagnosis service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
