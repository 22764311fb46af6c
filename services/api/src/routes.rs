use crate::infra::{fallback_for, AppState, DiagnosisState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use maturity_diagnosis::diagnosis::narrative::organization_context;
use maturity_diagnosis::diagnosis::{
    BlockLadder, CompanySize, DiagnosisResult, OrganizationInfo, OverallLadder, Questionnaire,
    Responses,
};
use maturity_diagnosis::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct DiagnosisRequest {
    pub(crate) responses: Responses,
    /// Headcount tier label such as `"6-15"`.
    pub(crate) employee_count: String,
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionnaireResponse {
    pub(crate) questionnaire: Questionnaire,
    pub(crate) company_sizes: Vec<CompanySizeOption>,
    pub(crate) block_levels: BlockLadder,
    pub(crate) overall_levels: OverallLadder,
    pub(crate) warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompanySizeOption {
    pub(crate) value: CompanySize,
    pub(crate) min_employees: u32,
    pub(crate) context: &'static str,
}

pub(crate) fn router(diagnosis: DiagnosisState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/questionnaire", get(questionnaire_endpoint))
        .route("/api/v1/diagnosis", post(diagnosis_endpoint))
        .layer(Extension(diagnosis))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questionnaire_endpoint(
    Extension(state): Extension<DiagnosisState>,
) -> Json<QuestionnaireResponse> {
    let profile = state.engine.profile();
    let company_sizes = CompanySize::ordered()
        .into_iter()
        .map(|size| CompanySizeOption {
            value: size,
            min_employees: size.headcount_floor(),
            context: organization_context(size),
        })
        .collect();

    Json(QuestionnaireResponse {
        questionnaire: profile.questionnaire().clone(),
        company_sizes,
        block_levels: profile.block_ladder().clone(),
        overall_levels: profile.overall_ladder().clone(),
        warnings: profile.warnings().iter().map(ToString::to_string).collect(),
    })
}

pub(crate) async fn diagnosis_endpoint(
    Extension(state): Extension<DiagnosisState>,
    Json(payload): Json<DiagnosisRequest>,
) -> Result<Json<DiagnosisResult>, AppError> {
    let DiagnosisRequest {
        responses,
        employee_count,
        seed,
    } = payload;

    let size: CompanySize = employee_count.parse()?;
    let mut fallback = fallback_for(seed.or(state.fallback_seed));
    let result = state
        .engine
        .diagnose(&responses, OrganizationInfo::new(size), &mut fallback);

    info!(
        size = %size,
        answered = responses.len(),
        percentage = result.percentage,
        level = result.overall_level.label(),
        "diagnosis served"
    );

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use maturity_diagnosis::diagnosis::{DiagnosisEngine, Preset};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn diagnosis_state(preset: Preset) -> DiagnosisState {
        let profile = preset.profile().expect("preset profile builds");
        DiagnosisState::new(DiagnosisEngine::new(profile), Some(42))
    }

    fn app_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        }
    }

    async fn post_diagnosis(app: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/diagnosis")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");
        let response = app.oneshot(request).await.expect("router responds");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let json = serde_json::from_slice(&bytes).expect("body is json");
        (status, json)
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = readiness_endpoint(Extension(app_state(false)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = readiness_endpoint(Extension(app_state(true)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn questionnaire_endpoint_lists_blocks_and_tiers() {
        let Json(body) = questionnaire_endpoint(Extension(diagnosis_state(Preset::Extended))).await;
        assert_eq!(body.questionnaire.blocks.len(), 6);
        assert_eq!(body.company_sizes.len(), 6);
        assert_eq!(body.company_sizes[2].min_employees, 6);
        assert_eq!(body.warnings.len(), 2);
    }

    #[tokio::test]
    async fn questionnaire_endpoint_publishes_level_ladders() {
        let Json(body) = questionnaire_endpoint(Extension(diagnosis_state(Preset::Extended))).await;
        let json = serde_json::to_value(&body).expect("response serializes");

        assert_eq!(
            json["block_levels"],
            json!({
                "steps": [
                    { "min_percentage": 80, "level": "avanzado" },
                    { "min_percentage": 60, "level": "intermedio" },
                    { "min_percentage": 30, "level": "basico" }
                ],
                "floor": "critico"
            })
        );
        assert_eq!(json["overall_levels"]["steps"][2]["min_percentage"], 35);
        assert_eq!(json["overall_levels"]["floor"], "inicial");
    }

    #[tokio::test]
    async fn diagnosis_endpoint_scores_responses() {
        let app = router(diagnosis_state(Preset::Compact));
        let (status, body) = post_diagnosis(
            app,
            json!({
                "responses": { "proc1": 5, "proc2": 5, "proc3": 5, "proc4": 5 },
                "employee_count": "6-15"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["block_analysis"][0]["percentage"], 100);
        assert_eq!(body["block_analysis"][1]["percentage"], 20);
        assert_eq!(body["percentage"], 36);
        assert_eq!(body["overall_level"], "basico");
        assert_eq!(body["company_size"], "6-15");
        assert_eq!(body["priority_actions"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn seeded_requests_are_repeatable() {
        let body = json!({ "responses": { "tec1": 2 }, "employee_count": "1", "seed": 9 });
        let (_, first) = post_diagnosis(router(diagnosis_state(Preset::Compact)), body.clone()).await;
        let (_, second) = post_diagnosis(router(diagnosis_state(Preset::Compact)), body).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_company_size_is_a_bad_request() {
        let app = router(diagnosis_state(Preset::Compact));
        let (status, body) = post_diagnosis(
            app,
            json!({ "responses": {}, "employee_count": "3-4" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .is_some_and(|message| message.contains("3-4")));
    }
}
