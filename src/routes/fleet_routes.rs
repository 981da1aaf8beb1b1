use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::dto::fleet_dto::{FleetQueryParams, ServiceCentersQueryParams};
use crate::models::fleet::{FleetOverview, ModelSummary};
use crate::models::model_performance::ModelPerformance;
use crate::models::service_center::{ServiceCenter, ServiceCenterDetail};
use crate::models::snapshot::SnapshotInfo;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_fleet_router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/models", get(get_models))
        .route("/models/:model_id", get(get_model_performance))
        .route("/service-centers", get(get_service_centers))
        .route("/service-centers/:id", get(get_service_center_detail))
        .route("/snapshot", get(get_snapshot_info))
        .route("/snapshot/refresh", post(refresh_snapshot))
}

fn query_params<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    params
        .map(|Query(params)| params)
        .map_err(|rejection| bad_request_error(&rejection.body_text()))
}

async fn get_overview(
    State(state): State<AppState>,
    params: Result<Query<FleetQueryParams>, QueryRejection>,
) -> Result<Json<FleetOverview>, AppError> {
    let params = query_params(params)?;
    let overview = state.analytics.get_overview(params).await?;
    Ok(Json(overview))
}

async fn get_models(
    State(state): State<AppState>,
    params: Result<Query<FleetQueryParams>, QueryRejection>,
) -> Result<Json<Vec<ModelSummary>>, AppError> {
    let params = query_params(params)?;
    let models = state.analytics.get_models(params).await?;
    Ok(Json(models))
}

async fn get_model_performance(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
) -> Result<Json<ModelPerformance>, AppError> {
    let report = state.analytics.get_model_performance(&model_id).await?;
    Ok(Json(report))
}

async fn get_service_centers(
    State(state): State<AppState>,
    params: Result<Query<ServiceCentersQueryParams>, QueryRejection>,
) -> Result<Json<Vec<ServiceCenter>>, AppError> {
    let params = query_params(params)?;
    let centers = state.analytics.get_service_centers(params).await?;
    Ok(Json(centers))
}

async fn get_service_center_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ServiceCenterDetail>, AppError> {
    let detail = state.analytics.get_service_center_detail(&id).await?;
    Ok(Json(detail))
}

async fn get_snapshot_info(State(state): State<AppState>) -> Result<Json<SnapshotInfo>, AppError> {
    Ok(Json(state.analytics.snapshot_info().await?))
}

async fn refresh_snapshot(State(state): State<AppState>) -> Result<Json<SnapshotInfo>, AppError> {
    Ok(Json(state.analytics.refresh_snapshot().await?))
}
