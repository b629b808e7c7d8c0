//! axum handlers for the task endpoints.

use super::dto::{
    CreateMultipleTasksRequestDto, CreateTaskRequestDto, MultipleTasksResponseDto, PageParams,
    TaskResponseDto, TasksCatalogueDto, UpdateTaskStatusRequestDto,
};
use super::{ApiError, TaskApiState};
use crate::task::{domain::TaskId, ports::TaskRepository, services::UpdateTaskStatusCommand};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::{Method, StatusCode};
use mockable::Clock;
use serde::Serialize;
use uuid::Uuid;

/// Result type of every task handler.
type ApiResult<T> = Result<T, ApiError>;

/// `POST /tasks`
pub async fn create_task<R, C>(
    State(state): State<TaskApiState<R, C>>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<CreateTaskRequestDto>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskResponseDto>)>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(request) = payload.map_err(|rejection| json_rejected(&rejection, uri.path()))?;
    let created = state
        .services()
        .create_task
        .execute(request.into_command())
        .await
        .map_err(|err| ApiError::from_use_case(&err, uri.path()))?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// `POST /tasks/bulk`
pub async fn create_multiple_tasks<R, C>(
    State(state): State<TaskApiState<R, C>>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<CreateMultipleTasksRequestDto>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MultipleTasksResponseDto>)>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(request) = payload.map_err(|rejection| json_rejected(&rejection, uri.path()))?;
    let created = state
        .services()
        .create_multiple_tasks
        .execute(request.into_command())
        .await
        .map_err(|err| ApiError::from_use_case(&err, uri.path()))?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// `GET /tasks/{id}`
pub async fn get_task<R, C>(
    State(state): State<TaskApiState<R, C>>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<TaskResponseDto>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path(id) = id.map_err(|rejection| {
        rejected("path", rejection.body_text(), uri.path())
    })?;
    let task = state
        .services()
        .get_task_by_id
        .execute(TaskId::from_uuid(id))
        .await
        .map_err(|err| ApiError::from_use_case(&err, uri.path()))?;
    Ok(Json(task.into()))
}

/// `GET /tasks?page=&size=`
pub async fn list_tasks<R, C>(
    State(state): State<TaskApiState<R, C>>,
    OriginalUri(uri): OriginalUri,
    params: Result<Query<PageParams>, QueryRejection>,
) -> ApiResult<Json<TasksCatalogueDto>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(params) = params.map_err(|rejection| {
        rejected("query", rejection.body_text(), uri.path())
    })?;
    let catalogue = state
        .services()
        .get_tasks
        .execute(params.page, params.size)
        .await
        .map_err(|err| ApiError::from_use_case(&err, uri.path()))?;
    Ok(Json(catalogue.into()))
}

/// `PATCH /tasks/{id}/status`
pub async fn update_task_status<R, C>(
    State(state): State<TaskApiState<R, C>>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateTaskStatusRequestDto>, JsonRejection>,
) -> ApiResult<Json<TaskResponseDto>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path(id) = id.map_err(|rejection| {
        rejected("path", rejection.body_text(), uri.path())
    })?;
    let Json(request) = payload.map_err(|rejection| json_rejected(&rejection, uri.path()))?;
    let command = UpdateTaskStatusCommand::new(TaskId::from_uuid(id), request.completed);
    let task = state
        .services()
        .update_task_status
        .execute(command)
        .await
        .map_err(|err| ApiError::from_use_case(&err, uri.path()))?;
    Ok(Json(task.into()))
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// `GET /health`, reachable without credentials.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Serves the `OpenAPI` document.
pub async fn api_docs() -> Json<serde_json::Value> {
    Json(super::openapi::api_document())
}

/// Fallback for paths no route matches.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::route_not_found(uri.path())
}

/// Fallback for known paths called with an unsupported method.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    tracing::debug!(%method, path = uri.path(), "method not allowed");
    ApiError::method_not_allowed(method.as_str(), uri.path())
}

fn json_rejected(rejection: &JsonRejection, path: &str) -> ApiError {
    rejected("body", rejection.body_text(), path)
}

fn rejected(source: &str, reason: String, path: &str) -> ApiError {
    tracing::debug!(source, reason = %reason, path, "request could not be decoded");
    ApiError::bad_request("Could not deserialize request", path).with_details([reason])
}
