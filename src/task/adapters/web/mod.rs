//! axum inbound adapter for the task API.
//!
//! | Method | Path                  | Use case                 |
//! |--------|-----------------------|--------------------------|
//! | POST   | `/tasks`              | create one task          |
//! | POST   | `/tasks/bulk`         | create a batch of tasks  |
//! | GET    | `/tasks/{id}`         | fetch a task             |
//! | GET    | `/tasks?page=&size=`  | list a page of tasks     |
//! | PATCH  | `/tasks/{id}/status`  | set the completion flag  |
//! | GET    | `/health`             | liveness, no credentials |
//! | GET    | `/v3/api-docs`        | `OpenAPI` document       |
//!
//! Every `/tasks` route sits behind [`BearerAuth`]; the health check and the
//! `OpenAPI` document do not.

mod auth;
pub mod dto;
mod error;
mod handlers;
pub mod openapi;

pub use auth::{BearerAuth, require_bearer_token};
pub use error::{ApiError, ErrorResponse};
pub use handlers::HealthResponse;

use crate::task::{ports::TaskRepository, services::TaskServices};
use axum::Router;
use axum::middleware;
use axum::routing::{get, patch, post};
use mockable::Clock;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state handed to every task handler.
pub struct TaskApiState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    services: Arc<TaskServices<R, C>>,
}

impl<R, C> TaskApiState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wraps the task services for sharing across requests.
    #[must_use]
    pub fn new(services: TaskServices<R, C>) -> Self {
        Self {
            services: Arc::new(services),
        }
    }

    /// Returns the wrapped services.
    #[must_use]
    pub fn services(&self) -> &TaskServices<R, C> {
        &self.services
    }
}

impl<R, C> Clone for TaskApiState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            services: Arc::clone(&self.services),
        }
    }
}

/// Builds the complete HTTP router for the task API.
pub fn router<R, C>(services: TaskServices<R, C>, auth: BearerAuth) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_routes = Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks::<R, C>).post(handlers::create_task::<R, C>),
        )
        .route("/tasks/bulk", post(handlers::create_multiple_tasks::<R, C>))
        .route("/tasks/{id}", get(handlers::get_task::<R, C>))
        .route(
            "/tasks/{id}/status",
            patch(handlers::update_task_status::<R, C>),
        )
        .route_layer(middleware::from_fn_with_state(auth, require_bearer_token))
        .with_state(TaskApiState::new(services));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(openapi::API_DOCS_PATH, get(handlers::api_docs))
        .merge(task_routes)
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(TraceLayer::new_for_http())
}
