//! End-to-end tests for the HTTP surface, driven through the router with
//! `tower::ServiceExt::oneshot` against the in-memory repository.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use eyre::Result;
use http_body_util::BodyExt;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;
use taskhub::task::{
    adapters::{
        memory::InMemoryTaskRepository,
        web::{BearerAuth, ErrorResponse, router},
    },
    services::TaskServices,
};
use tower::ServiceExt;

const TOKEN: &str = "test-token";

#[fixture]
fn app() -> Router {
    let services = TaskServices::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    router(services, BearerAuth::new([TOKEN.to_owned()]))
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"));
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build")
}

async fn send(app: &Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, body))
}

async fn create(app: &Router, label: &str, description: &str) -> Result<Value> {
    let (status, body) = send(
        app,
        request(
            Method::POST,
            "/tasks",
            Some(json!({ "label": label, "description": description })),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    Ok(body)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_complete_then_list(app: Router) -> Result<()> {
    let created = create(&app, "A", "B").await?;
    assert_eq!(created["label"], "A");
    assert_eq!(created["description"], "B");
    assert_eq!(created["completed"], false);
    let id = created["id"].as_str().expect("id should be a string").to_owned();

    let (update_status, updated) = send(
        &app,
        request(
            Method::PATCH,
            &format!("/tasks/{id}/status"),
            Some(json!({ "completed": true })),
        ),
    )
    .await?;
    assert_eq!(update_status, StatusCode::OK);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["id"], id.as_str());

    let (list_status, listed) =
        send(&app, request(Method::GET, "/tasks?page=0&size=10", None)).await?;
    assert_eq!(list_status, StatusCode::OK);
    assert_eq!(listed["pagination"]["totalCount"], 1);
    assert_eq!(listed["pagination"]["page"], 0);
    assert_eq!(listed["pagination"]["size"], 10);
    assert_eq!(listed["tasks"][0]["completed"], true);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_returns_stored_representation(app: Router) -> Result<()> {
    let created = create(&app, "  padded  ", " text ").await?;
    let id = created["id"].as_str().expect("id should be a string");

    let (status, fetched) = send(&app, request(Method::GET, &format!("/tasks/{id}"), None)).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["label"], "padded");
    Ok(())
}

#[rstest]
#[case(json!({ "label": " ", "description": "x" }), "INVALID_TASK_LABEL")]
#[case(json!({ "label": "x", "description": "" }), "INVALID_TASK_DESCRIPTION")]
#[case(json!({ "label": "", "description": "" }), "INVALID_TASK_LABEL")]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_fields(
    app: Router,
    #[case] payload: Value,
    #[case] code: &str,
) -> Result<()> {
    let (status, body) = send(&app, request(Method::POST, "/tasks", Some(payload))).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body)?;
    assert_eq!(error.status, 400);
    assert_eq!(error.code.as_deref(), Some(code));
    assert_eq!(error.path, "/tasks");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bulk_create_keeps_order_and_is_atomic(app: Router) -> Result<()> {
    let (created_status, created) = send(
        &app,
        request(
            Method::POST,
            "/tasks/bulk",
            Some(json!({ "tasks": [
                { "label": "one", "description": "1" },
                { "label": "two", "description": "2", "completed": true },
            ]})),
        ),
    )
    .await?;
    assert_eq!(created_status, StatusCode::CREATED);
    assert_eq!(created["tasks"][0]["label"], "one");
    assert_eq!(created["tasks"][1]["label"], "two");
    assert_eq!(created["tasks"][1]["completed"], true);

    let (rejected_status, rejected) = send(
        &app,
        request(
            Method::POST,
            "/tasks/bulk",
            Some(json!({ "tasks": [
                { "label": "three", "description": "3" },
                { "label": "four", "description": " " },
            ]})),
        ),
    )
    .await?;
    assert_eq!(rejected_status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected["code"], "INVALID_TASK_DESCRIPTION");

    let (_, listed) = send(&app, request(Method::GET, "/tasks", None)).await?;
    assert_eq!(listed["pagination"]["totalCount"], 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_task_is_not_found(app: Router) -> Result<()> {
    let path = "/tasks/00000000-0000-4000-8000-000000000000";
    let (status, body) = send(&app, request(Method::GET, path, None)).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "TASK_NOT_FOUND");
    assert_eq!(body["path"], path);
    assert_eq!(body["status"], 404);
    assert!(body["timestamp"].is_string());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_update_of_unknown_task_is_not_found(app: Router) -> Result<()> {
    let (status, body) = send(
        &app,
        request(
            Method::PATCH,
            "/tasks/00000000-0000-4000-8000-000000000000/status",
            Some(json!({ "completed": true })),
        ),
    )
    .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "TASK_NOT_FOUND");
    Ok(())
}

#[rstest]
#[case("/tasks?page=-1", "PAGE_NUMBER_NEGATIVE")]
#[case("/tasks?size=-1", "PAGE_SIZE_NEGATIVE")]
#[case("/tasks?size=101", "PAGE_SIZE_TOO_LARGE")]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_paging_is_rejected(
    app: Router,
    #[case] uri: &str,
    #[case] code: &str,
) -> Result<()> {
    let (status, body) = send(&app, request(Method::GET, uri, None)).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], code);
    Ok(())
}

#[rstest]
#[case("/tasks?size=100", 100)]
#[case("/tasks?size=0", 0)]
#[case("/tasks", 10)]
#[tokio::test(flavor = "multi_thread")]
async fn boundary_paging_is_accepted(
    app: Router,
    #[case] uri: &str,
    #[case] size: u64,
) -> Result<()> {
    let (status, body) = send(&app, request(Method::GET, uri, None)).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["size"], size);
    assert_eq!(body["tasks"], json!([]));
    Ok(())
}

#[rstest]
#[case(Method::GET, "/tasks/not-a-uuid", None)]
#[case(Method::GET, "/tasks?page=first", None)]
#[case(Method::POST, "/tasks", Some(json!({ "label": "missing description" })))]
#[case(Method::POST, "/tasks/bulk", Some(json!({ "tasks": "nope" })))]
#[tokio::test(flavor = "multi_thread")]
async fn undecodable_requests_are_bad_requests(
    app: Router,
    #[case] method: Method,
    #[case] uri: &str,
    #[case] body: Option<Value>,
) -> Result<()> {
    let (status, error) = send(&app, request(method, uri, body)).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["status"], 400);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_json_is_a_bad_request(app: Router) -> Result<()> {
    let malformed = Request::builder()
        .method(Method::POST)
        .uri("/tasks")
        .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"label\": "))?;

    let (status, error) = send(&app, malformed).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["path"], "/tasks");
    Ok(())
}

#[rstest]
#[case(None)]
#[case(Some("Bearer wrong-token"))]
#[case(Some("Basic dGVzdDp0ZXN0"))]
#[tokio::test(flavor = "multi_thread")]
async fn task_routes_require_a_known_bearer_token(
    app: Router,
    #[case] authorization: Option<&str>,
) -> Result<()> {
    let mut builder = Request::builder().method(Method::GET).uri("/tasks");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let response = app.oneshot(builder.body(Body::empty())?).await?;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|value| value.to_str().ok()),
        Some("Bearer")
    );
    let bytes = response.into_body().collect().await?.to_bytes();
    let error: ErrorResponse = serde_json::from_slice(&bytes)?;
    assert_eq!(error.code.as_deref(), Some("UNAUTHORIZED"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn health_needs_no_credentials(app: Router) -> Result<()> {
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await?.to_bytes();
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn api_document_needs_no_credentials(app: Router) -> Result<()> {
    let response = app
        .oneshot(Request::builder().uri("/v3/api-docs").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await?.to_bytes();
    let document: Value = serde_json::from_slice(&bytes)?;
    assert!(document["openapi"].as_str().is_some_and(|v| v.starts_with("3.")));
    for (path, method) in [
        ("/tasks", "get"),
        ("/tasks", "post"),
        ("/tasks/bulk", "post"),
        ("/tasks/{id}", "get"),
        ("/tasks/{id}/status", "patch"),
        ("/health", "get"),
    ] {
        assert!(
            document["paths"][path][method].is_object(),
            "{method} {path} is not documented"
        );
    }
    assert_eq!(
        document["components"]["securitySchemes"]["bearerAuth"]["scheme"],
        "bearer"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_routes_and_methods_use_the_error_body(app: Router) -> Result<()> {
    let (missing_status, missing) = send(&app, request(Method::GET, "/projects", None)).await?;
    assert_eq!(missing_status, StatusCode::NOT_FOUND);
    assert_eq!(missing["path"], "/projects");

    let (method_status, method) = send(&app, request(Method::DELETE, "/tasks", None)).await?;
    assert_eq!(method_status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(method["status"], 405);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn disabled_auth_lets_requests_through() -> Result<()> {
    let services = TaskServices::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    let app = router(services, BearerAuth::disabled());

    let response = app
        .oneshot(Request::builder().uri("/tasks").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}
