//! `OpenAPI` 3 description of the task API, served without credentials.

use serde_json::{Value, json};

/// Path the document is served from.
pub const API_DOCS_PATH: &str = "/v3/api-docs";

/// Builds the `OpenAPI` document for every route the router exposes.
#[must_use]
pub fn api_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "taskhub",
            "description": "Create, list, fetch and complete tasks.",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "security": [{ "bearerAuth": [] }],
        "paths": {
            "/tasks": {
                "get": list_tasks_operation(),
                "post": create_task_operation(),
            },
            "/tasks/bulk": { "post": create_multiple_tasks_operation() },
            "/tasks/{id}": { "get": get_task_operation() },
            "/tasks/{id}/status": { "patch": update_task_status_operation() },
            "/health": { "get": health_operation() },
            (API_DOCS_PATH): { "get": api_docs_operation() },
        },
        "components": {
            "securitySchemes": {
                "bearerAuth": { "type": "http", "scheme": "bearer" },
            },
            "schemas": schemas(),
        },
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn json_content(schema: Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn error_response(description: &str) -> Value {
    json!({ "description": description, "content": json_content(schema_ref("ErrorResponse")) })
}

fn task_id_parameter() -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "string", "format": "uuid" },
    })
}

fn create_task_operation() -> Value {
    json!({
        "summary": "Create a task",
        "operationId": "createTask",
        "requestBody": {
            "required": true,
            "content": json_content(schema_ref("CreateTaskRequest")),
        },
        "responses": {
            "201": {
                "description": "Task created",
                "content": json_content(schema_ref("Task")),
            },
            "400": error_response("Blank label or description, or undecodable body"),
            "401": error_response("Missing or unknown bearer token"),
        },
    })
}

fn create_multiple_tasks_operation() -> Value {
    json!({
        "summary": "Create several tasks at once; nothing is stored if any entry is invalid",
        "operationId": "createMultipleTasks",
        "requestBody": {
            "required": true,
            "content": json_content(schema_ref("CreateMultipleTasksRequest")),
        },
        "responses": {
            "201": {
                "description": "Tasks created, in request order",
                "content": json_content(schema_ref("MultipleTasks")),
            },
            "400": error_response("An entry failed validation"),
            "401": error_response("Missing or unknown bearer token"),
        },
    })
}

fn get_task_operation() -> Value {
    json!({
        "summary": "Fetch a task",
        "operationId": "getTaskById",
        "parameters": [task_id_parameter()],
        "responses": {
            "200": { "description": "The task", "content": json_content(schema_ref("Task")) },
            "400": error_response("The id is not a UUID"),
            "401": error_response("Missing or unknown bearer token"),
            "404": error_response("TASK_NOT_FOUND"),
        },
    })
}

fn list_tasks_operation() -> Value {
    json!({
        "summary": "List a page of tasks",
        "operationId": "getTasks",
        "parameters": [
            {
                "name": "page",
                "in": "query",
                "schema": { "type": "integer", "format": "int64", "minimum": 0, "default": 0 },
            },
            {
                "name": "size",
                "in": "query",
                "schema": {
                    "type": "integer",
                    "format": "int64",
                    "minimum": 0,
                    "maximum": 100,
                    "default": 10,
                },
            },
        ],
        "responses": {
            "200": {
                "description": "One page of tasks",
                "content": json_content(schema_ref("TasksCatalogue")),
            },
            "400": error_response(
                "PAGE_NUMBER_NEGATIVE, PAGE_SIZE_NEGATIVE or PAGE_SIZE_TOO_LARGE"
            ),
            "401": error_response("Missing or unknown bearer token"),
        },
    })
}

fn update_task_status_operation() -> Value {
    json!({
        "summary": "Set the completion flag of a task",
        "operationId": "updateTaskStatus",
        "parameters": [task_id_parameter()],
        "requestBody": {
            "required": true,
            "content": json_content(schema_ref("UpdateTaskStatusRequest")),
        },
        "responses": {
            "200": {
                "description": "The updated task",
                "content": json_content(schema_ref("Task")),
            },
            "400": error_response("Undecodable id or body"),
            "401": error_response("Missing or unknown bearer token"),
            "404": error_response("TASK_NOT_FOUND or TASK_UPDATE_FAILED"),
        },
    })
}

fn health_operation() -> Value {
    json!({
        "summary": "Liveness check",
        "operationId": "health",
        "security": [],
        "responses": {
            "200": {
                "description": "Service is up",
                "content": json_content(schema_ref("Health")),
            },
        },
    })
}

fn api_docs_operation() -> Value {
    json!({
        "summary": "This document",
        "operationId": "apiDocs",
        "security": [],
        "responses": {
            "200": {
                "description": "OpenAPI document",
                "content": json_content(json!({ "type": "object" })),
            },
        },
    })
}

fn schemas() -> Value {
    json!({
        "Task": {
            "type": "object",
            "required": ["id", "label", "description", "completed"],
            "properties": {
                "id": { "type": "string", "format": "uuid" },
                "label": { "type": "string" },
                "description": { "type": "string" },
                "completed": { "type": "boolean" },
            },
        },
        "CreateTaskRequest": {
            "type": "object",
            "required": ["label", "description"],
            "properties": {
                "label": { "type": "string", "minLength": 1 },
                "description": { "type": "string", "minLength": 1 },
                "completed": { "type": "boolean", "default": false },
            },
        },
        "CreateMultipleTasksRequest": {
            "type": "object",
            "required": ["tasks"],
            "properties": {
                "tasks": { "type": "array", "items": schema_ref("CreateTaskRequest") },
            },
        },
        "MultipleTasks": {
            "type": "object",
            "required": ["tasks"],
            "properties": {
                "tasks": { "type": "array", "items": schema_ref("Task") },
            },
        },
        "UpdateTaskStatusRequest": {
            "type": "object",
            "required": ["completed"],
            "properties": { "completed": { "type": "boolean" } },
        },
        "PaginationInfo": {
            "type": "object",
            "required": ["page", "size", "totalCount"],
            "properties": {
                "page": { "type": "integer", "format": "int64" },
                "size": { "type": "integer", "format": "int32" },
                "totalCount": { "type": "integer", "format": "int64" },
            },
        },
        "TasksCatalogue": {
            "type": "object",
            "required": ["tasks", "pagination"],
            "properties": {
                "tasks": { "type": "array", "items": schema_ref("Task") },
                "pagination": schema_ref("PaginationInfo"),
            },
        },
        "Health": {
            "type": "object",
            "required": ["status", "version"],
            "properties": {
                "status": { "type": "string" },
                "version": { "type": "string" },
            },
        },
        "ErrorResponse": {
            "type": "object",
            "required": ["timestamp", "status", "error", "path"],
            "properties": {
                "timestamp": { "type": "string", "format": "date-time" },
                "status": { "type": "integer" },
                "error": { "type": "string" },
                "path": { "type": "string" },
                "code": { "type": "string" },
                "details": { "type": "array", "items": { "type": "string" } },
            },
        },
    })
}
