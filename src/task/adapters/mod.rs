//! Adapter implementations for task management ports.
//!
//! - [`memory`]: in-process repository for tests and database-less runs
//! - [`postgres`]: Diesel-backed `PostgreSQL` repository
//! - [`web`]: axum inbound adapter exposing the task use cases over HTTP

pub mod memory;
pub mod postgres;
pub mod web;
