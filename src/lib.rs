//! Taskhub: a small task-management REST service.
//!
//! # Architecture
//!
//! Taskhub follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task validation, pagination, persistence, and HTTP surface
//! - [`config`]: Layered server configuration
//! - [`shutdown`]: Graceful-shutdown signal handling

pub mod config;
pub mod shutdown;
pub mod task;
