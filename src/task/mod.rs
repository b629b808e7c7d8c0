//! Task management.
//!
//! Clients create tasks one at a time or in all-or-nothing batches, fetch
//! them by identifier, list them a page at a time, and flip their completion
//! flag. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Use case services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
