//! Task management for Taskboard.
//!
//! Tasks are created with a service-assigned identifier, read individually or
//! as a list, replaced, marked done, and deleted. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
