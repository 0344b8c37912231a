//! Taskboard: a small REST service for managing to-do tasks.
//!
//! Clients list, fetch, create, replace, delete, and complete tasks over
//! HTTP. Each task carries a service-assigned identifier, free-form content,
//! and a done flag.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//!
//! # Modules
//!
//! - [`task`]: Task domain, ports, storage adapters, and services
//! - [`api`]: `axum` router mapping `/tasks` requests onto the task service
//! - [`config`]: Command-line and environment configuration
//! - [`server`]: Listener setup and graceful shutdown
//! - [`telemetry`]: `tracing` subscriber installation

pub mod api;
pub mod config;
pub mod server;
pub mod task;
pub mod telemetry;
