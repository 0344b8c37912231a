//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces: [`TaskRepository`] is
//! implemented by storage adapters, [`TaskService`] is consumed by the HTTP
//! layer.

pub mod repository;
pub mod service;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use service::{TaskService, TaskServiceError, TaskServiceResult};
