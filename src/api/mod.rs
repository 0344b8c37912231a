//! HTTP surface for task management.
//!
//! Routes under `/tasks` translate requests into [`TaskService`] calls and
//! map outcomes to status codes:
//!
//! | Method | Path          | Success |
//! |--------|---------------|---------|
//! | GET    | `/tasks`      | 200     |
//! | GET    | `/tasks/{id}` | 200     |
//! | POST   | `/tasks`      | 201     |
//! | PUT    | `/tasks/{id}` | 200     |
//! | DELETE | `/tasks/{id}` | 204     |
//! | PATCH  | `/tasks/{id}` | 200     |
//!
//! An unknown identifier yields 404 with an empty body.
//!
//! [`TaskService`]: crate::task::ports::TaskService

mod error;
mod handlers;
mod routes;

pub use error::ApiError;
pub use routes::{AppState, router};
