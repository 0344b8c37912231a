//! Router construction.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::task::ports::TaskService;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    service: Arc<dyn TaskService>,
}

impl AppState {
    /// Wraps the service the handlers delegate to.
    #[must_use]
    pub const fn new(service: Arc<dyn TaskService>) -> Self {
        Self { service }
    }

    pub(super) fn service(&self) -> &dyn TaskService {
        self.service.as_ref()
    }
}

/// Builds the `/tasks` router over the given service.
///
/// Cross-origin requests are allowed from any origin.
pub fn router(service: Arc<dyn TaskService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route(
            "/tasks/{id}",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task)
                .patch(handlers::mark_done),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState::new(service))
}
