//! Shared world state for task REST API scenarios.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use eyre::WrapErr;
use rstest::fixture;
use taskboard::{
    api::router,
    task::{
        adapters::memory::InMemoryTaskRepository, ports::TaskService,
        services::TaskManagementService,
    },
};
use tower::ServiceExt;

/// Scenario world holding the router and the most recent response.
pub struct TaskApiWorld {
    pub app: Router,
    pub last_status: Option<StatusCode>,
    pub last_body: Option<Vec<u8>>,
}

impl TaskApiWorld {
    /// Creates a world backed by a fresh in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTaskRepository::new());
        let service: Arc<dyn TaskService> = Arc::new(TaskManagementService::new(repository));
        Self {
            app: router(service),
            last_status: None,
            last_body: None,
        }
    }

    /// Dispatches a request and records the response.
    ///
    /// # Errors
    ///
    /// Returns an error when dispatch or body collection fails.
    pub fn dispatch(&mut self, request: Request<Body>) -> Result<(), eyre::Report> {
        let app = self.app.clone();
        let (status, body) = run_async(async move {
            let response = app.oneshot(request).await.wrap_err("dispatch request")?;
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX)
                .await
                .wrap_err("read response body")?;
            Ok::<_, eyre::Report>((status, bytes.to_vec()))
        })?;
        self.last_status = Some(status);
        self.last_body = Some(body);
        Ok(())
    }
}

impl Default for TaskApiWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskApiWorld {
    TaskApiWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
