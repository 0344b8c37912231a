//! Runs the Taskboard HTTP server over in-memory storage.
//!
//! Usage:
//!
//! ```text
//! taskboard [--host <addr>] [--port <port>] [--log-filter <directive>]
//! ```

use std::sync::Arc;

use clap::Parser;
use taskboard::{
    config::ServerConfig,
    server,
    task::{
        adapters::memory::InMemoryTaskRepository, ports::TaskService,
        services::TaskManagementService,
    },
    telemetry,
};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::parse();
    telemetry::init(&config.log_filter)?;

    let repository = Arc::new(InMemoryTaskRepository::new());
    let service: Arc<dyn TaskService> = Arc::new(TaskManagementService::new(repository));

    server::serve(&config, service).await?;
    Ok(())
}
