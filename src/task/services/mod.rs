//! Application services for task management.

mod management;

pub use management::TaskManagementService;
