//! Adapter implementations for task management ports.

pub mod memory;
