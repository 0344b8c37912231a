//! Step definitions for task REST API scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
