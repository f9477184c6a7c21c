//! All Request Thursdays dashboard server library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod reports;
pub mod server;

// Re-export commonly used types for convenience
pub use dashboard::{Dashboard, DashboardSettings};
pub use dataset::{load_dataset, Dataset};
pub use server::{run_server, RequestsLoggingLevel};
