//! Data transfer objects (DTOs) for API payloads.
//!
//! - `entry`: ContentEntry (upstream listing item), FileEntry, RepoMap,
//!   FileMapResponse
//! - `service`: ServiceInfo, HealthStatus

pub mod entry;
pub mod service;

pub use entry::*;
pub use service::*;
