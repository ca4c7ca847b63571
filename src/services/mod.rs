//! External Services
//!
//! - api: background worker that runs Pinata requests off the UI loop

pub mod api;

// Re-export commonly used types for convenience
pub use api::{execute_request, spawn_api_service, ApiRequest, ApiResponse, Priority};
