//! API Command Wrappers
//!
//! Frontend bindings to the remote task service.

mod tasks;

pub use tasks::HttpTaskApi;

use crate::config::ApiConfig;

/// Client for the configured task API
pub fn api() -> HttpTaskApi {
    HttpTaskApi::new(ApiConfig::from_build_env())
}
