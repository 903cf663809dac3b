//! REST API client module for the practice admin service.
//!
//! All endpoints live under the `/admin` prefix of a configurable base URL
//! and use bearer token authentication obtained from the login endpoint.

pub mod client;
pub mod error;
#[cfg(test)]
pub mod testutil;

pub use client::{ApiClient, ApiResult};
pub use error::ApiError;
