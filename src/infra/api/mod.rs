//! Outbound client for the blog REST API.

mod client;
mod error;

pub use client::{API_KEY_HEADER, ApiClient, RequestOptions};
pub use error::{ApiError, FailureKind};
