//! The Color API client
//!
//! This module provides:
//! - `ColorApiClient` for fetching generated palettes
//! - Response models for the `/scheme` endpoint
//! - `FetchError`, which keeps transport, status and body failures apart
//!
//! API Documentation: https://www.thecolorapi.com/docs

pub mod client;
pub mod models;

#[cfg(test)]
pub mod mock;

pub use client::{ColorApiClient, DEFAULT_COUNT};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, reset, timed out).
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else if e.is_decode() {
            FetchError::Malformed(format!("{e:#}"))
        } else {
            FetchError::Network(format!("{e:#}"))
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Malformed(e.to_string())
    }
}
