//! HTTP client module
//!
//! Thin wrapper over reqwest for the collection endpoint.
//!
//! # Features
//!
//! - **Status classification**: 4xx/5xx become `Error::HttpStatus`
//! - **Timeouts**: reported as `Error::Timeout`
//! - **Default headers**: applied to every request, overridable per request

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
