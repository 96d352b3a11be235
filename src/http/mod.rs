//! HTTP client module
//!
//! Thin transport over `reqwest` used by the API binder and the backup media
//! downloader.
//!
//! # Features
//!
//! - **Base URL joining**: endpoint paths are resolved against the API root
//! - **Parameter encoding**: query string for GET, form body for POST
//! - **Authentication**: Integration with auth module
//!
//! Requests are never retried; a non-2xx status is returned as
//! [`Error::HttpStatus`](crate::error::Error::HttpStatus).

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};

#[cfg(test)]
mod tests;
