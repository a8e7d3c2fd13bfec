//! HTTP client module
//!
//! Provides the items client and the single-page fetch operation.
//!
//! # Features
//!
//! - **Explicit Client**: one `ItemsClient` is built by the application and
//!   passed into every fetch
//! - **Relative Endpoints**: paths resolve against an optional base URL
//! - **Typed Decoding**: bodies decode straight into `ApiResponse`

mod client;

pub use client::{fetch_items, ClientConfig, ClientConfigBuilder, ItemsClient};

#[cfg(test)]
mod tests;
