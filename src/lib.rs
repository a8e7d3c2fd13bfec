//! # item-fetcher
//!
//! Typed fetching of cursor-paginated item lists, the data source behind a
//! multiselect option list.
//!
//! ## Features
//!
//! - **Single-page fetch**: one `GET {api_url}?cursor=..&limit=..` decoded into
//!   [`ApiResponse`]
//! - **Explicit client**: the application owns one [`ItemsClient`] and passes it in
//! - **Page walking**: follow `next`/`previous` cursors one request at a time
//! - **Multiselect props**: [`MultiSelectProps`] with a caller-chosen selection type
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use item_fetcher::{fetch_items, ClientConfig, FetchRequest, ItemsClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::builder()
//!         .base_url("https://shop.example.com")
//!         .build();
//!     let client = ItemsClient::with_config(config)?;
//!
//!     let page = fetch_items(&client, &FetchRequest::first_page("/api/items", 20)).await?;
//!     for item in &page.items {
//!         println!("{} {}", item.id, item.name);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Response and request types
pub mod types;

/// HTTP client and the single-page fetch
pub mod http;

/// Cursor walking
pub mod pagination;

/// Multiselect component props
pub mod multiselect;

/// Config file loading
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::FetcherConfig;
pub use http::{fetch_items, ClientConfig, ItemsClient};
pub use multiselect::MultiSelectProps;
pub use pagination::{PageSource, PageWalker};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
