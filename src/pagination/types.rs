//! Pagination traits

use crate::error::Result;
use crate::types::{ApiResponse, FetchRequest};
use async_trait::async_trait;

/// Anything that can produce one page of items for a request
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page described by `request`
    async fn fetch_page(&self, request: &FetchRequest) -> Result<ApiResponse>;
}
