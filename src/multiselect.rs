//! Multiselect component configuration
//!
//! The props a selection component receives. The fetch layer never reads
//! them; they are here so the consumer and the fetcher share one definition
//! of the endpoint and page size.

use crate::types::FetchRequest;
use serde::{Deserialize, Serialize};

/// Props of a multiselect whose options come from a paginated endpoint.
///
/// `V` is the caller's selection representation: a single id, a list of
/// ids, full [`Item`](crate::Item) values, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSelectProps<V> {
    /// Value of the select
    pub model_value: V,

    /// API URL to fetch the options
    pub api_url: String,

    /// Placeholder for the select
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl<V> MultiSelectProps<V> {
    pub fn new(model_value: V, api_url: impl Into<String>) -> Self {
        Self {
            model_value,
            api_url: api_url.into(),
            placeholder: None,
        }
    }

    /// Set the placeholder text
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Request for the first page of options
    pub fn first_page(&self, limit: u32) -> FetchRequest {
        FetchRequest::first_page(self.api_url.clone(), limit)
    }
}
