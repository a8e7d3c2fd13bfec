//! Common types used throughout item-fetcher
//!
//! The response shapes mirror the items endpoint's JSON exactly; field
//! names are not renamed so a decoded body re-encodes to the same document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys the server sent that the typed fields do not name
pub type ExtraFields = Map<String, Value>;

// ============================================================================
// Response Types
// ============================================================================

/// A single selectable item. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    /// Any other keys of the item object, kept as sent
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: ExtraFields::new(),
        }
    }
}

/// Cursor metadata for one page of items.
///
/// `next` and `previous` are the cursors to send back for the adjacent
/// pages; `None` (JSON `null` or a missing key) means there is no page in
/// that direction. `limit` echoes the page size of the producing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub next: Option<i64>,
    #[serde(default)]
    pub previous: Option<i64>,
    pub limit: u32,
    /// Any other keys of the pagination block, such as a `total`
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Pagination {
    pub fn new(next: Option<i64>, previous: Option<i64>, limit: u32) -> Self {
        Self {
            next,
            previous,
            limit,
            extra: ExtraFields::new(),
        }
    }

    /// Cursor for the page in the given direction
    pub fn cursor(&self, direction: Direction) -> Option<i64> {
        match direction {
            Direction::Next => self.next,
            Direction::Previous => self.previous,
        }
    }

    /// Check if a following page exists
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Check if a preceding page exists
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

/// One page of items plus its pagination block.
///
/// Top-level keys besides `items` and `pagination` land in `extra`, so a
/// decoded page re-encodes to the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub items: Vec<Item>,
    pub pagination: Pagination,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ApiResponse {
    pub fn new(items: Vec<Item>, pagination: Pagination) -> Self {
        Self {
            items,
            pagination,
            extra: ExtraFields::new(),
        }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Request Types
// ============================================================================

/// Direction to move through a cursor-paginated listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Next,
    Previous,
}

/// Query parameters of one page request.
///
/// Serialized as `cursor=<cursor>&limit=<limit>`, in that order and with
/// nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub cursor: i64,
    pub limit: u32,
}

impl PageRequest {
    /// Cursor value of the first page
    pub const FIRST_CURSOR: i64 = 0;

    pub fn new(limit: u32, cursor: i64) -> Self {
        Self { cursor, limit }
    }

    /// Request for the first page with the given page size
    pub fn first(limit: u32) -> Self {
        Self::new(limit, Self::FIRST_CURSOR)
    }
}

/// Everything needed to fetch one page: the endpoint plus its query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Absolute URL, or a path resolved against the client's base URL
    pub api_url: String,
    pub page: PageRequest,
}

impl FetchRequest {
    pub fn new(api_url: impl Into<String>, limit: u32, cursor: i64) -> Self {
        Self {
            api_url: api_url.into(),
            page: PageRequest::new(limit, cursor),
        }
    }

    /// Request for the first page of `api_url`
    pub fn first_page(api_url: impl Into<String>, limit: u32) -> Self {
        Self {
            api_url: api_url.into(),
            page: PageRequest::first(limit),
        }
    }

    pub fn limit(&self) -> u32 {
        self.page.limit
    }

    pub fn cursor(&self) -> i64 {
        self.page.cursor
    }

    /// Request for the page adjacent to `response` in `direction`.
    ///
    /// Keeps this request's URL and page size. Returns `None` when the
    /// response has no cursor in that direction.
    pub fn follow(&self, response: &ApiResponse, direction: Direction) -> Option<Self> {
        let cursor = response.pagination.cursor(direction)?;
        Some(Self {
            api_url: self.api_url.clone(),
            page: PageRequest::new(self.page.limit, cursor),
        })
    }
}
