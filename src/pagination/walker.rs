//! Sequential page walker
//!
//! Each request is only built from the previous response's cursor, so two
//! requests of one walk are never in flight at the same time.

use super::types::PageSource;
use crate::error::Result;
use crate::types::{ApiResponse, Direction, FetchRequest, Item};
use futures::stream::{self, Stream};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Follows page cursors from a starting request until none remain.
pub struct PageWalker<'a, S: PageSource + ?Sized> {
    source: &'a S,
    pending: Option<FetchRequest>,
    direction: Direction,
    max_pages: Option<usize>,
    pages_fetched: usize,
    seen_cursors: HashSet<i64>,
}

impl<'a, S: PageSource + ?Sized> PageWalker<'a, S> {
    /// Create a walker starting at `start`, moving forward
    pub fn new(source: &'a S, start: FetchRequest) -> Self {
        Self {
            source,
            pending: Some(start),
            direction: Direction::Next,
            max_pages: None,
            pages_fetched: 0,
            seen_cursors: HashSet::new(),
        }
    }

    /// Set the walk direction
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Stop after this many pages
    #[must_use]
    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Check if the walk has ended
    pub fn is_done(&self) -> bool {
        self.pending.is_none()
    }

    fn at_page_limit(&self) -> bool {
        self.max_pages.is_some_and(|max| self.pages_fetched >= max)
    }

    /// Fetch the next page of the walk.
    ///
    /// Returns `Ok(None)` once the walk has ended. A failed fetch ends the
    /// walk and returns the error.
    pub async fn next_page(&mut self) -> Result<Option<ApiResponse>> {
        if self.at_page_limit() {
            self.pending = None;
        }

        let Some(request) = self.pending.take() else {
            return Ok(None);
        };

        self.seen_cursors.insert(request.cursor());
        let response = self.source.fetch_page(&request).await?;
        self.pages_fetched += 1;

        self.pending = match request.follow(&response, self.direction) {
            Some(next) if self.seen_cursors.contains(&next.cursor()) => {
                warn!(
                    "Cursor {} already visited on {}, stopping walk",
                    next.cursor(),
                    request.api_url
                );
                None
            }
            next => next,
        };
        if self.at_page_limit() {
            self.pending = None;
        }

        if self.pending.is_none() {
            debug!(
                "Walk of {} finished after {} pages",
                request.api_url, self.pages_fetched
            );
        }

        Ok(Some(response))
    }

    /// Drain the walk, returning every item in page order
    pub async fn collect_items(mut self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page.items);
        }
        Ok(items)
    }

    /// Turn the walk into a stream of pages.
    ///
    /// The stream ends after the last page or right after yielding an error.
    pub fn into_stream(self) -> impl Stream<Item = Result<ApiResponse>> + 'a {
        stream::unfold(self, |mut walker| async move {
            match walker.next_page().await {
                Ok(Some(page)) => Some((Ok(page), walker)),
                Ok(None) => None,
                Err(e) => Some((Err(e), walker)),
            }
        })
    }
}
