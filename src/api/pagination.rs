// src/api/pagination.rs
//! Cursor-based pagination state and the search drain built on it.

use super::endpoints::Search;
use crate::error::{ClientError, PaginationError};
use crate::model::Items;
use serde_json::Value;

/// Cursor state carried across the pages of one paginated sequence.
///
/// Empty until the first page is consumed; every [`update_from`] then
/// overwrites both fields.
///
/// [`update_from`]: Paginator::update_from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paginator {
    next_cursor: Option<String>,
    has_more: Option<bool>,
}

impl Paginator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes `next_cursor` and `has_more` from a page of results.
    ///
    /// Both keys must be present (`next_cursor` may be `null`). A page that
    /// claims more results without a cursor is rejected, since following
    /// it would restart the sequence from the beginning.
    pub fn update_from(&mut self, page: &Value) -> Result<(), PaginationError> {
        let next_cursor = match page
            .get("next_cursor")
            .ok_or(PaginationError::MissingField("next_cursor"))?
        {
            Value::Null => None,
            Value::String(cursor) => Some(cursor.clone()),
            other => {
                return Err(PaginationError::InvalidField {
                    field: "next_cursor",
                    reason: format!("expected a string or null, got {}", other),
                })
            }
        };

        let has_more = page
            .get("has_more")
            .ok_or(PaginationError::MissingField("has_more"))?
            .as_bool()
            .ok_or_else(|| PaginationError::InvalidField {
                field: "has_more",
                reason: "expected a boolean".to_string(),
            })?;

        if has_more && next_cursor.is_none() {
            return Err(PaginationError::MissingCursor);
        }

        self.next_cursor = next_cursor;
        self.has_more = Some(has_more);
        Ok(())
    }

    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    /// Whether the last consumed page reported more results.
    /// `false` before any page has been consumed.
    pub fn has_more(&self) -> bool {
        self.has_more.unwrap_or(false)
    }

    /// Whether at least one page has been consumed.
    pub fn is_started(&self) -> bool {
        self.has_more.is_some()
    }

    /// Whether the sequence is finished.
    pub fn is_exhausted(&self) -> bool {
        self.has_more == Some(false)
    }
}

/// Drains every page of an unfiltered search into an [`Items`] collection.
///
/// Transport-agnostic: callers alternate [`next_request`] and [`absorb`],
/// sending each request through whichever transport they own.
///
/// [`next_request`]: SearchDrain::next_request
/// [`absorb`]: SearchDrain::absorb
#[derive(Debug, Default)]
pub struct SearchDrain {
    paginator: Paginator,
    items: Items,
    page_size: Option<u32>,
    pages: usize,
}

impl SearchDrain {
    pub fn new(page_size: Option<u32>) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// The search to send next, or `None` once the last page is in.
    pub fn next_request(&self) -> Option<Search> {
        if self.paginator.is_exhausted() {
            return None;
        }
        Some(Search {
            start_cursor: self.paginator.next_cursor().map(str::to_string),
            page_size: self.page_size,
            ..Search::default()
        })
    }

    /// Consumes one search response: advances the cursor, then converts
    /// and merges the page's records.
    pub fn absorb(&mut self, page: &Value) -> Result<(), ClientError> {
        self.paginator.update_from(page)?;
        let merged = self.items.populate_from_search_page(page)?;
        self.pages += 1;
        log::debug!(
            "Search page {}: {} records (has_more: {})",
            self.pages,
            merged,
            self.paginator.has_more()
        );
        Ok(())
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn items(&self) -> &Items {
        &self.items
    }

    pub fn finish(self) -> Items {
        log::info!(
            "Search drained: {} pages, {} items",
            self.pages,
            self.items.len()
        );
        self.items
    }
}
