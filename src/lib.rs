// src/lib.rs
//! notion-items library: a Notion API client that caches every page and
//! database visible to an integration, with parent links resolved.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Client**: `NotionClient`, `AsyncNotionClient`
//! - **Item cache**: `Items`, `Item`, `ObjectKind`
//! - **Configuration**: `ClientConfig`
//! - **Error handling**: `ClientError`, `PaginationError`, `ValidationError`
//! - **Domain types**: `ItemId`, `PageId`, `ApiKey`, `RichText`, etc.
//! - **API requests**: `Endpoint` implementations, `Params`, `Paginator`
//! - **Transports**: `Transport`, `AsyncTransport` and their HTTP implementations

mod api;
mod client;
mod config;
mod constants;
mod error;
mod model;
mod types;

// --- Client ---
pub use crate::client::{AsyncNotionClient, NotionClient};

// --- Item Cache ---
pub use crate::model::{Ancestors, Item, Items, ObjectKind, Property};

// --- Configuration ---
pub use crate::config::ClientConfig;
pub use crate::constants::{
    API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_NOTION_VERSION, DEFAULT_PAGE_SIZE,
    DEFAULT_USER_AGENT, MAX_PAGE_SIZE, NOTION_VERSION_ENV,
};

// --- Error Handling ---
pub use crate::error::{ClientError, NotionErrorCode, PaginationError, Result};
pub use crate::types::ValidationError;

// --- Domain Types ---
pub use crate::types::{
    flatten_plain_text, Annotation, ApiKey, BlockId, BlockMarker, Color, DatabaseId,
    DatabaseMarker, Id, ItemId, ItemMarker, PageId, PageMarker, RichText, Text, UserId,
    UserMarker, ValidatedUrl,
};

// --- API Requests ---
pub use crate::api::endpoints::{
    AppendBlockChildren, CreatePage, Endpoint, ListBlockChildren, ListDatabases, ListUsers,
    QueryDatabase, RetrieveDatabase, RetrievePage, RetrieveUser, Search, UpdatePage,
};
pub use crate::api::pagination::{Paginator, SearchDrain};
pub use crate::api::request::{ApiRequest, HttpMethod, Params};

// --- Transports ---
pub use crate::api::client::ApiResponse;
pub use crate::api::{AsyncHttpTransport, AsyncTransport, HttpTransport, Transport};
