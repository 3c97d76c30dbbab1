// src/constants.rs
//! Defaults that a client falls back to when its configuration leaves
//! them unset.

/// Root every endpoint path is resolved under.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1/";

/// Value sent in the `Notion-Version` header.
pub const DEFAULT_NOTION_VERSION: &str = "2021-05-13";

/// Value sent in the `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("notion-items/", env!("CARGO_PKG_VERSION"));

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. Using the maximum minimizes
/// round-trips while draining a search.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Environment variable holding the integration token.
pub const API_KEY_ENV: &str = "NOTION_API_KEY";

/// Optional environment override for the base URL.
pub const BASE_URL_ENV: &str = "NOTION_BASE_URL";

/// Optional environment override for the API version tag.
pub const NOTION_VERSION_ENV: &str = "NOTION_VERSION";

/// Maximum characters shown when previewing malformed response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
