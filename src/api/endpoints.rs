// src/api/endpoints.rs
//! Typed builders for each supported endpoint.
//!
//! Every struct names exactly the parameters its endpoint accepts;
//! unset (`None`) parameters are left out of the request.

use super::request::{ApiRequest, Params};
use crate::types::{BlockId, DatabaseId, PageId, UserId};
use serde_json::Value;

/// Anything that can be turned into a single API call.
pub trait Endpoint {
    fn request(&self) -> ApiRequest;
}

fn cursor_params(start_cursor: &Option<String>, page_size: Option<u32>) -> Params {
    Params::new()
        .with("start_cursor", start_cursor.clone())
        .with("page_size", page_size)
}

// --- Databases ---

/// `GET databases`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDatabases {
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
}

impl Endpoint for ListDatabases {
    fn request(&self) -> ApiRequest {
        ApiRequest::get("databases").with_query(cursor_params(&self.start_cursor, self.page_size))
    }
}

/// `POST databases/{id}/query`
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDatabase {
    pub database_id: DatabaseId,
    pub filter: Option<Value>,
    pub sorts: Option<Value>,
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
}

impl QueryDatabase {
    pub fn new(database_id: impl Into<DatabaseId>) -> Self {
        Self {
            database_id: database_id.into(),
            filter: None,
            sorts: None,
            start_cursor: None,
            page_size: None,
        }
    }
}

impl Endpoint for QueryDatabase {
    fn request(&self) -> ApiRequest {
        let body = cursor_params(&self.start_cursor, self.page_size)
            .with("sorts", self.sorts.clone())
            .with("filter", self.filter.clone());
        ApiRequest::post(format!("databases/{}/query", self.database_id)).with_body(body)
    }
}

/// `GET databases/{id}`
#[derive(Debug, Clone, PartialEq)]
pub struct RetrieveDatabase {
    pub database_id: DatabaseId,
}

impl RetrieveDatabase {
    pub fn new(database_id: impl Into<DatabaseId>) -> Self {
        Self {
            database_id: database_id.into(),
        }
    }
}

impl Endpoint for RetrieveDatabase {
    fn request(&self) -> ApiRequest {
        ApiRequest::get(format!("databases/{}", self.database_id))
    }
}

// --- Pages ---

/// `POST pages`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatePage {
    pub parent: Option<Value>,
    pub properties: Option<Value>,
    pub children: Option<Value>,
}

impl Endpoint for CreatePage {
    fn request(&self) -> ApiRequest {
        let body = Params::new()
            .with("parent", self.parent.clone())
            .with("properties", self.properties.clone())
            .with("children", self.children.clone());
        ApiRequest::post("pages").with_body(body)
    }
}

/// `GET pages/{id}`
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievePage {
    pub page_id: PageId,
}

impl RetrievePage {
    pub fn new(page_id: impl Into<PageId>) -> Self {
        Self {
            page_id: page_id.into(),
        }
    }
}

impl Endpoint for RetrievePage {
    fn request(&self) -> ApiRequest {
        ApiRequest::get(format!("pages/{}", self.page_id))
    }
}

/// `PATCH pages/{id}`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePage {
    pub page_id: PageId,
    pub properties: Option<Value>,
}

impl UpdatePage {
    pub fn new(page_id: impl Into<PageId>) -> Self {
        Self {
            page_id: page_id.into(),
            properties: None,
        }
    }
}

impl Endpoint for UpdatePage {
    fn request(&self) -> ApiRequest {
        let body = Params::new().with("properties", self.properties.clone());
        ApiRequest::patch(format!("pages/{}", self.page_id)).with_body(body)
    }
}

// --- Users ---

/// `GET users`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListUsers {
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
}

impl Endpoint for ListUsers {
    fn request(&self) -> ApiRequest {
        ApiRequest::get("users").with_query(cursor_params(&self.start_cursor, self.page_size))
    }
}

/// `GET users/{id}`
#[derive(Debug, Clone, PartialEq)]
pub struct RetrieveUser {
    pub user_id: UserId,
}

impl RetrieveUser {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl Endpoint for RetrieveUser {
    fn request(&self) -> ApiRequest {
        ApiRequest::get(format!("users/{}", self.user_id))
    }
}

// --- Blocks ---

/// `PATCH blocks/{id}/children`
#[derive(Debug, Clone, PartialEq)]
pub struct AppendBlockChildren {
    pub block_id: BlockId,
    pub children: Option<Value>,
}

impl AppendBlockChildren {
    pub fn new(block_id: impl Into<BlockId>) -> Self {
        Self {
            block_id: block_id.into(),
            children: None,
        }
    }
}

impl Endpoint for AppendBlockChildren {
    fn request(&self) -> ApiRequest {
        let body = Params::new().with("children", self.children.clone());
        ApiRequest::patch(format!("blocks/{}/children", self.block_id)).with_body(body)
    }
}

/// `GET blocks/{id}/children`
#[derive(Debug, Clone, PartialEq)]
pub struct ListBlockChildren {
    pub block_id: BlockId,
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
}

impl ListBlockChildren {
    pub fn new(block_id: impl Into<BlockId>) -> Self {
        Self {
            block_id: block_id.into(),
            start_cursor: None,
            page_size: None,
        }
    }
}

impl Endpoint for ListBlockChildren {
    fn request(&self) -> ApiRequest {
        ApiRequest::get(format!("blocks/{}/children", self.block_id))
            .with_query(cursor_params(&self.start_cursor, self.page_size))
    }
}

// --- Search ---

/// `POST search`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Search {
    pub query: Option<String>,
    pub sort: Option<Value>,
    pub filter: Option<Value>,
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
}

impl Endpoint for Search {
    fn request(&self) -> ApiRequest {
        let body = Params::new()
            .with("query", self.query.clone())
            .with("sort", self.sort.clone())
            .with("filter", self.filter.clone())
            .with("start_cursor", self.start_cursor.clone())
            .with("page_size", self.page_size);
        ApiRequest::post("search").with_body(body)
    }
}
