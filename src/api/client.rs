// src/api/client.rs
//! reqwest-backed transports.
//!
//! Both flavours install the same authentication headers and share one
//! response decoder; they differ only in whether `send` blocks or awaits.

use super::parser::decode_response;
use super::request::ApiRequest;
use super::{AsyncTransport, Transport};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::types::ValidatedUrl;
use reqwest::header;
use serde_json::Value;
use url::Url;

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Creates the default headers for Notion API requests.
fn create_headers(config: &ClientConfig) -> Result<header::HeaderMap, ClientError> {
    let mut headers = header::HeaderMap::new();

    let auth_header = format!("Bearer {}", config.api_key().as_str());
    headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&auth_header)
            .map_err(|e| ClientError::InvalidHeader(format!("Invalid API token format: {}", e)))?,
    );

    headers.insert(
        "Notion-Version",
        header::HeaderValue::from_str(config.notion_version())
            .map_err(|e| ClientError::InvalidHeader(format!("Invalid Notion-Version: {}", e)))?,
    );

    headers.insert(
        header::USER_AGENT,
        header::HeaderValue::from_str(config.user_agent())
            .map_err(|e| ClientError::InvalidHeader(format!("Invalid User-Agent: {}", e)))?,
    );

    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );

    Ok(headers)
}

/// Resolves the request path under the API root and appends its query.
fn request_url(base_url: &ValidatedUrl, request: &ApiRequest) -> Result<Url, ClientError> {
    let mut url = base_url.join(&request.path)?;
    if !request.query.is_empty() {
        url.query_pairs_mut().extend_pairs(request.query.query_pairs());
    }
    Ok(url)
}

/// Blocking transport over `reqwest::blocking`.
///
/// Must not be used from inside an async runtime; use
/// [`AsyncHttpTransport`] there.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: ValidatedUrl,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .default_headers(create_headers(config)?)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url().clone(),
        })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<Value, ClientError> {
        let url = request_url(&self.base_url, request)?;
        log::debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.into(), url);
        if let Some(body) = &request.body {
            builder = builder.json(body.as_map());
        }
        let response = builder.send()?;

        let status = response.status();
        let url = response.url().to_string();
        let data = response.text()?;
        decode_response(ApiResponse { data, status, url })
    }
}

/// Async transport over `reqwest::Client`.
#[derive(Clone)]
pub struct AsyncHttpTransport {
    client: reqwest::Client,
    base_url: ValidatedUrl,
}

impl AsyncHttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .default_headers(create_headers(config)?)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url().clone(),
        })
    }
}

#[async_trait::async_trait]
impl AsyncTransport for AsyncHttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ClientError> {
        let url = request_url(&self.base_url, request)?;
        log::debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.into(), url);
        if let Some(body) = &request.body {
            builder = builder.json(body.as_map());
        }
        let response = builder.send().await?;

        let status = response.status();
        let url = response.url().to_string();
        let data = response.text().await?;
        decode_response(ApiResponse { data, status, url })
    }
}
