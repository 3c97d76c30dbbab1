// src/api/mod.rs
//! Notion API interaction.
//!
//! Request building and pagination are pure; network I/O sits behind the
//! [`Transport`] and [`AsyncTransport`] capabilities so the same client
//! logic runs over a blocking or a suspending HTTP stack.

pub mod client;
pub mod endpoints;
pub mod pagination;
pub mod parser;
pub mod request;

use crate::error::ClientError;
use request::ApiRequest;
use serde_json::Value;

/// The ability to perform one API call, blocking until it completes.
///
/// Implementations authenticate the request and report network, status
/// and decoding failures as [`ClientError`]s without retrying.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> Result<Value, ClientError>;
}

/// The ability to perform one API call, yielding while awaiting the network.
#[async_trait::async_trait]
pub trait AsyncTransport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ClientError>;
}

impl<'a, T: Transport + ?Sized> Transport for &'a T {
    fn send(&self, request: &ApiRequest) -> Result<Value, ClientError> {
        (**self).send(request)
    }
}

#[async_trait::async_trait]
impl<'a, T: AsyncTransport + ?Sized> AsyncTransport for &'a T {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ClientError> {
        (**self).send(request).await
    }
}

pub use client::{AsyncHttpTransport, HttpTransport};
