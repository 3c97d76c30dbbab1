// src/client.rs
//! Client façades exposing the item cache.
//!
//! [`NotionClient`] drives a blocking [`Transport`], [`AsyncNotionClient`]
//! a suspending [`AsyncTransport`]. Both drain search through the same
//! [`SearchDrain`] and differ only in how each page is awaited.

use crate::api::endpoints::Endpoint;
use crate::api::pagination::SearchDrain;
use crate::api::{AsyncHttpTransport, AsyncTransport, HttpTransport, Transport};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::model::Items;
use serde_json::Value;

/// Blocking client.
///
/// The item cache is populated on the first call to [`items`] and then
/// reused for the client's lifetime; it is never refreshed.
///
/// [`items`]: NotionClient::items
pub struct NotionClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
    items: Option<Items>,
}

impl NotionClient<HttpTransport> {
    /// Creates a client that talks HTTP using `config`.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> NotionClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            items: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends one typed endpoint request and returns the raw JSON reply.
    pub fn send<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<Value, ClientError> {
        self.transport.send(&endpoint.request())
    }

    /// Every page and database visible to the integration.
    ///
    /// The first call drains all search pages, one after another, before
    /// returning. If any page fails, the error is returned and nothing is
    /// cached; a later call starts over from the first page.
    pub fn items(&mut self) -> Result<&Items, ClientError> {
        let items = match self.items.take() {
            Some(items) => items,
            None => self.drain_search()?,
        };
        Ok(self.items.insert(items))
    }

    /// The cache, if it has been populated.
    pub fn cached_items(&self) -> Option<&Items> {
        self.items.as_ref()
    }

    fn drain_search(&self) -> Result<Items, ClientError> {
        let mut drain = SearchDrain::new(Some(self.config.page_size()));
        while let Some(search) = drain.next_request() {
            let page = self.send(&search)?;
            drain.absorb(&page)?;
        }
        Ok(drain.finish())
    }
}

/// Async client; the counterpart of [`NotionClient`] for suspending transports.
pub struct AsyncNotionClient<T = AsyncHttpTransport> {
    config: ClientConfig,
    transport: T,
    items: Option<Items>,
}

impl AsyncNotionClient<AsyncHttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = AsyncHttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: AsyncTransport> AsyncNotionClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            items: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn send<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<Value, ClientError> {
        self.transport.send(&endpoint.request()).await
    }

    /// See [`NotionClient::items`].
    pub async fn items(&mut self) -> Result<&Items, ClientError> {
        let items = match self.items.take() {
            Some(items) => items,
            None => self.drain_search().await?,
        };
        Ok(self.items.insert(items))
    }

    pub fn cached_items(&self) -> Option<&Items> {
        self.items.as_ref()
    }

    async fn drain_search(&self) -> Result<Items, ClientError> {
        let mut drain = SearchDrain::new(Some(self.config.page_size()));
        while let Some(search) = drain.next_request() {
            let page = self.send(&search).await?;
            drain.absorb(&page)?;
        }
        Ok(drain.finish())
    }
}
