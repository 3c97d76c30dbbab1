// src/config.rs
use crate::constants::{
    API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_NOTION_VERSION, DEFAULT_PAGE_SIZE,
    DEFAULT_USER_AGENT, MAX_PAGE_SIZE, NOTION_VERSION_ENV,
};
use crate::error::ClientError;
use crate::types::{ApiKey, ValidatedUrl, ValidationError};

/// Connection settings for a client.
///
/// Fixed once a client is constructed from it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_key: ApiKey,
    base_url: ValidatedUrl,
    notion_version: String,
    user_agent: String,
    page_size: u32,
}

impl ClientConfig {
    /// Creates a configuration for `api_key` with every other setting at its default.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: Self::default_base_url(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Resolves a configuration from the environment.
    ///
    /// `NOTION_API_KEY` is required; `NOTION_BASE_URL` and `NOTION_VERSION`
    /// override the defaults when set.
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key_str = std::env::var(API_KEY_ENV).map_err(|_| {
            ClientError::MissingConfiguration(format!("{} environment variable not set", API_KEY_ENV))
        })?;

        let mut config = Self::new(ApiKey::new(api_key_str)?);

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(&base_url)?;
        }
        if let Ok(version) = std::env::var(NOTION_VERSION_ENV) {
            config = config.with_notion_version(version);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ValidationError> {
        self.base_url = ValidatedUrl::parse(base_url)?;
        Ok(self)
    }

    pub fn with_notion_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = version.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the page size used when draining paginated endpoints (1..=100).
    pub fn with_page_size(mut self, page_size: u32) -> Result<Self, ValidationError> {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ValidationError::OutOfBounds {
                value: page_size,
                min: 1,
                max: MAX_PAGE_SIZE,
            });
        }
        self.page_size = page_size;
        Ok(self)
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn base_url(&self) -> &ValidatedUrl {
        &self.base_url
    }

    pub fn notion_version(&self) -> &str {
        &self.notion_version
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn default_base_url() -> ValidatedUrl {
        ValidatedUrl::parse(DEFAULT_BASE_URL).expect("Default base URL should be valid")
    }
}
