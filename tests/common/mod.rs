// tests/common/mod.rs
//! Shared fixtures and scripted transports for integration tests.

#![allow(dead_code)]

use notion_items::{
    ApiKey, ApiRequest, AsyncTransport, ClientConfig, ClientError, Transport,
};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

pub const SEARCH_PAGE_1: &str = include_str!("../fixtures/search_page_1.json");
pub const SEARCH_PAGE_2: &str = include_str!("../fixtures/search_page_2.json");

pub const TEST_API_KEY: &str = "secret_integration_key_0123456789";

pub fn fixture(raw: &str) -> Value {
    serde_json::from_str(raw).expect("fixture should be valid JSON")
}

/// The two-page search used by most scenarios.
pub fn two_page_search() -> Vec<Result<Value, ClientError>> {
    vec![Ok(fixture(SEARCH_PAGE_1)), Ok(fixture(SEARCH_PAGE_2))]
}

pub fn test_config() -> ClientConfig {
    ClientConfig::new(ApiKey::new(TEST_API_KEY).expect("test key should be valid"))
}

/// Answers requests from a fixed script and records what was sent.
///
/// Usable as both a blocking and an async transport.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<Value, ClientError>>>,
    sent: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Result<Value, ClientError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, reply: Result<Value, ClientError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    fn reply(&self, request: &ApiRequest) -> Result<Value, ClientError> {
        self.sent.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply for {}", request))
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &ApiRequest) -> Result<Value, ClientError> {
        self.reply(request)
    }
}

#[async_trait::async_trait]
impl AsyncTransport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ClientError> {
        self.reply(request)
    }
}
