// src/api/parser.rs
//! Turns raw HTTP replies into JSON values or typed API errors.

use super::client::ApiResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{ClientError, NotionErrorCode};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// The error envelope the API sends with non-2xx replies.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    code: String,
    message: String,
}

/// Decodes a reply: 2xx bodies must be JSON, anything else becomes
/// [`ClientError::NotionService`].
pub fn decode_response(result: ApiResponse<String>) -> Result<Value, ClientError> {
    if result.status.is_success() {
        parse_body(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

fn parse_body(body: &str, url: &str) -> Result<Value, ClientError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        ClientError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

fn parse_error(body: &str, status: StatusCode, url: &str) -> ClientError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => ClientError::NotionService {
            code: NotionErrorCode::from_api_response(&envelope.code),
            message: envelope.message,
            status,
        },
        Err(_) => {
            log::warn!(
                "Undecodable error body from {} (HTTP {}): {}",
                url,
                status,
                preview(body)
            );
            ClientError::NotionService {
                code: NotionErrorCode::from_http_status(status.as_u16()),
                message: format!("HTTP {} from {}", status, url),
                status,
            }
        }
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let truncated: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "https://api.notion.com/v1/search".to_string(),
        }
    }

    #[test]
    fn test_success_body_is_returned_as_json() {
        let value = decode_response(response(StatusCode::OK, r#"{"object": "list"}"#)).unwrap();
        assert_eq!(value["object"], "list");
    }

    #[test]
    fn test_malformed_success_body() {
        let err = decode_response(response(StatusCode::OK, "<html>")).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn test_error_parsing() {
        let error_json = r#"{
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find page with ID: abc123"
        }"#;

        let err = decode_response(response(StatusCode::NOT_FOUND, error_json)).unwrap_err();
        if let ClientError::NotionService { code, message, status } = err {
            assert_eq!(code, NotionErrorCode::ObjectNotFound);
            assert_eq!(message, "Could not find page with ID: abc123");
            assert_eq!(status, StatusCode::NOT_FOUND);
        } else {
            panic!("Expected ClientError::NotionService");
        }
    }

    #[test]
    fn test_unparseable_error_falls_back_to_status() {
        let err = decode_response(response(StatusCode::BAD_GATEWAY, "upstream")).unwrap_err();
        assert_eq!(err.notion_code(), Some(&NotionErrorCode::HttpStatus(502)));
    }

    #[test]
    fn test_preview_truncates_long_bodies() {
        let body = "é".repeat(ERROR_BODY_PREVIEW_LENGTH + 10);
        let shown = preview(&body);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), ERROR_BODY_PREVIEW_LENGTH + 3);
    }
}
