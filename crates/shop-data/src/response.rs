//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Longest slice of an error body carried into [`FetchError::HttpError`].
const MAX_ERROR_BODY: usize = 256;

/// A buffered HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create a 200 response carrying a JSON document.
    pub fn json_ok(value: &serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self::new(200, headers, value.to_string().into_bytes())
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Get a header value, ignoring case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }
        let mut message = String::from_utf8_lossy(&self.body).into_owned();
        if message.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !message.is_char_boundary(cut) {
                cut -= 1;
            }
            message.truncate(cut);
        }
        Err(FetchError::HttpError {
            status: self.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(302, b"").is_success());
    }

    #[test]
    fn test_response_json() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Data {
            amount: f64,
        }

        let resp = make_response(200, br#"{"amount": 12.5}"#);
        assert_eq!(resp.json::<Data>().unwrap(), Data { amount: 12.5 });
    }

    #[test]
    fn test_response_json_invalid_is_parse_error() {
        let resp = make_response(200, b"<html>oops</html>");
        let result: Result<serde_json::Value, _> = resp.json();
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_response_text_invalid_utf8() {
        assert!(make_response(200, &[0xff, 0xfe]).text().is_err());
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let resp = Response::json_ok(&serde_json::json!({}));
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("X-Missing"), None);
    }

    #[test]
    fn test_error_for_status() {
        assert!(make_response(200, b"OK").error_for_status().is_ok());

        let err = make_response(503, b"unavailable")
            .error_for_status()
            .unwrap_err();
        assert_eq!(
            err,
            FetchError::HttpError {
                status: 503,
                message: "unavailable".into()
            }
        );
    }

    #[test]
    fn test_error_for_status_truncates_body() {
        let body = "x".repeat(1000);
        match make_response(500, body.as_bytes()).error_for_status() {
            Err(FetchError::HttpError { message, .. }) => assert_eq!(message.len(), MAX_ERROR_BODY),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
