//! Response wrapper returned by every client call

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::core::errors::{Result, TranslatorError};

/// Status, headers and parsed JSON body of one service call
#[derive(Debug, Clone)]
pub struct DetailedResponse {
    status: u16,
    headers: HeaderMap,
    body: Value,
}

impl DetailedResponse {
    pub fn new(status: u16, headers: HeaderMap, body: Value) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Build from a reqwest response, mapping non-2xx statuses to
    /// [`TranslatorError::ApiError`].
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await.map_err(TranslatorError::from_transport)?;

        if !status.is_success() {
            let body = serde_json::from_slice::<Value>(&bytes).ok();
            let message = body
                .as_ref()
                .and_then(error_message)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| String::from_utf8_lossy(&bytes).into_owned());

            warn!("Service returned {}: {}", status.as_u16(), message);
            return Err(TranslatorError::ApiError {
                status: status.as_u16(),
                message,
                body,
            });
        }

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|e| TranslatorError::InvalidResponseError {
                message: e.to_string(),
            })?
        };

        Ok(Self::new(status.as_u16(), headers, body))
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value by case-insensitive name, if it is valid text
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }

    /// Deserialize the body into one of the typed models
    pub fn body_as<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.body.clone()).map_err(|e| TranslatorError::InvalidResponseError {
            message: e.to_string(),
        })
    }
}

fn error_message(body: &Value) -> Option<String> {
    ["error", "message", "errorMessage"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}
