//! HTTP Basic authentication

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::fmt;

use crate::core::errors::{Result, TranslatorError};

/// Injects a precomputed `Authorization: Basic ...` header into requests
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    header: HeaderValue,
}

impl BasicAuthenticator {
    pub fn new(username: &str, password: &str) -> Result<Self> {
        if username.is_empty() {
            return Err(TranslatorError::missing("username"));
        }
        if password.is_empty() {
            return Err(TranslatorError::missing("password"));
        }

        let encoded = STANDARD.encode(format!("{}:{}", username, password));
        let mut header = HeaderValue::from_str(&format!("Basic {}", encoded))
            .map_err(|e| TranslatorError::config(format!("invalid credentials: {}", e)))?;
        header.set_sensitive(true);

        Ok(Self {
            username: username.to_string(),
            header,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn header_value(&self) -> &HeaderValue {
        &self.header
    }

    pub fn authenticate(&self, headers: &mut HeaderMap) {
        headers.insert(AUTHORIZATION, self.header.clone());
    }
}

impl fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("header", &"<redacted>")
            .finish()
    }
}
