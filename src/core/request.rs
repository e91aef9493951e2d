//! Per-call HTTP request description

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Url};

use crate::core::errors::{Result, TranslatorError};
use crate::core::models::ModelFile;

/// Body attached to a [`ServiceRequest`]
#[derive(Debug)]
pub enum RequestBody {
    Empty,
    /// Already-serialized JSON, keeping the field order of the source type
    Json(Vec<u8>),
    Text(String),
    Multipart(Vec<(String, ModelFile)>),
}

/// A single service call before authentication and dispatch
#[derive(Debug)]
pub struct ServiceRequest {
    pub method: Method,
    /// Path segments appended to the service url, each percent-encoded
    pub path: Vec<String>,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl ServiceRequest {
    pub fn new<I, S>(method: Method, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            path: path.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn query(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn json<T: serde::Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_vec(body)?);
        Ok(self)
    }

    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.body = RequestBody::Text(body.into());
        self
    }

    pub fn multipart(mut self, parts: Vec<(String, ModelFile)>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// Absolute url for this request relative to `base_url`
    pub fn url(&self, base_url: &str) -> Result<Url> {
        let mut url = Url::parse(base_url)
            .map_err(|e| TranslatorError::config(format!("invalid service url {}: {}", base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| TranslatorError::config(format!("service url cannot be a base: {}", base_url)))?
            .pop_if_empty()
            .extend(&self.path);

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        Ok(url)
    }

    /// Turn this description into a reqwest builder on `client`, sent to
    /// `url` as resolved by [`ServiceRequest::url`]
    pub fn into_reqwest(self, client: &reqwest::Client, url: Url) -> Result<reqwest::RequestBuilder> {
        let builder = client.request(self.method, url).headers(self.headers);

        let builder = match self.body {
            RequestBody::Empty => builder,
            RequestBody::Json(bytes) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(bytes),
            RequestBody::Text(text) => builder
                .header(CONTENT_TYPE, "text/plain")
                .body(text),
            RequestBody::Multipart(parts) => {
                let mut form = Form::new();
                for (name, file) in parts {
                    let part = Part::bytes(file.data)
                        .file_name(file.file_name)
                        .mime_str("application/octet-stream")?;
                    form = form.part(name, part);
                }
                builder.multipart(form)
            }
        };

        Ok(builder)
    }
}
