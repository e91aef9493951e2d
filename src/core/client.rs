//! Async Language Translator V2 client

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::core::auth::BasicAuthenticator;
use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslatorError};
use crate::core::models::{CreateModelOptions, ListModelsOptions, TranslateRequest};
use crate::core::request::ServiceRequest;
use crate::core::response::DetailedResponse;

const LEARNING_OPT_OUT_HEADER: &str = "x-watson-learning-opt-out";

/// Client for the Language Translator V2 service
#[derive(Debug, Clone)]
pub struct LanguageTranslator {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
    authenticator: BasicAuthenticator,
    default_headers: HeaderMap,
}

impl LanguageTranslator {
    /// Create a new client
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let authenticator = BasicAuthenticator::new(&config.username, &config.password)?;
        let default_headers = build_default_headers(&config)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .build()?;

        info!(
            "Language Translator client for {} as {}",
            config.url,
            authenticator.username()
        );

        Ok(Self {
            client,
            config: Arc::new(config),
            authenticator,
            default_headers,
        })
    }

    /// Shorthand for a client on the default endpoint
    pub fn with_credentials(username: &str, password: &str) -> Result<Self> {
        Self::new(TranslatorConfig::with_credentials(username, password))
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::new(TranslatorConfig::load(None)?)
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate text with a language pair or a model
    pub async fn translate(&self, request: &TranslateRequest) -> Result<DetailedResponse> {
        request.validate()?;
        let request = ServiceRequest::new(Method::POST, ["translate"]).json(request)?;
        self.send(request).await
    }

    /// Translate between `source` and `target`
    pub async fn translate_text(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<DetailedResponse> {
        self.translate(&TranslateRequest::with_languages(text, source, target))
            .await
    }

    /// List all models visible to these credentials
    pub async fn list_models(&self) -> Result<DetailedResponse> {
        self.list_models_with(&ListModelsOptions::default()).await
    }

    /// List models filtered by language or default flag
    pub async fn list_models_with(&self, options: &ListModelsOptions) -> Result<DetailedResponse> {
        let request = ServiceRequest::new(Method::GET, ["models"]).query(options.to_query());
        self.send(request).await
    }

    pub async fn get_model(&self, model_id: &str) -> Result<DetailedResponse> {
        require("model_id", model_id)?;
        self.send(ServiceRequest::new(Method::GET, ["models", model_id]))
            .await
    }

    /// Upload glossaries or corpora to train a custom model
    pub async fn create_model(&self, options: CreateModelOptions) -> Result<DetailedResponse> {
        require("base_model_id", &options.base_model_id)?;

        let mut query = vec![("base_model_id".to_string(), options.base_model_id.clone())];
        if let Some(name) = &options.name {
            query.push(("name".to_string(), name.clone()));
        }

        let parts = options
            .parts()
            .into_iter()
            .map(|(name, file)| (name.to_string(), file.clone()))
            .collect();

        let request = ServiceRequest::new(Method::POST, ["models"])
            .query(query)
            .multipart(parts);
        self.send(request).await
    }

    pub async fn delete_model(&self, model_id: &str) -> Result<DetailedResponse> {
        require("model_id", model_id)?;
        self.send(ServiceRequest::new(Method::DELETE, ["models", model_id]))
            .await
    }

    /// Detect the language of `text`, sent verbatim as `text/plain`
    pub async fn identify(&self, text: &str) -> Result<DetailedResponse> {
        require("text", text)?;
        let request = ServiceRequest::new(Method::POST, ["identify"]).text(text);
        self.send(request).await
    }

    pub async fn list_identifiable_languages(&self) -> Result<DetailedResponse> {
        self.send(ServiceRequest::new(Method::GET, ["identifiable_languages"]))
            .await
    }

    /// Authenticate, dispatch and wrap one request
    async fn send(&self, mut request: ServiceRequest) -> Result<DetailedResponse> {
        for (name, value) in &self.default_headers {
            if !request.headers.contains_key(name) {
                request.headers.insert(name.clone(), value.clone());
            }
        }
        request.headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        self.authenticator.authenticate(&mut request.headers);

        let method = request.method.clone();
        let url = request.url(&self.config.url)?;
        debug!("{} {}", method, url);

        let response = request
            .into_reqwest(&self.client, url.clone())?
            .send()
            .await
            .map_err(TranslatorError::from_transport)?;

        let response = DetailedResponse::from_reqwest(response).await?;
        debug!("{} {} -> {}", method, url, response.status());
        Ok(response)
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(TranslatorError::missing(field));
    }
    Ok(())
}

fn build_default_headers(config: &TranslatorConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("language-translator-rust/", env!("CARGO_PKG_VERSION"))),
    );

    if config.learning_opt_out {
        headers.insert(
            HeaderName::from_static(LEARNING_OPT_OUT_HEADER),
            HeaderValue::from_static("true"),
        );
    }

    for (name, value) in &config.default_headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| TranslatorError::config(format!("invalid header name {}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| TranslatorError::config(format!("invalid header value for {}: {}", name, e)))?;
        headers.insert(name, value);
    }

    Ok(headers)
}
