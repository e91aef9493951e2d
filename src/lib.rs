//! Language Translator V2 - async Rust client
//!
//! This library wraps the Language Translator V2 HTTP API: text translation,
//! model management and language identification, each call returning a
//! [`DetailedResponse`] with the service's status, headers and JSON body.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use self::core::{
    auth::BasicAuthenticator,
    client::LanguageTranslator,
    config::{TranslatorConfig, DEFAULT_SERVICE_URL},
    errors::{Result, TranslatorError},
    models::{
        CreateModelOptions, DeleteModelResult, IdentifiableLanguage, IdentifiableLanguages,
        IdentifiedLanguage, IdentifiedLanguages, ListModelsOptions, ModelFile, ModelStatus,
        TranslateRequest, Translation, TranslationModel, TranslationModels, TranslationResult,
    },
    request::{RequestBody, ServiceRequest},
    response::DetailedResponse,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
