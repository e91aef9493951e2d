//! Request and response payloads of the Language Translator V2 API

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::core::errors::{Result, TranslatorError};

/// JSON body of `POST /translate`
///
/// Fields are serialized in declaration order and `None` values are left
/// out entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl TranslateRequest {
    /// Translate between an explicit language pair
    pub fn with_languages(
        text: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source: Some(source.into()),
            target: Some(target.into()),
            ..Default::default()
        }
    }

    /// Translate with a named model
    pub fn with_model(text: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_id: Some(model_id.into()),
            ..Default::default()
        }
    }

    /// Check that the service can route this request
    pub fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(TranslatorError::missing("text"));
        }

        let given = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.is_empty());
        let has_pair = given(&self.source) && given(&self.target);
        if !has_pair && !given(&self.model_id) {
            return Err(TranslatorError::InvalidArgument {
                message: "translate requires either source and target, or model_id".to_string(),
            });
        }

        Ok(())
    }
}

/// Filters accepted by `GET /models`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListModelsOptions {
    pub source: Option<String>,
    pub target: Option<String>,
    pub default_models: Option<bool>,
}

impl ListModelsOptions {
    /// Query pairs in the order the service documents them
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(source) = &self.source {
            query.push(("source".to_string(), source.clone()));
        }
        if let Some(target) = &self.target {
            query.push(("target".to_string(), target.clone()));
        }
        if let Some(default_models) = self.default_models {
            query.push(("default".to_string(), default_models.to_string()));
        }
        query
    }
}

/// A named file uploaded as one multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFile {
    pub file_name: String,
    pub data: Vec<u8>,
}

impl ModelFile {
    pub fn new(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    /// Read a corpus or glossary from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| TranslatorError::FileError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self { file_name, data })
    }
}

/// Parameters of `POST /models`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateModelOptions {
    pub base_model_id: String,
    pub name: Option<String>,
    pub forced_glossary: Option<ModelFile>,
    pub parallel_corpus: Option<ModelFile>,
    pub monolingual_corpus: Option<ModelFile>,
}

impl CreateModelOptions {
    pub fn new(base_model_id: impl Into<String>) -> Self {
        Self {
            base_model_id: base_model_id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_forced_glossary(mut self, file: ModelFile) -> Self {
        self.forced_glossary = Some(file);
        self
    }

    pub fn with_parallel_corpus(mut self, file: ModelFile) -> Self {
        self.parallel_corpus = Some(file);
        self
    }

    pub fn with_monolingual_corpus(mut self, file: ModelFile) -> Self {
        self.monolingual_corpus = Some(file);
        self
    }

    /// Named parts that are present, in upload order
    pub(crate) fn parts(&self) -> Vec<(&'static str, &ModelFile)> {
        [
            ("forced_glossary", &self.forced_glossary),
            ("parallel_corpus", &self.parallel_corpus),
            ("monolingual_corpus", &self.monolingual_corpus),
        ]
        .into_iter()
        .filter_map(|(name, file)| file.as_ref().map(|f| (name, f)))
        .collect()
    }
}

/// One translated segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub translation: String,
}

/// Response of `POST /translate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translations: Vec<Translation>,
    pub word_count: u64,
    pub character_count: u64,
}

/// Training state reported for a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    Uploading,
    Uploaded,
    Dispatching,
    Queued,
    Training,
    Trained,
    Publishing,
    Available,
    Deleted,
    Error,
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelStatus::Uploading => "uploading",
            ModelStatus::Uploaded => "uploaded",
            ModelStatus::Dispatching => "dispatching",
            ModelStatus::Queued => "queued",
            ModelStatus::Training => "training",
            ModelStatus::Trained => "trained",
            ModelStatus::Publishing => "publishing",
            ModelStatus::Available => "available",
            ModelStatus::Deleted => "deleted",
            ModelStatus::Error => "error",
        };
        f.write_str(name)
    }
}

/// A translation model hosted by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationModel {
    pub model_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub base_model_id: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub customizable: Option<bool>,
    #[serde(default)]
    pub default_model: Option<bool>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub status: Option<ModelStatus>,
}

impl TranslationModel {
    /// Custom models are derived from another model
    pub fn is_custom(&self) -> bool {
        self.base_model_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Response of `GET /models`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationModels {
    pub models: Vec<TranslationModel>,
}

/// A language guess with its confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifiedLanguage {
    pub language: String,
    pub confidence: f64,
}

/// Response of `POST /identify`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifiedLanguages {
    pub languages: Vec<IdentifiedLanguage>,
}

impl IdentifiedLanguages {
    /// Guess with the highest confidence
    pub fn best(&self) -> Option<&IdentifiedLanguage> {
        self.languages
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}

/// A language the identify endpoint can detect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifiableLanguage {
    pub language: String,
    pub name: String,
}

/// Response of `GET /identifiable_languages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifiableLanguages {
    pub languages: Vec<IdentifiableLanguage>,
}

/// Response of `DELETE /models/{model_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteModelResult {
    pub status: String,
}
