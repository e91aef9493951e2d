//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::PathBuf;
use tracing::info;

use crate::core::client::LanguageTranslator;
use crate::core::models::{CreateModelOptions, ListModelsOptions, ModelFile, TranslateRequest};
use crate::core::response::DetailedResponse;

/// Commands for the Language Translator client
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text
    Translate {
        /// Text to translate (required)
        #[arg(short, long)]
        text: String,

        /// Source language
        #[arg(short, long)]
        source: Option<String>,

        /// Target language
        #[arg(short = 'g', long)]
        target: Option<String>,

        /// Translate with this model instead of a language pair
        #[arg(short, long)]
        model_id: Option<String>,
    },

    /// List translation models
    Models {
        /// Only models translating from this language
        #[arg(long)]
        source: Option<String>,

        /// Only models translating into this language
        #[arg(long)]
        target: Option<String>,

        /// Only default (true) or only non-default (false) models
        #[arg(long)]
        default: Option<bool>,
    },

    /// Show one translation model
    Model {
        /// Model ID
        model_id: String,
    },

    /// Train a custom model from glossaries or corpora
    CreateModel {
        /// Model to customize (required)
        #[arg(short, long)]
        base_model_id: String,

        /// Name of the new model
        #[arg(short, long)]
        name: Option<String>,

        /// TMX glossary whose terms are always translated as given
        #[arg(long)]
        forced_glossary: Option<PathBuf>,

        /// TMX file of parallel sentences
        #[arg(long)]
        parallel_corpus: Option<PathBuf>,

        /// Plain text in the target language
        #[arg(long)]
        monolingual_corpus: Option<PathBuf>,
    },

    /// Delete a custom model
    DeleteModel {
        /// Model ID
        model_id: String,
    },

    /// Identify the language of text
    Identify {
        /// Text to identify (required)
        #[arg(short, long)]
        text: String,
    },

    /// List languages the identify command can detect
    Languages,
}

/// Execute one command against the service
pub async fn run(translator: &LanguageTranslator, command: Commands) -> anyhow::Result<()> {
    let response = match command {
        Commands::Translate {
            text,
            source,
            target,
            model_id,
        } => {
            info!("Translating {} characters", text.chars().count());
            let request = TranslateRequest {
                text,
                model_id,
                source,
                target,
            };
            translator.translate(&request).await?
        }
        Commands::Models {
            source,
            target,
            default,
        } => {
            let options = ListModelsOptions {
                source,
                target,
                default_models: default,
            };
            translator.list_models_with(&options).await?
        }
        Commands::Model { model_id } => translator.get_model(&model_id).await?,
        Commands::CreateModel {
            base_model_id,
            name,
            forced_glossary,
            parallel_corpus,
            monolingual_corpus,
        } => {
            let mut options = CreateModelOptions::new(base_model_id);
            options.name = name;
            options.forced_glossary = forced_glossary.map(ModelFile::from_path).transpose()?;
            options.parallel_corpus = parallel_corpus.map(ModelFile::from_path).transpose()?;
            options.monolingual_corpus = monolingual_corpus.map(ModelFile::from_path).transpose()?;

            if options.parts().is_empty() {
                anyhow::bail!("Provide at least one of --forced-glossary, --parallel-corpus, --monolingual-corpus");
            }

            info!("Creating model from {}", options.base_model_id);
            translator.create_model(options).await?
        }
        Commands::DeleteModel { model_id } => {
            info!("Deleting model {}", model_id);
            translator.delete_model(&model_id).await?
        }
        Commands::Identify { text } => translator.identify(&text).await?,
        Commands::Languages => translator.list_identifiable_languages().await?,
    };

    print_response(&response)?;
    Ok(())
}

fn print_response(response: &DetailedResponse) -> anyhow::Result<()> {
    println!("Status: {}", response.status());
    println!("{}", serde_json::to_string_pretty(response.body())?);
    Ok(())
}
