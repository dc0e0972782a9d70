//! Language detection and translation into English.
//!
//! [`TranslationService::translate_content`] asks the hosted model for the
//! language of a post, passes English through untouched and translates
//! everything else. Any failure along the way collapses into
//! [`UNINTELLIGIBLE`]; callers match on that exact string.

use crate::config::Config;
use crate::error::ChatError;
use crate::openai::{AzureOpenAiClient, ChatCompletion};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Returned in place of a translation whenever anything goes wrong
pub const UNINTELLIGIBLE: &str = "Unintelligible or malformed text.";

const LANGUAGE_PROMPT: &str = "Tell me the language that the query is in. If you can't translate it into English, just respond 'Unintelligible or malformed text.'";

const TRANSLATION_PROMPT: &str = "Translate the query into English. If you can't recognize the language or if the query doesn't make sense, just respond 'Unintelligible or malformed text.'";

/// Language name as reported by the model (e.g. "Spanish"), or the
/// unintelligible phrase. Not validated beyond the English check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageLabel(String);

impl LanguageLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive match against "english"; surrounding text is not trimmed
    pub fn is_english(&self) -> bool {
        self.0.to_lowercase() == "english"
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for LanguageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of [`TranslationService::translate_content`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub is_english: bool,
    pub content: String,
}

impl TranslationResult {
    /// Input was English; `content` is the original text
    pub fn passthrough(original: impl Into<String>) -> Self {
        Self {
            is_english: true,
            content: original.into(),
        }
    }

    pub fn translated(text: impl Into<String>) -> Self {
        Self {
            is_english: false,
            content: text.into(),
        }
    }

    pub fn unintelligible() -> Self {
        Self::translated(UNINTELLIGIBLE)
    }

    pub fn is_unintelligible(&self) -> bool {
        !self.is_english && self.content == UNINTELLIGIBLE
    }
}

impl From<TranslationResult> for (bool, String) {
    fn from(result: TranslationResult) -> Self {
        (result.is_english, result.content)
    }
}

/// Why `translate_content` gave up. Never surfaced to callers.
#[derive(Error, Debug)]
enum TranslateFailure {
    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error("{0} returned blank output")]
    Blank(&'static str),
}

pub struct TranslationService<C> {
    client: C,
}

impl TranslationService<AzureOpenAiClient> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(AzureOpenAiClient::new(config))
    }
}

impl<C: ChatCompletion> TranslationService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Ask the model which language `text` is in. The reply is returned verbatim.
    pub async fn detect_language(&self, text: &str) -> Result<LanguageLabel, ChatError> {
        let label = self.client.complete(LANGUAGE_PROMPT, text).await?;
        Ok(LanguageLabel::new(label))
    }

    /// Ask the model to translate `text` into English. The reply is returned verbatim.
    pub async fn translate_to_english(&self, text: &str) -> Result<String, ChatError> {
        self.client.complete(TRANSLATION_PROMPT, text).await
    }

    /// Detect, then translate unless the text is already English.
    ///
    /// Makes at most two sequential model calls. Never fails: errors and
    /// blank model output are logged and become [`TranslationResult::unintelligible`].
    pub async fn translate_content(&self, text: &str) -> TranslationResult {
        match self.try_translate(text).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Error processing the post: {}", e);
                TranslationResult::unintelligible()
            }
        }
    }

    async fn try_translate(&self, text: &str) -> Result<TranslationResult, TranslateFailure> {
        let language = self.detect_language(text).await?;
        if language.is_blank() {
            return Err(TranslateFailure::Blank("Language detection"));
        }

        if language.is_english() {
            debug!("Post is already English, skipping translation");
            return Ok(TranslationResult::passthrough(text));
        }

        debug!("Detected language '{}', translating", language);
        let translation = self.translate_to_english(text).await?;
        if translation.trim().is_empty() {
            return Err(TranslateFailure::Blank("Translation"));
        }

        Ok(TranslationResult::translated(translation))
    }
}
