//! Provider chains for summarization and translation. Each chain tries its
//! hosted providers in registration order and ends in a local step that
//! cannot fail, so callers always get output even with no API configured.

pub mod remote;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::summarizer::{self, SummarizeError, SummaryResult};
use crate::urdu::{self, ValidationResult, validate_translation};

pub use remote::RemoteAiProvider;

/// Provider name reported when the local extractive summarizer produced the
/// summary.
pub const EXTRACTIVE_PROVIDER: &str = "extractive";
/// Provider name reported when the dictionary fallback produced the
/// translation.
pub const DICTIONARY_PROVIDER: &str = "dictionary";

#[async_trait]
pub trait SummaryProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn summarize(&self, text: &str) -> anyhow::Result<SummaryResult>;
}

#[async_trait]
pub trait TranslationProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn translate(&self, text: &str) -> anyhow::Result<String>;
}

/// Ordered chain of summary providers terminated by the local extractive
/// summarizer.
pub struct SummaryChain {
    providers: Vec<Box<dyn SummaryProvider>>,
}

impl SummaryChain {
    pub fn new(providers: Vec<Box<dyn SummaryProvider>>) -> Self {
        Self { providers }
    }

    /// Summarize `text`, returning the result and the name of the provider
    /// that produced it. Hosted failures are logged and absorbed; only empty
    /// input is an error.
    pub async fn summarize(
        &self,
        text: &str,
    ) -> Result<(SummaryResult, &'static str), SummarizeError> {
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        for provider in &self.providers {
            match provider.summarize(text).await {
                Ok(result) => {
                    info!("summary produced by provider '{}'", provider.name());
                    return Ok((result, provider.name()));
                }
                Err(e) => {
                    warn!(
                        "summary provider '{}' failed, trying next: {e}",
                        provider.name()
                    );
                }
            }
        }

        let result = summarizer::summarize(text)?;
        Ok((result, EXTRACTIVE_PROVIDER))
    }
}

/// Outcome of a translation chain run. The candidate has already been
/// normalized and repaired.
pub struct TranslationOutcome {
    pub text: String,
    pub provider: &'static str,
    pub validation: ValidationResult,
}

/// Ordered chain of translation providers terminated by the dictionary
/// fallback. Hosted candidates must pass validation to be accepted; the
/// fallback is accepted as-is so the chain always yields Urdu text.
pub struct TranslationChain {
    providers: Vec<Box<dyn TranslationProvider>>,
}

impl TranslationChain {
    pub fn new(providers: Vec<Box<dyn TranslationProvider>>) -> Self {
        Self { providers }
    }

    pub async fn translate(&self, source: &str) -> TranslationOutcome {
        for provider in &self.providers {
            let candidate = match provider.translate(source).await {
                Ok(candidate) => candidate,
                Err(e) => {
                    warn!(
                        "translation provider '{}' failed, trying next: {e}",
                        provider.name()
                    );
                    continue;
                }
            };

            let repaired = urdu::post_process(&candidate);
            let validation = validate_translation(source, &repaired);
            if validation.is_valid {
                info!("translation produced by provider '{}'", provider.name());
                return TranslationOutcome {
                    text: repaired,
                    provider: provider.name(),
                    validation,
                };
            }
            warn!(
                "translation from provider '{}' rejected ({}), trying next",
                provider.name(),
                validation.issues.join("; ")
            );
        }

        let text = urdu::translate_fallback(source);
        let validation = validate_translation(source, &text);
        TranslationOutcome {
            text,
            provider: DICTIONARY_PROVIDER,
            validation,
        }
    }
}
