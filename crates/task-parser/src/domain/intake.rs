//! Intake facade - turn pasted text into task drafts.
//!
//! This module provides the entry point the route layer talks to:
//! 1. Without a credential, text goes straight through the heuristics
//! 2. With one, the completion model is asked first
//! 3. Any model failure (transport, status, timeout, unparseable reply)
//!    falls back to the heuristics on the same text

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::ai::prompts::extract_tasks_template;
use crate::ai::{
    parse_model_reply, AIMessage, AIProvider, ExtractTasksContext, GenerateOptions,
    OpenAIProvider, TokenUsage,
};
use crate::entities::{ParserConfig, TaskDraft};
use crate::errors::{ParserError, ParserResult};
use crate::heuristics;

/// Which pipeline produced a set of drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftSource {
    /// Line and sentence heuristics
    Heuristic,
    /// Completion model reply
    Model,
}

impl std::fmt::Display for DraftSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heuristic => write!(f, "heuristic"),
            Self::Model => write!(f, "model"),
        }
    }
}

/// Drafts plus how they were produced.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome {
    /// Extracted drafts, in source order
    pub drafts: Vec<TaskDraft>,

    /// Pipeline that produced them
    pub source: DraftSource,

    /// Token usage when the model answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

impl ParseOutcome {
    fn heuristic(text: &str) -> Self {
        Self {
            drafts: heuristics::parse(text),
            source: DraftSource::Heuristic,
            usage: None,
        }
    }
}

/// Task parser with an optional completion-model path.
pub struct TaskParser {
    provider: Option<Arc<dyn AIProvider>>,
    config: ParserConfig,
}

impl TaskParser {
    /// Create a parser that never calls a model.
    pub fn heuristic_only() -> Self {
        Self {
            provider: None,
            config: ParserConfig::default(),
        }
    }

    /// Create a parser from configuration.
    ///
    /// The OpenAI-compatible provider is only built when the config carries
    /// a credential.
    pub fn from_config(config: ParserConfig) -> Self {
        let provider = config
            .has_credential()
            .then(|| Arc::new(OpenAIProvider::from_config(&config)) as Arc<dyn AIProvider>);
        Self { provider, config }
    }

    /// Create a parser backed by a specific provider.
    pub fn with_provider(config: ParserConfig, provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider: Some(provider),
            config,
        }
    }

    /// Whether calls will consult the completion model.
    pub fn uses_model(&self) -> bool {
        self.active_provider().is_some()
    }

    fn active_provider(&self) -> Option<&Arc<dyn AIProvider>> {
        self.provider.as_ref().filter(|p| p.is_configured())
    }

    /// Heuristic-only extraction.
    pub fn parse(&self, text: &str) -> Vec<TaskDraft> {
        heuristics::parse(text)
    }

    /// Extract drafts, asking the model first when one is configured.
    ///
    /// Never fails; behaves exactly like [`TaskParser::parse`] without a
    /// credential or when the model path fails.
    pub async fn parse_with_fallback_model(&self, text: &str) -> Vec<TaskDraft> {
        self.parse_detailed(text).await.drafts
    }

    /// Like [`TaskParser::parse_with_fallback_model`] for a JSON body field.
    ///
    /// Missing, `null` and non-string values yield an empty vector without
    /// contacting the model.
    pub async fn parse_value_with_fallback_model(&self, value: Option<&Value>) -> Vec<TaskDraft> {
        match value {
            Some(Value::String(text)) => self.parse_with_fallback_model(text).await,
            _ => heuristics::parse_value(value),
        }
    }

    /// Extract drafts and report which pipeline produced them.
    pub async fn parse_detailed(&self, text: &str) -> ParseOutcome {
        let Some(provider) = self.active_provider() else {
            return ParseOutcome::heuristic(text);
        };
        if text.trim().is_empty() {
            return ParseOutcome::heuristic(text);
        }

        match self.ask_model(provider.as_ref(), text).await {
            Ok((drafts, usage)) => {
                tracing::debug!(
                    tasks = drafts.len(),
                    provider = provider.name(),
                    "Model extraction complete"
                );
                ParseOutcome {
                    drafts,
                    source: DraftSource::Model,
                    usage: Some(usage),
                }
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    provider = provider.name(),
                    "Model extraction failed, falling back to heuristics"
                );
                ParseOutcome::heuristic(text)
            }
        }
    }

    async fn ask_model(
        &self,
        provider: &dyn AIProvider,
        text: &str,
    ) -> ParserResult<(Vec<TaskDraft>, TokenUsage)> {
        let (system, user) = extract_tasks_template().render(&ExtractTasksContext::new(text))?;
        let messages = vec![AIMessage::system(system), AIMessage::user(user)];

        let options = GenerateOptions {
            temperature: Some(self.config.temperature),
            max_tokens: Some(self.config.max_tokens),
        };

        let request = provider.generate_text(&self.config.model, &messages, &options);
        let response = match self.config.request_timeout() {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|_| ParserError::AiTimeout {
                    secs: limit.as_secs(),
                })??,
            None => request.await?,
        };

        tracing::debug!(
            model = %response.model,
            provider = %response.provider,
            total_tokens = response.usage.total_tokens,
            "Parsing model reply"
        );
        let drafts = parse_model_reply(&response.text)?;
        Ok((drafts, response.usage))
    }
}

impl Default for TaskParser {
    fn default() -> Self {
        Self::heuristic_only()
    }
}
