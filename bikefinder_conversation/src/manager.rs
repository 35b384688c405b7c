//! Conversation manager for multi-turn advisory dialogue.
//!
//! The `ConversationManager` is the main entry point: each turn extracts
//! preferences from the user's message, merges them into the session state,
//! ranks the catalog, and asks the LLM provider to phrase the reply. When
//! the provider is unreachable the turn still completes with a local
//! fallback reply built from the ranked matches.

use crate::session::ConversationSession;
use bikefinder_catalog::{Bike, DEFAULT_LIMIT, catalog, rank};
use bikefinder_core::{ChatMessage, LLMProvider, PreferenceRecord, Role};
use bikefinder_intents::extract;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Greeting printed when an interactive session starts.
pub const WELCOME: &str = "Welcome to the Bike Finder! Tell me how you'll ride (terrain), budget, and any preferences.\n\
Examples: 'I commute in the city under $1000', 'I want a gravel bike around 2500',\n\
or 'an e-bike for urban rides under 3k'. Type 'quit' to exit.";

const SYSTEM_PROMPT: &str = "You are a helpful bike-purchasing assistant.\n\
- Be concise (<= 6 sentences).\n\
- If you have recommendations, list them as short bullets.\n\
- If information is missing (budget, terrain, category), ask a brief follow-up.\n\
- Do not invent bikes; rely on provided summaries.\n";

/// Configuration for conversation management.
#[derive(Debug, Clone)]
pub struct ConversationConfig {
    /// Model to use for completions
    pub model: String,
    /// System prompt sent on every turn
    pub system_prompt: String,
    /// Maximum number of catalog matches offered per turn
    pub recommend_limit: usize,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            system_prompt: SYSTEM_PROMPT.to_string(),
            recommend_limit: DEFAULT_LIMIT,
        }
    }
}

impl ConversationConfig {
    /// Set the model name.
    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Set the system prompt.
    #[must_use]
    pub fn with_system_prompt(mut self, prompt: String) -> Self {
        self.system_prompt = prompt;
        self
    }

    /// Set the recommendation limit.
    #[must_use]
    pub const fn with_recommend_limit(mut self, limit: usize) -> Self {
        self.recommend_limit = limit;
        self
    }
}

/// Errors that can occur while driving an interactive session.
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of processing a conversation turn.
///
/// A turn always succeeds from the caller's point of view: provider
/// failures are absorbed into the fallback reply, and the accumulated
/// preferences plus ranked matches are returned either way.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Assistant's reply (generated, or the local fallback)
    pub reply: String,
    /// Preferences accumulated after this turn
    pub preferences: PreferenceRecord,
    /// Ranked catalog matches for the accumulated preferences
    pub recommendations: Vec<Bike>,
    /// Turn number
    pub turn_number: usize,
}

/// Multi-turn conversation manager.
pub struct ConversationManager<P> {
    provider: P,
    config: ConversationConfig,
    session: ConversationSession,
    catalog: Vec<Bike>,
}

impl<P> ConversationManager<P>
where
    P: LLMProvider,
{
    /// Create a new conversation manager over the built-in catalog.
    pub fn new(provider: P, config: ConversationConfig) -> Self {
        info!("Starting conversation with model: {}", config.model);

        Self {
            provider,
            config,
            session: ConversationSession::new(),
            catalog: catalog(),
        }
    }

    /// Replace the catalog used for recommendations.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Vec<Bike>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Get the current session state.
    #[must_use]
    pub const fn session(&self) -> &ConversationSession {
        &self.session
    }

    /// Process a single conversation turn.
    ///
    /// Extracts preferences from the user's message, merges them into the
    /// session (newest value wins, absent values never erase), ranks the
    /// catalog against the merged record, and composes a reply.
    pub async fn process_turn(&mut self, user_text: &str) -> TurnOutcome {
        let turn_number = self.session.message_count() / 2 + 1;
        info!("Processing turn {turn_number} for session: {}", self.session.id);

        let extracted = extract(user_text);
        self.session.preferences = self.session.preferences.merged(&extracted);
        let preferences = self.session.preferences.clone();

        // An all-empty record would rank the whole catalog on zero scores;
        // hold recommendations back until the user has told us something.
        let recommendations = if preferences.is_empty() {
            Vec::new()
        } else {
            rank(&self.catalog, &preferences, self.config.recommend_limit)
        };

        self.session.add_message(Role::User, user_text.to_string());

        let reply = match self
            .compose_reply(user_text, &preferences, &recommendations)
            .await
        {
            Ok(content) => content,
            Err(e) => {
                warn!("Reply composition failed, falling back to local reply: {e}");
                fallback_reply(&recommendations, &e)
            }
        };

        self.session.add_message(Role::Assistant, reply.clone());

        debug!("Turn {turn_number} completed");

        TurnOutcome {
            reply,
            preferences,
            recommendations,
            turn_number,
        }
    }

    /// Run an interactive conversation loop.
    ///
    /// Reads from stdin and writes to stdout until the user types
    /// 'quit' or 'exit' (case-insensitive) or closes the input stream.
    pub async fn run_interactive(&mut self) -> Result<(), ConversationError> {
        println!("{WELCOME}");

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if std::io::stdin().read_line(&mut line)? == 0 {
                println!("\nGoodbye!");
                return Ok(());
            }
            let input = line.trim();

            if matches!(input.to_lowercase().as_str(), "quit" | "exit") {
                println!("Goodbye!");
                return Ok(());
            }

            if input.is_empty() {
                continue;
            }

            let outcome = self.process_turn(input).await;
            println!("{}\n", outcome.reply);
        }
    }

    /// Ask the provider to phrase a reply from the ranked matches.
    async fn compose_reply(
        &self,
        user_text: &str,
        preferences: &PreferenceRecord,
        recommendations: &[Bike],
    ) -> anyhow::Result<String> {
        let messages = [
            ChatMessage {
                role: Role::System,
                content: self.config.system_prompt.clone(),
            },
            ChatMessage {
                role: Role::User,
                content: user_text.to_string(),
            },
            ChatMessage {
                role: Role::System,
                content: build_context(preferences, recommendations),
            },
        ];

        let response = self.provider.chat(&messages, &self.config.model).await?;

        if response.content.trim().is_empty() {
            anyhow::bail!("empty response from model");
        }

        if let Some(usage) = response.usage {
            debug!(
                "Tokens: {} prompt + {} completion = {} total",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(response.content)
    }
}

/// Build the grounding context sent alongside the user's message.
fn build_context(preferences: &PreferenceRecord, recommendations: &[Bike]) -> String {
    let matches = if recommendations.is_empty() {
        "(none yet)".to_string()
    } else {
        recommendations
            .iter()
            .map(|b| format!("- {}", b.summary()))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "Current interpreted preferences (may be partial):\n{preferences}\n\nTop matches in our catalog:\n{matches}"
    )
}

/// Deterministic local reply used when the provider is unavailable.
fn fallback_reply(recommendations: &[Bike], error: &anyhow::Error) -> String {
    let local = if recommendations.is_empty() {
        "Tell me your budget, terrain, and category to suggest bikes.".to_string()
    } else {
        let bullets = recommendations
            .iter()
            .map(|b| format!("- {}", b.summary()))
            .collect::<Vec<_>>()
            .join("\n");
        format!("Here are some options based on what I understood:\n{bullets}")
    };

    format!("{local}\n\n(Note: LLM unavailable: {error})")
}
