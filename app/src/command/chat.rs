//! Multi-turn conversation command.
//!
//! Runs the assistant interactively, or for a single message when `-m` is
//! given. Provider and prompt settings come from the config file with
//! environment overrides; a missing config still works, the assistant just
//! answers from the local fallback until an API key is provided.

use bikefinder_config::Config;
use bikefinder_conversation::{ConversationConfig, ConversationManager};
use bikefinder_providers::OpenAiProvider;
use tracing::info;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
    /// Optional model override
    pub model: Option<String>,
    /// Optional recommendation count override
    pub limit: Option<usize>,
}

/// Strategy for executing the Chat command.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default();

        let mut provider = OpenAiProvider::new(config.providers.openai.api_key)
            .with_temperature(config.assistant.temperature)
            .with_max_tokens(config.assistant.max_tokens);
        if let Some(base_url) = config.providers.openai.base_url {
            provider = provider.with_base_url(base_url);
        }

        let model = input.model.unwrap_or(config.assistant.model);
        let mut conversation_config = ConversationConfig::default().with_model(model);
        if let Some(prompt) = config.assistant.system_prompt {
            conversation_config = conversation_config.with_system_prompt(prompt);
        }
        if let Some(limit) = config.assistant.recommend_limit {
            conversation_config = conversation_config.with_recommend_limit(limit);
        }
        // The command-line flag wins over the config file.
        if let Some(limit) = input.limit {
            conversation_config = conversation_config.with_recommend_limit(limit);
        }

        let mut manager = ConversationManager::new(provider, conversation_config);

        if let Some(msg) = input.message {
            // Single message mode
            let outcome = manager.process_turn(&msg).await;
            println!("{}", outcome.reply);
            info!("Turn {} completed.", outcome.turn_number);
        } else {
            // Interactive mode
            manager.run_interactive().await?;

            let session = manager.session();
            info!(
                "Conversation ended: {} total messages",
                session.message_count()
            );
        }

        Ok(())
    }
}
