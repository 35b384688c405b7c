use bikefinder_catalog::catalog;
use bikefinder_config::Config;

/// Strategy for displaying configuration information.
///
/// This strategy outputs the resolved configuration (file plus environment
/// overrides) with the API key masked, followed by a short catalog summary.
///
/// # Design
/// - Zero-allocation: No heap allocation beyond what business logic requires
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default();

        println!("=== bikefinder Configuration ===\n");

        println!("API Key:");
        println!("  OpenAI: {}", mask_api_key(&config.providers.openai.api_key));
        if let Some(ref base_url) = config.providers.openai.base_url {
            println!("  Base URL: {base_url}");
        }
        println!();

        println!("Assistant Defaults:");
        println!("  Model: {}", config.assistant.model);
        println!("  Max Tokens: {}", config.assistant.max_tokens);
        println!("  Temperature: {}", config.assistant.temperature);
        if let Some(ref prompt) = config.assistant.system_prompt {
            println!("  System Prompt: {}", truncate(prompt, 60));
        }
        if let Some(limit) = config.assistant.recommend_limit {
            println!("  Recommend Limit: {limit}");
        }
        println!();

        let bikes = catalog();
        println!("Catalog:");
        println!("  Bikes: {}", bikes.len());
        let min_price = bikes.iter().map(|b| b.price_usd).min().unwrap_or(0);
        let max_price = bikes.iter().map(|b| b.price_usd).max().unwrap_or(0);
        println!("  Price Range: ${min_price} - ${max_price}");

        Ok(())
    }
}

fn mask_api_key(api_key: &str) -> String {
    // Counted in chars, not bytes: keys are user input and may hold
    // multi-byte text that a byte slice would split mid-character.
    let char_count = api_key.chars().count();
    if api_key.is_empty() {
        "(not set)".to_string()
    } else if char_count > 8 {
        let head: String = api_key.chars().take(4).collect();
        let tail: String = api_key.chars().skip(char_count - 4).collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
