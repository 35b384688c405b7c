use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

const CONFIG_TEMPLATE: &str = r#"{
  "assistant": {
    "model": "gpt-4o-mini",
    "max_tokens": 500,
    "temperature": 0.2,
    "recommend_limit": 3
  },
  "providers": {
    "openai": {
      "api_key": "your-openai-api-key-here"
    }
  }
}"#;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AssistantConfig {
    #[serde(default = "AssistantConfig::default_model")]
    pub model: String,
    #[serde(default = "AssistantConfig::default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "AssistantConfig::default_temperature")]
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommend_limit: Option<usize>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: Self::default_model(),
            max_tokens: Self::default_max_tokens(),
            temperature: Self::default_temperature(),
            system_prompt: None,
            recommend_limit: None,
        }
    }
}

impl AssistantConfig {
    fn default_model() -> String {
        "gpt-4o-mini".to_string()
    }

    const fn default_max_tokens() -> u32 {
        500
    }

    const fn default_temperature() -> f32 {
        0.2
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openai: OpenAiConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("bikefinder");

        let config_path = config_dir.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'bikefinder init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let mut config: Self = serde_json::from_str(&content)?;
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load the config file, falling back to defaults when it is missing
    /// or unreadable. Environment overrides apply either way.
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Falling back to default configuration: {e}");
            let mut config = Self::default();
            config.apply_env_overrides();
            config
        })
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                self.providers.openai.api_key = key;
            }
        }
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            if !model.is_empty() {
                self.assistant.model = model;
            }
        }
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            if !base_url.is_empty() {
                self.providers.openai.base_url = Some(base_url);
            }
        }
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("bikefinder");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and add your OpenAI API key");
        println!("   2. Or set OPENAI_API_KEY in your environment instead");
        println!("   3. Run 'bikefinder chat' to start a conversation");
        println!();
        println!("🔧 Configuration options:");
        println!("   - model: chat model to use (gpt-4o-mini, gpt-4o, etc.)");
        println!("   - recommend_limit: number of catalog matches offered per reply");
        println!("   - providers.openai.base_url: alternate OpenAI-compatible endpoint");
        println!();
        Ok(())
    }
}
