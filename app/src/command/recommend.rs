//! One-shot catalog ranking from the command line.
//!
//! Preferences come from explicit flags, from a free-text query run through
//! the same extractor the chat uses, or both. Flags win over extracted
//! values when they disagree.

use bikefinder_catalog::{catalog, rank, score};
use bikefinder_core::PreferenceRecord;
use bikefinder_intents::extract;

/// Input parameters for the Recommend command strategy.
#[derive(Debug, Clone)]
pub struct RecommendInput {
    /// Free-text query to extract preferences from
    pub query: Option<String>,
    /// Budget ceiling, in dollars or with a `k` suffix
    pub budget: Option<String>,
    /// Bike category
    pub category: Option<String>,
    /// Terrain
    pub terrain: Option<String>,
    /// Preferred brand
    pub brand: Option<String>,
    /// Require electric assist
    pub electric: bool,
    /// Exclude electric assist
    pub no_electric: bool,
    /// Prefer lightweight bikes
    pub lightweight: bool,
    /// Maximum number of recommendations
    pub limit: usize,
}

/// Strategy for executing the Recommend command.
#[derive(Debug, Clone, Copy)]
pub struct RecommendStrategy;

impl super::CommandStrategy for RecommendStrategy {
    type Input = RecommendInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let preferences = build_preferences(&input);

        if preferences.is_empty() {
            println!("No preferences given; showing the whole catalog.\n");
        } else {
            println!("Preferences: {preferences}\n");
        }

        let bikes = catalog();
        let ranked = rank(&bikes, &preferences, input.limit);

        if ranked.is_empty() {
            println!("(catalog is empty)");
            return Ok(());
        }

        for bike in &ranked {
            println!(
                "- {} [score {:.2}]",
                bike.summary(),
                score(bike, &preferences)
            );
        }

        Ok(())
    }
}

fn build_preferences(input: &RecommendInput) -> PreferenceRecord {
    let extracted = input.query.as_deref().map(extract).unwrap_or_default();

    let manual = PreferenceRecord {
        budget: input.budget.as_deref().and_then(parse_budget_flag),
        category: input.category.clone(),
        terrain: input.terrain.clone(),
        brand: input.brand.clone(),
        motorized: match (input.electric, input.no_electric) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        },
        lightweight: input.lightweight.then_some(true),
    };

    extracted.merged(&manual)
}

/// Parse a budget flag: plain dollars, comma-grouped dollars, or a `k`
/// suffix for thousands.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "budgets are small positive integers"
)]
fn parse_budget_flag(raw: &str) -> Option<u32> {
    let cleaned = raw.to_lowercase().replace([',', ' '], "");
    cleaned.strip_suffix('k').map_or_else(
        || cleaned.parse::<u32>().ok(),
        |num| num.parse::<f64>().ok().map(|n| (n * 1000.0) as u32),
    )
}
