//! Catalog entry type and display summary.

use serde::{Deserialize, Serialize};

/// One catalog entry. Entries are read-only data: constructed by
/// [`catalog`](crate::catalog) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bike {
    pub id: String,
    pub name: String,
    pub brand: String,
    /// road, mountain, hybrid, e-bike, gravel, city
    pub category: String,
    /// aluminum, carbon, steel
    pub frame: String,
    pub groupset: String,
    /// "700c", "29", "27.5"
    pub wheel_size: String,
    pub motor: Option<String>,
    pub battery_wh: Option<u32>,
    pub weight_kg: f64,
    pub price_usd: u32,
    /// rigid, front, full
    pub suspension: String,
    /// disc, rim
    pub brakes: String,
    /// Tags among paved, gravel, trail, urban.
    pub terrain: Vec<String>,
}

impl Bike {
    /// Whether `terrain` appears among this bike's terrain tags
    /// (case-insensitive).
    #[must_use]
    pub fn rides_on(&self, terrain: &str) -> bool {
        self.terrain
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(terrain))
    }

    /// One-line summary of the key attributes, used for display and
    /// for the context handed to the reply composer.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut bits = vec![
            format!("{} by {} ({})", self.name, self.brand, self.category),
            format!("${}", self.price_usd),
            format!("{} frame", self.frame),
            self.groupset.clone(),
            format!("{} wheels", self.wheel_size),
            format!("{} suspension", self.suspension),
            format!("{} brakes", self.brakes),
        ];
        if let Some(motor) = &self.motor {
            let battery = self
                .battery_wh
                .map_or_else(String::new, |wh| wh.to_string());
            bits.push(format!("motor: {motor} {battery}Wh"));
        }
        bits.join(", ")
    }
}
