//! Buyer preference records accumulated over a conversation.
//!
//! A record starts empty and fills in as the buyer reveals signals.
//! Merging keeps history: a turn that says nothing about a field never
//! erases what an earlier turn established.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured buyer intent, every field optional.
///
/// Absence means "no signal yet", never "explicitly false/zero"; the
/// two real negative signals are `motorized = Some(false)` and the
/// budget ceiling. `category` and `terrain` stay open strings so that
/// values outside the extractor's vocabulary flow through ranking as
/// ordinary non-matching criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// Budget ceiling in whole currency units.
    pub budget: Option<u32>,
    /// Bike category; extractor vocabulary: road, mountain, hybrid,
    /// gravel, city, e-bike.
    pub category: Option<String>,
    /// Riding terrain; extractor vocabulary: paved, gravel, trail,
    /// urban.
    pub terrain: Option<String>,
    /// Title-cased brand name.
    pub brand: Option<String>,
    /// `Some(false)` is an explicit "no motor" request, not absence.
    pub motorized: Option<bool>,
    /// Only ever set to `Some(true)`.
    pub lightweight: Option<bool>,
}

impl PreferenceRecord {
    /// Check whether no signal has been captured yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.budget.is_none()
            && self.category.is_none()
            && self.terrain.is_none()
            && self.brand.is_none()
            && self.motorized.is_none()
            && self.lightweight.is_none()
    }

    /// Merge a newer partial record into this one.
    ///
    /// Every field that is present (and, for strings, non-empty) in
    /// `incoming` overwrites; absent or empty incoming fields preserve
    /// the existing value. The most recent specific signal wins.
    #[must_use]
    pub fn merged(&self, incoming: &Self) -> Self {
        Self {
            budget: incoming.budget.or(self.budget),
            category: merge_text(self.category.as_deref(), incoming.category.as_deref()),
            terrain: merge_text(self.terrain.as_deref(), incoming.terrain.as_deref()),
            brand: merge_text(self.brand.as_deref(), incoming.brand.as_deref()),
            motorized: incoming.motorized.or(self.motorized),
            lightweight: incoming.lightweight.or(self.lightweight),
        }
    }
}

/// Incoming wins only when present and non-empty.
fn merge_text(existing: Option<&str>, incoming: Option<&str>) -> Option<String> {
    match incoming {
        Some(s) if !s.is_empty() => Some(s.to_owned()),
        _ => existing.map(str::to_owned),
    }
}

impl fmt::Display for PreferenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(budget) = self.budget {
            parts.push(format!("budget=${budget}"));
        }
        if let Some(category) = &self.category {
            parts.push(format!("category={category}"));
        }
        if let Some(terrain) = &self.terrain {
            parts.push(format!("terrain={terrain}"));
        }
        if let Some(brand) = &self.brand {
            parts.push(format!("brand={brand}"));
        }
        if let Some(motorized) = self.motorized {
            parts.push(format!("motorized={motorized}"));
        }
        if let Some(lightweight) = self.lightweight {
            parts.push(format!("lightweight={lightweight}"));
        }
        if parts.is_empty() {
            write!(f, "(none yet)")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}
