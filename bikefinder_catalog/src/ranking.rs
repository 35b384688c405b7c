//! Filtering, scoring, and ranking of catalog entries.

use bikefinder_core::PreferenceRecord;

use crate::item::Bike;

/// Default number of recommendations returned by [`rank`].
pub const DEFAULT_LIMIT: usize = 3;

/// Apply the hard constraints of `prefs` to the catalog.
///
/// Constraints are optional and AND-combined: budget is a price
/// ceiling, category and brand compare case-insensitively, terrain
/// must appear among the item's tags, and `motorized` requires motor
/// presence or absence. The result can be empty; [`rank`] owns the
/// fallback.
#[must_use]
pub fn filter<'a>(catalog: &'a [Bike], prefs: &PreferenceRecord) -> Vec<&'a Bike> {
    catalog
        .iter()
        .filter(|bike| matches_constraints(bike, prefs))
        .collect()
}

fn matches_constraints(bike: &Bike, prefs: &PreferenceRecord) -> bool {
    if prefs.budget.is_some_and(|budget| bike.price_usd > budget) {
        return false;
    }
    if prefs
        .category
        .as_deref()
        .is_some_and(|category| !bike.category.eq_ignore_ascii_case(category))
    {
        return false;
    }
    if prefs
        .brand
        .as_deref()
        .is_some_and(|brand| !bike.brand.eq_ignore_ascii_case(brand))
    {
        return false;
    }
    if prefs
        .terrain
        .as_deref()
        .is_some_and(|terrain| !bike.rides_on(terrain))
    {
        return false;
    }
    if prefs
        .motorized
        .is_some_and(|wants_motor| wants_motor != bike.motor.is_some())
    {
        return false;
    }
    true
}

/// Additive soft utility of `bike` under `prefs`. Higher is better.
///
/// Criteria are independent; a missing preference contributes
/// nothing. Over-budget items are penalized rather than excluded
/// because ranking may be operating on the full-catalog fallback.
#[must_use]
pub fn score(bike: &Bike, prefs: &PreferenceRecord) -> f64 {
    let mut score = 0.0;

    if let Some(budget) = prefs.budget {
        if bike.price_usd <= budget {
            // Within budget, with a bounded bonus for unused headroom.
            score += 3.0;
            score += (f64::from(budget) - f64::from(bike.price_usd)) / f64::from(budget.max(1));
        } else {
            score -= 2.0;
        }
    }

    if prefs
        .category
        .as_deref()
        .is_some_and(|category| bike.category.eq_ignore_ascii_case(category))
    {
        score += 3.0;
    }

    if prefs
        .terrain
        .as_deref()
        .is_some_and(|terrain| bike.rides_on(terrain))
    {
        score += 2.0;
    }

    // Asymmetric: a satisfied motor request counts more than a
    // satisfied no-motor request.
    match prefs.motorized {
        Some(true) if bike.motor.is_some() => score += 2.0,
        Some(false) if bike.motor.is_none() => score += 1.0,
        _ => {}
    }

    if prefs.lightweight == Some(true) {
        score += (12.0 - bike.weight_kg).max(0.0) * 0.2;
    }

    if prefs
        .brand
        .as_deref()
        .is_some_and(|brand| bike.brand.eq_ignore_ascii_case(brand))
    {
        score += 1.5;
    }

    score
}

/// Rank the catalog under `prefs` and keep the best `limit` items.
///
/// Hard constraints run first; when nothing survives them the whole
/// catalog is ranked instead, so a non-empty catalog always yields
/// recommendations ("no exact match" degrades to "best available").
/// The sort is stable: equal scores keep catalog declaration order.
#[must_use]
pub fn rank(catalog: &[Bike], prefs: &PreferenceRecord, limit: usize) -> Vec<Bike> {
    let filtered = filter(catalog, prefs);
    let candidates: Vec<&Bike> = if filtered.is_empty() {
        catalog.iter().collect()
    } else {
        filtered
    };

    let mut scored: Vec<(&Bike, f64)> = candidates
        .into_iter()
        .map(|bike| (bike, score(bike, prefs)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .take(limit)
        .map(|(bike, _)| bike.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;

    fn prefs() -> PreferenceRecord {
        PreferenceRecord::default()
    }

    #[test]
    fn test_filter_by_price_ceiling() {
        let catalog = catalog();
        let prefs = PreferenceRecord {
            budget: Some(1000),
            ..prefs()
        };

        let kept = filter(&catalog, &prefs);
        assert!(!kept.is_empty());
        assert!(kept.iter().all(|b| b.price_usd <= 1000));
    }

    #[test]
    fn test_filter_by_category_case_insensitive() {
        let catalog = catalog();
        let prefs = PreferenceRecord {
            category: Some("ROAD".to_string()),
            ..prefs()
        };

        let kept = filter(&catalog, &prefs);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "r1");
    }

    #[test]
    fn test_filter_by_brand() {
        let catalog = catalog();
        let prefs = PreferenceRecord {
            brand: Some("Metro".to_string()),
            ..prefs()
        };

        let kept = filter(&catalog, &prefs);
        assert!(kept.iter().all(|b| b.brand.eq_ignore_ascii_case("metro")));
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_filter_by_terrain_tag() {
        let catalog = catalog();
        let prefs = PreferenceRecord {
            terrain: Some("urban".to_string()),
            ..prefs()
        };

        let kept = filter(&catalog, &prefs);
        assert!(kept.iter().all(|b| b.rides_on("urban")));
    }

    #[test]
    fn test_filter_by_motorization() {
        let catalog = catalog();

        let electric = filter(
            &catalog,
            &PreferenceRecord {
                motorized: Some(true),
                ..prefs()
            },
        );
        assert!(electric.iter().all(|b| b.motor.is_some()));

        let acoustic = filter(
            &catalog,
            &PreferenceRecord {
                motorized: Some(false),
                ..prefs()
            },
        );
        assert!(acoustic.iter().all(|b| b.motor.is_none()));
    }

    #[test]
    fn test_filter_combines_constraints() {
        let catalog = catalog();
        let prefs = PreferenceRecord {
            budget: Some(2000),
            category: Some("mountain".to_string()),
            motorized: Some(false),
            ..prefs()
        };

        let kept = filter(&catalog, &prefs);
        assert!(!kept.is_empty());
        for bike in kept {
            assert!(bike.price_usd <= 2000);
            assert_eq!(bike.category, "mountain");
            assert!(bike.motor.is_none());
        }
    }

    #[test]
    fn test_score_under_and_over_budget() {
        let catalog = catalog();
        let prefs = PreferenceRecord {
            budget: Some(1500),
            ..prefs()
        };

        for bike in &catalog {
            let s = score(bike, &prefs);
            if bike.price_usd <= 1500 {
                assert!(s > 0.0, "{} should score positive", bike.id);
            } else {
                assert!(s < 0.0, "{} should be penalized", bike.id);
            }
        }
    }

    #[test]
    fn test_score_budget_headroom_is_a_ratio() {
        let catalog = catalog();
        let prefs = PreferenceRecord {
            budget: Some(1000),
            ..prefs()
        };

        // c1 at $599 leaves more headroom than h1 at $799.
        let c1 = score(&catalog[5], &prefs);
        let h1 = score(&catalog[2], &prefs);
        assert!((c1 - (3.0 + 401.0 / 1000.0)).abs() < 1e-9);
        assert!((h1 - (3.0 + 201.0 / 1000.0)).abs() < 1e-9);
        assert!(c1 > h1);
    }

    #[test]
    fn test_score_category_and_terrain_bonuses() {
        let catalog = catalog();
        let road = &catalog[0];

        let by_category = PreferenceRecord {
            category: Some("road".to_string()),
            ..prefs()
        };
        assert!((score(road, &by_category) - 3.0).abs() < 1e-9);

        let by_terrain = PreferenceRecord {
            terrain: Some("urban".to_string()),
            ..prefs()
        };
        assert!((score(road, &by_terrain) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_motor_asymmetry() {
        let catalog = catalog();
        let ebike = &catalog[3];
        let city = &catalog[5];

        let wants_motor = PreferenceRecord {
            motorized: Some(true),
            ..prefs()
        };
        assert!((score(ebike, &wants_motor) - 2.0).abs() < 1e-9);
        assert!((score(city, &wants_motor)).abs() < 1e-9);

        let wants_acoustic = PreferenceRecord {
            motorized: Some(false),
            ..prefs()
        };
        assert!((score(city, &wants_acoustic) - 1.0).abs() < 1e-9);
        assert!((score(ebike, &wants_acoustic)).abs() < 1e-9);
    }

    #[test]
    fn test_score_lightweight_reward_below_threshold() {
        let catalog = catalog();
        let prefs = PreferenceRecord {
            lightweight: Some(true),
            ..prefs()
        };

        // 8.4 kg road bike: (12 - 8.4) * 0.2.
        assert!((score(&catalog[0], &prefs) - 0.72).abs() < 1e-9);
        // 21 kg e-bike: clamped to zero, no penalty.
        assert!(score(&catalog[3], &prefs).abs() < 1e-9);
    }

    #[test]
    fn test_score_brand_bonus() {
        let catalog = catalog();
        let prefs = PreferenceRecord {
            brand: Some("metro".to_string()),
            ..prefs()
        };

        assert!((score(&catalog[2], &prefs) - 1.5).abs() < 1e-9);
        assert!(score(&catalog[0], &prefs).abs() < 1e-9);
    }

    #[test]
    fn test_score_ignores_empty_string_fields() {
        let catalog = catalog();
        let prefs = PreferenceRecord {
            category: Some(String::new()),
            terrain: Some(String::new()),
            brand: Some(String::new()),
            ..prefs()
        };

        for bike in &catalog {
            assert!(score(bike, &prefs).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rank_returns_highest_scores_first() {
        let catalog = catalog();
        let prefs = PreferenceRecord {
            budget: Some(1000),
            ..prefs()
        };

        let ranked = rank(&catalog, &prefs, DEFAULT_LIMIT);
        let scores: Vec<f64> = ranked.iter().map(|b| score(b, &prefs)).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_rank_stable_ties_keep_catalog_order() {
        let catalog = catalog();
        let prefs = PreferenceRecord {
            category: Some("mountain".to_string()),
            ..prefs()
        };

        // Both mountain bikes score exactly 3.0; declaration order
        // breaks the tie.
        let ranked = rank(&catalog, &prefs, DEFAULT_LIMIT);
        assert_eq!(ranked[0].id, "m1");
        assert_eq!(ranked[1].id, "m2");
    }

    #[test]
    fn test_rank_falls_back_to_full_catalog() {
        let catalog = catalog();
        let prefs = PreferenceRecord {
            category: Some("unicorn".to_string()),
            ..prefs()
        };

        let ranked = rank(&catalog, &prefs, DEFAULT_LIMIT);
        assert_eq!(ranked.len(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_rank_respects_limit() {
        let catalog = catalog();
        let prefs = PreferenceRecord {
            budget: Some(5000),
            ..prefs()
        };

        let ranked = rank(&catalog, &prefs, 1);
        assert_eq!(ranked.len(), 1);
        // Cheapest entry wins on budget headroom alone.
        assert_eq!(ranked[0].id, "c1");
    }

    #[test]
    fn test_rank_empty_catalog_is_empty() {
        let ranked = rank(&[], &prefs(), DEFAULT_LIMIT);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rank_zero_limit_is_empty() {
        let catalog = catalog();
        let ranked = rank(&catalog, &prefs(), 0);
        assert!(ranked.is_empty());
    }
}
