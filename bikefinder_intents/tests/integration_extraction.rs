//! Integration tests for preference extraction.
//!
//! These run realistic buyer utterances end to end and pin down the
//! vocabulary tables keyword by keyword, including the ordering
//! quirks the extraction contract guarantees.

use bikefinder_intents::{CATEGORY_KEYWORDS, PreferenceRecord, TERRAIN_KEYWORDS, extract};

#[test]
fn test_city_commute_utterance() {
    assert_eq!(
        extract("I commute in the city under $800"),
        PreferenceRecord {
            budget: Some(800),
            category: Some("city".to_string()),
            terrain: Some("urban".to_string()),
            brand: None,
            motorized: None,
            lightweight: None,
        }
    );
}

#[test]
fn test_ebike_utterance() {
    assert_eq!(
        extract("an e-bike for urban rides under 3k"),
        PreferenceRecord {
            budget: Some(3000),
            category: Some("e-bike".to_string()),
            terrain: Some("urban".to_string()),
            brand: None,
            motorized: Some(true),
            lightweight: None,
        }
    );
}

#[test]
fn test_negated_electric_utterance() {
    assert_eq!(
        extract("Non-electric lightweight road bike around 2k"),
        PreferenceRecord {
            budget: Some(2000),
            category: Some("road".to_string()),
            terrain: Some("paved".to_string()),
            brand: None,
            motorized: Some(false),
            lightweight: Some(true),
        }
    );
}

#[test]
fn test_budget_formats() {
    let cases = [
        ("Looking for something around 2k", Some(2000)),
        ("Below 800", Some(800)),
        ("Around 1,500", Some(1500)),
        ("Under 3k", Some(3000)),
        ("$500", Some(500)),
        ("1,000", Some(1000)),
        // Separator stripping: "2.5" becomes 25 before the multiply.
        ("2.5k", Some(25_000)),
        ("1.5k", Some(15_000)),
        // The grouped alternative stops after three leading digits.
        ("I want a bike under $1000", Some(100)),
        ("My budget is 1500 dollars", Some(150)),
        ("Maximum 2500", Some(250)),
        ("Budget is abc dollars", None),
    ];

    for (text, expected) in cases {
        assert_eq!(extract(text).budget, expected, "budget from {text:?}");
    }
}

#[test]
fn test_category_utterances() {
    let cases = [
        ("I want a road bike", "road"),
        ("Looking for mountain bikes", "mountain"),
        ("Need a hybrid", "hybrid"),
        ("Gravel bike please", "gravel"),
        ("City bike for commuting", "city"),
        ("Electric bike", "e-bike"),
        ("E-bike for urban riding", "e-bike"),
        // Priority order, not keyword position in the text.
        ("I want a mountain road bike", "mountain"),
    ];

    for (text, expected) in cases {
        assert_eq!(
            extract(text).category.as_deref(),
            Some(expected),
            "category from {text:?}"
        );
    }
}

#[test]
fn test_every_category_keyword_maps_to_its_label() {
    for &(label, keywords) in CATEGORY_KEYWORDS {
        for keyword in keywords {
            let text = format!("I want a {keyword} bike");
            assert_eq!(
                extract(&text).category.as_deref(),
                Some(label),
                "keyword {keyword:?} should map to {label:?}"
            );
        }
    }
}

#[test]
fn test_terrain_utterances() {
    let cases = [
        ("For paved roads", "paved"),
        ("Gravel trails", "gravel"),
        ("Mountain trails", "trail"),
        ("Urban commuting", "urban"),
        ("City riding", "urban"),
    ];

    for (text, expected) in cases {
        assert_eq!(
            extract(text).terrain.as_deref(),
            Some(expected),
            "terrain from {text:?}"
        );
    }
}

#[test]
fn test_every_terrain_keyword_maps_to_its_label() {
    for &(label, keywords) in TERRAIN_KEYWORDS {
        for keyword in keywords {
            let text = format!("For {keyword} riding");
            assert_eq!(
                extract(&text).terrain.as_deref(),
                Some(label),
                "keyword {keyword:?} should map to {label:?}"
            );
        }
    }
}

#[test]
fn test_brand_utterances() {
    let cases = [
        ("I like Metro bikes", "Metro"),
        ("Prefer Alpine", "Alpine"),
        ("Looking for Peak bikes", "Peak"),
        ("Volt brand", "Volt"),
        ("Terra bikes", "Terra"),
    ];

    for (text, expected) in cases {
        assert_eq!(
            extract(text).brand.as_deref(),
            Some(expected),
            "brand from {text:?}"
        );
    }
}

#[test]
fn test_motorized_utterances() {
    let cases = [
        ("Electric bike", Some(true)),
        ("E-bike", Some(true)),
        ("With motor", Some(true)),
        ("Battery assist", Some(true)),
        ("Non-electric", Some(false)),
        ("Without motor", Some(false)),
        ("Acoustic bike", Some(false)),
        ("Just a bike", None),
    ];

    for (text, expected) in cases {
        assert_eq!(extract(text).motorized, expected, "motorized from {text:?}");
    }
}

#[test]
fn test_lightweight_utterances() {
    for text in ["Lightweight bike", "As light as possible", "Lighter weight"] {
        assert_eq!(
            extract(text).lightweight,
            Some(true),
            "lightweight from {text:?}"
        );
    }
}

#[test]
fn test_combined_query() {
    let record = extract("Looking for an electric Metro bike around 3k for urban commuting");

    assert_eq!(record.budget, Some(3000));
    assert_eq!(record.category.as_deref(), Some("e-bike"));
    assert_eq!(record.brand.as_deref(), Some("Metro"));
    assert_eq!(record.terrain.as_deref(), Some("urban"));
    assert_eq!(record.motorized, Some(true));
}

#[test]
fn test_multi_preference_query() {
    let record = extract("I want a lightweight mountain bike under $2000 for trails");

    assert_eq!(record.budget, Some(200));
    assert_eq!(record.category.as_deref(), Some("mountain"));
    assert_eq!(record.terrain.as_deref(), Some("trail"));
    assert_eq!(record.lightweight, Some(true));
}

#[test]
fn test_realistic_queries_always_extract_something() {
    let queries = [
        "I need a bike for commuting in the city, budget around $800",
        "Looking for a mountain bike under 1500 for trail riding",
        "Electric bike for urban use, max 3000",
        "Lightweight road bike around 2k",
        "Hybrid bike for paved roads, budget 1200",
    ];

    for query in queries {
        assert!(
            !extract(query).is_empty(),
            "query {query:?} should extract at least one field"
        );
    }
}

#[test]
fn test_repeated_extraction_agrees() {
    let text = "Mountain bike under $2000 for trails";
    assert_eq!(extract(text), extract(text));
}
