//! Turning one utterance into a partial preference record.

use bikefinder_core::PreferenceRecord;
use regex::Regex;

use crate::keywords::{
    CATEGORY_KEYWORDS, KNOWN_BRANDS, LIGHTWEIGHT_HINTS, MOTOR_NEGATIVE, MOTOR_POSITIVE,
    TERRAIN_KEYWORDS,
};

/// Monetary quantity: a number with a thousands suffix ("2k", "2.5k"),
/// or a currency/grouped number with an optional suffix ("$800",
/// "1,500", "2k+"). The suffix branch comes first and the grouped
/// branch binds the currency symbol directly to its number, so the
/// grouped branch cannot start on bare whitespace and steal the
/// leftmost position from a following "2.5k"-style amount.
const MONEY_PATTERN: &str =
    r"((\d+(?:[\.,]\d+)?)\s*k)|((?:\$\s*)?(\d{1,3}(?:[\.,]\d{3})*|\d+)(?:\s*(k|k\+))?)";

/// First run of digits (with optional separator) inside a monetary match.
const DIGIT_TOKEN_PATTERN: &str = r"\d+(?:[\.,]\d+)?";

/// Extract a partial preference record from one utterance.
///
/// Pure and deterministic: the input is lower-cased once and each
/// field is produced by its own independent sub-extraction. Absent or
/// unparseable signals leave the field `None`; nothing here ever
/// fails.
#[must_use]
pub fn extract(text: &str) -> PreferenceRecord {
    let lowered = text.to_lowercase();

    PreferenceRecord {
        budget: extract_budget(&lowered),
        category: scan_ordered(&lowered, CATEGORY_KEYWORDS),
        terrain: scan_ordered(&lowered, TERRAIN_KEYWORDS),
        brand: extract_brand(&lowered),
        motorized: extract_motorized(&lowered),
        lightweight: extract_lightweight(&lowered),
    }
}

/// Parse the first monetary quantity in the text.
///
/// `,` and `.` are stripped as literal separators, never used for
/// fractional arithmetic, and a `k` anywhere in the match multiplies
/// by 1000 ("2.5k" yields 25000 via digits "25"). Numeric failures,
/// including overflow, drop the field silently.
fn extract_budget(text: &str) -> Option<u32> {
    let money = Regex::new(MONEY_PATTERN).ok()?;
    let digit_token = Regex::new(DIGIT_TOKEN_PATTERN).ok()?;

    let raw = money.find(text)?.as_str();
    let token = digit_token.find(raw)?.as_str();
    let value: u32 = token.replace([',', '.'], "").parse().ok()?;

    if raw.contains('k') {
        value.checked_mul(1000)
    } else {
        Some(value)
    }
}

/// First label whose keyword set has a member appearing as a substring.
fn scan_ordered(text: &str, table: &[(&str, &[&str])]) -> Option<String> {
    table.iter().find_map(|&(label, kws)| {
        kws.iter()
            .any(|kw| text.contains(kw))
            .then(|| label.to_string())
    })
}

/// Whole-word match against the known brand set, normalized to title
/// case.
fn extract_brand(text: &str) -> Option<String> {
    let pattern = format!(r"\b({})\b", KNOWN_BRANDS.join("|"));
    let re = Regex::new(&pattern).ok()?;
    let name = re.captures(text)?.get(1)?.as_str();
    Some(title_case(name))
}

fn extract_motorized(text: &str) -> Option<bool> {
    let mut motorized = None;
    if MOTOR_POSITIVE.iter().any(|kw| text.contains(kw)) {
        motorized = Some(true);
    }
    // Negative runs second and wins on conflict.
    if MOTOR_NEGATIVE.iter().any(|kw| text.contains(kw)) {
        motorized = Some(false);
    }
    motorized
}

fn extract_lightweight(text: &str) -> Option<bool> {
    LIGHTWEIGHT_HINTS
        .iter()
        .any(|kw| text.contains(kw))
        .then_some(true)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
