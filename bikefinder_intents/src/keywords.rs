//! Static vocabulary for preference extraction.
//!
//! Category and terrain scans are first-match-wins, so those tables
//! encode their priority order explicitly as ordered slices rather
//! than maps. Reordering entries changes tie-break behavior.

/// Ordered category vocabulary. A text mentioning keywords from
/// several labels resolves to the earliest label here; in particular
/// mountain outranks road, and road outranks e-bike so that
/// "non-electric road bike" is not classified by its "electric"
/// substring.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("mountain", &["mtb", "mountain", "trail", "downhill", "enduro"]),
    ("road", &["road", "racing"]),
    ("hybrid", &["hybrid", "fitness"]),
    ("gravel", &["gravel"]),
    ("e-bike", &["e-bike", "ebike", "electric"]),
    ("city", &["city", "commute", "commuter", "urban"]),
];

/// Ordered terrain vocabulary, a namespace independent from category:
/// "road" is a category label but a paved-terrain hint here.
pub const TERRAIN_KEYWORDS: &[(&str, &[&str])] = &[
    ("paved", &["paved", "tarmac", "asphalt", "road"]),
    ("gravel", &["gravel"]),
    ("trail", &["trail", "singletrack", "mtb", "mountain"]),
    ("urban", &["city", "commute", "urban"]),
];

/// Closed set of catalog brands, matched whole-word.
pub(crate) const KNOWN_BRANDS: &[&str] = &[
    "giant",
    "trek",
    "specialized",
    "canyon",
    "cannondale",
    "metro",
    "alpine",
    "peak",
    "volt",
    "terra",
];

/// Signals that the buyer wants a motor.
pub(crate) const MOTOR_POSITIVE: &[&str] =
    &["e-bike", "ebike", "electric", "motor", "battery", "assist"];

/// Explicit "no motor" signals. Evaluated after the positive set and
/// wins on conflict, so "non-electric" resolves to false even though
/// it contains "electric".
pub(crate) const MOTOR_NEGATIVE: &[&str] =
    &["non-electric", "acoustic", "without motor", "no motor"];

/// Low-weight emphasis synonyms. Only ever produces `true`.
pub(crate) const LIGHTWEIGHT_HINTS: &[&str] =
    &["lightweight", "lighter", "light weight", "as light as"];
