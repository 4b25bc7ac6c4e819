//! Category taxonomy and the raw-label mapping tables.
//!
//! Two independently maintained mapping tables exist, one used at ingestion
//! time and one used at training time, and they do not agree on every entry
//! (for example `"WORLD NEWS"` maps to `World` at ingestion but to
//! `Politics` at training, and only the training table knows `"U.S. NEWS"`).
//! Both tables are kept as-is until the intended taxonomy is confirmed; do
//! not unify them silently.
//!
//! The two tables also fail differently on unknown labels: ingestion buckets
//! them into [`OTHER_CATEGORY`], while the training pipeline drops the row.

/// Fallback bucket for raw categories the ingestion table does not know.
pub const OTHER_CATEGORY: &str = "Other";

/// Canonical target categories, including the fallback bucket.
pub const TARGET_CATEGORIES: &[&str] = &[
    "Politics",
    "World",
    "Business",
    "Sports",
    "Technology",
    "Science",
    "Entertainment",
    "Lifestyle",
    OTHER_CATEGORY,
];

/// Raw-label mapping applied during ingestion.
const INGESTION_CATEGORY_MAP: &[(&str, &str)] = &[
    ("POLITICS", "Politics"),
    ("WORLD NEWS", "World"),
    ("THE WORLDPOST", "World"),
    ("WORLDPOST", "World"),
    ("BUSINESS", "Business"),
    ("MONEY", "Business"),
    ("SPORTS", "Sports"),
    ("TECH", "Technology"),
    ("SCIENCE", "Science"),
    ("ENTERTAINMENT", "Entertainment"),
    ("COMEDY", "Entertainment"),
    ("STYLE & BEAUTY", "Lifestyle"),
    ("STYLE", "Lifestyle"),
    ("WELLNESS", "Lifestyle"),
    ("TRAVEL", "Lifestyle"),
    ("FOOD & DRINK", "Lifestyle"),
    ("HOME & LIVING", "Lifestyle"),
    ("PARENTING", "Lifestyle"),
    ("PARENTS", "Lifestyle"),
    ("HEALTHY LIVING", "Lifestyle"),
    ("WEDDINGS", "Lifestyle"),
];

/// Raw-label mapping applied by the training pipeline.
///
/// Differs from the ingestion table: "WORLD NEWS" lands in Politics here,
/// "U.S. NEWS" is only known here, and "STYLE"/"PARENTS" are only known to
/// the ingestion table.
const TRAINING_CATEGORY_MAP: &[(&str, &str)] = &[
    ("POLITICS", "Politics"),
    ("WORLD NEWS", "Politics"),
    ("U.S. NEWS", "Politics"),
    ("THE WORLDPOST", "World"),
    ("WORLDPOST", "World"),
    ("BUSINESS", "Business"),
    ("MONEY", "Business"),
    ("SPORTS", "Sports"),
    ("TECH", "Technology"),
    ("SCIENCE", "Science"),
    ("ENTERTAINMENT", "Entertainment"),
    ("COMEDY", "Entertainment"),
    ("WELLNESS", "Lifestyle"),
    ("HEALTHY LIVING", "Lifestyle"),
    ("STYLE & BEAUTY", "Lifestyle"),
    ("TRAVEL", "Lifestyle"),
    ("FOOD & DRINK", "Lifestyle"),
    ("HOME & LIVING", "Lifestyle"),
    ("WEDDINGS", "Lifestyle"),
    ("PARENTING", "Lifestyle"),
];

/// Map a raw category label at ingestion time.
///
/// Unknown labels fall back to [`OTHER_CATEGORY`]; no row is ever dropped
/// here on account of its label.
pub fn map_ingestion_category(raw: &str) -> &'static str {
    INGESTION_CATEGORY_MAP
        .iter()
        .find(|(key, _)| *key == raw)
        .map(|(_, target)| *target)
        .unwrap_or(OTHER_CATEGORY)
}

/// Map a raw category label at training time.
///
/// Returns `None` for labels the training table does not know, which makes
/// the training pipeline drop the row. Labels that are already canonical
/// (the ingestion step ran before the CSV was written) pass through
/// unchanged, except [`OTHER_CATEGORY`]: the classifier is not trained on
/// the fallback bucket.
pub fn map_training_category(raw: &str) -> Option<&'static str> {
    if let Some((_, target)) = TRAINING_CATEGORY_MAP.iter().find(|(key, _)| *key == raw) {
        return Some(target);
    }

    TARGET_CATEGORIES
        .iter()
        .find(|c| **c == raw && **c != OTHER_CATEGORY)
        .copied()
}

/// Whether a label belongs to the canonical taxonomy.
pub fn is_target_category(label: &str) -> bool {
    TARGET_CATEGORIES.contains(&label)
}
