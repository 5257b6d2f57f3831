use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Punctuation stripper: keeps word characters, whitespace and apostrophes
/// (contractions survive tokenization).
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s']").unwrap());

/// Common English function/filler words, including the search verbs users
/// type around the thing they are actually looking for.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "where", "are", "my", "is", "the", "a", "an", "i", "me", "you", "he", "she", "it", "we",
        "they", "this", "that", "these", "those", "am", "was", "were", "been", "being", "have",
        "has", "had", "do", "does", "did", "will", "would", "should", "could", "may", "might",
        "can", "find", "looking", "for", "search", "locate", "put", "kept", "stored", "placed",
        "left", "see", "know", "remember",
    ]
    .into_iter()
    .collect()
});

/// Canonical item terms mapped to their informal variants. Order matters:
/// expansion walks the table top to bottom, so output ordering is stable.
static SYNONYMS: &[(&str, &[&str])] = &[
    ("phone", &["mobile", "cell", "cellphone", "smartphone", "iphone", "android"]),
    ("keys", &["key", "keychain", "car key", "house key", "bike key"]),
    ("wallet", &["purse", "billfold", "card holder"]),
    ("glasses", &["spectacles", "eyeglasses", "specs", "sunglasses", "shades"]),
    ("remote", &["tv remote", "remote control", "controller"]),
    ("charger", &["cable", "charging cable", "power cord", "adapter"]),
    ("headphones", &["earphones", "earbuds", "headset", "airpods"]),
    ("watch", &["wristwatch", "smartwatch", "timepiece"]),
];

/// Extract search keywords from a free-text query.
///
/// Lowercases, strips punctuation, drops stop words and single characters,
/// then widens the survivors through the synonym table in both directions
/// (variant appends its canonical term, canonical appends all variants).
/// The result is deduplicated preserving first-seen order; an empty result
/// means the query could not be understood.
pub fn extract(query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let query = query.to_lowercase();
    let query = PUNCTUATION.replace_all(query.trim(), " ");

    let keywords: Vec<&str> = query
        .split_whitespace()
        .filter(|word| word.len() > 1 && !STOP_WORDS.contains(word))
        .collect();

    let mut expanded: Vec<String> = Vec::new();
    for keyword in keywords {
        expanded.push(keyword.to_string());
        for (canonical, variants) in SYNONYMS {
            if variants.contains(&keyword) {
                expanded.push((*canonical).to_string());
            } else if keyword == *canonical {
                expanded.extend(variants.iter().map(|v| (*v).to_string()));
            }
        }
    }

    let mut seen = HashSet::new();
    let unique: Vec<String> = expanded
        .into_iter()
        .filter(|kw| seen.insert(kw.clone()))
        .collect();

    tracing::debug!(query = %query, keywords = ?unique, "extracted search keywords");
    unique
}
