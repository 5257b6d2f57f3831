use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Camera/upload filename noise: app prefixes and digit runs (counters,
/// timestamps) carry no object information.
static FILENAME_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"img_|image_|photo_|pic_|\d+").unwrap());

/// Everyday lost-item nouns, scanned in priority order.
static COMMON_OBJECTS: &[&str] = &[
    "keys", "key", "wallet", "phone", "mobile", "glasses", "watch", "remote", "charger",
    "headphones", "earbuds", "laptop", "tablet", "passport", "card", "book", "bag", "bottle",
    "umbrella",
];

/// Guess an object label from an uploaded file's name.
///
/// This is not image understanding: the filename is the only signal. The
/// stem is lowercased, upload-prefix tokens and digit runs are stripped,
/// and the first vocabulary noun found as a substring wins, capitalized.
pub fn hint(filename: &str) -> Option<String> {
    let stem = Path::new(filename).file_stem()?.to_str()?.to_lowercase();
    let cleaned = FILENAME_NOISE.replace_all(&stem, "");

    for object in COMMON_OBJECTS {
        if cleaned.contains(object) {
            tracing::debug!(%filename, object, "object hint from filename");
            return Some(capitalize(object));
        }
    }
    None
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
