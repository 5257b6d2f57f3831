/*!
 * # Heuristic Helpers
 *
 * Lightweight stand-ins for the "AI" features of the tracker. Neither
 * module runs a trained model: object hints come from filename lookup and
 * keyword extraction is tokenization plus fixed tables. They are kept as
 * explicit, swappable functions so genuine vision/NLP components can
 * replace them later without touching the stores or the API contracts.
 */

/// Stop-word filtering and synonym expansion for item search queries
pub mod keyword_extractor;

/// Filename-based object label guessing for uploaded photos
pub mod object_hint;
