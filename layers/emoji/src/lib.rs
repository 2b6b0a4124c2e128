//! Mood-to-emoji registry shared by the emoji functions.
//!
//! The registry is a fixed table baked in at compile time; nothing in this
//! crate mutates it, so the functions here are pure lookups over static data.

/// Glyph returned when a mood has no registered mapping.
pub const FALLBACK_EMOJI: &str = "🤷";

// Definition order is stable and is the order `available_moods` reports.
const MOOD_EMOJI_MAP: &[(&str, &str)] = &[
    ("happy", "😄"),
    ("sad", "😢"),
    ("angry", "😠"),
    ("excited", "🤩"),
    ("love", "❤️"),
    ("confused", "😕"),
    ("surprised", "😲"),
    ("tired", "😴"),
    ("cool", "😎"),
    ("worried", "😟"),
    ("laughing", "😂"),
    ("wink", "😉"),
    ("neutral", "😐"),
    ("thinking", "🤔"),
    ("celebration", "🎉"),
    ("heart_eyes", "😍"),
    ("crying", "😭"),
    ("sick", "🤒"),
    ("crazy", "🤪"),
    ("robot", "🤖"),
];

/// Normalizes a caller-supplied mood: trims surrounding whitespace and
/// lowercases the ASCII range. Idempotent; empty input stays empty.
pub fn normalize_mood(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Looks up an already-normalized mood. Total: unknown moods get
/// [`FALLBACK_EMOJI`].
pub fn lookup(normalized: &str) -> &'static str {
    MOOD_EMOJI_MAP
        .iter()
        .find(|(mood, _)| *mood == normalized)
        .map(|(_, emoji)| *emoji)
        .unwrap_or(FALLBACK_EMOJI)
}

/// Normalizes then looks up, so case and surrounding whitespace never affect
/// the result.
pub fn emoji_for_mood(raw: &str) -> &'static str {
    lookup(&normalize_mood(raw))
}

/// All registered moods, in definition order.
pub fn available_moods() -> impl Iterator<Item = &'static str> {
    MOOD_EMOJI_MAP.iter().map(|(mood, _)| *mood)
}
