//! Fuzzy string ratios on a 0–100 scale.
//!
//! Both ratios are case-sensitive and rounded to whole points. An empty input on
//! either side scores 0.

use rapidfuzz::distance::indel;

/// Symmetric similarity of two whole strings.
///
/// Based on the indel distance: `100 * (1 - distance / (len(a) + len(b)))`.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    (indel::normalized_similarity(a.chars(), b.chars()) * 100.0).round()
}

/// Best [`ratio`] of the shorter string against every same-length window of the longer one.
///
/// `partial_ratio("Bot", "telegram.Bot")` is 100 while `ratio` would only give 40.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut best = 0.0_f64;
    for window in longer.windows(shorter.len()) {
        let score = indel::normalized_similarity(shorter.iter().copied(), window.iter().copied());
        if score > best {
            best = score;
            if best >= 0.995 {
                return 100.0;
            }
        }
    }

    (best * 100.0).round()
}
