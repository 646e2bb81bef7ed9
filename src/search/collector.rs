//! Top-K accumulation of scored candidates.

/// Accumulates `(score, item)` pairs and hands back the best ones above a threshold.
#[derive(Debug, Clone)]
pub struct ScoredCollector<T> {
    items: Vec<(f64, T)>,
}

impl<T> Default for ScoredCollector<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ScoredCollector<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate. Duplicates are kept.
    pub fn add(&mut self, score: f64, item: T) {
        self.items.push((score, item));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The `amount` highest-scoring items whose score is strictly above `threshold`,
    /// highest first.
    ///
    /// Returns `None` when nothing survives the filter. Among equal scores the
    /// later-added candidate ranks higher.
    pub fn into_ranked(mut self, amount: usize, threshold: f64) -> Option<Vec<T>> {
        // Stable ascending sort, then keep the tail.
        self.items.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        let keep_from = self.items.len().saturating_sub(amount);

        let ranked: Vec<T> = self
            .items
            .drain(keep_from..)
            .rev()
            .filter(|(score, _)| *score > threshold)
            .map(|(_, item)| item)
            .collect();

        if ranked.is_empty() { None } else { Some(ranked) }
    }
}
