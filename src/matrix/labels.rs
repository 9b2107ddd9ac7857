//! Label normalization and orientation-free label pairs.

use log::debug;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Case-folded key used for deduplication and ordering
pub fn fold(label: &str) -> String {
    label.to_lowercase()
}

/// Normalize a label sequence.
///
/// Empty labels are dropped, labels that differ only by case are collapsed
/// to their first spelling, and the result is sorted by case-folded key
/// (original spelling breaks ties, so the order is total).
pub fn normalize<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut received = 0usize;
    let mut out: Vec<String> = labels
        .into_iter()
        .map(Into::into)
        .inspect(|_| received += 1)
        .filter(|label| !label.is_empty())
        .filter(|label| seen.insert(fold(label)))
        .collect();

    out.sort_by_cached_key(|label| (fold(label), label.clone()));

    if out.len() != received {
        debug!("normalized {} labels down to {}", received, out.len());
    }
    out
}

/// Position of `label` in a normalized sequence, ignoring case
pub fn position_ignore_case(labels: &[String], label: &str) -> Option<usize> {
    let key = fold(label);
    labels.iter().position(|l| fold(l) == key)
}

/// An unordered pair of labels: `(x, y)` and `(y, x)` are the same key.
#[derive(Debug, Clone, Eq)]
pub struct LabelPair {
    first: String,
    second: String,
}

impl LabelPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        LabelPair {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// A label paired with itself
    pub fn is_diagonal(&self) -> bool {
        self.first == self.second
    }

    fn ordered(&self) -> (&str, &str) {
        let (a, b) = (self.first.as_str(), self.second.as_str());
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

impl PartialEq for LabelPair {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Hash for LabelPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

impl std::fmt::Display for LabelPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Every distinct unordered pair drawn from `labels x labels`, diagonal
/// pairs included, in first-seen order.
pub fn distinct_pairs(labels: &[String]) -> Vec<LabelPair> {
    let mut seen = HashSet::new();
    labels
        .iter()
        .flat_map(|x| labels.iter().map(move |y| LabelPair::new(x.as_str(), y.as_str())))
        .filter(|pair| seen.insert(pair.clone()))
        .collect()
}
