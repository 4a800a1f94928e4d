//! Result record of a single match attempt.

use serde::{Deserialize, Serialize};

/// Outcome of matching one query against one body of text.
///
/// `positions` holds one zero-based codepoint index into the body per query
/// codepoint, strictly increasing. `score` is only meaningful when `matched`
/// is true; higher is better. It may be negative when penalties outweigh
/// bonuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchInfo {
    pub matched: bool,
    pub score: i32,
    pub positions: Vec<usize>,
}

impl MatchInfo {
    /// A successful match.
    pub fn new(score: i32, positions: Vec<usize>) -> Self {
        Self {
            matched: true,
            score,
            positions,
        }
    }

    /// The "no match" outcome: not matched, zero score, no positions.
    pub fn no_match() -> Self {
        Self::default()
    }

    pub fn is_match(&self) -> bool {
        self.matched
    }

    /// True when `self` should replace `other` as the best result so far.
    ///
    /// A match always beats a non-match; between two matches only a strictly
    /// higher score wins, so the earlier result is kept on ties.
    pub fn beats(&self, other: &MatchInfo) -> bool {
        match (self.matched, other.matched) {
            (true, false) => true,
            (true, true) => self.score > other.score,
            _ => false,
        }
    }
}
