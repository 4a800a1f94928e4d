//! Configurable subsequence fuzzy scorer.
//!
//! The query must occur in the body as a case-insensitive subsequence. Among
//! all placements, the scorer picks the one with the highest score, computed
//! from per-position bonuses and per-body penalties (see `ScoreConfig`).
//!
//! Search is a suffix-maximum dynamic program over (query index, body index):
//! O(n·m) time and memory for a body of n codepoints and a query of m. Among
//! equally scored placements the lexicographically earliest positions win.
//!
//! # Example
//! ```
//! use fuzzyfind_core::{FuzzyScorer, ScoreConfig};
//!
//! let scorer = FuzzyScorer::new("gm", ScoreConfig::default());
//! let info = scorer.match_str("Google Maps");
//! assert!(info.matched);
//! assert_eq!(info.positions, vec![0, 7]);
//! assert!(!scorer.match_str("Calendar").matched);
//! ```

use phf::phf_set;

use crate::dispatch;
use crate::entry::Searchable;
use crate::utils::fold_case;
use crate::{MatchInfo, ScoreConfig};

/// Word-boundary punctuation. Any Unicode whitespace is a separator as well.
static SEPARATORS: phf::Set<char> = phf_set! {
    '_', '-', '.', '/', '\\', ':', ',', ';', '(', ')', '[', ']', '{', '}', '\'', '"', '+', '&', '|',
};

/// True if `c` marks a word boundary for the separator bonus.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || SEPARATORS.contains(&c)
}

/// A query bound to a scoring configuration.
///
/// Holds no mutable state: one scorer can be shared by reference across
/// threads and reused for every candidate of a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyScorer {
    query: Vec<char>,
    config: ScoreConfig,
}

impl FuzzyScorer {
    pub fn new(query: &str, config: ScoreConfig) -> Self {
        Self::from_codepoints(query.chars().collect(), config)
    }

    pub fn from_codepoints(query: Vec<char>, config: ScoreConfig) -> Self {
        Self {
            query: query.into_iter().map(fold_case).collect(),
            config,
        }
    }

    /// The case-folded query.
    pub fn query(&self) -> &[char] {
        &self.query
    }

    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// Convenience over `match_codepoints` for text bodies.
    pub fn match_str(&self, text: &str) -> MatchInfo {
        let body: Vec<char> = text.chars().collect();
        self.match_codepoints(&body)
    }

    /// Match against an entry's normalized name only.
    pub fn match_entry<E: Searchable + ?Sized>(&self, entry: &E) -> MatchInfo {
        self.match_codepoints(entry.normalized_name())
    }

    /// Match against every representation of `entry` and keep the best.
    pub fn match_best<E: Searchable + ?Sized>(&self, entry: &E) -> MatchInfo {
        dispatch::match_best(self, entry)
    }

    /// Score the query against `body`.
    ///
    /// An empty query matches everything with score 0 and no positions. A
    /// query longer than the body never matches. Scores may be negative when
    /// penalties outweigh bonuses.
    pub fn match_codepoints(&self, body: &[char]) -> MatchInfo {
        let m = self.query.len();
        let n = body.len();
        if m == 0 {
            return MatchInfo::new(0, Vec::new());
        }
        if m > n {
            return MatchInfo::no_match();
        }

        let folded: Vec<char> = body.iter().copied().map(fold_case).collect();
        if !is_subsequence(&self.query, &folded) {
            return MatchInfo::no_match();
        }

        let local: Vec<i32> = (0..n).map(|j| self.position_bonus(body, j)).collect();
        let table = self.fill(&folded, &local);

        // Choose the first position: the only choice that also pays the
        // prefix and trailing penalties.
        let mut start: Option<(i32, usize)> = None;
        for (j, cell) in table.dp[0].iter().enumerate() {
            let Some(tail) = cell else { continue };
            let total = tail.saturating_add(self.placement_penalty(n, j));
            if start.map_or(true, |(best, _)| total > best) {
                start = Some((total, j));
            }
        }
        let Some((mut score, first)) = start else {
            return MatchInfo::no_match();
        };
        if n == m {
            score = score.saturating_add(self.config.full_word_bonus);
        }

        MatchInfo::new(score, table.positions(first, n, self.config.adjacency_bonus))
    }

    /// Bonus earned by matching the body codepoint at `j`, independent of the
    /// rest of the placement.
    fn position_bonus(&self, body: &[char], j: usize) -> i32 {
        let cfg = &self.config;
        if j == 0 {
            return cfg.first_letter_bonus;
        }
        let prev = body[j - 1];
        let mut bonus = 0i32;
        if is_separator(prev) {
            bonus = bonus.saturating_add(cfg.separator_bonus);
        }
        if body[j].is_uppercase() && prev.is_lowercase() {
            bonus = bonus.saturating_add(cfg.camel_bonus);
        }
        bonus
    }

    /// Leading penalty for the prefix plus unmatched penalty for every other
    /// unconsumed codepoint, given the first match lands at `first`.
    fn placement_penalty(&self, n: usize, first: usize) -> i32 {
        let rest = n.saturating_sub(self.query.len()).saturating_sub(first);
        let rest = i32::try_from(rest).unwrap_or(i32::MAX);
        self.config
            .leading_penalty(first)
            .saturating_add(self.config.unmatched_letter_penalty.saturating_mul(rest))
    }

    fn fill(&self, folded: &[char], local: &[i32]) -> Table {
        let m = self.query.len();
        let n = folded.len();
        let adjacency = self.config.adjacency_bonus;

        // dp[k][j]: best score of query[k..] with query[k] placed at j.
        // best[k][x]: max of dp[k][j] over j >= x, earliest j on ties.
        let mut dp: Vec<Vec<Option<i32>>> = vec![vec![None; n]; m];
        let mut best: Vec<Vec<Option<(i32, usize)>>> = vec![vec![None; n + 1]; m];

        for k in (0..m).rev() {
            for j in (0..n).rev() {
                if folded[j] != self.query[k] {
                    continue;
                }
                dp[k][j] = if k + 1 == m {
                    Some(local[j])
                } else {
                    let adjacent = dp[k + 1]
                        .get(j + 1)
                        .copied()
                        .flatten()
                        .map(|v| v.saturating_add(adjacency));
                    let far = best[k + 1].get(j + 2).copied().flatten().map(|(v, _)| v);
                    adjacent.max(far).map(|v| v.saturating_add(local[j]))
                };
            }
            for x in (0..n).rev() {
                let later = best[k][x + 1];
                best[k][x] = match (dp[k][x], later) {
                    (Some(v), Some((w, _))) if v >= w => Some((v, x)),
                    (Some(v), None) => Some((v, x)),
                    _ => later,
                };
            }
        }

        Table { dp, best }
    }
}

struct Table {
    dp: Vec<Vec<Option<i32>>>,
    best: Vec<Vec<Option<(i32, usize)>>>,
}

impl Table {
    /// Walk the table from `first`, taking the adjacent step whenever it is
    /// at least as good as the best later position.
    fn positions(&self, first: usize, n: usize, adjacency: i32) -> Vec<usize> {
        let m = self.dp.len();
        let mut out = Vec::with_capacity(m);
        let mut j = first;
        out.push(j);
        for k in 1..m {
            let adjacent = if j + 1 < n {
                self.dp[k][j + 1].map(|v| v.saturating_add(adjacency))
            } else {
                None
            };
            let far = self.best[k].get(j + 2).copied().flatten();
            j = match (adjacent, far) {
                (Some(a), Some((f, idx))) => {
                    if a >= f {
                        j + 1
                    } else {
                        idx
                    }
                }
                (Some(_), None) => j + 1,
                (None, Some((_, idx))) => idx,
                // unreachable for a cell that holds a value
                (None, None) => break,
            };
            out.push(j);
        }
        out
    }
}

fn is_subsequence(query: &[char], body: &[char]) -> bool {
    let mut rest = body.iter();
    query.iter().all(|q| rest.any(|c| c == q))
}
