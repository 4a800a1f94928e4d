//! fuzzyfind-core
//!
//! Language-agnostic matching core shared by the pinyin crate: a configurable
//! subsequence fuzzy scorer, the match result type, and the dispatcher that
//! scores every representation of an entry and keeps the best one.
//!
//! All operations are pure and synchronous. Nothing here owns mutable shared
//! state, so scorers and entries can be used from any number of threads.
//!
//! Public API:
//! - `ScoreConfig` - Eight signed tunables with documented defaults
//! - `FuzzyScorer` - A query bound to a config; scores bodies of codepoints
//! - `MatchInfo` - Matched flag, score and matched positions
//! - `Representation` / `Searchable` - The representations an entry exposes
//! - `best_match` / `match_best` - Multi-representation dispatch

pub mod config;
pub use config::ScoreConfig;

pub mod match_info;
pub use match_info::MatchInfo;

pub mod scorer;
pub use scorer::{is_separator, FuzzyScorer};

pub mod entry;
pub use entry::{Representation, Searchable};

pub mod dispatch;
pub use dispatch::{best_match, match_best, BestMatch};

/// Utility helpers.
pub mod utils {
    use unicode_normalization::char::{decompose_canonical, is_combining_mark};

    /// Lower-case a single codepoint.
    ///
    /// Codepoints whose lower-case mapping expands to more than one codepoint
    /// (e.g. `İ`) are returned unchanged, so folding never shifts positions.
    pub fn fold_case(c: char) -> char {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => l,
            _ => c,
        }
    }

    /// Strip diacritics from a single codepoint (`é` → `e`).
    ///
    /// The codepoint is canonically decomposed and its combining marks are
    /// dropped. If that does not leave exactly one codepoint (Hangul
    /// syllables, a lone combining mark) the input is returned unchanged.
    pub fn strip_diacritics(c: char) -> char {
        let mut base = None;
        let mut extra = false;
        decompose_canonical(c, |d| {
            if is_combining_mark(d) {
                return;
            }
            if base.is_none() {
                base = Some(d);
            } else {
                extra = true;
            }
        });
        match base {
            Some(b) if !extra => b,
            _ => c,
        }
    }

    /// Normalize a display name into the codepoints used for matching.
    ///
    /// Case is preserved (the camel-case bonus needs it). The result has the
    /// same codepoint count as `name`, so positions matched against it index
    /// the display name directly.
    pub fn normalize_name(name: &str) -> Vec<char> {
        name.chars().map(strip_diacritics).collect()
    }

}
