//! Multi-representation dispatcher.
//!
//! Runs one scorer against every representation an entry provides, in the
//! fixed order of `Representation::ALL`, and keeps the highest score. A later
//! representation must score strictly higher to replace an earlier one, so
//! ties resolve to name, then phonetic-full, then phonetic-initials.

use tracing::trace;

use crate::entry::{Representation, Searchable};
use crate::{FuzzyScorer, MatchInfo};

/// The winning representation together with its match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMatch {
    pub representation: Representation,
    pub info: MatchInfo,
}

/// Best match across all representations of `entry`, or `None` when no
/// representation matches.
pub fn best_match<E: Searchable + ?Sized>(scorer: &FuzzyScorer, entry: &E) -> Option<BestMatch> {
    let mut best: Option<BestMatch> = None;

    for kind in Representation::ALL {
        let Some(body) = entry.representation(kind) else {
            continue;
        };
        let info = scorer.match_codepoints(body);
        trace!(
            representation = kind.as_str(),
            matched = info.matched,
            score = info.score,
            "scored representation"
        );

        let replace = match &best {
            Some(current) => info.beats(&current.info),
            None => info.matched,
        };
        if replace {
            best = Some(BestMatch {
                representation: kind,
                info,
            });
        }
    }

    best
}

/// Like `best_match`, returning only the `MatchInfo` ("no match" if none).
pub fn match_best<E: Searchable + ?Sized>(scorer: &FuzzyScorer, entry: &E) -> MatchInfo {
    best_match(scorer, entry)
        .map(|b| b.info)
        .unwrap_or_else(MatchInfo::no_match)
}
