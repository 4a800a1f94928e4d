//! fuzzyfind-pinyin
//!
//! Pinyin-aware launcher matching built on `fuzzyfind-core`. Chinese names
//! are transliterated once, when the catalog builds its entries, into a full
//! pinyin form ("淘宝" → "taobao") and an initials form ("tb"). At query time
//! the core dispatcher scores the name and both forms and keeps the best.
//!
//! Public API exported here:
//! - `transliterator` functions: `to_pinyin`, `to_pinyin_initials`,
//!   `contains_chinese`, `is_transliterable`, `transliterate`
//! - `PinyinEntry` - A catalog entry with precomputed representations
//! - Core matching types re-exported for convenience

pub mod entry;
pub mod table;
pub mod transliterator;

pub use entry::PinyinEntry;
pub use table::{is_cjk_ideograph, CJK_UNIFIED_IDEOGRAPHS};
pub use transliterator::{
    contains_chinese, is_transliterable, reading, to_pinyin, to_pinyin_initials, transliterate,
    PhoneticForms,
};

pub use fuzzyfind_core::{
    best_match, match_best, BestMatch, FuzzyScorer, MatchInfo, Representation, ScoreConfig,
    Searchable,
};
