//! Hanzi to pinyin transliteration.
//!
//! Two Latin renderings of a string are produced, both lower-case:
//! - the full form concatenates each ideograph's reading ("淘宝" → "taobao");
//! - the initials form keeps the first letter of each reading ("淘宝" → "tb").
//!
//! Codepoints without a reading pass through (case-folded). The initials form
//! has exactly one codepoint per input codepoint; the full form does not, so
//! `transliterate` also records where each full-form codepoint came from.
//!
//! None of these functions fail. Missing readings degrade to passthrough.

use fuzzyfind_core::utils::fold_case;

use crate::table;

/// True if `c` is a CJK unified ideograph with a known reading.
pub fn is_transliterable(c: char) -> bool {
    table::reading(c).is_some()
}

/// The reading of `c`, if it has one.
pub fn reading(c: char) -> Option<&'static str> {
    table::reading(c)
}

/// Full pinyin of `text` without separators: "淘宝" → "taobao".
pub fn to_pinyin(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match table::reading(c) {
            Some(r) => out.push_str(r),
            None => out.push(fold_case(c)),
        }
    }
    out
}

/// Pinyin initials of `text`: "阿里巴巴" → "albb".
pub fn to_pinyin_initials(text: &str) -> String {
    text.chars().map(initial).collect()
}

/// True if at least one codepoint of `text` is transliterable.
pub fn contains_chinese(text: &str) -> bool {
    text.chars().any(is_transliterable)
}

fn initial(c: char) -> char {
    table::reading(c)
        .and_then(|r| r.chars().next())
        .unwrap_or_else(|| fold_case(c))
}

/// Both phonetic renderings of a string, computed in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneticForms {
    pub full: Vec<char>,
    pub initials: Vec<char>,
    /// For each codepoint of `full`, the index of the source codepoint that
    /// produced it.
    pub full_origin: Vec<usize>,
}

impl PhoneticForms {
    /// Map positions in `full` back to source codepoint indices.
    ///
    /// The result is ascending and deduplicated: several letters of one
    /// reading collapse onto their ideograph. Out-of-range positions are
    /// ignored.
    pub fn source_positions(&self, full_positions: &[usize]) -> Vec<usize> {
        let mut out: Vec<usize> = full_positions
            .iter()
            .filter_map(|&p| self.full_origin.get(p).copied())
            .collect();
        out.dedup();
        out
    }
}

/// Compute the full and initials forms of `text` plus the full-form origin map.
pub fn transliterate(text: &str) -> PhoneticForms {
    let mut forms = PhoneticForms::default();
    for (idx, c) in text.chars().enumerate() {
        match table::reading(c) {
            Some(r) => {
                for letter in r.chars() {
                    forms.full.push(letter);
                    forms.full_origin.push(idx);
                }
            }
            None => {
                forms.full.push(fold_case(c));
                forms.full_origin.push(idx);
            }
        }
        forms.initials.push(initial(c));
    }
    forms
}
