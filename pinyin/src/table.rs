// fuzzyfind/pinyin/src/table.rs
//
// Process-wide hanzi -> pinyin reading table.
//
// The table is embedded at compile time (`data/hanzi_pinyin.txt`, produced by
// the `gen_pinyin_table` tool) and parsed once on first use. Each line holds
// a toneless reading followed by every ideograph that takes that reading:
//
//   bao 佨保儤勹勽包堡堢報...
//
// Readings borrow from the embedded text, so lookups return `&'static str`.

use std::ops::RangeInclusive;

use ahash::AHashMap;
use once_cell::sync::Lazy;
use tracing::{debug, warn};

/// The CJK Unified Ideographs block. Every key of the table lies inside it.
pub const CJK_UNIFIED_IDEOGRAPHS: RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';

const TABLE_SOURCE: &str = include_str!("../data/hanzi_pinyin.txt");

static READINGS: Lazy<AHashMap<char, &'static str>> = Lazy::new(|| {
    let table = parse_table(TABLE_SOURCE);
    debug!(readings = table.len(), "loaded hanzi pinyin table");
    table
});

/// True if `c` lies in the CJK Unified Ideographs block.
pub fn is_cjk_ideograph(c: char) -> bool {
    CJK_UNIFIED_IDEOGRAPHS.contains(&c)
}

/// The lower-case toneless reading of `c`, if the table has one.
pub fn reading(c: char) -> Option<&'static str> {
    if !is_cjk_ideograph(c) {
        return None;
    }
    READINGS.get(&c).copied()
}

/// Number of ideographs with a known reading.
pub fn len() -> usize {
    READINGS.len()
}

fn parse_table(source: &'static str) -> AHashMap<char, &'static str> {
    let mut table = AHashMap::with_capacity(21_000);

    for (lineno, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((reading, chars)) = line.split_once(' ') else {
            warn!(line = lineno + 1, "table line without ideographs");
            continue;
        };
        if reading.is_empty() || !reading.bytes().all(|b| b.is_ascii_lowercase()) {
            warn!(line = lineno + 1, reading, "invalid reading in table");
            continue;
        }
        for c in chars.chars().filter(|c| !c.is_whitespace()) {
            if !is_cjk_ideograph(c) {
                warn!(line = lineno + 1, codepoint = %c.escape_unicode(), "ideograph outside CJK block");
                continue;
            }
            // first reading wins
            table.entry(c).or_insert(reading);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_readings() {
        assert_eq!(reading('淘'), Some("tao"));
        assert_eq!(reading('宝'), Some("bao"));
        assert_eq!(reading('中'), Some("zhong"));
        assert_eq!(reading('国'), Some("guo"));
        assert_eq!(reading('地'), Some("di"));
        assert_eq!(reading('绿'), Some("lv"));
    }

    #[test]
    fn non_ideographs_have_no_reading() {
        assert_eq!(reading('a'), None);
        assert_eq!(reading('1'), None);
        assert_eq!(reading('ア'), None);
        assert_eq!(reading('\u{3400}'), None);
    }

    #[test]
    fn covers_most_of_the_block() {
        assert!(len() > 20_000, "only {} readings", len());
    }

    #[test]
    fn every_reading_is_lowercase_ascii() {
        for c in CJK_UNIFIED_IDEOGRAPHS {
            if let Some(r) = reading(c) {
                assert!(!r.is_empty() && r.bytes().all(|b| b.is_ascii_lowercase()), "{c}: {r}");
            }
        }
    }

    #[test]
    fn parser_skips_bad_lines() {
        let src = "# comment\n\nhao 好\nBAD 坏\nxin 信a\nlonely\n";
        let table = parse_table(src);
        assert_eq!(table.get(&'好'), Some(&"hao"));
        assert_eq!(table.get(&'信'), Some(&"xin"));
        assert_eq!(table.get(&'坏'), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn parser_keeps_first_reading() {
        let table = parse_table("chong 重\nzhong 重\n");
        assert_eq!(table.get(&'重'), Some(&"chong"));
    }
}
