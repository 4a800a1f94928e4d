//! End-to-end launcher flow: build entries once, score each keystroke
//! against every representation, highlight the display name.

use fuzzyfind_pinyin::{
    best_match, contains_chinese, to_pinyin, to_pinyin_initials, transliterate, FuzzyScorer,
    PinyinEntry, Representation, ScoreConfig,
};

fn catalog() -> Vec<PinyinEntry> {
    ["淘宝", "支付宝", "网易云音乐", "高德地图", "Google Maps", "Calculator"]
        .into_iter()
        .map(PinyinEntry::new)
        .collect()
}

fn top(query: &str, entries: &[PinyinEntry]) -> Option<(String, Representation, Vec<usize>)> {
    let scorer = FuzzyScorer::new(query, ScoreConfig::default());
    let mut hits: Vec<_> = entries
        .iter()
        .filter_map(|e| best_match(&scorer, e).map(|b| (e, b)))
        .collect();
    hits.sort_by(|a, b| b.1.info.score.cmp(&a.1.info.score));
    hits.first()
        .map(|(e, b)| (e.name().to_string(), b.representation, e.highlight(b)))
}

#[test]
fn taobao_by_initials_full_and_hanzi() {
    let entry = PinyinEntry::new("淘宝");

    let cfg = ScoreConfig::default();
    let tb = best_match(&FuzzyScorer::new("tb", cfg), &entry).unwrap();
    assert_eq!(tb.representation, Representation::PhoneticInitials);
    assert_eq!(tb.info.positions, vec![0, 1]);

    let full = best_match(&FuzzyScorer::new("taobao", cfg), &entry).unwrap();
    assert_eq!(full.representation, Representation::PhoneticFull);
    assert_eq!(full.info.positions, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(entry.highlight(&full), vec![0, 1]);

    let hanzi = best_match(&FuzzyScorer::new("淘", cfg), &entry).unwrap();
    assert_eq!(hanzi.representation, Representation::Name);
    assert_eq!(hanzi.info.positions, vec![0]);
}

#[test]
fn unrelated_query_matches_nothing() {
    let entry = PinyinEntry::new("淘宝");
    assert!(best_match(&FuzzyScorer::new("xyz", ScoreConfig::default()), &entry).is_none());
}

#[test]
fn catalog_ranking() {
    let entries = catalog();
    assert_eq!(
        top("tb", &entries),
        Some(("淘宝".to_string(), Representation::PhoneticInitials, vec![0, 1]))
    );
    assert_eq!(
        top("zfb", &entries),
        Some(("支付宝".to_string(), Representation::PhoneticInitials, vec![0, 1, 2]))
    );
    assert_eq!(
        top("ditu", &entries),
        Some(("高德地图".to_string(), Representation::PhoneticFull, vec![2, 3]))
    );
    let (name, repr, _) = top("calc", &entries).unwrap();
    assert_eq!((name.as_str(), repr), ("Calculator", Representation::Name));
}

#[test]
fn transliteration_properties() {
    assert_eq!(to_pinyin(""), "");
    assert_eq!(to_pinyin_initials(""), "");
    assert!(!contains_chinese(""));

    assert_eq!(to_pinyin("Calculator 2"), "calculator 2");
    assert_eq!(to_pinyin_initials("Calculator 2"), "calculator 2");

    for text in ["淘宝", "网易云音乐", "QQ音乐", "Go 高德地图!"] {
        assert_eq!(to_pinyin_initials(text).chars().count(), text.chars().count());
        let forms = transliterate(text);
        assert_eq!(forms.full.len(), forms.full_origin.len());
        assert!(forms.full_origin.windows(2).all(|w| w[0] <= w[1]));
    }

    assert!(contains_chinese("淘bao123"));
    assert!(!contains_chinese("taobao123"));
}

#[test]
fn results_are_deterministic() {
    let entries = catalog();
    for query in ["tb", "bao", "gm", "wyy", "地", "a"] {
        let first = top(query, &entries);
        for _ in 0..3 {
            assert_eq!(top(query, &entries), first, "query {query:?}");
        }
    }
}
