use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use fuzzyfind_pinyin::{best_match, BestMatch, FuzzyScorer, PinyinEntry, ScoreConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fuzzyfind")]
#[command(about = "Rank launcher entries against queries read from stdin")]
struct Args {
    /// Entry names, one per line (a JSON array of strings if the file ends in .json)
    #[arg(short, long)]
    entries: Option<PathBuf>,

    /// Score configuration in TOML; missing keys keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Results printed per query
    #[arg(short, long, default_value_t = 5)]
    limit: usize,
}

const DEMO_ENTRIES: &[&str] = &[
    "淘宝",
    "支付宝",
    "微信",
    "QQ音乐",
    "网易云音乐",
    "高德地图",
    "Google Maps",
    "Calculator",
    "计算器",
    "Settings",
    "设置",
    "相机",
    "日历",
    "京东",
    "阿里巴巴",
];

fn load_entries(path: Option<&Path>) -> Result<Vec<PinyinEntry>> {
    let Some(path) = path else {
        println!("ℹ Using built-in demo catalog");
        return Ok(DEMO_ENTRIES.iter().copied().map(PinyinEntry::new).collect());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read entries {}", path.display()))?;
    let names: Vec<String> = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        serde_json::from_str(&content)
            .with_context(|| format!("parse entries {}", path.display()))?
    } else {
        content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect()
    };
    if names.is_empty() {
        bail!("no entries in {}", path.display());
    }
    println!("✓ Loaded {} entries from {}", names.len(), path.display());
    Ok(names.into_iter().map(PinyinEntry::new).collect())
}

/// Every matching entry, best first. Equal scores keep catalog order.
fn rank<'a>(scorer: &FuzzyScorer, entries: &'a [PinyinEntry]) -> Vec<(&'a PinyinEntry, BestMatch)> {
    let mut hits: Vec<_> = entries
        .iter()
        .filter_map(|e| best_match(scorer, e).map(|b| (e, b)))
        .collect();
    hits.sort_by(|a, b| b.1.info.score.cmp(&a.1.info.score));
    hits
}

/// The display name with highlighted codepoints wrapped in brackets.
fn render(entry: &PinyinEntry, best: &BestMatch) -> String {
    let marks = entry.highlight(best);
    let mut out = String::new();
    for (i, c) in entry.name().chars().enumerate() {
        if marks.binary_search(&i).is_ok() {
            out.push('[');
            out.push(c);
            out.push(']');
        } else {
            out.push(c);
        }
    }
    out
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ScoreConfig::load_toml(path)?,
        None => ScoreConfig::default(),
    };
    let entries = load_entries(args.entries.as_deref())?;
    info!(entries = entries.len(), "catalog ready");

    println!("Type a query and press Enter (Latin, pinyin, initials or hanzi).");
    println!("Examples: tb, taobao, wyy, gm, 地图");
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let raw = line.context("read query")?;
        let query = raw.trim();
        if query.is_empty() {
            continue;
        }

        let scorer = FuzzyScorer::new(query, config);
        let hits = rank(&scorer, &entries);
        if hits.is_empty() {
            println!("  → (no matches)\n");
            continue;
        }
        for (i, (entry, best)) in hits.iter().take(args.limit).enumerate() {
            println!(
                "  {}. {} (score: {}, via {})",
                i + 1,
                render(entry, best),
                best.info.score,
                best.representation
            );
        }
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> Vec<PinyinEntry> {
        DEMO_ENTRIES.iter().copied().map(PinyinEntry::new).collect()
    }

    #[test]
    fn rank_puts_exact_initials_first() {
        let entries = demo();
        let scorer = FuzzyScorer::new("tb", ScoreConfig::default());
        let hits = rank(&scorer, &entries);
        assert_eq!(hits[0].0.name(), "淘宝");
    }

    #[test]
    fn render_brackets_highlights() {
        let entry = PinyinEntry::new("高德地图");
        let scorer = FuzzyScorer::new("ditu", ScoreConfig::default());
        let best = best_match(&scorer, &entry).unwrap();
        assert_eq!(render(&entry, &best), "高德[地][图]");
    }

    #[test]
    fn load_entries_reads_lines_and_json() {
        let dir = std::env::temp_dir();
        let txt = dir.join(format!("fuzzyfind_entries_{}.txt", std::process::id()));
        let json = dir.join(format!("fuzzyfind_entries_{}.json", std::process::id()));
        std::fs::write(&txt, "淘宝\n\n  Maps \n").unwrap();
        std::fs::write(&json, r#"["微信", "Calculator"]"#).unwrap();

        let from_txt = load_entries(Some(&txt)).unwrap();
        assert_eq!(from_txt.iter().map(|e| e.name()).collect::<Vec<_>>(), vec!["淘宝", "Maps"]);
        let from_json = load_entries(Some(&json)).unwrap();
        assert_eq!(from_json.len(), 2);

        std::fs::write(&txt, "\n").unwrap();
        assert!(load_entries(Some(&txt)).is_err());

        let _ = std::fs::remove_file(txt);
        let _ = std::fs::remove_file(json);
    }
}
