//! Generate the embedded hanzi -> pinyin reading table.
//!
//! Reads the CLDR Han-Latin transliteration rules (`[chars]→reading;`),
//! strips tone marks, keeps the first reading of every CJK Unified Ideograph
//! and writes one `<reading> <ideographs>` line per reading.
//!
//! Usage:
//!   cargo run -p fuzzyfind-tools -- --input Han_Latin.txt \
//!       --output pinyin/data/hanzi_pinyin.txt --override 地=di

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

const BLOCK_START: char = '\u{4E00}';
const BLOCK_END: char = '\u{9FFF}';
const COMBINING_DIAERESIS: char = '\u{0308}';

#[derive(Parser, Debug)]
#[command(name = "gen_pinyin_table")]
#[command(about = "Build the hanzi pinyin table from CLDR Han-Latin rules")]
struct Args {
    /// Han-Latin rule text
    #[arg(short, long)]
    input: PathBuf,

    /// Output table (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force a reading, e.g. `--override 地=di`; may be repeated
    #[arg(long = "override", value_name = "CHAR=READING")]
    overrides: Vec<String>,
}

/// Toneless lower-case ASCII form of a tone-marked reading.
///
/// "lǜ" → "lv", "zhōng" → "zhong". Returns None when anything other than
/// Latin letters and combining marks is left.
fn strip_tones(reading: &str) -> Option<String> {
    let mut out = String::with_capacity(reading.len());
    for c in reading.nfd() {
        match c {
            COMBINING_DIAERESIS if out.ends_with('u') => {
                out.pop();
                out.push('v');
            }
            'a'..='z' => out.push(c),
            'A'..='Z' => out.push(c.to_ascii_lowercase()),
            '\u{0300}'..='\u{036F}' => {}
            _ => return None,
        }
    }
    (!out.is_empty()).then_some(out)
}

fn parse_override(raw: &str) -> Result<(char, String)> {
    let Some((ch, reading)) = raw.split_once('=') else {
        bail!("override {raw:?} is not CHAR=READING");
    };
    let mut chars = ch.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        bail!("override {raw:?} must name exactly one character");
    };
    let Some(reading) = strip_tones(reading) else {
        bail!("override {raw:?} has an invalid reading");
    };
    Ok((c, reading))
}

/// First toneless reading per ideograph, in rule order.
fn collect_readings(rules: &str) -> Result<BTreeMap<char, String>> {
    let re = Regex::new(r"\[([^\]]+)\]→([^;]+);")?;
    let mut readings = BTreeMap::new();
    for cap in re.captures_iter(rules) {
        let Some(reading) = strip_tones(cap[2].trim()) else {
            continue;
        };
        for c in cap[1].chars() {
            if (BLOCK_START..=BLOCK_END).contains(&c) {
                readings.entry(c).or_insert_with(|| reading.clone());
            }
        }
    }
    Ok(readings)
}

fn render(readings: &BTreeMap<char, String>, overrides: &[String]) -> String {
    let mut grouped: BTreeMap<&str, String> = BTreeMap::new();
    for (c, reading) in readings {
        grouped.entry(reading.as_str()).or_default().push(*c);
    }

    let mut out = String::new();
    out.push_str("# Hanzi to toneless pinyin, one reading per ideograph.\n");
    out.push_str("# Block: CJK Unified Ideographs (U+4E00..U+9FFF).\n");
    out.push_str("# Source: CLDR Han-Latin transliteration rules (Unicode License).\n");
    let mut generated = String::from("# Generated by gen_pinyin_table");
    for o in overrides {
        let _ = write!(generated, " --override {o}");
    }
    out.push_str(&generated);
    out.push('\n');
    out.push_str("# Format: <reading> <ideographs>\n");
    for (reading, chars) in grouped {
        let _ = writeln!(out, "{reading} {chars}");
    }
    out
}

fn main() -> Result<()> {
    let args = Args::parse();

    let rules = std::fs::read_to_string(&args.input)
        .with_context(|| format!("read rules {}", args.input.display()))?;
    let mut readings = collect_readings(&rules)?;
    if readings.is_empty() {
        bail!("no readings found in {}", args.input.display());
    }

    for raw in &args.overrides {
        let (c, reading) = parse_override(raw)?;
        readings.insert(c, reading);
    }

    let table = render(&readings, &args.overrides);
    match &args.output {
        Some(path) => {
            std::fs::write(path, &table).with_context(|| format!("write {}", path.display()))?;
            eprintln!("✓ Wrote {} ideographs to {}", readings.len(), path.display());
        }
        None => print!("{table}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_are_stripped() {
        assert_eq!(strip_tones("zhōng").as_deref(), Some("zhong"));
        assert_eq!(strip_tones("lǜ").as_deref(), Some("lv"));
        assert_eq!(strip_tones("nǚ").as_deref(), Some("nv"));
        assert_eq!(strip_tones("a").as_deref(), Some("a"));
        assert_eq!(strip_tones("ê").as_deref(), Some("e"));
        assert_eq!(strip_tones("a b"), None);
        assert_eq!(strip_tones(""), None);
    }

    #[test]
    fn first_reading_wins_and_block_is_enforced() {
        let rules = "::Han-Spacedhan();[重众]→zhòng;[重]→chóng;[㐀]→qiū;[绿]→lǜ;";
        let readings = collect_readings(rules).unwrap();
        assert_eq!(readings.get(&'重').map(String::as_str), Some("zhong"));
        assert_eq!(readings.get(&'众').map(String::as_str), Some("zhong"));
        assert_eq!(readings.get(&'绿').map(String::as_str), Some("lv"));
        assert!(!readings.contains_key(&'㐀'));
    }

    #[test]
    fn overrides_are_validated() {
        assert_eq!(parse_override("地=dì").unwrap(), ('地', "di".to_string()));
        assert!(parse_override("地").is_err());
        assert!(parse_override("地图=di").is_err());
        assert!(parse_override("地=").is_err());
    }

    #[test]
    fn render_groups_by_reading() {
        let mut readings = BTreeMap::new();
        readings.insert('宝', "bao".to_string());
        readings.insert('包', "bao".to_string());
        readings.insert('淘', "tao".to_string());
        let table = render(&readings, &["地=di".to_string()]);
        let body: Vec<&str> = table.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(body, vec!["bao 包宝", "tao 淘"]);
        assert!(table.contains("--override 地=di"));
    }
}
