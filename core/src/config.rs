//! Scoring configuration for the fuzzy scorer.
//!
//! `ScoreConfig` is an immutable bundle of eight signed tunables. Build it once
//! (in code, from a TOML string, or from a TOML file) and share it by value
//! across any number of match calls.
//!
//! Bonuses are added to the score when their condition holds. Penalties are
//! also *added*, so they are expected to be negative; a positive "penalty"
//! simply becomes a reward. No validation is performed.
//!
//! Prepending unmatched codepoints to a body never raises its score as long
//! as `first_letter_bonus >= max(separator_bonus, camel_bonus) +
//! leading_letter_penalty`. The defaults satisfy this; custom configs may not.
//!
//! # Example
//! ```
//! use fuzzyfind_core::ScoreConfig;
//!
//! let cfg = ScoreConfig::default()
//!     .with_adjacency_bonus(5)
//!     .with_unmatched_letter_penalty(-2);
//! assert_eq!(cfg.adjacency_bonus, 5);
//! assert_eq!(cfg.full_word_bonus, ScoreConfig::DEFAULT_FULL_WORD_BONUS);
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Added when the whole body equals the query (case-insensitive).
    pub full_word_bonus: i32,
    /// Added when a matched position directly follows the previous one.
    pub adjacency_bonus: i32,
    /// Added when the body codepoint before a match is a separator.
    pub separator_bonus: i32,
    /// Added when an uppercase match follows a lowercase codepoint.
    pub camel_bonus: i32,
    /// Added once per unmatched codepoint before the first match.
    pub leading_letter_penalty: i32,
    /// Magnitude cap for the accumulated leading penalty.
    pub max_leading_letter_penalty: i32,
    /// Added once per unmatched codepoint after the first match.
    pub unmatched_letter_penalty: i32,
    /// Added when the first codepoint of the body is matched.
    pub first_letter_bonus: i32,
}

impl ScoreConfig {
    pub const DEFAULT_FULL_WORD_BONUS: i32 = 100;
    pub const DEFAULT_ADJACENCY_BONUS: i32 = 15;
    pub const DEFAULT_SEPARATOR_BONUS: i32 = 25;
    pub const DEFAULT_CAMEL_BONUS: i32 = 25;
    pub const DEFAULT_LEADING_LETTER_PENALTY: i32 = -5;
    pub const DEFAULT_MAX_LEADING_LETTER_PENALTY: i32 = -15;
    pub const DEFAULT_UNMATCHED_LETTER_PENALTY: i32 = -1;
    pub const DEFAULT_FIRST_LETTER_BONUS: i32 = 30;

    pub fn with_full_word_bonus(mut self, bonus: i32) -> Self {
        self.full_word_bonus = bonus;
        self
    }

    pub fn with_adjacency_bonus(mut self, bonus: i32) -> Self {
        self.adjacency_bonus = bonus;
        self
    }

    pub fn with_separator_bonus(mut self, bonus: i32) -> Self {
        self.separator_bonus = bonus;
        self
    }

    pub fn with_camel_bonus(mut self, bonus: i32) -> Self {
        self.camel_bonus = bonus;
        self
    }

    pub fn with_leading_letter_penalty(mut self, penalty: i32) -> Self {
        self.leading_letter_penalty = penalty;
        self
    }

    pub fn with_max_leading_letter_penalty(mut self, penalty: i32) -> Self {
        self.max_leading_letter_penalty = penalty;
        self
    }

    pub fn with_unmatched_letter_penalty(mut self, penalty: i32) -> Self {
        self.unmatched_letter_penalty = penalty;
        self
    }

    pub fn with_first_letter_bonus(mut self, bonus: i32) -> Self {
        self.first_letter_bonus = bonus;
        self
    }

    /// Total leading penalty for `prefix_len` unmatched codepoints before the
    /// first match. The magnitude never exceeds `max_leading_letter_penalty`.
    pub fn leading_penalty(&self, prefix_len: usize) -> i32 {
        let count = i32::try_from(prefix_len).unwrap_or(i32::MAX);
        let raw = self.leading_letter_penalty.saturating_mul(count);
        let cap = self.max_leading_letter_penalty.unsigned_abs();
        if raw.unsigned_abs() > cap {
            let capped = i32::try_from(cap).unwrap_or(i32::MAX);
            capped.saturating_mul(raw.signum())
        } else {
            raw
        }
    }

    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read score config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parse score config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .with_context(|| format!("write score config {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            full_word_bonus: Self::DEFAULT_FULL_WORD_BONUS,
            adjacency_bonus: Self::DEFAULT_ADJACENCY_BONUS,
            separator_bonus: Self::DEFAULT_SEPARATOR_BONUS,
            camel_bonus: Self::DEFAULT_CAMEL_BONUS,
            leading_letter_penalty: Self::DEFAULT_LEADING_LETTER_PENALTY,
            max_leading_letter_penalty: Self::DEFAULT_MAX_LEADING_LETTER_PENALTY,
            unmatched_letter_penalty: Self::DEFAULT_UNMATCHED_LETTER_PENALTY,
            first_letter_bonus: Self::DEFAULT_FIRST_LETTER_BONUS,
        }
    }
}
