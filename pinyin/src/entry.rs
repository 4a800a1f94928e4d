//! Catalog-side entry with precomputed pinyin representations.
//!
//! `PinyinEntry` is what a launcher catalog builds once per app, contact or
//! shortcut. Transliteration happens here, at build time; every keystroke
//! afterwards only runs the scorer against the stored codepoints.

use fuzzyfind_core::utils::normalize_name;
use fuzzyfind_core::{BestMatch, Representation, Searchable};

use crate::transliterator::{contains_chinese, transliterate, PhoneticForms};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinyinEntry {
    name: String,
    normalized: Vec<char>,
    /// Present only when the name contains transliterable text.
    phonetic: Option<PhoneticForms>,
}

impl PinyinEntry {
    pub fn new<T: Into<String>>(name: T) -> Self {
        let name = name.into();
        let normalized = normalize_name(&name);
        let phonetic = contains_chinese(&name).then(|| transliterate(&name));
        Self {
            name,
            normalized,
            phonetic,
        }
    }

    /// The display name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_transliterated(&self) -> bool {
        self.phonetic.is_some()
    }

    pub fn phonetic_forms(&self) -> Option<&PhoneticForms> {
        self.phonetic.as_ref()
    }

    /// Display-name codepoint indices to highlight for `best`.
    ///
    /// Name and initials positions already index the display name (both are
    /// index-preserving). Full-form positions are mapped through the origin
    /// table, so "taobao" highlights both ideographs of "淘宝".
    pub fn highlight(&self, best: &BestMatch) -> Vec<usize> {
        match best.representation {
            Representation::Name | Representation::PhoneticInitials => best.info.positions.clone(),
            Representation::PhoneticFull => match &self.phonetic {
                Some(forms) => forms.source_positions(&best.info.positions),
                None => Vec::new(),
            },
        }
    }
}

impl Searchable for PinyinEntry {
    fn normalized_name(&self) -> &[char] {
        &self.normalized
    }

    fn phonetic_full(&self) -> Option<&[char]> {
        self.phonetic.as_ref().map(|p| p.full.as_slice())
    }

    fn phonetic_initials(&self) -> Option<&[char]> {
        self.phonetic.as_ref().map(|p| p.initials.as_slice())
    }
}
