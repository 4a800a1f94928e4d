//! Representation model for searchable entries.
//!
//! An entry (an app, a contact, a shortcut) is owned by an external catalog.
//! The matcher only reads its representations: the normalized name, and the
//! optional phonetic forms the catalog precomputed when the entry was built.

use std::fmt;

/// One of the alternative text forms an entry exposes for matching.
///
/// The declaration order is the dispatch order and also the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Representation {
    Name,
    PhoneticFull,
    PhoneticInitials,
}

impl Representation {
    /// All representations, in dispatch order.
    pub const ALL: [Representation; 3] = [
        Representation::Name,
        Representation::PhoneticFull,
        Representation::PhoneticInitials,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Representation::Name => "name",
            Representation::PhoneticFull => "phonetic-full",
            Representation::PhoneticInitials => "phonetic-initials",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of an entry's matchable representations.
///
/// Phonetic forms default to absent; entries whose names contain no
/// transliterable text simply never provide them.
pub trait Searchable {
    /// The normalized name as a codepoint sequence.
    fn normalized_name(&self) -> &[char];

    fn phonetic_full(&self) -> Option<&[char]> {
        None
    }

    fn phonetic_initials(&self) -> Option<&[char]> {
        None
    }

    /// Codepoints for the given representation, if the entry has it.
    fn representation(&self, kind: Representation) -> Option<&[char]> {
        match kind {
            Representation::Name => Some(self.normalized_name()),
            Representation::PhoneticFull => self.phonetic_full(),
            Representation::PhoneticInitials => self.phonetic_initials(),
        }
    }
}

impl Searchable for [char] {
    fn normalized_name(&self) -> &[char] {
        self
    }
}

impl Searchable for Vec<char> {
    fn normalized_name(&self) -> &[char] {
        self
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn normalized_name(&self) -> &[char] {
        (**self).normalized_name()
    }

    fn phonetic_full(&self) -> Option<&[char]> {
        (**self).phonetic_full()
    }

    fn phonetic_initials(&self) -> Option<&[char]> {
        (**self).phonetic_initials()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Phonetic {
        name: Vec<char>,
        initials: Vec<char>,
    }

    impl Searchable for Phonetic {
        fn normalized_name(&self) -> &[char] {
            &self.name
        }

        fn phonetic_initials(&self) -> Option<&[char]> {
            Some(&self.initials)
        }
    }

    #[test]
    fn dispatch_order_is_name_full_initials() {
        assert_eq!(
            Representation::ALL,
            [
                Representation::Name,
                Representation::PhoneticFull,
                Representation::PhoneticInitials
            ]
        );
        assert!(Representation::Name < Representation::PhoneticInitials);
    }

    #[test]
    fn representation_lookup_follows_trait_methods() {
        let e = Phonetic {
            name: "淘宝".chars().collect(),
            initials: "tb".chars().collect(),
        };
        assert_eq!(e.representation(Representation::Name), Some(&['淘', '宝'][..]));
        assert_eq!(e.representation(Representation::PhoneticFull), None);
        assert_eq!(
            e.representation(Representation::PhoneticInitials),
            Some(&['t', 'b'][..])
        );
    }

    #[test]
    fn plain_codepoints_expose_name_only() {
        let name: Vec<char> = "Maps".chars().collect();
        assert_eq!(name.normalized_name().len(), 4);
        assert!(name.phonetic_full().is_none());
        assert_eq!(Representation::PhoneticFull.to_string(), "phonetic-full");
    }
}
