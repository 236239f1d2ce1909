pub mod data;

use std::fmt;

pub use data::{ALL_LANGUAGES, LANG_TABLE};

/// Inline text direction of a translation language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for an HTML `dir` attribute.
    #[inline(always)]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A translation language and its static display configuration.
///
/// Values only come from the `define_languages!` table in [`data`]; the
/// fields are private so every `Language` in circulation is a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language {
    key: &'static str,
    tag: &'static str,
    name: &'static str,
    direction: Direction,
    translator: &'static str,
}

impl Language {
    /// Key used in verse records (`"english"`, `"urdu"`, ...).
    #[inline(always)]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// BCP-47 tag for `lang` attributes.
    #[inline(always)]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// Human-readable name.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Translator the enrichment dataset uses for this language.
    #[inline(always)]
    pub const fn default_translator(&self) -> &'static str {
        self.translator
    }

    /// Case-insensitive lookup by record key or BCP-47 tag.
    pub fn from_key(key: &str) -> Option<Language> {
        let lower = key.to_ascii_lowercase();
        LANG_TABLE
            .get(lower.as_str())
            .copied()
            .or_else(|| ALL_LANGUAGES.iter().copied().find(|l| l.tag == lower))
    }

    /// The record key with its first letter upper-cased.
    pub fn capitalized(&self) -> String {
        let mut chars = self.key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Every configured language, in render order.
#[inline(always)]
pub fn all_languages() -> &'static [Language] {
    ALL_LANGUAGES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ENGLISH, HINDI, URDU};

    #[test]
    fn lookup_by_key_and_tag() {
        assert_eq!(Language::from_key("urdu"), Some(URDU));
        assert_eq!(Language::from_key("Urdu"), Some(URDU));
        assert_eq!(Language::from_key("hi"), Some(HINDI));
        assert_eq!(Language::from_key("EN"), Some(ENGLISH));
        assert_eq!(Language::from_key("bengali"), None);
        assert_eq!(Language::from_key(""), None);
    }

    #[test]
    fn directions() {
        assert_eq!(ENGLISH.direction(), Direction::Ltr);
        assert_eq!(URDU.direction(), Direction::Rtl);
        assert_eq!(HINDI.direction(), Direction::Ltr);
        assert_eq!(URDU.direction().to_string(), "rtl");
    }

    #[test]
    fn render_order_is_declaration_order() {
        let keys: Vec<_> = all_languages().iter().map(Language::key).collect();
        assert_eq!(keys, ["english", "urdu", "hindi"]);
    }

    #[test]
    fn table_and_list_agree() {
        assert_eq!(LANG_TABLE.len(), ALL_LANGUAGES.len());
        for lang in all_languages() {
            assert_eq!(LANG_TABLE.get(lang.key()), Some(lang));
        }
    }

    #[test]
    fn capitalized_key() {
        assert_eq!(ENGLISH.capitalized(), "English");
        assert_eq!(HINDI.capitalized(), "Hindi");
    }

    #[test]
    fn translators() {
        assert_eq!(ENGLISH.default_translator(), "Sahih International");
        assert_eq!(URDU.default_translator(), "Dr. Israr Ahmad");
        assert_eq!(HINDI.default_translator(), "Maulana Azizul Haque al-Umari");
    }
}
