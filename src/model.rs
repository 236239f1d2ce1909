//! Verse records consumed by the composer.
//!
//! Field names follow the enrichment dataset (`textIndopak`, `isPartOfPrayer`,
//! ...). Records are read-only once built; the composer only ever borrows them.

use crate::lang::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One lexical token of a verse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// Raw IndoPak glyphs. Non-empty for every real word; the dataset's
    /// verse-end sentinel is filtered out upstream.
    #[serde(rename = "textIndopak")]
    pub script_text: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub transliteration: String,
}

/// One language's rendering of a verse. Empty `text` means no data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub translator: String,
}

impl Translation {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    /// `"<surah>:<ayah>"`.
    pub verse_key: String,
    pub verse_number: u32,
    /// Full raw line, trailing waqf marks and formatting included.
    #[serde(rename = "textIndopak")]
    pub script_text: String,
    /// `false` for verses shown only as surrounding context.
    #[serde(rename = "isPartOfPrayer", default = "default_focal")]
    pub is_focal: bool,
    #[serde(default)]
    pub words: Vec<Word>,
    /// Keyed by [`Language::key`]. Open: unknown keys are kept.
    #[serde(default)]
    pub translations: BTreeMap<String, Translation>,
}

fn default_focal() -> bool {
    true
}

impl Verse {
    /// Translation for `lang`, if the record has one with non-empty text.
    pub fn translation(&self, lang: Language) -> Option<&Translation> {
        self.translations
            .get(lang.key())
            .filter(|t| !t.is_empty())
    }
}

/// A supplication: metadata plus the verses it recites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prayer {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// Reference string, e.g. `"1:2-7"` or `"2:201"`.
    pub verses: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_verse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surah_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surah_number: Option<u16>,
    #[serde(default)]
    pub content: Vec<Verse>,
}

impl Prayer {
    #[inline]
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}
