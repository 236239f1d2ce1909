//! Full prayer view: Arabic section, visible translation groups, and footer.

use crate::{
    compose::{Composer, ContinuousText, TranslationGroup, WordBlock},
    lang::{Language, all_languages},
    model::Prayer,
    process::Process,
    reference::quran_url,
    surah,
};
use std::collections::BTreeSet;

/// Reader-selected display flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub word_by_word: bool,
    /// Languages whose translation groups are shown.
    pub languages: BTreeSet<Language>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            word_by_word: false,
            languages: all_languages().iter().copied().collect(),
        }
    }
}

impl DisplayOptions {
    pub fn word_by_word(mut self, on: bool) -> Self {
        self.word_by_word = on;
        self
    }

    pub fn only(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.languages = languages.into_iter().collect();
        self
    }

    pub fn is_visible(&self, lang: Language) -> bool {
        self.languages.contains(&lang)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArabicSection<'a> {
    Continuous(ContinuousText<'a>),
    WordByWord(Vec<WordBlock<'a>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub surah_name: Option<String>,
    pub verse_range: String,
    /// Present only when both a surah number and a range are known.
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerView<'a> {
    pub prayer: &'a Prayer,
    pub arabic: ArabicSection<'a>,
    pub translations: Vec<TranslationGroup<'a>>,
    pub footer: Option<Footer>,
}

fn footer(prayer: &Prayer) -> Option<Footer> {
    let surah_name = prayer
        .surah_name
        .clone()
        .or_else(|| prayer.surah_number.map(surah::display_name));
    if surah_name.is_none() && prayer.verses.is_empty() {
        return None;
    }
    let link = match prayer.surah_number {
        Some(_) if !prayer.verses.is_empty() => Some(quran_url(&prayer.verses)),
        _ => None,
    };
    Some(Footer {
        surah_name,
        verse_range: prayer.verses.clone(),
        link,
    })
}

impl<P: Process> Composer<P> {
    /// Compose a prayer for display. `None` when it has no verse content.
    pub fn prayer<'p>(&self, prayer: &'p Prayer, options: &DisplayOptions) -> Option<PrayerView<'p>> {
        if !prayer.has_content() {
            tracing::debug!(prayer = %prayer.id, "no verse content, nothing to render");
            return None;
        }
        let verses = prayer.content.as_slice();
        let arabic = if options.word_by_word {
            ArabicSection::WordByWord(self.word_by_word(verses))
        } else {
            ArabicSection::Continuous(self.continuous(verses))
        };
        let visible = all_languages()
            .iter()
            .copied()
            .filter(|lang| options.is_visible(*lang));
        Some(PrayerView {
            prayer,
            arabic,
            translations: self.translation_groups(verses, visible),
            footer: footer(prayer),
        })
    }
}

/// [`Composer::prayer`] with the IndoPak composer.
pub fn compose_prayer<'p>(prayer: &'p Prayer, options: &DisplayOptions) -> Option<PrayerView<'p>> {
    Composer::indopak().prayer(prayer, options)
}
