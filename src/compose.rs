//! Verse composition.
//!
//! Turns a prayer's verse sequence into the two Arabic presentations
//! (continuous flow and word-by-word) and into per-language translation
//! groups. Composition is pure: the same verses always produce the same
//! output, and nothing is cached here. Outputs borrow from the input verses
//! wherever normalization leaves text untouched.

pub mod continuous;
pub mod translation;
pub mod word_by_word;

pub use continuous::{ContinuousText, VerseSpan};
pub use translation::{TranslationEntry, TranslationGroup};
pub use word_by_word::{VerseEnd, WordBlock, WordToken};

use crate::{
    lang::Language,
    model::Verse,
    numeral::to_positional_numeral,
    process::Process,
    profile::{Profile, preset},
};

/// End-of-ayah marker: optional pause mark on top, the verse number in
/// positional numerals inside the ayah circle, and the plain decimal number
/// for screen readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AyahMarker<'a> {
    pub verse_number: u32,
    /// Eastern Arabic-Indic rendering of `verse_number`.
    pub numeral: String,
    /// Waqf mark(s) lifted off the end of the verse line, or `""`.
    pub pause_mark: &'a str,
}

impl<'a> AyahMarker<'a> {
    pub fn new(verse_number: u32, pause_mark: &'a str) -> Self {
        Self {
            verse_number,
            numeral: to_positional_numeral(u64::from(verse_number)),
            pause_mark,
        }
    }

    #[inline]
    pub fn has_pause_mark(&self) -> bool {
        !self.pause_mark.is_empty()
    }

    /// `"Verse 7"`.
    pub fn aria_label(&self) -> String {
        format!("Verse {}", self.verse_number)
    }

    /// `"(7)"`.
    pub fn plain_number(&self) -> String {
        format!("({})", self.verse_number)
    }
}

/// Composes verse sequences with a given normalization profile.
pub struct Composer<P: Process> {
    profile: Profile<P>,
}

impl<P: Process> Composer<P> {
    pub fn new(profile: Profile<P>) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &Profile<P> {
        &self.profile
    }
}

impl Composer<crate::process::EmptyProcess> {
    /// Composer for IndoPak data: decorative sukun normalized on verse bodies
    /// and words.
    pub fn indopak() -> Composer<impl Process> {
        Composer::new(preset::indopak_display())
    }
}

/// Continuous composition with the IndoPak composer.
pub fn compose_continuous(verses: &[Verse]) -> ContinuousText<'_> {
    Composer::indopak().continuous(verses)
}

/// Word-by-word composition with the IndoPak composer.
pub fn compose_word_by_word(verses: &[Verse]) -> Vec<WordBlock<'_>> {
    Composer::indopak().word_by_word(verses)
}

/// Translation group for `language`, or `None` when no verse has text for it.
pub fn compose_translation_group(
    verses: &[Verse],
    language: Language,
) -> Option<TranslationGroup<'_>> {
    Composer::indopak().translation_group(verses, language)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::{Translation, Verse, Word};

    pub fn word(script: &str, translit: &str, gloss: &str) -> Word {
        Word {
            script_text: script.into(),
            transliteration: translit.into(),
            translation: gloss.into(),
        }
    }

    pub fn verse(surah: u16, number: u32, script: &str, focal: bool) -> Verse {
        Verse {
            verse_key: format!("{surah}:{number}"),
            verse_number: number,
            script_text: script.into(),
            is_focal: focal,
            ..Default::default()
        }
    }

    pub fn with_translation(mut v: Verse, lang: &str, text: &str, translator: &str) -> Verse {
        v.translations.insert(
            lang.into(),
            Translation {
                text: text.into(),
                translator: translator.into(),
            },
        );
        v
    }

    /// Ad-Duha 93:1-2, the second verse marked as context.
    pub fn duha() -> Vec<Verse> {
        let mut first = verse(93, 1, "وَالضُّحٰىۙ\u{200F}", true);
        first.words = vec![word("وَالضُّحٰىۙ", "waḍḍuḥā", "By the morning brightness")];
        let first = with_translation(first, "english", "By the morning brightness", "Sahih International");

        let mut second = verse(93, 2, "وَالَّي\u{06E1}لِ اِذَا سَجٰىۙ ", false);
        second.words = vec![
            word("وَالَّي\u{06E1}لِ", "wa-al-layli", "And the night"),
            word("اِذَا", "idhā", "when"),
            word("سَجٰىۙ", "sajā", "it covers with darkness"),
        ];
        let second = with_translation(second, "english", "And the night when it covers", "Sahih International");
        vec![first, second]
    }
}
