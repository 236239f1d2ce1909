use crate::{
    compose::Composer,
    lang::{Direction, Language},
    model::Verse,
    process::Process,
};

/// One verse's translation inside a language group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationEntry<'a> {
    /// Reference label shown before the text, e.g. `"1:2"`.
    pub verse_key: &'a str,
    pub text: &'a str,
    pub dimmed: bool,
}

/// All translated verses for one language, plus attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationGroup<'a> {
    pub language: Language,
    pub translator: &'a str,
    /// Never empty: a language with no text yields no group at all.
    pub entries: Vec<TranslationEntry<'a>>,
}

impl TranslationGroup<'_> {
    /// Static per-language direction, not derived from content.
    #[inline(always)]
    pub const fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Entries joined by spaces, each prefixed with `(<verse_key>) `.
    pub fn to_plain_string(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("({}) {}", e.verse_key, e.text))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<P: Process> Composer<P> {
    /// Translation group for `language`, `None` when no verse has text for it.
    ///
    /// Attribution comes from the first verse that has text for the language;
    /// sequences are assumed to use one translator per language, and later
    /// verses are not checked against it. The label is used as-is, empty or
    /// not.
    pub fn translation_group<'v>(
        &self,
        verses: &'v [Verse],
        language: Language,
    ) -> Option<TranslationGroup<'v>> {
        let mut translator = None;
        let entries: Vec<_> = verses
            .iter()
            .filter_map(|verse| {
                let t = verse.translation(language)?;
                translator.get_or_insert(t.translator.as_str());
                Some(TranslationEntry {
                    verse_key: &verse.verse_key,
                    text: &t.text,
                    dimmed: !verse.is_focal,
                })
            })
            .collect();

        if entries.is_empty() {
            tracing::debug!(language = language.key(), "no translation text, group omitted");
            return None;
        }

        let translator = translator.unwrap_or_default();
        Some(TranslationGroup {
            language,
            translator,
            entries,
        })
    }

    /// Groups for `languages`, in the order given, absent groups skipped.
    pub fn translation_groups<'v>(
        &self,
        verses: &'v [Verse],
        languages: impl IntoIterator<Item = Language>,
    ) -> Vec<TranslationGroup<'v>> {
        languages
            .into_iter()
            .filter_map(|lang| self.translation_group(verses, lang))
            .collect()
    }
}
