use crate::{
    compose::{AyahMarker, Composer},
    model::Verse,
    process::Process,
    waqf::extract_pause_mark,
};
use std::borrow::Cow;

/// One word with its gloss and transliteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken<'a> {
    pub verse_key: &'a str,
    pub script_text: Cow<'a, str>,
    pub transliteration: &'a str,
    pub translation: &'a str,
    pub dimmed: bool,
}

impl WordToken<'_> {
    /// `"<transliteration>: <translation>"`, the block's accessible name.
    pub fn aria_label(&self) -> String {
        format!("{}: {}", self.transliteration, self.translation)
    }
}

/// Closing block of a verse in the word-by-word stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseEnd<'a> {
    pub verse_key: &'a str,
    pub marker: AyahMarker<'a>,
    pub dimmed: bool,
}

/// Element of the flat word-by-word stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordBlock<'a> {
    Word(WordToken<'a>),
    VerseEnd(VerseEnd<'a>),
}

impl<'a> WordBlock<'a> {
    pub fn verse_key(&self) -> &'a str {
        match self {
            WordBlock::Word(w) => w.verse_key,
            WordBlock::VerseEnd(e) => e.verse_key,
        }
    }

    pub fn is_dimmed(&self) -> bool {
        match self {
            WordBlock::Word(w) => w.dimmed,
            WordBlock::VerseEnd(e) => e.dimmed,
        }
    }

    pub fn as_verse_end(&self) -> Option<&VerseEnd<'a>> {
        match self {
            WordBlock::VerseEnd(e) => Some(e),
            WordBlock::Word(_) => None,
        }
    }
}

/// `(marker, dimmed)` for each verse-end block, in order.
pub fn verse_markers<'b, 'a>(
    blocks: &'b [WordBlock<'a>],
) -> impl Iterator<Item = (&'b AyahMarker<'a>, bool)> {
    blocks
        .iter()
        .filter_map(WordBlock::as_verse_end)
        .map(|e| (&e.marker, e.dimmed))
}

impl<P: Process> Composer<P> {
    /// Word-by-word composition: every word of every verse, each verse closed
    /// by a verse-end block. The stream is flat so words and markers wrap
    /// together.
    pub fn word_by_word<'v>(&self, verses: &'v [Verse]) -> Vec<WordBlock<'v>> {
        let capacity = verses.iter().map(|v| v.words.len() + 1).sum();
        let mut blocks = Vec::with_capacity(capacity);

        for verse in verses {
            let dimmed = !verse.is_focal;
            blocks.extend(verse.words.iter().map(|word| {
                WordBlock::Word(WordToken {
                    verse_key: &verse.verse_key,
                    script_text: self.profile.run_str(&word.script_text),
                    transliteration: &word.transliteration,
                    translation: &word.translation,
                    dimmed,
                })
            }));

            let pause_mark = extract_pause_mark(&verse.script_text).pause_mark;
            blocks.push(WordBlock::VerseEnd(VerseEnd {
                verse_key: &verse.verse_key,
                marker: AyahMarker::new(verse.verse_number, pause_mark),
                dimmed,
            }));
        }

        tracing::debug!(
            verses = verses.len(),
            blocks = blocks.len(),
            "composed word-by-word stream"
        );
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::fixtures;

    #[test]
    fn words_then_verse_end() {
        let verses = fixtures::duha();
        let blocks = Composer::indopak().word_by_word(&verses);
        let kinds: Vec<&str> = blocks
            .iter()
            .map(|b| match b {
                WordBlock::Word(_) => "w",
                WordBlock::VerseEnd(_) => "end",
            })
            .collect();
        assert_eq!(kinds, ["w", "end", "w", "w", "w", "end"]);
        assert_eq!(blocks[2].verse_key(), "93:2");
    }

    #[test]
    fn words_are_normalized_and_dimmed_per_verse() {
        let verses = fixtures::duha();
        let blocks = Composer::indopak().word_by_word(&verses);
        let WordBlock::Word(first_context_word) = &blocks[2] else {
            panic!("expected a word block");
        };
        assert_eq!(first_context_word.script_text, "وَالَّي\u{0652}لِ");
        assert!(first_context_word.dimmed);
        assert_eq!(first_context_word.aria_label(), "wa-al-layli: And the night");
        assert!(!blocks[0].is_dimmed());
        assert!(blocks[5].is_dimmed());
    }

    #[test]
    fn verse_without_words_emits_only_marker() {
        let verses = vec![fixtures::verse(2, 201, "رَبَّنَاۤ اٰتِنَا\u{06D8}", true)];
        let blocks = Composer::indopak().word_by_word(&verses);
        assert_eq!(blocks.len(), 1);
        let end = blocks[0].as_verse_end().expect("verse end");
        assert_eq!(end.marker.verse_number, 201);
        assert_eq!(end.marker.numeral, "٢٠١");
        assert_eq!(end.marker.pause_mark, "\u{06D8}");
    }

    #[test]
    fn empty_sequence() {
        assert!(Composer::indopak().word_by_word(&[]).is_empty());
    }

    #[test]
    fn agrees_with_continuous() {
        let verses = fixtures::duha();
        let composer = Composer::indopak();
        let blocks = composer.word_by_word(&verses);
        let text = composer.continuous(&verses);
        assert!(verse_markers(&blocks).eq(text.markers()));
    }
}
