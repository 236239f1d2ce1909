use crate::{
    compose::{AyahMarker, Composer},
    lang::Direction,
    model::Verse,
    process::Process,
    waqf::extract_pause_mark,
};
use std::borrow::Cow;

/// One verse inside the continuous Arabic flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseSpan<'a> {
    pub verse_key: &'a str,
    /// Normalized verse body, pause marks removed.
    pub text: Cow<'a, str>,
    pub marker: AyahMarker<'a>,
    /// Context verse, rendered de-emphasized.
    pub dimmed: bool,
}

/// All verses of a sequence as one right-to-left text flow.
///
/// Spans are joined by a single space so line wrapping runs across verse
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContinuousText<'a> {
    pub spans: Vec<VerseSpan<'a>>,
}

impl<'a> ContinuousText<'a> {
    /// Arabic text always flows right-to-left.
    #[inline(always)]
    pub const fn direction(&self) -> Direction {
        Direction::Rtl
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// `(marker, dimmed)` per verse, in order.
    pub fn markers(&self) -> impl Iterator<Item = (&AyahMarker<'a>, bool)> {
        self.spans.iter().map(|s| (&s.marker, s.dimmed))
    }

    /// Flat text: each body followed by its pause mark and numeral.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        for (i, span) in self.spans.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&span.text);
            out.push(' ');
            out.push_str(span.marker.pause_mark);
            out.push_str(&span.marker.numeral);
        }
        out
    }
}

impl<P: Process> Composer<P> {
    /// Continuous composition: per verse, split off the pause mark, normalize
    /// the body, and attach the ayah marker.
    pub fn continuous<'v>(&self, verses: &'v [Verse]) -> ContinuousText<'v> {
        let spans: Vec<_> = verses
            .iter()
            .map(|verse| {
                let split = extract_pause_mark(&verse.script_text);
                VerseSpan {
                    verse_key: &verse.verse_key,
                    text: self.profile.run_str(split.text),
                    marker: AyahMarker::new(verse.verse_number, split.pause_mark),
                    dimmed: !verse.is_focal,
                }
            })
            .collect();
        tracing::debug!(
            verses = spans.len(),
            dimmed = spans.iter().filter(|s| s.dimmed).count(),
            "composed continuous text"
        );
        ContinuousText { spans }
    }
}
