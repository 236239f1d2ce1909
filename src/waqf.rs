//! Waqf (pause) mark extraction.
//!
//! IndoPak verse lines end with zero or more pause marks followed by
//! formatting noise. Typeset mushaf place the marks above the end-of-ayah
//! circle rather than after the last word, so the composer needs them split
//! off the verse body.

use crate::{stage::TrimTrailingFormat, unicode::is_waqf_mark};

/// A verse line split into its body and trailing pause mark(s).
///
/// Both fields borrow from the input: the marks are a contiguous suffix of the
/// trimmed line, so nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PauseSplit<'a> {
    /// Verse body with no trailing marks or formatting characters.
    pub text: &'a str,
    /// Peeled marks in their original order, or `""`.
    pub pause_mark: &'a str,
}

impl PauseSplit<'_> {
    #[inline]
    pub fn has_pause_mark(&self) -> bool {
        !self.pause_mark.is_empty()
    }
}

/// Split trailing waqf marks off a raw verse line.
///
/// Trailing formatting characters are dropped first and appear in neither
/// field. Marks are then peeled one at a time from the end until a character
/// outside the waqf set is reached; compound marks (e.g. U+06D6 U+06DA) keep
/// their left-to-right order.
///
/// ```
/// let split = tilawah::extract_pause_mark("وَالضُّحَىٰۙ");
/// assert_eq!(split.text, "وَالضُّحَىٰ");
/// assert_eq!(split.pause_mark, "ۙ");
/// ```
pub fn extract_pause_mark(text: &str) -> PauseSplit<'_> {
    let trimmed = TrimTrailingFormat::trim(text);
    let body = trimmed.trim_end_matches(is_waqf_mark);
    PauseSplit {
        text: body,
        pause_mark: &trimmed[body.len()..],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_mark() {
        let split = extract_pause_mark("وَالضُّحَىٰۙ");
        assert_eq!(split.text, "وَالضُّحَىٰ");
        assert_eq!(split.pause_mark, "ۙ");
        assert!(split.has_pause_mark());
    }

    #[test]
    fn compound_mark_keeps_order() {
        let split = extract_pause_mark("رَبِّ\u{06D6}\u{06DA}");
        assert_eq!(split.text, "رَبِّ");
        assert_eq!(split.pause_mark, "\u{06D6}\u{06DA}");
    }

    #[test]
    fn formatting_after_marks_is_dropped() {
        let split = extract_pause_mark("رَبِّ\u{E022} \u{200B}\u{FEFF}\u{200F}");
        assert_eq!(split.text, "رَبِّ");
        assert_eq!(split.pause_mark, "\u{E022}");
    }

    #[test]
    fn no_mark() {
        let split = extract_pause_mark("الْحَمْدُ لِلّٰهِ");
        assert_eq!(split.text, "الْحَمْدُ لِلّٰهِ");
        assert_eq!(split.pause_mark, "");
        assert!(!split.has_pause_mark());
    }

    #[test]
    fn no_mark_with_trailing_formatting() {
        let split = extract_pause_mark("الْحَمْدُ\u{200F} ");
        assert_eq!(split.text, "الْحَمْدُ");
        assert_eq!(split.pause_mark, "");
    }

    #[test]
    fn peeling_stops_at_formatting_between_marks() {
        // Only trailing formatting is stripped; a space between two marks ends the peel.
        let split = extract_pause_mark("x\u{06D6} \u{06DA}");
        assert_eq!(split.text, "x\u{06D6} ");
        assert_eq!(split.pause_mark, "\u{06DA}");
    }

    #[test]
    fn all_marks() {
        let split = extract_pause_mark("\u{0615}\u{06D8}");
        assert_eq!(split.text, "");
        assert_eq!(split.pause_mark, "\u{0615}\u{06D8}");
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(extract_pause_mark(""), PauseSplit::default());
        assert_eq!(extract_pause_mark(" \u{200F}"), PauseSplit::default());
    }

    #[test]
    fn leaves_decorative_sukun_in_body() {
        let split = extract_pause_mark("قُل\u{06E1}\u{06D9}");
        assert_eq!(split.text, "قُل\u{06E1}");
    }
}
