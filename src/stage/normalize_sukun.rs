use crate::{
    stage::Stage,
    unicode::{DECORATIVE_SUKUN, SUKUN, contains_decorative_sukun},
};
use std::borrow::Cow;

/// Replaces the IndoPak decorative sukun (U+06E1) with the standard sukun
/// (U+0652).
///
/// Pure 1:1 character substitution, global, nothing else touched. Zero-copy
/// when the text holds no U+06E1. Idempotent because the replacement is never
/// itself a target.
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizeSukun;

impl Stage for NormalizeSukun {
    fn name(&self) -> &'static str {
        "normalize_sukun"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        contains_decorative_sukun(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !contains_decorative_sukun(&text) {
            return text;
        }
        // Both code points encode to two bytes, so capacity is exact.
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            out.push(if c == DECORATIVE_SUKUN { SUKUN } else { c });
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for NormalizeSukun {
    fn samples() -> &'static [&'static str] {
        &[
            "قُلْ",
            "قُل\u{06E1}",
            "اَن\u{06E1}عَم\u{06E1}تَ",
            "\u{06E1}\u{06E1}",
            "plain ascii",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["بِسْمِ اللّٰهِ", "مٰلِكِ يَوْمِ الدِّيْنِ", "", "hello"]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("قُل\u{06E1}", "قُلْ"),
            ("اَن\u{06E1}عَم\u{06E1}تَ", "اَنْعَمْتَ"),
            ("\u{06E1}", "\u{0652}"),
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let out = NormalizeSukun.apply(Cow::Borrowed("a\u{06E1}b\u{06E1}c\u{06E1}"));
        assert_eq!(out, "a\u{0652}b\u{0652}c\u{0652}");
        assert!(!out.contains(DECORATIVE_SUKUN));
    }

    #[test]
    fn leaves_standard_sukun_alone() {
        let input = "اَنْعَمْتَ";
        assert!(!NormalizeSukun.needs_apply(input));
        let out = NormalizeSukun.apply(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn leaves_waqf_marks_alone() {
        let input = "وَالضُّحَىٰ\u{06D9}";
        assert_eq!(NormalizeSukun.apply(Cow::Borrowed(input)), input);
    }

    #[test]
    fn preserves_byte_length() {
        let input = "\u{06E1}x\u{06E1}";
        let out = NormalizeSukun.apply(Cow::Borrowed(input));
        assert_eq!(out.len(), input.len());
    }
}
