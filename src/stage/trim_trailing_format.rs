use crate::{
    stage::Stage,
    unicode::{ends_with_trailing_format, is_trailing_format},
};
use std::borrow::Cow;

/// Strips trailing spaces, zero-width spaces, BOMs and RLMs from a verse line.
///
/// Only the end of the string is touched; leading and interior formatting
/// characters are content as far as this stage is concerned. Borrowed input
/// stays borrowed (the result is a sub-slice); owned input is truncated in
/// place.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrimTrailingFormat;

impl TrimTrailingFormat {
    /// Slice-level form used by pause-mark extraction.
    #[inline]
    pub fn trim(text: &str) -> &str {
        text.trim_end_matches(is_trailing_format)
    }
}

impl Stage for TrimTrailingFormat {
    fn name(&self) -> &'static str {
        "trim_trailing_format"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        ends_with_trailing_format(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(Self::trim(s)),
            Cow::Owned(mut s) => {
                let keep = Self::trim(&s).len();
                s.truncate(keep);
                Cow::Owned(s)
            }
        }
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for TrimTrailingFormat {
    fn samples() -> &'static [&'static str] {
        &[
            "الْحَمْدُ ",
            "الْحَمْدُ\u{200F}",
            "الْحَمْدُ\u{06D6} \u{200B}\u{FEFF}\u{200F}",
            " leading stays",
            "   ",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["الْحَمْدُ", " \u{200F}x", "", "hello"]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("abc \u{200B}\u{FEFF}\u{200F}", "abc"),
            ("\u{200F}\u{200F}", ""),
            ("a\u{200F}b ", "a\u{200F}b"),
        ]
    }
}
