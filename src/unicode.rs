//! Code-point tables for IndoPak verse text.
//!
//! Every set the normalizer recognises lives here as an enumerable slice, with
//! a `const fn` predicate next to it for the hot paths. The predicate and the
//! slice must list the same code points; `tables_agree_with_predicates` below
//! keeps them honest.

/// Arabic Small High Dotless Head Of Khah. The IndoPak data uses it as a
/// decorative sukun; most fonts draw it as a visible circle.
pub const DECORATIVE_SUKUN: char = '\u{06E1}';

/// Standard Arabic sukun.
pub const SUKUN: char = '\u{0652}';

/// Waqf (pause) marks that may trail a verse line, ahead of the end-of-ayah
/// circle.
pub const WAQF_MARKS: &[char] = &[
    '\u{0615}', // Arabic Small High Tah
    '\u{06D6}', // Arabic Small High Ligature Sad with Lam with Alef Maksura
    '\u{06D8}', // Arabic Small High Meem Initial Form
    '\u{06D9}', // Arabic Small High Lam Alef
    '\u{06DA}', // Arabic Small High Jeem
    '\u{E01C}', // IndoPak PUA waqf glyph
    '\u{E022}', // IndoPak PUA waqf glyph
];

/// Formatting characters that trail raw verse lines and carry no content.
pub const TRAILING_FORMAT: &[char] = &[
    '\u{0020}', // Space
    '\u{200B}', // Zero-width space
    '\u{200F}', // Right-to-left mark
    '\u{FEFF}', // Zero-width no-break space / BOM
];

/// Eastern Arabic-Indic digits, indexed by value.
pub const ARABIC_INDIC_DIGITS: [char; 10] = [
    '\u{0660}', '\u{0661}', '\u{0662}', '\u{0663}', '\u{0664}', '\u{0665}', '\u{0666}', '\u{0667}',
    '\u{0668}', '\u{0669}',
];

#[inline(always)]
pub const fn is_waqf_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0615}' | '\u{06D6}' | '\u{06D8}' | '\u{06D9}' | '\u{06DA}' | '\u{E01C}' | '\u{E022}'
    )
}

#[inline(always)]
pub const fn is_trailing_format(c: char) -> bool {
    matches!(c, '\u{0020}' | '\u{200B}' | '\u{200F}' | '\u{FEFF}')
}

/// Byte-level pre-scan for the decorative sukun (`DB A1` in UTF-8).
#[inline]
pub fn contains_decorative_sukun(text: &str) -> bool {
    const NEEDLE: &[u8] = "\u{06E1}".as_bytes();
    memchr::memmem::find(text.as_bytes(), NEEDLE).is_some()
}

#[inline]
pub fn ends_with_trailing_format(text: &str) -> bool {
    text.chars().next_back().is_some_and(is_trailing_format)
}
