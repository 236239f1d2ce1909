//! Eastern Arabic-Indic numerals for ayah markers.

use crate::unicode::ARABIC_INDIC_DIGITS;

/// Render `n` in Eastern Arabic-Indic digits.
///
/// Digits keep their decimal order (most significant first); numerals are
/// written left-to-right even inside right-to-left text, so nothing is
/// reversed. Zero is `٠`.
///
/// ```
/// assert_eq!(tilawah::to_positional_numeral(7), "٧");
/// assert_eq!(tilawah::to_positional_numeral(123), "١٢٣");
/// ```
pub fn to_positional_numeral(n: u64) -> String {
    let decimal = n.to_string();
    let mut out = String::with_capacity(decimal.len() * 2);
    for b in decimal.bytes() {
        out.push(ARABIC_INDIC_DIGITS[usize::from(b - b'0')]);
    }
    out
}
