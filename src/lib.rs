pub mod compose;
pub mod lang;
pub mod model;
pub mod numeral;
pub mod process;
pub mod profile;
pub mod reference;
pub mod render;
pub mod stage;
pub mod surah;
pub mod unicode;
pub mod view;
pub mod waqf;


pub use compose::{
    AyahMarker, Composer, ContinuousText, TranslationGroup, WordBlock, compose_continuous,
    compose_translation_group, compose_word_by_word,
};
pub use lang::data::{ENGLISH, HINDI, URDU};
pub use lang::{Direction, Language, all_languages};
pub use model::{Prayer, Translation, Verse, Word};
pub use numeral::to_positional_numeral;
pub use reference::{ReferenceError, VerseRange, quran_url};
pub use render::Markup;
pub use stage::{NormalizeSukun, TrimTrailingFormat};
pub use view::{DisplayOptions, PrayerView, compose_prayer};
pub use waqf::{PauseSplit, extract_pause_mark};

use std::borrow::Cow;

/// Replace the decorative IndoPak sukun with the standard one.
///
/// ```
/// assert_eq!(tilawah::normalize_script("قُل\u{06E1}"), "قُل\u{0652}");
/// ```
pub fn normalize_script(text: &str) -> Cow<'_, str> {
    use stage::Stage;
    NormalizeSukun.apply(Cow::Borrowed(text))
}

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
