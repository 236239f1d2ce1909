use crate::lang::{Direction, Language};

use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates constants, render order and lookup table from one list
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $ident:ident, $key:literal, $tag:literal, $name:literal,
        dir: $dir:ident,
        translator: $translator:literal
    );* $(;)?) => {
        $(
            pub const $ident: Language = Language {
                key: $key,
                tag: $tag,
                name: $name,
                direction: Direction::$dir,
                translator: $translator,
            };
        )*

        /// Render order: translation groups appear in this order.
        pub static ALL_LANGUAGES: &[Language] = &[$($ident),*];

        pub static LANG_TABLE: Map<&'static str, Language> = phf_map! {
            $( $key => $ident, )*
        };
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Direction follows the script: Urdu is written in Perso-Arabic (RTL),
//    Hindi in Devanagari (LTR).
// ---------------------------------------------------------------------------
define_languages! {
    ENGLISH, "english", "en", "English",
        dir: Ltr,
        translator: "Sahih International";
    URDU, "urdu", "ur", "Urdu",
        dir: Rtl,
        translator: "Dr. Israr Ahmad";
    HINDI, "hindi", "hi", "Hindi",
        dir: Ltr,
        translator: "Maulana Azizul Haque al-Umari";
}
