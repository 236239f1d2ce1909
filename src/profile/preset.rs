use crate::{
    NormalizeSukun, TrimTrailingFormat,
    process::{DynamicProcess, Process},
    profile::Profile,
};

/// Names accepted by [`by_name`].
pub const PROFILE_NAMES: &[&str] = &["display", "line", "raw"];

/// Display normalization for IndoPak glyph runs (verse bodies, single words).
pub fn indopak_display() -> Profile<impl Process> {
    Profile::builder("indopak_display")
        .add_stage(NormalizeSukun)
        .build()
}

/// Display normalization for a raw verse line that still carries trailing
/// formatting characters.
pub fn indopak_line() -> Profile<impl Process> {
    Profile::builder("indopak_line")
        .add_stage(TrimTrailingFormat)
        .add_stage(NormalizeSukun)
        .build()
}

/// Runtime-assembled profile for callers that pick normalization by name.
///
/// `display` and `line` match [`indopak_display`] and [`indopak_line`];
/// `raw` runs no stages and keeps the glyphs exactly as stored.
pub fn by_name(name: &str) -> Option<Profile<DynamicProcess>> {
    let profile = match name {
        "display" => Profile::plugin_builder("indopak_display")
            .add_stage(NormalizeSukun)
            .build(),
        "line" => Profile::plugin_builder("indopak_line")
            .add_stage(TrimTrailingFormat)
            .add_stage(NormalizeSukun)
            .build(),
        "raw" => Profile::plugin_builder("raw").build(),
        _ => return None,
    };
    Some(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_only_substitutes() {
        let p = indopak_display();
        assert_eq!(p.name(), "indopak_display");
        assert_eq!(p.run_str("قُل\u{06E1} "), "قُلْ ");
    }

    #[test]
    fn line_trims_then_substitutes() {
        let p = indopak_line();
        assert_eq!(p.run_str("قُل\u{06E1}\u{200B}\u{FEFF}"), "قُلْ");
    }

    #[test]
    fn runtime_profiles_match_static_presets() {
        let inputs = ["", "قُل\u{06E1}", "قُل\u{06E1}\u{200B}\u{FEFF}", "plain"];
        let display = by_name("display").unwrap();
        let line = by_name("line").unwrap();
        assert_eq!(display.name(), "indopak_display");
        for input in inputs {
            assert_eq!(display.run_str(input), indopak_display().run_str(input));
            assert_eq!(line.run_str(input), indopak_line().run_str(input));
        }
    }

    #[test]
    fn raw_profile_keeps_glyphs() {
        let raw = by_name("raw").unwrap();
        assert_eq!(raw.run_str("قُل\u{06E1} "), "قُل\u{06E1} ");
    }

    #[test]
    fn every_listed_name_resolves() {
        for name in PROFILE_NAMES {
            assert!(by_name(name).is_some(), "{name}");
        }
        assert!(by_name("nfc").is_none());
    }
}
