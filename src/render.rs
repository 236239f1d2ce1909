//! HTML markup for composed verses.
//!
//! Every piece of dataset text goes through `html_escape`; class names and
//! attribute values produced here are static. Each composed type renders
//! through the [`Markup`] wrapper's `Display` impl.

use crate::{
    compose::{AyahMarker, ContinuousText, TranslationGroup, VerseSpan, WordBlock},
    view::{ArabicSection, Footer, PrayerView},
};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::{self, Display, Formatter};

/// Renders the wrapped value as an HTML fragment.
pub struct Markup<'r, T: ?Sized>(pub &'r T);

fn dimmed_class(base: &str, dimmed: bool) -> String {
    if dimmed {
        format!("{base} dimmed")
    } else {
        base.to_string()
    }
}

impl Display for Markup<'_, AyahMarker<'_>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let m = self.0;
        write!(
            f,
            r#"<span class="ayah-marker" role="img" aria-label="{}">"#,
            attr(&m.aria_label())
        )?;
        if m.has_pause_mark() {
            write!(f, r#"<span class="ayah-waqf" aria-hidden="true">{}</span>"#, text(m.pause_mark))?;
        }
        write!(
            f,
            r#"<span class="ayah-end" aria-hidden="true">{}</span><span class="ayah-num" aria-hidden="true">{}</span></span>"#,
            m.numeral,
            m.plain_number()
        )
    }
}

impl Display for Markup<'_, VerseSpan<'_>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let span = self.0;
        write!(
            f,
            r#"<span class="{}" data-verse="{}">{} {}</span>"#,
            dimmed_class("verse", span.dimmed),
            attr(span.verse_key),
            text(&span.text),
            Markup(&span.marker)
        )
    }
}

impl Display for Markup<'_, ContinuousText<'_>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let flow = self.0;
        write!(f, r#"<p class="arabic" dir="{}" lang="ar">"#, flow.direction())?;
        for (i, span) in flow.spans.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", Markup(span))?;
        }
        f.write_str("</p>")
    }
}

impl Display for Markup<'_, WordBlock<'_>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            WordBlock::Word(w) => write!(
                f,
                concat!(
                    r#"<div class="{}" role="group" aria-label="{}">"#,
                    r#"<span class="wbw-arabic" lang="ar">{}</span>"#,
                    r#"<span class="wbw-transliteration">{}</span>"#,
                    r#"<span class="wbw-translation">{}</span></div>"#
                ),
                dimmed_class("wbw-word", w.dimmed),
                attr(&w.aria_label()),
                text(&w.script_text),
                text(w.transliteration),
                text(w.translation),
            ),
            WordBlock::VerseEnd(end) => write!(
                f,
                r#"<div class="{}">{}</div>"#,
                dimmed_class("wbw-word wbw-verse-end", end.dimmed),
                Markup(&end.marker)
            ),
        }
    }
}

impl Display for Markup<'_, [WordBlock<'_>]> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(r#"<div class="wbw" dir="rtl">"#)?;
        for block in self.0 {
            write!(f, "{}", Markup(block))?;
        }
        f.write_str("</div>")
    }
}

impl Display for Markup<'_, TranslationGroup<'_>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let group = self.0;
        write!(
            f,
            r#"<div class="translation translation-{}" dir="{}" lang="{}"><div class="translation-text">"#,
            group.language.key(),
            group.direction(),
            group.language.tag()
        )?;
        for (i, entry) in group.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(
                f,
                r#"<span class="{}"><span class="verse-ref" aria-hidden="true">({}) </span>{}</span>"#,
                dimmed_class("translation-verse", entry.dimmed),
                text(entry.verse_key),
                text(entry.text)
            )?;
        }
        write!(
            f,
            r#"</div><p class="translator">— {}</p></div>"#,
            text(group.translator)
        )
    }
}

impl Display for Markup<'_, Footer> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let footer = self.0;
        f.write_str(r#"<div class="verse-footer"><span class="verse-ref">"#)?;
        if let Some(name) = &footer.surah_name {
            write!(f, r#"<span class="surah">{}</span>"#, text(name))?;
        }
        if !footer.verse_range.is_empty() {
            write!(f, r#"<span class="range"> [{}]</span>"#, text(&footer.verse_range))?;
        }
        f.write_str("</span>")?;
        if let Some(link) = &footer.link {
            write!(
                f,
                r#"<a class="quran-link" href="{}" target="_blank" rel="noopener noreferrer">Open on Quran.com ↗</a>"#,
                attr(link)
            )?;
        }
        f.write_str("</div>")
    }
}

impl Display for Markup<'_, PrayerView<'_>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let prayer = view.prayer;
        write!(
            f,
            r#"<article class="prayer" data-prayer-id="{}"><h2>{}</h2>"#,
            attr(&prayer.id),
            text(&prayer.title)
        )?;
        if !prayer.description.is_empty() {
            write!(f, r#"<p class="prayer-description">{}</p>"#, text(&prayer.description))?;
        }
        if let Some(note) = &prayer.partial_verse {
            write!(f, r#"<p class="partial-note"><strong>Note:</strong> {}</p>"#, text(note))?;
        }
        f.write_str(r#"<div class="arabic-section" aria-label="Quranic Arabic text">"#)?;
        match &view.arabic {
            ArabicSection::Continuous(flow) => write!(f, "{}", Markup(flow))?,
            ArabicSection::WordByWord(blocks) => write!(f, "{}", Markup(blocks.as_slice()))?,
        }
        f.write_str(r#"</div><div class="translations">"#)?;
        for group in &view.translations {
            write!(f, "{}", Markup(group))?;
        }
        f.write_str("</div>")?;
        if let Some(footer) = &view.footer {
            write!(f, "{}", Markup(footer))?;
        }
        f.write_str("</article>")
    }
}
