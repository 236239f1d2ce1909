use std::{borrow::Cow, hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tilawah::{
    Composer, ENGLISH, Translation, Verse, Word, extract_pause_mark, normalize_script,
    profile::preset::indopak_line, to_positional_numeral,
};

const LINES: &[(&str, &str)] = &[
    ("clean", "رَبَّنَا اٰتِنَا فِى الدُّنيَا حَسَنَةً"),
    ("sukun", "قُل\u{06E1} هُوَ اللّٰهُ اَحَدٌ\u{06DA}"),
    ("trailing", "وَالضُّحَىٰ\u{06D9}\u{200F} \u{FEFF}"),
    (
        "long",
        "وَمِن\u{06E1}هُم\u{06E1} مَّن\u{06E1} يَّقُو\u{06E1}لُ رَبَّنَاۤ اٰتِنَا فِى الدُّن\u{06E1}يَا حَسَنَةً وَّفِى الاٰخِرَةِ حَسَنَةً وَّقِنَا عَذَابَ النَّارِ\u{06D6}",
    ),
];

fn passage(len: u32) -> Vec<Verse> {
    (1..=len)
        .map(|n| Verse {
            verse_key: format!("2:{n}"),
            verse_number: n,
            script_text: LINES[n as usize % LINES.len()].1.to_string(),
            is_focal: n % 3 != 0,
            words: (0..6)
                .map(|i| Word {
                    script_text: format!("كَلِم\u{06E1}ة{i}"),
                    translation: "word".into(),
                    transliteration: "kalima".into(),
                })
                .collect(),
            translations: [(
                "english".to_string(),
                Translation {
                    text: "Our Lord, give us good in this world".into(),
                    translator: "Sahih International".into(),
                },
            )]
            .into_iter()
            .collect(),
        })
        .collect()
}

fn text_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    let line = indopak_line();

    for &(label, text) in LINES {
        let mut zero_copy_hits = 0usize;
        let mut total = 0usize;
        group.bench_function(BenchmarkId::new("normalize_script", label), |b| {
            b.iter(|| {
                total += 1;
                let out = normalize_script(black_box(text));
                if matches!(out, Cow::Borrowed(_)) {
                    zero_copy_hits += 1;
                }
                out
            })
        });
        println!("   ZERO-COPY {zero_copy_hits}/{total}");

        group.bench_function(BenchmarkId::new("extract_pause_mark", label), |b| {
            b.iter(|| extract_pause_mark(black_box(text)))
        });
        group.bench_function(BenchmarkId::new("indopak_line", label), |b| {
            b.iter(|| line.run_str(black_box(text)))
        });
    }

    group.bench_function("numeral/286", |b| {
        b.iter(|| to_positional_numeral(black_box(286)))
    });
    group.finish();
}

fn compose_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let composer = Composer::indopak();

    for len in [1u32, 7, 40] {
        let verses = passage(len);
        group.bench_with_input(BenchmarkId::new("continuous", len), &verses, |b, v| {
            b.iter(|| composer.continuous(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("word_by_word", len), &verses, |b, v| {
            b.iter(|| composer.word_by_word(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("translation", len), &verses, |b, v| {
            b.iter(|| composer.translation_group(black_box(v), ENGLISH))
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(2))
        .warm_up_time(Duration::from_secs(1))
        .noise_threshold(0.015)
        .significance_level(0.05);
    targets = text_ops, compose_ops
);
criterion_main!(benches);
