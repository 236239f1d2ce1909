use crate::stage::Stage;
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["بِسْمِ اللّٰهِ", "Hello World 123", " mixed عربي ", ""]
    }

    /// Samples that must pass through unchanged and unallocated.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "test123", "abc def", ""]
    }

    /// Input/output pairs with a known expected result.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies every universal contract.
///
/// 1. `zero_copy_when_no_changes`: untouched input comes back borrowed, same pointer
/// 2. `stage_is_idempotent`: applying twice yields the same result as once
/// 3. `needs_apply_is_accurate`: predicts exactly whether `apply` changes the text
/// 4. `handles_empty_string_and_ascii`
/// 5. `no_panic_on_mixed_scripts`
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

fn assert_same_borrow(input: &str, out: &Cow<'_, str>, stage: &str) {
    match out {
        Cow::Borrowed(s) => assert!(
            s.as_ptr() == input.as_ptr() && s.len() == input.len(),
            "stage `{stage}` re-sliced untouched input `{input}`"
        ),
        Cow::Owned(_) => panic!("stage `{stage}` allocated for untouched input `{input}`"),
    }
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        if !stage.needs_apply(input) {
            let out = stage.apply(Cow::Borrowed(input));
            assert_same_borrow(input, &out, stage.name());
        }
    }

    for &input in S::should_pass_through() {
        assert!(
            !stage.needs_apply(input),
            "stage `{}` wants to touch pass-through sample `{input}`",
            stage.name()
        );
        let out = stage.apply(Cow::Borrowed(input));
        assert_eq!(out.as_ref(), input);
        assert_same_borrow(input, &out, stage.name());
    }

    for &(input, expected) in S::should_transform() {
        let out = stage.apply(Cow::Borrowed(input));
        assert_eq!(out.as_ref(), expected, "stage `{}` on `{input}`", stage.name());
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    let inputs = S::samples()
        .iter()
        .chain(S::should_pass_through())
        .copied()
        .chain(S::should_transform().iter().map(|(i, _)| *i));
    for input in inputs {
        let once = stage.apply(Cow::Borrowed(input)).into_owned();
        let twice = stage.apply(Cow::Borrowed(once.as_str()));
        assert_eq!(once, twice, "`{}` not idempotent on `{input}`", stage.name());
        assert!(
            !stage.needs_apply(&once),
            "`{}` still wants to apply after one pass on `{input}`",
            stage.name()
        );
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    let must_not_touch = ["", "hello", "world123", " !@#"];
    for input in S::samples().iter().copied().chain(must_not_touch) {
        let predicted = stage.needs_apply(input);
        // Owned input so stages that re-slice are not mistaken for no-ops.
        let output = stage.apply(Cow::Owned(input.to_owned()));
        let actually_changes = output != input;
        assert_eq!(
            predicted,
            actually_changes,
            "needs_apply() mismatch for stage `{}` on `{input}`\n\
             predicted: {predicted}\n\
             actual   : {actually_changes} (output = {output:?})",
            stage.name(),
        );
    }
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: S) {
    assert_eq!(stage.apply(Cow::Borrowed("")).as_ref(), "");
    let ascii = "hello world 123 !@#";
    assert_eq!(stage.apply(Cow::Borrowed(ascii)).as_ref(), ascii);
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let _ = stage.apply(Cow::Borrowed(
        "Hello ॐ русский اُرْدُو \u{06E1}\u{06D6}\u{E01C} 简体中文 \u{200F}",
    ));
}
