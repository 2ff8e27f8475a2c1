use crate::stage::Stage;
use std::borrow::Cow;

/// Stages opt into the shared contract suite through this trait.
pub trait StageTestConfig: Stage + Sized {
    /// Mixed samples; some trigger the stage, some do not.
    fn samples() -> &'static [&'static str] {
        &[
            "France",
            " déjà-vu ",
            "CÔTE D'IVOIRE",
            "Cocos (Keeling) Islands",
            "İzmir",
            "Łódź",
            "e\u{0301}",
            "",
        ]
    }

    /// Inputs the stage must return borrowed and unchanged.
    fn should_pass_through() -> &'static [&'static str] {
        &["peru", "chile", "fiji123", ""]
    }

    /// Known input/output pairs.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Runs every contract check against `$stage`:
///
/// 1. no allocation when nothing changes, including on a second pass
/// 2. `apply` is idempotent
/// 3. `needs_apply` predicts exactly whether `apply` changes the text
/// 4. the empty string survives
/// 5. mixed-script input does not panic
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        let mut text = Cow::Borrowed(input);

        if stage.needs_apply(&text) {
            text = stage.apply(text);
            assert!(matches!(text, Cow::Owned(_)), "`{}` on `{input}`", stage.name());
        } else {
            text = stage.apply(text);
            assert_eq!(input as *const str, text.as_ref() as *const str);
        }

        // second pass has nothing left to do
        let before = text.as_ref() as *const str;
        assert!(
            !stage.needs_apply(&text),
            "`{}` still wants to run on `{text}`",
            stage.name()
        );
        let text = stage.apply(text);
        assert_eq!(before, text.as_ref() as *const str);
    }

    for &input in S::should_pass_through() {
        let text = stage.apply(Cow::Borrowed(input));
        assert_eq!(text, input);
        assert!(
            matches!(text, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()),
            "zero-copy violated for `{}` on `{input}`",
            stage.name()
        );
    }

    for &(input, expected) in S::should_transform() {
        assert_eq!(stage.apply(Cow::Borrowed(input)), expected);
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        let once = stage.apply(Cow::Borrowed(input));
        let twice = stage.apply(once.clone());
        assert_eq!(once, twice, "`{}` not idempotent on `{input}`", stage.name());
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    let inputs = S::samples().iter().chain(S::should_pass_through());
    for &input in inputs {
        let predicted = stage.needs_apply(input);
        let output = stage.apply(Cow::Owned(input.to_owned()));
        let changed = output != input;
        assert_eq!(
            predicted,
            changed,
            "needs_apply() mismatch for `{}` on `{input}` (output = {output:?})",
            stage.name()
        );
    }
}

pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    assert!(!stage.needs_apply(""));
    assert_eq!(stage.apply(Cow::Borrowed("")), "");
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let _ = stage.apply(Cow::Borrowed(
        "Magyarország 日本 Россия Türkiye مصر Ελλάδα ﬁ ½",
    ));
}
