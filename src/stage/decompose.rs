use crate::stage::Stage;
use icu_normalizer::{DecomposingNormalizer, DecomposingNormalizerBorrowed};
use std::{borrow::Cow, sync::LazyLock};

// ── ICU4X ──
static ICU4X_NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizer::new_nfd);

/// Unicode Normalization Form D (Canonical Decomposition).
///
/// Precomposed letters are split into base letter plus combining marks
/// (`é` → `e` + U+0301) so that [`RemoveDiacritics`](super::RemoveDiacritics)
/// can drop the marks. Compatibility characters (ligatures, fractions) are
/// preserved.
#[derive(Default, Clone, Copy)]
pub struct Decompose;

impl Stage for Decompose {
    fn name(&self) -> &'static str {
        "nfd"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_ascii() && !ICU4X_NFD.is_normalized(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(ICU4X_NFD.normalize(text.as_ref()).into_owned())
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for Decompose {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("é", "e\u{0301}"), ("Ñ", "N\u{0303}")]
    }
}
