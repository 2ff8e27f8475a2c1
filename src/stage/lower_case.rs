use crate::stage::Stage;
use std::borrow::Cow;

/// Simple Unicode lowercasing, no locale tailoring.
///
/// Zero-copy when the text has nothing to lowercase.
pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_uppercase());
        }
        text.chars().any(|c| c.to_lowercase().ne(std::iter::once(c)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        if text.is_ascii() {
            let mut owned = text.into_owned();
            owned.make_ascii_lowercase();
            return Cow::Owned(owned);
        }
        Cow::Owned(text.to_lowercase())
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for LowerCase {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("FRANCE", "france"), ("ÉGYPTE", "égypte")]
    }
}
