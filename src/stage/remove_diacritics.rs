//! src/stage/remove_diacritics.rs
//!
//! Removes combining diacritical marks left behind by NFD.

use crate::stage::Stage;
use std::borrow::Cow;

/// The Combining Diacritical Marks block.
pub const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

#[inline(always)]
pub fn is_combining_mark(c: char) -> bool {
    COMBINING_MARKS.contains(&c)
}

/// Drops every character in U+0300..=U+036F.
///
/// Only meaningful after [`Decompose`](super::Decompose): on precomposed
/// input (`é`) there is nothing to remove. Letters without a canonical
/// decomposition keep their shape, so `Łódź` becomes `Łodz`.
pub struct RemoveDiacritics;

impl Stage for RemoveDiacritics {
    fn name(&self) -> &'static str {
        "remove_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_empty() || text.is_ascii() {
            return false;
        }
        text.chars().any(is_combining_mark)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(text.chars().filter(|&c| !is_combining_mark(c)).collect())
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for RemoveDiacritics {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("e\u{0301}", "e"), ("a\u{0300}\u{0308}b", "ab")]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(RemoveDiacritics);
    }
}

// ============================================================================
// Tests
// ============================================================================
