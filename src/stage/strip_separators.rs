use crate::stage::Stage;
use std::borrow::Cow;

/// Characters that never distinguish two country names.
///
/// Only plain ASCII forms are stripped; typographic variants (`’`, `–`) are
/// left alone and simply fail to match.
pub const SEPARATORS: [char; 5] = ['-', ' ', '\'', '(', ')'];

#[inline(always)]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Removes hyphens, spaces, apostrophes and parentheses.
///
/// `"Guinea-Bissau"` → `"GuineaBissau"`, `"Côte d'Ivoire"` → `"CôtedIvoire"`,
/// `"Cocos (Keeling) Islands"` → `"CocosKeelingIslands"`.
pub struct StripSeparators;

impl Stage for StripSeparators {
    fn name(&self) -> &'static str {
        "strip_separators"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.bytes().any(|b| is_separator(b as char))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(text.chars().filter(|&c| !is_separator(c)).collect())
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for StripSeparators {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("Guinea-Bissau", "GuineaBissau"), ("(a) b", "ab")]
    }
}
