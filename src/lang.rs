pub mod data;

pub use data::{FRA, HUN, LANG_TABLE, NLD, all_langs};

/// Country code (upper-case) → localized display name.
pub type NameTable = phf::Map<&'static str, &'static str>;

/// A language the game can be played in.
///
/// `code` is the ISO 639-1 primary subtag used as the key of the name
/// tables (`"fr"`, `"hu"`, `"nl"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Built-in localized names, `None` for the default language.
    #[inline]
    pub fn names(&self) -> Option<&'static NameTable> {
        LANG_TABLE.get(self.code).copied()
    }

    /// Looks a language up by tag, ignoring case and region (`"fr-FR"`, `"FR"`).
    pub fn from_code(tag: &str) -> Option<Lang> {
        let primary = primary_subtag(tag);
        all_langs().iter().copied().find(|l| l.code == primary)
    }
}

/// English carries the catalog's default names and has no table of its own.
pub const ENG: Lang = Lang {
    code: "en",
    name: "English",
};

pub const DEFAULT_LANG: Lang = ENG;

/// `"fr-FR"` → `"fr"`, `"NL_be"` → `"nl"`.
pub fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}
