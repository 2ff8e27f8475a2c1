//! Normalization stage abstraction.
//!
//! A name is canonicalized by running it through an ordered list of stages.
//! Every stage is a pure `Cow<str>` transformation: when `needs_apply`
//! returns `false` the text is passed through untouched and nothing is
//! allocated, so already-canonical names (the common case for catalog
//! entries typed in lowercase ASCII) cost a scan and no more.
//!
//! The order used by [`Normalizer::country_names`](crate::Normalizer::country_names)
//! is significant for idempotence:
//!
//! 1. [`LowerCase`] – before decomposition, so that case mappings which
//!    produce combining marks (`İ` → `i̇`) are decomposed and stripped later.
//! 2. [`StripSeparators`] – before decomposition, so that removing a
//!    separator can never leave two combining marks out of canonical order.
//! 3. [`Decompose`] – Unicode NFD.
//! 4. [`RemoveDiacritics`] – drops U+0300..=U+036F.

pub mod decompose;
pub mod lower_case;
pub mod remove_diacritics;
pub mod strip_separators;

use std::borrow::Cow;

pub use decompose::Decompose;
pub use lower_case::LowerCase;
pub use remove_diacritics::RemoveDiacritics;
pub use strip_separators::StripSeparators;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in logs and debugging output.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// `needs_apply` would have returned `false`.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}
