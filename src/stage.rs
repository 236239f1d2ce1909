//! Core normalization stage abstraction.
//!
//! A stage is one total, deterministic text transformation. Stages never fail:
//! verse text that a stage does not recognise passes through untouched. The
//! `Cow<str>` contract lets a pipeline of stages stay zero-copy when the
//! input is already clean, which is the common case for word glosses and for
//! verses without decorative glyphs.

pub mod normalize_sukun;
pub mod trim_trailing_format;

pub use normalize_sukun::NormalizeSukun;
pub use trim_trailing_format::TrimTrailingFormat;

use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in tracing output.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Must return `true` iff `apply` would change `text`.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Returns the input unchanged (and
    /// unallocated) when there is nothing to do.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}
