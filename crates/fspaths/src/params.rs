//! Generator parameters

use proptest::collection::SizeRange;

/// Parameters for [`paths_with`](crate::strategy::paths_with) and the
/// [`Arbitrary`](proptest::arbitrary::Arbitrary) implementation for
/// [`PathValue`](crate::path::PathValue).
///
/// By default wrapper variants are enabled, contents hold 0 to 99 bytes or
/// chars, and NUL is left in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathParams {
    /// Whether [`PathWrapper`](crate::path::PathWrapper) variants may be produced.
    allow_pathlike: bool,
    /// Content length, in bytes for byte content and chars for text.
    size: SizeRange,
    /// Replace NUL with a space in generated content.
    nul_free: bool,
}

impl Default for PathParams {
    fn default() -> Self {
        Self {
            allow_pathlike: true,
            size: (0..100).into(),
            nul_free: false,
        }
    }
}

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_pathlike(&self) -> bool {
        self.allow_pathlike
    }

    pub fn with_pathlike(mut self, allow: bool) -> Self {
        self.allow_pathlike = allow;
        self
    }

    pub fn size(&self) -> SizeRange {
        self.size.clone()
    }

    /// Sets the content length range.
    pub fn with_size(mut self, size: impl Into<SizeRange>) -> Self {
        self.size = size.into();
        self
    }

    pub fn nul_free(&self) -> bool {
        self.nul_free
    }

    /// Replaces NUL bytes and chars with a space, so an `open` call never
    /// rejects the value as invalid input.
    pub fn with_nul_free(mut self, nul_free: bool) -> Self {
        self.nul_free = nul_free;
        self
    }
}
