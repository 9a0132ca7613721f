//! fspaths
//!
//! Property-based testing strategies producing values a path-taking `open`
//! accepts: raw bytes, text, and [`PathLike`] wrappers around either.
//!
//! # Usage
//!
//! ```rust
//! use fspaths::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn rendering_keeps_content(path in paths(true)) {
//!         prop_assert_eq!(fspath(&path).len(), path.content_len());
//!     }
//! }
//! ```

pub mod error;
pub mod params;
pub mod path;
pub mod reports;
pub mod sampler;
pub mod strategy;

pub use error::{Result, SampleError};
pub use params::PathParams;
pub use path::{fspath, FsPath, PathLike, PathValue, PathWrapper, Variant};
pub use strategy::{path_bytes, path_text, paths, paths_with};

pub mod prelude {
    pub use crate::params::PathParams;
    pub use crate::path::{fspath, FsPath, PathLike, PathValue, PathWrapper, Variant};
    pub use crate::sampler::{SampleConfig, Sampler, VariantTally};
    pub use crate::strategy::{path_bytes, path_text, paths, paths_with};
    pub use proptest::prelude::*;
}

// Re-export proptest for convenience
pub use proptest;
