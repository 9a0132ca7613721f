//! Path values and the path-like capability
//!
//! A [`PathValue`] is one candidate argument to an open-like call. The
//! wrapped variants carry a [`PathWrapper`], whose only capability is the
//! [`PathLike::fspath`] rendering.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

// ============================================================================
// Rendering
// ============================================================================

/// Borrowed filesystem path representation, either raw bytes or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FsPath<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl FsPath<'_> {
    /// Content length: bytes for byte paths, chars for text paths.
    pub fn len(&self) -> usize {
        match self {
            FsPath::Bytes(b) => b.len(),
            FsPath::Text(t) => t.chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FsPath::Bytes(b) => b.is_empty(),
            FsPath::Text(t) => t.is_empty(),
        }
    }

    pub fn is_bytes(&self) -> bool {
        matches!(self, FsPath::Bytes(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FsPath::Text(_))
    }

    /// Converts to an OS string. Bytes map losslessly on Unix and through
    /// UTF-8 replacement elsewhere.
    pub fn to_os_string(&self) -> OsString {
        match self {
            FsPath::Bytes(b) => bytes_to_os_string(b),
            FsPath::Text(t) => OsString::from(*t),
        }
    }

    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(self.to_os_string())
    }
}

#[cfg(unix)]
fn bytes_to_os_string(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::OsStr::from_bytes(bytes).to_os_string()
}

#[cfg(not(unix))]
fn bytes_to_os_string(bytes: &[u8]) -> OsString {
    OsString::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Anything that can render itself as a filesystem path representation.
pub trait PathLike {
    fn fspath(&self) -> FsPath<'_>;
}

/// Renders `value` as a filesystem path representation.
pub fn fspath<P: PathLike + ?Sized>(value: &P) -> FsPath<'_> {
    value.fspath()
}

impl PathLike for str {
    fn fspath(&self) -> FsPath<'_> {
        FsPath::Text(self)
    }
}

impl PathLike for String {
    fn fspath(&self) -> FsPath<'_> {
        FsPath::Text(self)
    }
}

impl PathLike for [u8] {
    fn fspath(&self) -> FsPath<'_> {
        FsPath::Bytes(self)
    }
}

impl PathLike for Vec<u8> {
    fn fspath(&self) -> FsPath<'_> {
        FsPath::Bytes(self)
    }
}

// ============================================================================
// Wrapper
// ============================================================================

/// Minimal path-like object around byte or text content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathWrapper {
    Bytes(Vec<u8>),
    Text(String),
}

impl PathLike for PathWrapper {
    fn fspath(&self) -> FsPath<'_> {
        match self {
            PathWrapper::Bytes(b) => FsPath::Bytes(b),
            PathWrapper::Text(t) => FsPath::Text(t),
        }
    }
}

// ============================================================================
// Path values
// ============================================================================

/// Representation variant of a [`PathValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variant {
    Bytes,
    Text,
    WrappedBytes,
    WrappedText,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Bytes,
        Variant::Text,
        Variant::WrappedBytes,
        Variant::WrappedText,
    ];

    pub const PRIMITIVE: [Variant; 2] = [Variant::Bytes, Variant::Text];

    pub fn is_wrapped(self) -> bool {
        matches!(self, Variant::WrappedBytes | Variant::WrappedText)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Bytes => "bytes",
            Variant::Text => "text",
            Variant::WrappedBytes => "wrapped-bytes",
            Variant::WrappedText => "wrapped-text",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated candidate argument to an open-like call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathValue {
    Bytes(Vec<u8>),
    Text(String),
    Wrapped(PathWrapper),
}

impl PathValue {
    pub fn variant(&self) -> Variant {
        match self {
            PathValue::Bytes(_) => Variant::Bytes,
            PathValue::Text(_) => Variant::Text,
            PathValue::Wrapped(PathWrapper::Bytes(_)) => Variant::WrappedBytes,
            PathValue::Wrapped(PathWrapper::Text(_)) => Variant::WrappedText,
        }
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self, PathValue::Wrapped(_))
    }

    pub fn content_len(&self) -> usize {
        self.fspath().len()
    }

    pub fn wrapped_bytes(bytes: Vec<u8>) -> Self {
        PathValue::Wrapped(PathWrapper::Bytes(bytes))
    }

    pub fn wrapped_text(text: String) -> Self {
        PathValue::Wrapped(PathWrapper::Text(text))
    }
}

/// Primitive variants render as themselves; wrapped ones delegate to the
/// wrapper.
impl PathLike for PathValue {
    fn fspath(&self) -> FsPath<'_> {
        match self {
            PathValue::Bytes(b) => FsPath::Bytes(b),
            PathValue::Text(t) => FsPath::Text(t),
            PathValue::Wrapped(w) => w.fspath(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants() {
        assert_eq!(PathValue::Bytes(vec![1]).variant(), Variant::Bytes);
        assert_eq!(PathValue::Text("a".into()).variant(), Variant::Text);
        assert_eq!(PathValue::wrapped_bytes(vec![]).variant(), Variant::WrappedBytes);
        assert_eq!(PathValue::wrapped_text(String::new()).variant(), Variant::WrappedText);
        assert!(Variant::ALL.iter().filter(|v| v.is_wrapped()).count() == 2);
    }

    #[test]
    fn test_empty_text_is_valid() {
        let value = PathValue::Text(String::new());
        let rendered = fspath(&value);

        assert_eq!(rendered, FsPath::Text(""));
        assert!(rendered.is_empty());
        assert_eq!(value.content_len(), 0);
        assert!(rendered.to_path_buf().as_os_str().is_empty());
    }

    #[test]
    fn test_wrapper_delegates() {
        let value = PathValue::wrapped_bytes(b"a/b".to_vec());
        assert_eq!(value.fspath(), FsPath::Bytes(b"a/b"));
        assert!(value.fspath().is_bytes());

        let value = PathValue::wrapped_text("déjà".to_string());
        assert_eq!(value.fspath(), FsPath::Text("déjà"));
        assert_eq!(value.content_len(), 4);
    }

    #[test]
    fn test_primitive_impls() {
        assert!(fspath("x").is_text());
        assert!(fspath(&b"x"[..]).is_bytes());
        assert_eq!(fspath(&vec![0u8, 1, 2]).len(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_bytes_survive_on_unix() {
        use std::os::unix::ffi::OsStrExt;

        let bytes = [b'a', 0xFF, b'b'];
        let os = FsPath::Bytes(&bytes).to_os_string();
        assert_eq!(os.as_bytes(), &bytes);
    }
}
