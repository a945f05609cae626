//! Errors raised on the host side of the boundary.

use std::path::PathBuf;

/// Failures while resolving the library or crossing the boundary.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The input could not be copied into a null-terminated buffer.
    #[error("input contains an interior NUL byte: {0}")]
    InteriorNul(#[from] std::ffi::NulError),

    /// The library returned null instead of a buffer.
    #[error("`{symbol}` returned a null pointer")]
    NullResult { symbol: &'static str },

    /// The library returned a buffer that is not valid UTF-8.
    #[error("`{symbol}` returned invalid UTF-8: {source}")]
    InvalidUtf8 {
        symbol: &'static str,
        #[source]
        source: std::str::Utf8Error,
    },

    /// No library file matched in any search path.
    #[error("library `{0}` not found in search paths")]
    LibraryNotFound(String),

    /// The dynamic loader rejected the library file.
    #[error("failed to load library {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// An expected symbol is missing from the loaded library.
    #[error("symbol `{symbol}` not found in {}", .path.display())]
    SymbolNotFound {
        path: PathBuf,
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_interior_nul_from() {
        let err: HostError = CString::new("a\0b").unwrap_err().into();
        assert!(matches!(err, HostError::InteriorNul(_)));
        assert!(err.to_string().contains("interior NUL"));
    }

    #[test]
    fn test_null_result_message() {
        let err = HostError::NullResult { symbol: "greet" };
        assert_eq!(err.to_string(), "`greet` returned a null pointer");
    }

    #[test]
    fn test_library_not_found_message() {
        let err = HostError::LibraryNotFound("ffi_greet".to_string());
        assert_eq!(err.to_string(), "library `ffi_greet` not found in search paths");
    }
}
