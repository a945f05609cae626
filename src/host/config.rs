//! Where the callers find the native library.

use std::path::PathBuf;

/// Environment variable selecting a dynamically loaded library.
pub const LIBRARY_ENV: &str = "FFI_GREET_LIBRARY";

/// Source of the exported symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LibrarySource {
    /// Symbols linked into the running binary.
    #[default]
    Linked,
    /// A `cdylib` loaded at runtime; `None` searches by the default name.
    Dynamic { path: Option<PathBuf> },
}

/// Host-side configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    pub library: LibrarySource,
}

impl HostConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var_os(LIBRARY_ENV).map(PathBuf::from))
    }

    /// Unset means linked, empty means search by name, anything else is a path.
    fn from_value(value: Option<PathBuf>) -> Self {
        let library = match value {
            None => LibrarySource::Linked,
            Some(path) if path.as_os_str().is_empty() => LibrarySource::Dynamic { path: None },
            Some(path) => LibrarySource::Dynamic { path: Some(path) },
        };
        Self { library }
    }
}
