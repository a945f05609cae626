//! Host side of the boundary.
//!
//! Resolves the exported symbols, owns the buffers that cross the boundary,
//! and turns null or malformed results into [`HostError`]s. Nothing here
//! calls the library except through its C ABI function pointers.

pub mod bindings;
pub mod config;
pub mod error;
pub mod library;
pub mod strings;

pub use bindings::{greet_name, Bindings};
pub use config::{HostConfig, LibrarySource};
pub use error::HostError;
pub use library::NativeLibrary;
pub use strings::{BoundaryString, NativeString, Ownership};

/// Loads the library a configuration points at, if any.
///
/// `None` means the linked symbols should be used.
pub fn open_configured(config: &HostConfig) -> Result<Option<NativeLibrary>, HostError> {
    match &config.library {
        LibrarySource::Linked => Ok(None),
        LibrarySource::Dynamic { path: Some(path) } => NativeLibrary::open(path).map(Some),
        LibrarySource::Dynamic { path: None } => NativeLibrary::find_default().map(Some),
    }
}

/// Binds either the loaded library or, without one, the linked symbols.
pub fn bind(library: Option<&NativeLibrary>) -> Result<Bindings<'_>, HostError> {
    match library {
        Some(library) => Bindings::load(library),
        None => Ok(Bindings::linked()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_linked_config_loads_nothing() {
        let library = open_configured(&HostConfig::default()).unwrap();
        assert!(library.is_none());
        assert_eq!(bind(library.as_ref()).unwrap().add(4, 5), 9);
    }

    #[test]
    fn test_missing_dynamic_path() {
        let config = HostConfig {
            library: LibrarySource::Dynamic {
                path: Some(PathBuf::from("/nonexistent/libffi_greet.so")),
            },
        };
        assert!(matches!(open_configured(&config), Err(HostError::Load { .. })));
    }
}
