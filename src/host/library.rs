//! Dynamic loading of the native library.
//!
//! Provides cross-platform loading of the `cdylib` build using `libloading`,
//! with platform-specific file naming and a small list of search paths.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use libloading::Library;
use tracing::debug;

use crate::host::error::HostError;

/// Base name of the library; the platform adds prefix and extension.
pub const LIBRARY_NAME: &str = "ffi_greet";

/// A loaded native library.
///
/// # Safety
///
/// Loading a dynamic library runs its initialization code in this process.
/// Only load libraries you trust.
#[derive(Debug)]
pub struct NativeLibrary {
    library: Library,
    path: PathBuf,
}

impl NativeLibrary {
    /// Loads the library at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HostError> {
        let path = path.as_ref().to_path_buf();
        // SAFETY: the library's initializers are trusted; see type docs.
        let library = unsafe { Library::new(&path) }.map_err(|source| HostError::Load {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "native library loaded");
        Ok(Self { library, path })
    }

    /// Loads `name` from the first search path that has it.
    pub fn find(name: &str, search_paths: &[PathBuf]) -> Result<Self, HostError> {
        let path = resolve_library_path(name, search_paths)
            .ok_or_else(|| HostError::LibraryNotFound(name.to_string()))?;
        Self::open(path)
    }

    /// Loads this crate's own `cdylib` from the default search paths.
    pub fn find_default() -> Result<Self, HostError> {
        Self::find(LIBRARY_NAME, &default_search_paths())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up `symbol` and copies out its value.
    ///
    /// # Safety
    ///
    /// `T` must match the symbol's real type. For function pointers the copy
    /// must not be called after this library is dropped.
    pub(crate) unsafe fn symbol<T: Copy>(&self, symbol: &'static str) -> Result<T, HostError> {
        let found = self
            .library
            .get::<T>(symbol.as_bytes())
            .map_err(|source| HostError::SymbolNotFound {
                path: self.path.clone(),
                symbol,
                source,
            })?;
        Ok(*found)
    }
}

/// Platform file name for a library, e.g. `libffi_greet.so` or `ffi_greet.dll`.
pub fn library_file_name(name: &str) -> OsString {
    libloading::library_filename(name)
}

/// Search order: the executable's directory, its parent (Cargo puts test
/// executables in `deps/`), then the current working directory.
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        if let Some(parent) = exe_dir.parent() {
            paths.push(exe_dir.clone());
            paths.push(parent.to_path_buf());
        } else {
            paths.push(exe_dir);
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Resolves a library name to the first existing file in `search_paths`.
///
/// A name that is already an existing path is returned unchanged.
pub fn resolve_library_path(name: &str, search_paths: &[PathBuf]) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Some(direct.to_path_buf());
    }

    let file_name = library_file_name(name);
    search_paths
        .iter()
        .map(|dir| dir.join(&file_name))
        .find(|candidate| candidate.is_file())
}
