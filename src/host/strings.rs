//! Owned string buffers on either side of the boundary.
//!
//! Each buffer has exactly one owner and exactly one release point:
//! - [`BoundaryString`] is allocated by the host and freed by the host
//!   allocator when dropped. The library only borrows it for a call.
//! - [`NativeString`] is allocated by the library and handed to the host on
//!   return. Dropping it calls the library's own release function once.
//!
//! Neither type hands out an owning Rust string over the raw buffer, so the
//! two allocators can never both believe they own the same memory.

use std::ffi::{CStr, CString};
use std::fmt;
use std::marker::PhantomData;
use std::os::raw::c_char;
use std::ptr::NonNull;
use std::str::Utf8Error;

use tracing::trace;

use crate::host::error::HostError;

/// Signature of the library's release function.
pub type ReleaseFn = unsafe extern "C" fn(*mut c_char);

/// Which side of the boundary is responsible for freeing a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Freed by the host allocator or through a handle the host holds.
    Caller,
    /// Freed by the library; the host must not touch it.
    Library,
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ownership::Caller => write!(f, "caller"),
            Ownership::Library => write!(f, "library"),
        }
    }
}

/// Caller-owned, null-terminated copy of a host string.
///
/// Lends out `*const c_char` for the duration of a call. Ownership never
/// transfers; the buffer is freed when this value goes out of scope.
#[derive(Debug)]
pub struct BoundaryString {
    inner: CString,
}

impl BoundaryString {
    /// Copies `s` into a null-terminated buffer.
    ///
    /// Fails on an interior NUL, before anything crosses the boundary.
    pub fn new(s: &str) -> Result<Self, HostError> {
        let inner = CString::new(s)?;
        trace!(owner = %Ownership::Caller, len = s.len(), "input buffer acquired");
        Ok(Self { inner })
    }

    /// Borrowed pointer for passing to the library.
    pub fn as_ptr(&self) -> *const c_char {
        self.inner.as_ptr()
    }

    pub fn as_c_str(&self) -> &CStr {
        &self.inner
    }

    /// The original host string, read back from the buffer.
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        self.inner.to_str()
    }

    pub fn owner(&self) -> Ownership {
        Ownership::Caller
    }
}

impl Drop for BoundaryString {
    fn drop(&mut self) {
        trace!(owner = %Ownership::Caller, "input buffer released");
    }
}

/// Opaque handle to a buffer the library allocated and returned.
///
/// Carries the matching release function and calls it exactly once on drop.
/// The `'lib` lifetime ties the handle to the loaded library, so the release
/// function cannot be called after the library is unloaded.
pub struct NativeString<'lib> {
    ptr: NonNull<c_char>,
    release: ReleaseFn,
    _lib: PhantomData<&'lib ()>,
}

impl<'lib> NativeString<'lib> {
    /// Takes ownership of a returned buffer. Returns `None` for null.
    ///
    /// # Safety
    /// - `ptr` must be null or a null-terminated buffer allocated by the
    ///   library that `release` belongs to
    /// - no one else may own or release `ptr`
    pub unsafe fn from_raw(ptr: *mut c_char, release: ReleaseFn) -> Option<Self> {
        let ptr = NonNull::new(ptr)?;
        trace!(from = %Ownership::Library, to = %Ownership::Caller, "output buffer transferred");
        Some(Self {
            ptr,
            release,
            _lib: PhantomData,
        })
    }

    pub fn as_c_str(&self) -> &CStr {
        // SAFETY: non-null, null-terminated and alive until drop.
        unsafe { CStr::from_ptr(self.ptr.as_ptr()) }
    }

    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        self.as_c_str().to_str()
    }

    /// Copies the contents into a host `String` and releases the buffer.
    ///
    /// The buffer is released whether or not the copy succeeds.
    pub fn into_string(self) -> Result<String, Utf8Error> {
        self.to_str().map(str::to_owned)
    }

    pub fn owner(&self) -> Ownership {
        Ownership::Caller
    }
}

impl fmt::Debug for NativeString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeString")
            .field("ptr", &self.ptr)
            .field("contents", &self.as_c_str())
            .finish()
    }
}

impl Drop for NativeString<'_> {
    fn drop(&mut self) {
        // SAFETY: `from_raw` guarantees the buffer came from the library
        // owning `release`, and drop runs once.
        unsafe { (self.release)(self.ptr.as_ptr()) };
        trace!(owner = %Ownership::Caller, "output buffer released to library");
    }
}
