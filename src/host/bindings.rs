//! Resolved entry points of the native library.
//!
//! `Bindings` only ever calls through `extern "C"` function pointers, whether
//! they point at symbols linked into this binary, symbols from a library
//! loaded at runtime, or test stubs.

use std::fmt;
use std::marker::PhantomData;
use std::os::raw::c_char;

use tracing::{debug, warn};

use crate::ffi;
use crate::host::error::HostError;
use crate::host::library::NativeLibrary;
use crate::host::strings::{BoundaryString, NativeString, ReleaseFn};

/// Exported symbol names.
pub const ADD_SYMBOL: &str = "rust_function_add";
pub const GREET_SYMBOL: &str = "greet";
pub const FREE_SYMBOL: &str = "free_string";

pub type AddFn = unsafe extern "C" fn(i32, i32) -> i32;
pub type GreetFn = unsafe extern "C" fn(*const c_char) -> *mut c_char;

/// The three boundary functions, valid for as long as `'lib`.
#[derive(Clone, Copy)]
pub struct Bindings<'lib> {
    add: AddFn,
    greet: GreetFn,
    free_string: ReleaseFn,
    _lib: PhantomData<&'lib NativeLibrary>,
}

impl Bindings<'static> {
    /// Binds the symbols compiled into the running binary.
    pub fn linked() -> Self {
        debug!("binding linked symbols");
        // SAFETY: the linked exports have exactly these signatures and
        // `free_string` releases what `greet` returns.
        unsafe {
            Self::from_raw(
                ffi::rust_function_add,
                ffi::greet,
                ffi::free_string,
            )
        }
    }
}

impl<'lib> Bindings<'lib> {
    /// Binds the symbols of a dynamically loaded library.
    pub fn load(library: &'lib NativeLibrary) -> Result<Self, HostError> {
        // SAFETY: the types below are the documented export signatures, and
        // the `'lib` borrow keeps the library loaded while they are used.
        let bindings = unsafe {
            Self::from_raw(
                library.symbol::<AddFn>(ADD_SYMBOL)?,
                library.symbol::<GreetFn>(GREET_SYMBOL)?,
                library.symbol::<ReleaseFn>(FREE_SYMBOL)?,
            )
        };
        debug!(path = %library.path().display(), "bound dynamic symbols");
        Ok(bindings)
    }

    /// Binds explicit function pointers.
    ///
    /// # Safety
    /// - all three must stay callable for `'lib`
    /// - `greet` must return null or a null-terminated buffer that
    ///   `free_string` releases
    pub unsafe fn from_raw(add: AddFn, greet: GreetFn, free_string: ReleaseFn) -> Self {
        Self {
            add,
            greet,
            free_string,
            _lib: PhantomData,
        }
    }

    pub fn add(&self, a: i32, b: i32) -> i32 {
        // SAFETY: plain integers, no pointers involved.
        unsafe { (self.add)(a, b) }
    }

    /// Calls `greet` with a borrowed input buffer.
    ///
    /// The input stays owned by the caller. The returned handle owns the
    /// output and releases it through `free_string` on drop.
    pub fn greet(&self, name: &BoundaryString) -> Result<NativeString<'lib>, HostError> {
        // SAFETY: `name` is null-terminated and outlives the call.
        let raw = unsafe { (self.greet)(name.as_ptr()) };

        // SAFETY: per `from_raw`, `raw` is null or a buffer for `free_string`.
        unsafe { NativeString::from_raw(raw, self.free_string) }.ok_or_else(|| {
            warn!(symbol = GREET_SYMBOL, "native call returned null");
            HostError::NullResult {
                symbol: GREET_SYMBOL,
            }
        })
    }
}

impl fmt::Debug for Bindings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bindings")
            .field(ADD_SYMBOL, &(self.add as *const ()))
            .field(GREET_SYMBOL, &(self.greet as *const ()))
            .field(FREE_SYMBOL, &(self.free_string as *const ()))
            .finish()
    }
}

/// Greets `name` through the library and returns the result as a host string.
///
/// Acquire input, call, take the output, copy it, release the output, then
/// release the input. Early exits release whatever was already acquired.
pub fn greet_name(bindings: &Bindings<'_>, name: &str) -> Result<String, HostError> {
    let input = BoundaryString::new(name)?;
    let output = bindings.greet(&input)?;
    output
        .into_string()
        .map_err(|source| HostError::InvalidUtf8 {
            symbol: GREET_SYMBOL,
            source,
        })
}
