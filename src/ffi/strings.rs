//! Greeting allocation and release.
//!
//! `greet` hands a freshly allocated buffer to the caller, who must give it
//! back through `free_string`. The buffer comes from this library's
//! allocator; freeing it any other way is undefined behavior.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::greeting;

/// Returns a newly allocated `"Hello, {name}!"`.
///
/// # Safety
/// - `name` must point to a null-terminated string valid for the duration
///   of the call, or be null
///
/// # Returns
/// A buffer owned by the caller, to be released with `free_string()`.
/// Null if `name` is null or not valid UTF-8.
#[no_mangle]
pub unsafe extern "C" fn greet(name: *const c_char) -> *mut c_char {
    if name.is_null() {
        return std::ptr::null_mut();
    }

    let name = match CStr::from_ptr(name).to_str() {
        Ok(name) => name,
        Err(_) => return std::ptr::null_mut(),
    };

    // Built from a CStr plus NUL-free literals, so no interior NUL.
    match CString::new(greeting::format_greeting(name)) {
        Ok(greeting) => greeting.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Releases a buffer returned by `greet()`.
///
/// # Safety
/// - `s` must be a pointer returned by `greet()`, or null
/// - `s` must not be used or released again after this call
#[no_mangle]
pub unsafe extern "C" fn free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
