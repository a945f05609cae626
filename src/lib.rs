//! FFI Greet - calling conventions and ownership across a C boundary
//!
//! The `cdylib` build exports three C ABI symbols:
//! - `rust_function_add(i32, i32) -> i32`
//! - `greet(*const c_char) -> *mut c_char`, returning a buffer the caller owns
//! - `free_string(*mut c_char)`, the only valid way to release that buffer
//!
//! The `host` module is the calling side: it binds those symbols (linked or
//! loaded at runtime) and wraps each boundary buffer in a type with a single
//! release point.

pub mod ffi;
pub mod greeting;
pub mod host;
pub mod logging;


pub use ffi::{free_string, greet, rust_function_add};
pub use host::{greet_name, Bindings, HostConfig, HostError};
