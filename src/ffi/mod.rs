//! C FFI layer.
//!
//! This module exports the C ABI symbols foreign hosts link against.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The formatting logic is in the `greeting` module. These functions are thin
//! wrappers that handle null checks, pointer safety, and C-to-Rust conversions.

pub mod simple;
pub mod strings;

pub use simple::rust_function_add;
pub use strings::{free_string, greet};
