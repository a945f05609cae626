//! Greeting formatting used by the exported `greet` symbol.
//!
//! Plain Rust with no pointers; the FFI layer in `ffi/` does the conversions.

/// Builds the greeting returned across the boundary.
pub fn format_greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_greeting() {
        assert_eq!(format_greeting("World"), "Hello, World!");
        assert_eq!(format_greeting(""), "Hello, !");
    }

    #[test]
    fn test_format_greeting_non_ascii() {
        assert_eq!(format_greeting("Łódź"), "Hello, Łódź!");
    }
}
