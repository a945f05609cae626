//! Integer addition across the C ABI.

/// Adds two integers.
///
/// Wraps on overflow so no input can panic across the boundary.
#[no_mangle]
pub extern "C" fn rust_function_add(arg1: i32, arg2: i32) -> i32 {
    arg1.wrapping_add(arg2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_function_add() {
        assert_eq!(rust_function_add(4, 5), 9);
        assert_eq!(rust_function_add(-1, 1), 0);
        assert_eq!(rust_function_add(0, 0), 0);
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(rust_function_add(i32::MAX, 1), i32::MIN);
        assert_eq!(rust_function_add(i32::MIN, -1), i32::MAX);
    }
}
