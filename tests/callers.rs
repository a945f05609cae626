// End-to-end runs of the two caller binaries.

use std::process::Command;

fn run(exe: &str) -> std::process::Output {
    Command::new(exe)
        .env_remove("FFI_GREET_LIBRARY")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn caller")
}

#[test]
fn test_add_caller_output() {
    let output = run(env!("CARGO_BIN_EXE_add-caller"));
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "The sum of 4 and 5 is: 9\n"
    );
}

#[test]
fn test_greet_caller_output() {
    let output = run(env!("CARGO_BIN_EXE_greet-caller"));
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello, World!\n");
}

#[test]
fn test_bad_library_path_exits_nonzero() {
    for exe in [
        env!("CARGO_BIN_EXE_add-caller"),
        env!("CARGO_BIN_EXE_greet-caller"),
    ] {
        let output = Command::new(exe)
            .env("FFI_GREET_LIBRARY", "/nonexistent/libffi_greet.so")
            .output()
            .expect("failed to spawn caller");

        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("failed to open native library"));
    }
}
