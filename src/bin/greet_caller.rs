//! Passes a string to the library's `greet` and prints the returned greeting.
//!
//! The input buffer is freed by the host allocator, the output buffer by the
//! library's `free_string`; both happen before anything is printed.

use anyhow::Context;
use ffi_greet::host::{self, HostConfig};
use ffi_greet::logging;

const NAME: &str = "World";

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = HostConfig::from_env();
    let library = host::open_configured(&config).context("failed to open native library")?;
    let bindings = host::bind(library.as_ref()).context("failed to bind native symbols")?;

    let greeting =
        host::greet_name(&bindings, NAME).with_context(|| format!("failed to greet {NAME:?}"))?;
    println!("{}", greeting);

    Ok(())
}
