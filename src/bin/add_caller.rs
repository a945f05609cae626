//! Calls the library's integer addition through the C ABI.

use anyhow::Context;
use ffi_greet::host::{self, HostConfig};
use ffi_greet::logging;

const LHS: i32 = 4;
const RHS: i32 = 5;

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = HostConfig::from_env();
    let library = host::open_configured(&config).context("failed to open native library")?;
    let bindings = host::bind(library.as_ref()).context("failed to bind native symbols")?;

    let sum = bindings.add(LHS, RHS);
    println!("The sum of {} and {} is: {}", LHS, RHS, sum);

    Ok(())
}
