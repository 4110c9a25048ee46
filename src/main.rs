//! tokensub: replace `__KEY__` tokens across a directory tree
//!
//! A portable alternative to in-place `sed` runs that trip over multi-byte text.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
