//! Generate the square-root lookup table as Rust source.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin make-table -- path/to/sqrt_table.rs
//! ```
//!
//! Exits with status 1 when the path is missing or cannot be written.

use std::process;

use math_core::make_table;
use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .init();

    if let Err(e) = make_table::run(std::env::args_os()) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
