//! # math_core - Square Root with a Generated Lookup Table
//!
//! `math_core` exports a single square-root function whose implementation is
//! chosen at compile time, plus the generator for the lookup table the
//! alternate implementation is seeded from.
//!
//! ## Build Configuration
//!
//! - **default**: `sqrt` delegates to `f64::sqrt`
//! - **`table-sqrt`**: `build.rs` renders the table into `OUT_DIR` and `sqrt`
//!   delegates to a Newton iteration seeded from it
//!
//! ## Quick Start
//!
//! ```rust
//! use math_core::{implementation, sqrt};
//!
//! let root = sqrt(2.0);
//! assert!((root - 1.41421356).abs() < 1e-8);
//! println!("computed with the {} implementation", implementation().display_name());
//! ```
//!
//! ## Modules
//!
//! - [`mathfunctions`] - `sqrt` and the table-seeded `detail` implementation
//! - [`table`] - Table computation and source rendering (shared with `build.rs`)
//! - [`make_table`] - The `make-table` generator
//! - [`file_io`] - Atomic artifact writes
//! - [`errors`] - Structured error types

pub mod errors;
pub mod file_io;
pub mod make_table;
pub mod mathfunctions;
pub mod table;

// Re-export commonly used items at crate root for convenience
pub use errors::{MathError, MathResult};
pub use mathfunctions::{implementation, sqrt, Implementation};
pub use table::{compute_table, render_table, TableSpec};
