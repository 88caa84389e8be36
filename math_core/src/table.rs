//! # Square Root Lookup Table
//!
//! Computes the precomputed square-root table and renders it as Rust source.
//! This module is shared with `build.rs` (via `#[path]`), so it must only
//! depend on `std` and `serde`.
//!
//! ## Generated Format
//!
//! ```text
//! static SQRT_TABLE: [f64; 10] = [
//!   0.0,
//!   1.0,
//!   1.4142135623730951,
//!   ...
//!   3.0
//! ];
//! ```
//!
//! Literals use `{:?}`, the shortest representation that round-trips.

use serde::{Deserialize, Serialize};

/// Number of entries in the canonical table (square roots of `0..10`)
pub const TABLE_LEN: usize = 10;

/// Symbol name of the emitted array
pub const TABLE_SYMBOL: &str = "SQRT_TABLE";

/// File name of the artifact written into `OUT_DIR` by the build script
pub const TABLE_FILE_NAME: &str = "sqrt_table.rs";

/// Shape of the emitted table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Name of the `static` array
    pub symbol: String,
    /// Number of entries; entry `i` holds `sqrt(i)`
    pub len: usize,
}

impl Default for TableSpec {
    fn default() -> Self {
        TableSpec {
            symbol: TABLE_SYMBOL.to_string(),
            len: TABLE_LEN,
        }
    }
}

/// Compute `sqrt(i)` for every `i` in `0..len`.
///
/// # Example
///
/// ```rust
/// use math_core::table::compute_table;
///
/// let table = compute_table(10);
/// assert_eq!(table[4], 2.0);
/// assert_eq!(table[9], 3.0);
/// ```
pub fn compute_table(len: usize) -> Vec<f64> {
    (0..len).map(|i| (i as f64).sqrt()).collect()
}

/// Render the table described by `spec` as a Rust `static` declaration.
///
/// One value per line, comma after every value but the last, and a `;`
/// after the closing bracket.
pub fn render_table(spec: &TableSpec) -> String {
    let values = compute_table(spec.len);
    let mut output = String::with_capacity(64 + values.len() * 24);

    output.push_str(&format!(
        "static {}: [f64; {}] = [\n",
        spec.symbol,
        values.len()
    ));
    for (i, value) in values.iter().enumerate() {
        output.push_str(&format!("  {:?}", value));
        if i + 1 < values.len() {
            output.push(',');
        }
        output.push('\n');
    }
    output.push_str("];\n");

    output
}
