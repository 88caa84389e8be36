//! Build script that generates the square-root lookup table.
//!
//! When the `table-sqrt` feature is enabled, the table is rendered into
//! `$OUT_DIR/sqrt_table.rs` and pulled into `mathfunctions::detail` with
//! `include!`. The renderer is the same one used by the `make-table` binary.

use std::env;
use std::fs;
use std::path::PathBuf;

#[allow(dead_code)]
#[path = "src/table.rs"]
mod table;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/table.rs");

    if env::var_os("CARGO_FEATURE_TABLE_SQRT").is_none() {
        return;
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let out_path = out_dir.join(table::TABLE_FILE_NAME);

    let source = table::render_table(&table::TableSpec::default());
    fs::write(&out_path, source)
        .unwrap_or_else(|e| panic!("failed to write {}: {}", out_path.display(), e));
}
