//! # Table Generator
//!
//! The logic behind the `make-table` binary: take the output path from the
//! command line, render the square-root table and write it atomically.
//!
//! The build script renders the same table into `OUT_DIR`; this entry point
//! produces the artifact for builds that do not go through Cargo.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{MathError, MathResult};
use crate::file_io::write_atomic;
use crate::table::{render_table, TableSpec};

/// Extract the output path from `argv` (program name first).
///
/// Arguments after the first positional one are ignored.
pub fn output_path_from_args<I>(args: I) -> MathResult<PathBuf>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    args.into_iter()
        .nth(1)
        .map(|arg| PathBuf::from(arg.into()))
        .ok_or_else(|| MathError::missing_argument("output file"))
}

/// Render the table described by `spec` and write it to `path`.
pub fn generate(path: &Path, spec: &TableSpec) -> MathResult<()> {
    let source = render_table(spec);
    debug!(symbol = %spec.symbol, len = spec.len, bytes = source.len(), "rendered table");

    write_atomic(path, &source)?;

    info!(path = %path.display(), "wrote sqrt table");
    Ok(())
}

/// Run the generator with process arguments.
///
/// # Returns
///
/// * `Ok(PathBuf)` - path of the written table
/// * `Err(MathError::MissingArgument)` - no output path was given; nothing written
/// * `Err(MathError::FileError)` - the write failed
pub fn run<I>(args: I) -> MathResult<PathBuf>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let path = output_path_from_args(args)?;
    generate(&path, &TableSpec::default())?;
    Ok(path)
}
