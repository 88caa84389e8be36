//! # Square Root
//!
//! `sqrt` is one of two free functions, picked at compile time:
//!
//! | Build | Delegate |
//! |-------|----------|
//! | default | `f64::sqrt` |
//! | `--features table-sqrt` | [`detail::mysqrt`], seeded from the generated table |
//!
//! There is no runtime switch. [`implementation`] reports which delegate was
//! compiled in.
//!
//! ## Example
//!
//! ```rust
//! use math_core::mathfunctions::sqrt;
//!
//! assert_eq!(sqrt(9.0), 3.0);
//! assert!((sqrt(2.0) - 1.41421356).abs() < 1e-8);
//! ```

use serde::{Deserialize, Serialize};

/// Which square-root delegate this build uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Implementation {
    /// `f64::sqrt`
    Standard,
    /// Table-seeded Newton iteration
    Table,
}

impl Implementation {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Implementation::Standard => "standard library",
            Implementation::Table => "lookup table",
        }
    }
}

/// The delegate selected by the `table-sqrt` feature.
pub const fn implementation() -> Implementation {
    if cfg!(feature = "table-sqrt") {
        Implementation::Table
    } else {
        Implementation::Standard
    }
}

/// Square root of `x`.
///
/// Negative input yields NaN, as `f64::sqrt` does.
#[cfg(not(feature = "table-sqrt"))]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

/// Square root of `x`.
///
/// Negative input yields NaN, as `f64::sqrt` does.
#[cfg(feature = "table-sqrt")]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    detail::mysqrt(x)
}

/// Alternate square-root implementation.
pub mod detail {
    use tracing::trace;

    /// Upper bound on Newton steps. Convergence from a table seed takes five
    /// or six; the bound only guards against a degenerate table.
    pub const MAX_ITERATIONS: usize = 64;

    #[cfg(feature = "table-sqrt")]
    include!(concat!(env!("OUT_DIR"), "/sqrt_table.rs"));

    /// The table generated by `build.rs`.
    #[cfg(feature = "table-sqrt")]
    pub fn table() -> &'static [f64] {
        &SQRT_TABLE
    }

    /// Square root using the generated table for the initial guess.
    #[cfg(feature = "table-sqrt")]
    pub fn mysqrt(x: f64) -> f64 {
        newton_sqrt(&SQRT_TABLE, x)
    }

    /// Square root by Newton-Raphson, seeded from `table` where `table[i]`
    /// is `sqrt(i)`.
    ///
    /// Zero, negative, NaN and infinite inputs go straight to `f64::sqrt`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use math_core::mathfunctions::detail::newton_sqrt;
    /// use math_core::table::compute_table;
    ///
    /// let table = compute_table(10);
    /// assert_eq!(newton_sqrt(&table, 16.0), 4.0);
    /// assert!(newton_sqrt(&table, -1.0).is_nan());
    /// ```
    pub fn newton_sqrt(table: &[f64], x: f64) -> f64 {
        if x.is_nan() || x <= 0.0 || x.is_infinite() {
            return x.sqrt();
        }

        let mut result = initial_guess(table, x);
        trace!(x, guess = result, "newton seed");

        // One step from any positive guess lands at or above the root
        result = 0.5 * (result + x / result);
        for _ in 0..MAX_ITERATIONS {
            let next = 0.5 * (result + x / result);
            if next >= result {
                break;
            }
            result = next;
        }

        result
    }

    /// Scale `x` by powers of four into `[1, 10)`, look up the root of the
    /// integer part, and undo the scaling (each factor of four is a factor
    /// of two in the root). All scaling is exact.
    fn initial_guess(table: &[f64], x: f64) -> f64 {
        let mut mantissa = x;
        let mut scale = 1.0;
        while mantissa >= 10.0 {
            mantissa *= 0.25;
            scale *= 2.0;
        }
        while mantissa < 1.0 {
            mantissa *= 4.0;
            scale *= 0.5;
        }

        let seed = table
            .get(mantissa as usize)
            .copied()
            .filter(|v| *v > 0.0)
            .unwrap_or(mantissa);

        seed * scale
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::table::compute_table;

        fn assert_close(actual: f64, expected: f64) {
            let tolerance = 4.0 * f64::EPSILON * expected;
            assert!(
                (actual - expected).abs() <= tolerance,
                "expected {} got {}",
                expected,
                actual
            );
        }

        #[test]
        fn test_table_range_inputs() {
            let table = compute_table(10);
            for x in [1.0, 2.0, 2.5, 3.0, 4.0, 5.5, 7.0, 9.0, 9.99] {
                assert_close(newton_sqrt(&table, x), x.sqrt());
            }
        }

        #[test]
        fn test_perfect_squares_are_exact() {
            let table = compute_table(10);
            assert_eq!(newton_sqrt(&table, 4.0), 2.0);
            assert_eq!(newton_sqrt(&table, 9.0), 3.0);
            assert_eq!(newton_sqrt(&table, 144.0), 12.0);
            assert_eq!(newton_sqrt(&table, 1e10), 1e5);
        }

        #[test]
        fn test_large_and_small_inputs() {
            let table = compute_table(10);
            for x in [10.0, 123.456, 1e6, 1e100, f64::MAX, 0.5, 1e-3, 1e-100, f64::MIN_POSITIVE] {
                assert_close(newton_sqrt(&table, x), x.sqrt());
            }
        }

        #[test]
        fn test_subnormal_input() {
            let table = compute_table(10);
            let x = f64::MIN_POSITIVE / 1024.0;
            assert_close(newton_sqrt(&table, x), x.sqrt());
        }

        #[test]
        fn test_pass_through_inputs() {
            let table = compute_table(10);
            assert_eq!(newton_sqrt(&table, 0.0), 0.0);
            assert!(newton_sqrt(&table, -4.0).is_nan());
            assert!(newton_sqrt(&table, f64::NAN).is_nan());
            assert_eq!(newton_sqrt(&table, f64::INFINITY), f64::INFINITY);
        }

        #[test]
        fn test_short_table_still_converges() {
            assert_close(newton_sqrt(&[], 7.0), 7.0_f64.sqrt());
            assert_close(newton_sqrt(&[0.0, 1.0], 8.5), 8.5_f64.sqrt());
        }

        #[test]
        fn test_initial_guess_uses_table() {
            let table = compute_table(10);
            assert_eq!(initial_guess(&table, 2.0), table[2]);
            assert_eq!(initial_guess(&table, 9.5), table[9]);
            // 40 = 2.5 * 4^2, seed sqrt(2) * 4
            assert_eq!(initial_guess(&table, 40.0), table[2] * 4.0);
        }

        #[cfg(feature = "table-sqrt")]
        #[test]
        fn test_generated_table_matches_computed() {
            assert_eq!(table(), compute_table(10).as_slice());
        }

        #[cfg(feature = "table-sqrt")]
        #[test]
        fn test_mysqrt_uses_generated_table() {
            assert_eq!(mysqrt(9.0), 3.0);
            assert_close(mysqrt(2.0), 2.0_f64.sqrt());
        }
    }
}
