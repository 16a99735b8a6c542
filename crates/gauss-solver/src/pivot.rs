//! Partial pivoting for one elimination step

use crate::matrix::Matrix;

/// Outcome of pivot selection for column `k`
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pivot {
    /// Every candidate in the column is exactly zero; the step is skipped
    Singular,
    /// Row holding the largest-magnitude candidate and its (signed) value
    Row { row: usize, value: f64 },
}

/// Choose the pivot row for column `k` among rows `k..size`
///
/// Only a strictly greater magnitude replaces the current candidate, so the
/// first of several equal candidates wins.
pub fn select_pivot(matrix: &Matrix, k: usize) -> Pivot {
    let mut best_row = k;
    let mut best_abs = matrix.at(k, k).abs();

    for i in (k + 1)..matrix.size() {
        let candidate = matrix.at(i, k).abs();
        if candidate > best_abs {
            best_abs = candidate;
            best_row = i;
        }
    }

    if best_abs == 0.0 {
        Pivot::Singular
    } else {
        Pivot::Row {
            row: best_row,
            value: matrix.at(best_row, k),
        }
    }
}

/// Swap two whole rows in place
pub fn swap_rows(matrix: &mut Matrix, a: usize, b: usize) {
    if a == b {
        return;
    }

    let columns = matrix.columns();
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = matrix.data.split_at_mut(high * columns);
    head[low * columns..(low + 1) * columns].swap_with_slice(&mut tail[..columns]);
}

/// Divide every value of row `k` by `pivot_value`, its diagonal entry after the swap
pub fn normalize_row(matrix: &mut Matrix, k: usize, pivot_value: f64) {
    debug_assert_eq!(matrix.at(k, k).to_bits(), pivot_value.to_bits());
    for value in matrix.row_mut(k) {
        *value /= pivot_value;
    }
}
