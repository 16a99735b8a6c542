//! Static row partitioning for parallel elimination
//!
//! Rows are split into contiguous blocks, one per worker, with the last block
//! absorbing the remainder. Each block is later turned into disjoint mutable
//! row slices around the current pivot row, so workers never need a lock.

use std::ops::Range;

/// Upper bound on workers for a single elimination step
pub const MAX_WORKERS: usize = 64;

/// Number of workers actually used: `min(requested, rows, 64)`, at least one
pub fn effective_threads(requested: usize, rows: usize) -> usize {
    requested.min(rows).min(MAX_WORKERS).max(1)
}

/// Contiguous, disjoint row ranges covering `[0, rows)` exactly once
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowPartition {
    rows: usize,
    ranges: Vec<Range<usize>>,
}

impl RowPartition {
    /// Partition `rows` rows among `requested` workers
    ///
    /// Every block gets `rows / workers` rows; the last block also takes the
    /// remainder.
    pub fn new(rows: usize, requested: usize) -> Self {
        let workers = effective_threads(requested, rows);
        let rows_per_worker = rows / workers;

        let mut ranges = Vec::with_capacity(workers);
        let mut start = 0;
        for worker in 0..workers {
            let end = if worker == workers - 1 {
                rows
            } else {
                start + rows_per_worker
            };
            ranges.push(start..end);
            start = end;
        }

        Self { rows, ranges }
    }

    /// Number of rows covered
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of blocks, equal to the effective worker count
    pub fn workers(&self) -> usize {
        self.ranges.len()
    }

    /// The row range of every block in ascending order
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Split a row-major buffer into the shared pivot row and one mutable block per range
    ///
    /// The pivot row is excluded from every block, so the block whose range
    /// contains it gets two segments: the rows above the pivot and the rows
    /// below it.
    ///
    /// # Panics
    /// Panics if `data` holds fewer than `rows * columns` values or `pivot >= rows`.
    pub fn split_around_pivot<'a>(
        &self,
        data: &'a mut [f64],
        columns: usize,
        pivot: usize,
    ) -> (&'a [f64], Vec<RowBlock<'a>>) {
        debug_assert_eq!(data.len(), self.rows * columns);
        debug_assert!(columns > 0);
        assert!(pivot < self.rows, "pivot row {pivot} out of range");

        let (mut above, rest) = data.split_at_mut(pivot * columns);
        let (pivot_row, mut below) = rest.split_at_mut(columns);

        let mut blocks = Vec::with_capacity(self.ranges.len());
        for range in &self.ranges {
            let above_rows = range.end.min(pivot).saturating_sub(range.start);
            let below_rows = range.end.saturating_sub(range.start.max(pivot + 1));

            let (block_above, rest_above) =
                std::mem::take(&mut above).split_at_mut(above_rows * columns);
            above = rest_above;
            let (block_below, rest_below) =
                std::mem::take(&mut below).split_at_mut(below_rows * columns);
            below = rest_below;

            blocks.push(RowBlock {
                columns,
                above: block_above,
                below: block_below,
            });
        }

        (pivot_row, blocks)
    }
}

/// Mutable rows owned by one worker for one elimination step
#[derive(Debug)]
pub struct RowBlock<'a> {
    columns: usize,
    above: &'a mut [f64],
    below: &'a mut [f64],
}

impl<'a> RowBlock<'a> {
    /// Number of rows the worker will reduce
    pub fn len(&self) -> usize {
        (self.above.len() + self.below.len()) / self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every owned row, top to bottom, skipping the pivot row
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [f64]> + '_ {
        self.above
            .chunks_exact_mut(self.columns)
            .chain(self.below.chunks_exact_mut(self.columns))
    }
}
