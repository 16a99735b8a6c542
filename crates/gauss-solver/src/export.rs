//! Human-readable text dumps
//!
//! Exports are diagnostics only: if the destination cannot be written the
//! call logs the failure and returns normally.

use crate::matrix::Matrix;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

impl Matrix {
    /// Write the full matrix with fixed-width, 4-decimal values
    pub fn export_to_txt<P: AsRef<Path>>(&self, path: P) {
        let path = path.as_ref();
        if let Err(e) = write_text(path, |out| self.write_matrix_text(out)) {
            debug!(path = %path.display(), error = %e, "matrix export skipped");
        }
    }

    /// Write only the solution vector, one `X[i] = value` line per unknown
    pub fn export_solution_txt<P: AsRef<Path>>(&self, path: P) {
        let path = path.as_ref();
        if let Err(e) = write_text(path, |out| self.write_solution_text(out)) {
            debug!(path = %path.display(), error = %e, "solution export skipped");
        }
    }

    /// Matrix dump layout used by [`Matrix::export_to_txt`]
    pub fn write_matrix_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Matrix Size: {} rows x {} cols",
            self.size(),
            self.columns()
        )?;
        writeln!(out, "{}", "-".repeat(44))?;

        for r in 0..self.size() {
            for value in self.row(r) {
                write!(out, "{value:>10.4} ")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Solution dump layout used by [`Matrix::export_solution_txt`]
    pub fn write_solution_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Solution Vector X (Size: {})", self.size())?;
        writeln!(out, "{}", "-".repeat(32))?;

        for (i, x) in self.solution_vector().iter().enumerate() {
            writeln!(out, "X[{i}] = {x:.6}")?;
        }
        Ok(())
    }
}

fn write_text<F>(path: &Path, body: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut out = BufWriter::new(File::create(path)?);
    body(&mut out)?;
    out.flush()
}
