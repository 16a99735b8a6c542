//! Binary persistence of augmented matrices
//!
//! File layout, native endian:
//!
//! ```text
//! i32        size
//! i32        columns
//! f64 * n    row-major data, n = size * columns
//! ```

use crate::matrix::Matrix;
use gauss_core::{Error, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Bytes taken by the two header integers
pub const HEADER_BYTES: u64 = 2 * std::mem::size_of::<i32>() as u64;

impl Matrix {
    /// Write the matrix to `path`, replacing any existing file
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let size = header_value(self.size)?;
        let columns = header_value(self.columns)?;

        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(&size.to_ne_bytes())?;
        writer.write_all(&columns.to_ne_bytes())?;
        writer.write_all(bytemuck::cast_slice(&self.data))?;
        writer.flush()?;

        debug!(path = %path.display(), size = self.size, "saved matrix");
        Ok(())
    }

    /// Replace this matrix with the one stored at `path`
    ///
    /// Dimensions are taken from the file. The header must describe an
    /// augmented matrix (`size > 0`, `columns == size + 1`) and the file must
    /// hold exactly that many values; otherwise this matrix is left untouched.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be opened or read, and
    /// `Error::InvalidInput` for a malformed header or a length mismatch.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let file_len = file.metadata()?.len();
        let mut reader = BufReader::new(file);

        let size = read_i32(&mut reader)?;
        let columns = read_i32(&mut reader)?;
        if size <= 0 || columns != size.saturating_add(1) {
            return Err(Error::malformed_header(size, columns));
        }

        let size = size as usize;
        let columns = columns as usize;
        let values = size
            .checked_mul(columns)
            .ok_or_else(|| Error::malformed_header(size as i32, columns as i32))?;
        let expected_len = (values as u64)
            .checked_mul(std::mem::size_of::<f64>() as u64)
            .and_then(|bytes| bytes.checked_add(HEADER_BYTES));
        if expected_len != Some(file_len) {
            return Err(Error::InvalidInput(format!(
                "matrix file length {file_len} does not match a {size}x{columns} matrix"
            )));
        }

        let mut data = vec![0.0f64; values];
        reader.read_exact(bytemuck::cast_slice_mut(&mut data))?;

        if size != self.size {
            debug!(old = self.size, new = size, "resizing matrix to file dimensions");
        }
        self.data = data;
        self.size = size;
        self.columns = columns;

        debug!(path = %path.display(), size, "loaded matrix");
        Ok(())
    }

    /// Load a matrix from `path` without an existing instance
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut matrix = Self::new(1)?;
        matrix.load(path)?;
        Ok(matrix)
    }
}

fn header_value(value: usize) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        Error::InvalidInput(format!("dimension {value} does not fit the i32 file header"))
    })
}

fn read_i32<R: Read>(reader: &mut R) -> Result<i32> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(i32::from_ne_bytes(bytes))
}
