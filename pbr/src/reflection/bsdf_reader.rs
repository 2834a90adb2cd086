//! Tabulated BSDF Reader

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use std::fs::File;
use std::io::{self, BufReader, Read};
use thiserror::Error;

/// Errors that can occur while loading tabulated BSDF data.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("could not open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("error reading table data: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header '{found}', expected '{expected}'")]
    InvalidHeader { found: String, expected: String },

    #[error("unsupported file format: {0}")]
    Unsupported(String),

    #[error("expected {expected} values but the file describes {found}")]
    SizeMismatch { expected: usize, found: usize },
}

/// Result of loading tabulated BSDF data.
pub type TableResult<T> = Result<T, TableError>;

/// Opens a file for buffered reading.
///
/// * `path` - The file path.
pub fn open_file(path: &str) -> TableResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| TableError::Open {
            path: path.to_string(),
            source,
        })
}

/// Returns the product of table dimensions, failing when it does not fit in
/// `usize`.
///
/// * `dims` - The table dimensions.
pub fn table_size(dims: &[usize]) -> TableResult<usize> {
    dims.iter()
        .try_fold(1_usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| TableError::Unsupported(format!("table dimensions {:?} overflow", dims)))
}

/// Helpers for reading little endian binary BSDF tables.
///
/// `NOTE`: This is just a convenience way to add helpers to any `Read`.
pub trait TableReader: Read {
    /// Reads the header bytes and compares them to the expected header.
    ///
    /// * `expected` - The expected header.
    fn check_header(&mut self, expected: &[u8]) -> TableResult<()> {
        let mut header = vec![0_u8; expected.len()];
        self.read_exact(&mut header)?;
        if header == expected {
            Ok(())
        } else {
            Err(TableError::InvalidHeader {
                found: String::from_utf8_lossy(&header).into_owned(),
                expected: String::from_utf8_lossy(expected).into_owned(),
            })
        }
    }

    /// Reads one 32-bit signed value.
    fn read_i32_le(&mut self) -> TableResult<i32> {
        Ok(ReadBytesExt::read_i32::<LittleEndian>(self)?)
    }

    /// Reads one 32-bit floating point value.
    fn read_f32_le(&mut self) -> TableResult<f32> {
        Ok(ReadBytesExt::read_f32::<LittleEndian>(self)?)
    }

    /// Reads one 32-bit signed value that holds a count or a dimension.
    fn read_size(&mut self) -> TableResult<usize> {
        let v = self.read_i32_le()?;
        usize::try_from(v).map_err(|_| TableError::Unsupported(format!("negative size {}", v)))
    }

    /// Reads `count` values of `size` bytes each. The buffer grows with the
    /// data actually present so a bogus count cannot force a huge allocation.
    ///
    /// * `count` - Number of values to read.
    /// * `size`  - Size of one value in bytes.
    fn read_values(&mut self, count: usize, size: usize) -> TableResult<Vec<u8>> {
        let n = table_size(&[count, size])?;
        let mut bytes = Vec::new();
        (&mut *self).take(n as u64).read_to_end(&mut bytes)?;
        if bytes.len() != n {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        Ok(bytes)
    }

    /// Reads given number of 32-bit signed values.
    ///
    /// * `count` - Number of values to read.
    fn read_ints(&mut self, count: usize) -> TableResult<Vec<i32>> {
        let bytes = self.read_values(count, 4)?;
        let mut buffer = vec![0_i32; count];
        LittleEndian::read_i32_into(&bytes, &mut buffer);
        Ok(buffer)
    }

    /// Reads given number of 32-bit floating point values.
    ///
    /// * `count` - Number of values to read.
    fn read_floats(&mut self, count: usize) -> TableResult<Vec<f32>> {
        let bytes = self.read_values(count, 4)?;
        let mut buffer = vec![0_f32; count];
        LittleEndian::read_f32_into(&bytes, &mut buffer);
        Ok(buffer)
    }

    /// Reads given number of 64-bit floating point values.
    ///
    /// * `count` - Number of values to read.
    fn read_doubles(&mut self, count: usize) -> TableResult<Vec<f64>> {
        let bytes = self.read_values(count, 8)?;
        let mut buffer = vec![0_f64; count];
        LittleEndian::read_f64_into(&bytes, &mut buffer);
        Ok(buffer)
    }
}

impl<R: Read + ?Sized> TableReader for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_little_endian_values() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"HDR");
        bytes.extend_from_slice(&7_i32.to_le_bytes());
        bytes.extend_from_slice(&1.5_f32.to_le_bytes());
        let mut reader = Cursor::new(bytes);
        reader.check_header(b"HDR").unwrap();
        assert_eq!(reader.read_i32_le().unwrap(), 7);
        assert_eq!(reader.read_f32_le().unwrap(), 1.5);
    }

    #[test]
    fn negative_size_is_unsupported() {
        let mut reader = Cursor::new((-1_i32).to_le_bytes().to_vec());
        assert!(matches!(reader.read_size(), Err(TableError::Unsupported(_))));
    }

    #[test]
    fn overflowing_dimensions_are_unsupported() {
        assert_eq!(table_size(&[90, 90, 180]).unwrap(), 1_458_000);
        assert!(matches!(
            table_size(&[usize::MAX, 2]),
            Err(TableError::Unsupported(_))
        ));
    }

    #[test]
    fn huge_count_on_short_data_is_an_io_error() {
        let mut reader = Cursor::new(vec![0_u8; 16]);
        assert!(matches!(reader.read_floats(1 << 40), Err(TableError::Io(_))));
    }

    #[test]
    fn wrong_header_is_rejected() {
        let mut reader = Cursor::new(b"NOPE".to_vec());
        assert!(matches!(
            reader.check_header(b"SCAT"),
            Err(TableError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn truncated_data_is_an_io_error() {
        let mut reader = Cursor::new(vec![0_u8; 6]);
        assert!(matches!(reader.read_ints(2), Err(TableError::Io(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = open_file("/no/such/table.bin").unwrap_err();
        assert!(err.to_string().contains("/no/such/table.bin"));
    }
}
