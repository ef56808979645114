//! Little-endian record body I/O.
//!
//! Every numeric field in a shape record body is little-endian. The reader
//! keeps track of how many bytes the record still holds when the caller knows
//! it (a byte slice, or a content length taken from the record header), which
//! lets array decoding reject impossible element counts before allocating.

use std::io::{ErrorKind, Read, Write};

use log::trace;

use crate::error::ShpError;

/// Largest record body a Shapefile can describe, in bytes.
///
/// The record header stores the content length as a signed 32-bit count of
/// 16-bit words.
pub const MAX_RECORD_BYTES: u64 = i32::MAX as u64 * 2;

/// Upper bound on elements preallocated when the remaining length is unknown.
const PREALLOC_CAP: usize = 4096;

/// Reads little-endian fields from a positioned record body.
#[derive(Debug)]
pub struct RecordReader<R> {
    inner: R,
    remaining: Option<u64>,
}

impl<'a> RecordReader<&'a [u8]> {
    /// Creates a reader over an in-memory record body.
    ///
    /// The slice length bounds every array the decoder allocates.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self {
            inner: bytes,
            remaining: Some(bytes.len() as u64),
        }
    }
}

impl<R: Read> RecordReader<R> {
    /// Creates a reader with no knowledge of how much input remains.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            remaining: None,
        }
    }

    /// Creates a reader that will consume at most `limit` bytes.
    ///
    /// Use this with the content length from the record header.
    pub fn with_limit(inner: R, limit: u64) -> Self {
        Self {
            inner,
            remaining: Some(limit),
        }
    }

    /// Bytes left in the record, if known.
    pub fn remaining(&self) -> Option<u64> {
        self.remaining
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self, buf: &mut [u8], field: &'static str) -> Result<(), ShpError> {
        let len = buf.len() as u64;
        if let Some(remaining) = self.remaining {
            if len > remaining {
                return Err(ShpError::TruncatedInput { field });
            }
        }

        self.inner.read_exact(buf).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => ShpError::TruncatedInput { field },
            _ => ShpError::Io(e),
        })?;

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= len;
        }
        Ok(())
    }

    /// Reads a little-endian `i32`.
    pub fn read_i32(&mut self, field: &'static str) -> Result<i32, ShpError> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf, field)?;
        Ok(i32::from_le_bytes(buf))
    }

    /// Reads a little-endian `f64`.
    pub fn read_f64(&mut self, field: &'static str) -> Result<f64, ShpError> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf, field)?;
        Ok(f64::from_le_bytes(buf))
    }

    /// Reads an `i32` element count and checks it is usable as an array length.
    ///
    /// Negative counts, and counts whose elements could not fit in any
    /// Shapefile record, fail with [`ShpError::InvalidLength`].
    pub fn read_count(
        &mut self,
        field: &'static str,
        elem_size: usize,
    ) -> Result<i32, ShpError> {
        let value = self.read_i32(field)?;
        if value < 0 || value as u64 * elem_size as u64 > MAX_RECORD_BYTES {
            return Err(ShpError::InvalidLength {
                field,
                value: i64::from(value),
            });
        }
        Ok(value)
    }

    /// Reads `count` fixed-size elements with `read_one`.
    ///
    /// When the remaining length is known, an array that cannot fit fails
    /// with [`ShpError::TruncatedInput`] before anything is allocated.
    pub fn read_array<T>(
        &mut self,
        count: i32,
        elem_size: usize,
        field: &'static str,
        mut read_one: impl FnMut(&mut Self) -> Result<T, ShpError>,
    ) -> Result<Vec<T>, ShpError> {
        let count = usize::try_from(count).map_err(|_| ShpError::InvalidLength {
            field,
            value: i64::from(count),
        })?;
        let needed = count as u64 * elem_size as u64;
        if let Some(remaining) = self.remaining {
            if needed > remaining {
                trace!("{field}: need {needed} bytes, {remaining} remain");
                return Err(ShpError::TruncatedInput { field });
            }
        }

        let capacity = match self.remaining {
            Some(_) => count,
            None => count.min(PREALLOC_CAP),
        };
        let mut out = Vec::with_capacity(capacity);
        for _ in 0..count {
            out.push(read_one(self)?);
        }
        Ok(out)
    }
}

/// Writes little-endian fields to a record body sink.
#[derive(Debug)]
pub struct RecordWriter<W> {
    inner: W,
    written: u64,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Number of bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn put(&mut self, bytes: &[u8]) -> Result<(), ShpError> {
        self.inner.write_all(bytes).map_err(ShpError::WriteFailure)?;
        self.written += bytes.len() as u64;
        Ok(())
    }

    /// Writes a little-endian `i32`.
    pub fn write_i32(&mut self, value: i32) -> Result<(), ShpError> {
        self.put(&value.to_le_bytes())
    }

    /// Writes a little-endian `f64`.
    pub fn write_f64(&mut self, value: f64) -> Result<(), ShpError> {
        self.put(&value.to_le_bytes())
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> Result<(), ShpError> {
        self.inner.flush().map_err(ShpError::WriteFailure)
    }
}
