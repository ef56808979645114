//! DBF column descriptors.

use std::borrow::Cow;
use std::fmt;
use std::io::{ErrorKind, Read, Write};
use std::str::FromStr;

use log::trace;
use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::error::ShpError;

/// Size of one encoded descriptor.
pub const FIELD_DESCRIPTOR_LEN: usize = 32;

/// Capacity of the name buffer.
pub const FIELD_NAME_LEN: usize = 11;

/// Column types this crate builds descriptors for.
///
/// Decoded descriptors may carry other tags ('L', 'M', ...); see
/// [`Field::field_type`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FieldType {
    /// Text, padded with spaces in the record.
    Character = b'C',
    /// Number in text form with fixed decimals.
    Number = b'N',
    /// Floating point number in text form.
    Float = b'F',
    /// Date as `YYYYMMDD`.
    Date = b'D',
}

impl FieldType {
    /// The one-byte tag.
    #[inline]
    pub fn tag(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for FieldType {
    type Error = ShpError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            b'C' => Ok(FieldType::Character),
            b'N' => Ok(FieldType::Number),
            b'F' => Ok(FieldType::Float),
            b'D' => Ok(FieldType::Date),
            other => Err(ShpError::UnknownFieldType(other)),
        }
    }
}

impl FromStr for FieldType {
    type Err = ShpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "character" | "string" => Ok(FieldType::Character),
            "n" | "number" => Ok(FieldType::Number),
            "f" | "float" => Ok(FieldType::Float),
            "d" | "date" => Ok(FieldType::Date),
            _ => Err(ShpError::UnknownFieldTypeName(s.to_string())),
        }
    }
}

/// One DBF column descriptor, laid out exactly as on disk.
///
/// ```text
/// name[11] | type[1] | addr[4] | size[1] | precision[1] | padding[14]
/// ```
///
/// The name is left-justified and NUL-padded. `addr` and `padding` are
/// reserved and zero for descriptors built here, but decoded descriptors
/// keep whatever the file holds so they re-encode byte for byte. The same
/// goes for the type tag: any byte is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromBytes, IntoBytes, Immutable)]
#[repr(C)]
pub struct Field {
    pub name: [u8; FIELD_NAME_LEN],
    /// Raw type tag.
    pub field_type: u8,
    pub addr: [u8; 4],
    pub size: u8,
    pub precision: u8,
    pub padding: [u8; 14],
}

const _: () = assert!(std::mem::size_of::<Field>() == FIELD_DESCRIPTOR_LEN);

impl Field {
    fn with_name(field_type: FieldType, name: &str, size: u8, precision: u8) -> Self {
        // Silent truncation: bytes past the buffer are dropped.
        let mut buf = [0u8; FIELD_NAME_LEN];
        let bytes = name.as_bytes();
        let n = bytes.len().min(FIELD_NAME_LEN);
        buf[..n].copy_from_slice(&bytes[..n]);

        Self {
            name: buf,
            field_type: field_type.tag(),
            addr: [0; 4],
            size,
            precision,
            padding: [0; 14],
        }
    }

    /// Text column of `length` characters.
    ///
    /// Names longer than 11 bytes are truncated to their first 11 bytes,
    /// which may split a multi-byte character. Use [`Field::try_new`] to
    /// reject them instead.
    pub fn string(name: &str, length: u8) -> Self {
        Self::with_name(FieldType::Character, name, length, 0)
    }

    /// Numeric column of `length` digits.
    pub fn number(name: &str, length: u8) -> Self {
        Self::with_name(FieldType::Number, name, length, 0)
    }

    /// Floating point column with `precision` decimals.
    pub fn float(name: &str, length: u8, precision: u8) -> Self {
        Self::with_name(FieldType::Float, name, length, precision)
    }

    /// Date column. Always 8 characters (`YYYYMMDD`) wide.
    pub fn date(name: &str) -> Self {
        Self::with_name(FieldType::Date, name, 8, 0)
    }

    /// Builds a descriptor, failing instead of truncating a long name.
    pub fn try_new(
        field_type: FieldType,
        name: &str,
        size: u8,
        precision: u8,
    ) -> Result<Self, ShpError> {
        if name.len() > FIELD_NAME_LEN {
            return Err(ShpError::NameTooLong {
                name: name.to_string(),
                len: name.len(),
            });
        }
        Ok(Self::with_name(field_type, name, size, precision))
    }

    /// Typed view of the tag.
    ///
    /// # Errors
    /// [`ShpError::UnknownFieldType`] for tags other than C, N, F, D.
    pub fn field_type(&self) -> Result<FieldType, ShpError> {
        FieldType::try_from(self.field_type)
    }

    /// Name bytes up to the first NUL.
    pub fn name_bytes(&self) -> &[u8] {
        let end = self
            .name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(FIELD_NAME_LEN);
        &self.name[..end]
    }

    /// Name as text. Invalid UTF-8 is replaced.
    pub fn name_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.name_bytes())
    }

    /// The 32 descriptor bytes.
    #[inline]
    pub fn to_bytes(&self) -> [u8; FIELD_DESCRIPTOR_LEN] {
        let mut out = [0u8; FIELD_DESCRIPTOR_LEN];
        out.copy_from_slice(self.as_bytes());
        out
    }

    /// Parses a descriptor from the start of `bytes`.
    ///
    /// # Errors
    /// [`ShpError::TruncatedInput`] if fewer than 32 bytes are given.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ShpError> {
        Field::read_from_prefix(bytes)
            .map(|(field, _)| field)
            .map_err(|_| ShpError::TruncatedInput {
                field: "field descriptor",
            })
    }

    /// Reads one descriptor.
    pub fn decode<R: Read>(reader: &mut R) -> Result<Self, ShpError> {
        let mut buf = [0u8; FIELD_DESCRIPTOR_LEN];
        reader.read_exact(&mut buf).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => ShpError::TruncatedInput {
                field: "field descriptor",
            },
            _ => ShpError::Io(e),
        })?;
        let field = Self::from_bytes(&buf)?;
        trace!(
            "decoded field descriptor '{field}' (type {:?})",
            field.field_type as char
        );
        Ok(field)
    }

    /// Writes the 32 descriptor bytes.
    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<(), ShpError> {
        writer
            .write_all(self.as_bytes())
            .map_err(ShpError::WriteFailure)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name_str())
    }
}
