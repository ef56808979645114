//! The shape capability set and the tagged union over supported shapes.

use std::io::{Read, Write};

use log::debug;
use serde::{Deserialize, Serialize};

use super::bbox::BoundingBox;
use super::point::{Null, Point};
use super::poly::{PolyLine, Polygon};
use super::shape_type::ShapeType;
use crate::error::ShpError;
use crate::wire::{RecordReader, RecordWriter};

/// What every record body type can do.
///
/// `decode` expects the reader to sit right after the shape type code the
/// container already consumed; `encode` writes only the body, leaving the
/// type code and record header to the container.
pub trait Shape: Sized {
    /// Type code this shape is stored under.
    const SHAPE_TYPE: ShapeType;

    /// Bounding box computed from the shape's coordinates.
    fn bbox(&self) -> BoundingBox;

    /// Decodes one record body.
    ///
    /// # Errors
    /// [`ShpError::TruncatedInput`] if the input ends before the body does,
    /// [`ShpError::InvalidLength`] for unusable element counts.
    fn decode<R: Read>(reader: &mut RecordReader<R>) -> Result<Self, ShpError>;

    /// Encodes one record body.
    ///
    /// # Errors
    /// [`ShpError::WriteFailure`] if the sink rejects bytes.
    fn encode<W: Write>(&self, writer: &mut RecordWriter<W>) -> Result<(), ShpError>;

    /// Size of the encoded body in bytes.
    fn encoded_len(&self) -> usize;

    /// Decodes a body held in memory.
    fn from_bytes(bytes: &[u8]) -> Result<Self, ShpError> {
        Self::decode(&mut RecordReader::from_slice(bytes))
    }

    /// Encodes the body into a new buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, ShpError> {
        let mut writer = RecordWriter::new(Vec::with_capacity(self.encoded_len()));
        self.encode(&mut writer)?;
        Ok(writer.into_inner())
    }
}

/// Any shape this crate can decode, tagged by type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Geometry {
    Null,
    Point(Point),
    PolyLine(PolyLine),
    Polygon(Polygon),
}

impl Geometry {
    /// Decodes a body of the given type.
    ///
    /// # Errors
    /// [`ShpError::UnsupportedShapeType`] for types without a codec here
    /// (MultiPoint, Z and M variants, MultiPatch), plus any decode error.
    pub fn decode<R: Read>(
        shape_type: ShapeType,
        reader: &mut RecordReader<R>,
    ) -> Result<Self, ShpError> {
        debug!("decoding {shape_type} record body");
        match shape_type {
            ShapeType::Null => Null::decode(reader).map(|_| Geometry::Null),
            ShapeType::Point => Point::decode(reader).map(Geometry::Point),
            ShapeType::PolyLine => PolyLine::decode(reader).map(Geometry::PolyLine),
            ShapeType::Polygon => Polygon::decode(reader).map(Geometry::Polygon),
            other => Err(ShpError::UnsupportedShapeType(other.to_string())),
        }
    }

    /// Decodes a body given the raw type code from the record.
    pub fn decode_code<R: Read>(code: i32, reader: &mut RecordReader<R>) -> Result<Self, ShpError> {
        Self::decode(ShapeType::try_from(code)?, reader)
    }

    /// Decodes a body held in memory.
    pub fn from_bytes(shape_type: ShapeType, bytes: &[u8]) -> Result<Self, ShpError> {
        Self::decode(shape_type, &mut RecordReader::from_slice(bytes))
    }

    /// Encodes the body. The type code is not written.
    pub fn encode<W: Write>(&self, writer: &mut RecordWriter<W>) -> Result<(), ShpError> {
        debug!("encoding {} record body", self.shape_type());
        match self {
            Geometry::Null => Null.encode(writer),
            Geometry::Point(p) => p.encode(writer),
            Geometry::PolyLine(p) => p.encode(writer),
            Geometry::Polygon(p) => p.encode(writer),
        }
    }

    /// Encodes the body into a new buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ShpError> {
        let mut writer = RecordWriter::new(Vec::with_capacity(self.encoded_len()));
        self.encode(&mut writer)?;
        Ok(writer.into_inner())
    }

    pub fn shape_type(&self) -> ShapeType {
        match self {
            Geometry::Null => ShapeType::Null,
            Geometry::Point(_) => ShapeType::Point,
            Geometry::PolyLine(_) => ShapeType::PolyLine,
            Geometry::Polygon(_) => ShapeType::Polygon,
        }
    }

    /// Bounding box computed from the coordinates.
    pub fn bbox(&self) -> BoundingBox {
        match self {
            Geometry::Null => Null.bbox(),
            Geometry::Point(p) => p.bbox(),
            Geometry::PolyLine(p) => p.bbox(),
            Geometry::Polygon(p) => p.bbox(),
        }
    }

    /// Box as stored in the record, for shapes that store one.
    pub fn stored_bbox(&self) -> Option<BoundingBox> {
        match self {
            Geometry::PolyLine(p) => Some(p.stored_bbox()),
            Geometry::Polygon(p) => Some(p.stored_bbox()),
            Geometry::Null | Geometry::Point(_) => None,
        }
    }

    pub fn encoded_len(&self) -> usize {
        match self {
            Geometry::Null => Null.encoded_len(),
            Geometry::Point(p) => p.encoded_len(),
            Geometry::PolyLine(p) => p.encoded_len(),
            Geometry::Polygon(p) => p.encoded_len(),
        }
    }

    /// Box covering every geometry, skipping Null shapes.
    ///
    /// Returns the zero box if nothing but Null shapes (or nothing) is given.
    pub fn bbox_of_all<'a>(geometries: impl IntoIterator<Item = &'a Geometry>) -> BoundingBox {
        let mut boxes = geometries
            .into_iter()
            .filter(|g| !matches!(g, Geometry::Null))
            .map(Geometry::bbox);

        let Some(mut total) = boxes.next() else {
            return BoundingBox::default();
        };
        for bbox in boxes {
            total.extend(bbox);
        }
        total
    }
}

impl From<Point> for Geometry {
    fn from(p: Point) -> Self {
        Geometry::Point(p)
    }
}

impl From<PolyLine> for Geometry {
    fn from(p: PolyLine) -> Self {
        Geometry::PolyLine(p)
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Geometry::Polygon(p)
    }
}

/// Decodes `<type code><body>` the way a container would and re-encodes it.
///
/// Panics if a successfully decoded body does not re-encode to the same
/// bytes, so the fuzzer reports it.
#[cfg(feature = "fuzzing")]
pub fn fuzz_decode_record(data: &[u8]) -> Result<(), ShpError> {
    let mut reader = RecordReader::from_slice(data);
    let code = reader.read_i32("shape_type")?;
    let geometry = Geometry::decode_code(code, &mut reader)?;

    let consumed = data.len() - reader.remaining().unwrap_or(0) as usize;
    let bytes = geometry.to_bytes()?;
    assert_eq!(bytes, data[4..consumed], "re-encoded body differs");
    Ok(())
}
