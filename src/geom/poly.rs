//! PolyLine and Polygon shapes.
//!
//! Both are a [`MultiPart`] over a kind marker, so they share a single
//! record codec and produce identical bytes for identical field values.

use std::io::{Read, Write};
use std::marker::PhantomData;

use log::trace;
use serde::{Deserialize, Serialize};

use super::bbox::BoundingBox;
use super::kind::{Line, PartKind, Ring};
use super::point::Point;
use super::shape::Shape;
use super::shape_type::ShapeType;
use crate::error::ShpError;
use crate::wire::{RecordReader, RecordWriter};

/// Bytes before the parts array: box, NumParts, NumPoints.
const HEADER_LEN: usize = 32 + 4 + 4;
const PART_LEN: usize = 4;
const POINT_LEN: usize = 16;

fn record_count(field: &'static str, len: usize) -> Result<i32, ShpError> {
    i32::try_from(len).map_err(|_| ShpError::InvalidLength {
        field,
        value: i64::try_from(len).unwrap_or(i64::MAX),
    })
}

/// A shape made of one or more parts over a shared point array.
///
/// Fields mirror the record body one to one. `bbox`, `num_parts` and
/// `num_points` are kept as decoded (or as set by the caller) and are written
/// back verbatim; [`Shape::bbox`] always recomputes from `points` instead of
/// trusting the stored box.
pub struct MultiPart<K> {
    /// Box as stored in the record.
    pub bbox: BoundingBox,
    pub num_parts: i32,
    pub num_points: i32,
    /// Start index into `points` of each part, ascending.
    pub parts: Vec<i32>,
    pub points: Vec<Point>,
    _kind: PhantomData<K>,
}

/// Line strings, shape type 3.
pub type PolyLine = MultiPart<Line>;

/// Rings, shape type 5.
pub type Polygon = MultiPart<Ring>;

impl<K> MultiPart<K> {
    /// Builds a shape from parts and points, filling in the box and counts.
    ///
    /// # Errors
    /// [`ShpError::InvalidLength`] if either array holds more than
    /// `i32::MAX` elements, which no record can carry.
    pub fn new(parts: Vec<i32>, points: Vec<Point>) -> Result<Self, ShpError> {
        let num_parts = record_count("num_parts", parts.len())?;
        let num_points = record_count("num_points", points.len())?;
        Ok(Self {
            bbox: BoundingBox::from_points(&points),
            num_parts,
            num_points,
            parts,
            points,
            _kind: PhantomData,
        })
    }

    /// Builds a shape from raw record fields without checking them.
    pub fn from_raw(
        bbox: BoundingBox,
        num_parts: i32,
        num_points: i32,
        parts: Vec<i32>,
        points: Vec<Point>,
    ) -> Self {
        Self {
            bbox,
            num_parts,
            num_points,
            parts,
            points,
            _kind: PhantomData,
        }
    }

    /// Returns the box exactly as stored in the record.
    ///
    /// This may disagree with the points; see [`Shape::bbox`] for the
    /// recomputed one.
    #[inline]
    pub fn stored_bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Returns true if the stored box covers exactly the points.
    pub fn stored_bbox_matches(&self) -> bool {
        self.bbox == BoundingBox::from_points(&self.points)
    }

    /// Returns the points of part `index`.
    ///
    /// The last part runs to the end of `points`. Out-of-range or
    /// descending part offsets yield an empty slice rather than a panic.
    pub fn part_points(&self, index: usize) -> Option<&[Point]> {
        let start = *self.parts.get(index)?;
        let end = self
            .parts
            .get(index + 1)
            .copied()
            .unwrap_or(self.points.len() as i32);

        let len = self.points.len();
        let start = usize::try_from(start).unwrap_or(0).min(len);
        let end = usize::try_from(end).unwrap_or(0).min(len);
        if start > end {
            return Some(&[]);
        }
        Some(&self.points[start..end])
    }

    /// Iterates over the point slice of every part.
    pub fn parts_iter(&self) -> impl Iterator<Item = &[Point]> + '_ {
        (0..self.parts.len()).filter_map(move |i| self.part_points(i))
    }

    /// Reinterprets the same fields as another kind.
    ///
    /// The record bytes do not change; only the shape type does.
    pub fn recast<K2>(self) -> MultiPart<K2> {
        MultiPart {
            bbox: self.bbox,
            num_parts: self.num_parts,
            num_points: self.num_points,
            parts: self.parts,
            points: self.points,
            _kind: PhantomData,
        }
    }
}

impl<K: PartKind> Shape for MultiPart<K> {
    const SHAPE_TYPE: ShapeType = K::SHAPE_TYPE;

    fn bbox(&self) -> BoundingBox {
        BoundingBox::from_points(&self.points)
    }

    fn decode<R: Read>(reader: &mut RecordReader<R>) -> Result<Self, ShpError> {
        let bbox = BoundingBox::new(
            reader.read_f64("box.xmin")?,
            reader.read_f64("box.ymin")?,
            reader.read_f64("box.xmax")?,
            reader.read_f64("box.ymax")?,
        );
        let num_parts = reader.read_count("num_parts", PART_LEN)?;
        let num_points = reader.read_count("num_points", POINT_LEN)?;
        trace!(
            "{}: {num_parts} part(s), {num_points} point(s)",
            K::SHAPE_TYPE
        );

        let parts = reader.read_array(num_parts, PART_LEN, "parts", |r| r.read_i32("parts"))?;
        let points = reader.read_array(num_points, POINT_LEN, "points", |r| Point::decode(r))?;

        Ok(Self::from_raw(bbox, num_parts, num_points, parts, points))
    }

    fn encode<W: Write>(&self, writer: &mut RecordWriter<W>) -> Result<(), ShpError> {
        writer.write_f64(self.bbox.xmin)?;
        writer.write_f64(self.bbox.ymin)?;
        writer.write_f64(self.bbox.xmax)?;
        writer.write_f64(self.bbox.ymax)?;
        writer.write_i32(self.num_parts)?;
        writer.write_i32(self.num_points)?;
        for part in &self.parts {
            writer.write_i32(*part)?;
        }
        for point in &self.points {
            point.encode(writer)?;
        }
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        HEADER_LEN + PART_LEN * self.parts.len() + POINT_LEN * self.points.len()
    }
}

impl<K> Clone for MultiPart<K> {
    fn clone(&self) -> Self {
        Self::from_raw(
            self.bbox,
            self.num_parts,
            self.num_points,
            self.parts.clone(),
            self.points.clone(),
        )
    }
}

impl<K> PartialEq for MultiPart<K> {
    fn eq(&self, other: &Self) -> bool {
        self.bbox == other.bbox
            && self.num_parts == other.num_parts
            && self.num_points == other.num_points
            && self.parts == other.parts
            && self.points == other.points
    }
}

impl<K> Default for MultiPart<K> {
    fn default() -> Self {
        Self::from_raw(BoundingBox::default(), 0, 0, Vec::new(), Vec::new())
    }
}

impl<K: PartKind> std::fmt::Debug for MultiPart<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match K::SHAPE_TYPE {
            ShapeType::Polygon => "Polygon",
            _ => "PolyLine",
        };
        f.debug_struct(name)
            .field("bbox", &self.bbox)
            .field("num_parts", &self.num_parts)
            .field("num_points", &self.num_points)
            .field("parts", &self.parts)
            .field("points", &self.points)
            .finish()
    }
}

// Custom serde implementation to avoid K: Serialize/Deserialize bounds
impl<K> Serialize for MultiPart<K> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("MultiPart", 5)?;
        state.serialize_field("bbox", &self.bbox)?;
        state.serialize_field("num_parts", &self.num_parts)?;
        state.serialize_field("num_points", &self.num_points)?;
        state.serialize_field("parts", &self.parts)?;
        state.serialize_field("points", &self.points)?;
        state.end()
    }
}

impl<'de, K> Deserialize<'de> for MultiPart<K> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Box and counts may be omitted in hand-written JSON; they are then
        // derived from the arrays.
        #[derive(Deserialize)]
        struct MultiPartData {
            #[serde(default)]
            bbox: Option<BoundingBox>,
            #[serde(default)]
            num_parts: Option<i32>,
            #[serde(default)]
            num_points: Option<i32>,
            parts: Vec<i32>,
            points: Vec<Point>,
        }
        let data = MultiPartData::deserialize(deserializer)?;
        let num_parts = match data.num_parts {
            Some(n) => n,
            None => i32::try_from(data.parts.len()).map_err(serde::de::Error::custom)?,
        };
        let num_points = match data.num_points {
            Some(n) => n,
            None => i32::try_from(data.points.len()).map_err(serde::de::Error::custom)?,
        };
        let bbox = data
            .bbox
            .unwrap_or_else(|| BoundingBox::from_points(&data.points));
        Ok(MultiPart::from_raw(
            bbox,
            num_parts,
            num_points,
            data.parts,
            data.points,
        ))
    }
}
