//! Point and Null shapes.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use super::bbox::BoundingBox;
use super::shape::Shape;
use super::shape_type::ShapeType;
use crate::error::ShpError;
use crate::wire::{RecordReader, RecordWriter};

/// A 2D point. Record body: X then Y, 16 bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Shape for Point {
    const SHAPE_TYPE: ShapeType = ShapeType::Point;

    fn bbox(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.x, self.y)
    }

    fn decode<R: Read>(reader: &mut RecordReader<R>) -> Result<Self, ShpError> {
        let x = reader.read_f64("x")?;
        let y = reader.read_f64("y")?;
        Ok(Self { x, y })
    }

    fn encode<W: Write>(&self, writer: &mut RecordWriter<W>) -> Result<(), ShpError> {
        writer.write_f64(self.x)?;
        writer.write_f64(self.y)
    }

    fn encoded_len(&self) -> usize {
        16
    }
}

/// The empty shape. Its record body has no bytes at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Null;

impl Shape for Null {
    const SHAPE_TYPE: ShapeType = ShapeType::Null;

    fn bbox(&self) -> BoundingBox {
        BoundingBox::default()
    }

    fn decode<R: Read>(_reader: &mut RecordReader<R>) -> Result<Self, ShpError> {
        Ok(Null)
    }

    fn encode<W: Write>(&self, _writer: &mut RecordWriter<W>) -> Result<(), ShpError> {
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        0
    }
}
