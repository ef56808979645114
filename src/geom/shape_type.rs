//! Shape type codes used in record headers.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ShpError;

/// Shape type taxonomy of the Shapefile format.
///
/// The discriminant is the little-endian `i32` the container writes in front
/// of every record body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ShapeType {
    Null = 0,
    Point = 1,
    PolyLine = 3,
    Polygon = 5,
    MultiPoint = 8,
    PointZ = 11,
    PolyLineZ = 13,
    PolygonZ = 15,
    MultiPointZ = 18,
    PointM = 21,
    PolyLineM = 23,
    PolygonM = 25,
    MultiPointM = 28,
    MultiPatch = 31,
}

impl ShapeType {
    pub const ALL: [ShapeType; 14] = [
        ShapeType::Null,
        ShapeType::Point,
        ShapeType::PolyLine,
        ShapeType::Polygon,
        ShapeType::MultiPoint,
        ShapeType::PointZ,
        ShapeType::PolyLineZ,
        ShapeType::PolygonZ,
        ShapeType::MultiPointZ,
        ShapeType::PointM,
        ShapeType::PolyLineM,
        ShapeType::PolygonM,
        ShapeType::MultiPointM,
        ShapeType::MultiPatch,
    ];

    /// Returns the record header code.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns true if this crate can decode and encode bodies of this type.
    pub fn is_supported(self) -> bool {
        matches!(
            self,
            ShapeType::Null | ShapeType::Point | ShapeType::PolyLine | ShapeType::Polygon
        )
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ShapeType::Null => "null",
            ShapeType::Point => "point",
            ShapeType::PolyLine => "polyline",
            ShapeType::Polygon => "polygon",
            ShapeType::MultiPoint => "multipoint",
            ShapeType::PointZ => "pointz",
            ShapeType::PolyLineZ => "polylinez",
            ShapeType::PolygonZ => "polygonz",
            ShapeType::MultiPointZ => "multipointz",
            ShapeType::PointM => "pointm",
            ShapeType::PolyLineM => "polylinem",
            ShapeType::PolygonM => "polygonm",
            ShapeType::MultiPointM => "multipointm",
            ShapeType::MultiPatch => "multipatch",
        }
    }
}

impl TryFrom<i32> for ShapeType {
    type Error = ShpError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        ShapeType::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or(ShpError::UnknownShapeType(code))
    }
}

impl FromStr for ShapeType {
    type Err = ShpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        ShapeType::ALL
            .into_iter()
            .find(|t| t.name() == lower)
            .ok_or_else(|| ShpError::UnsupportedShapeType(s.to_string()))
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ShapeType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
