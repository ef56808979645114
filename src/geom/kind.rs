//! Multi-part shape kind markers.
//!
//! These are zero-sized types (ZSTs) used as type parameters to tell a
//! PolyLine from a Polygon at compile time. Both share one record layout;
//! only the shape type code written by the container differs.

use std::fmt;

use super::shape_type::ShapeType;

/// Associates a marker type with the shape type code it encodes as.
pub trait PartKind {
    const SHAPE_TYPE: ShapeType;
}

/// Marker for open line strings (PolyLine).
///
/// Each part is an independent sequence of connected vertices.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {}

/// Marker for closed rings (Polygon).
///
/// Each part is a ring; the first vertex is repeated as the last.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ring {}

impl PartKind for Line {
    const SHAPE_TYPE: ShapeType = ShapeType::PolyLine;
}

impl PartKind for Ring {
    const SHAPE_TYPE: ShapeType = ShapeType::Polygon;
}

impl fmt::Debug for Line {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Ring {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
