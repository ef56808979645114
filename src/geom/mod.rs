//! Shapefile geometry record bodies.
//!
//! Each supported shape type implements [`Shape`]: it can report its
//! bounding box and decode/encode its record body. [`Geometry`] wraps the
//! supported types in one enum so a container reader can decode a record
//! from nothing but the type code in its header.
//!
//! # Example
//!
//! ```
//! use shpcodec::geom::{BoundingBox, Geometry, Point, Polygon, Shape, ShapeType};
//!
//! let ring = Polygon::new(
//!     vec![0],
//!     vec![
//!         Point::new(0.0, 0.0),
//!         Point::new(0.0, 1.0),
//!         Point::new(1.0, 1.0),
//!         Point::new(0.0, 0.0),
//!     ],
//! )
//! .unwrap();
//! let body = ring.to_bytes().unwrap();
//!
//! let decoded = Geometry::from_bytes(ShapeType::Polygon, &body).unwrap();
//! assert_eq!(decoded.bbox(), BoundingBox::new(0.0, 0.0, 1.0, 1.0));
//! ```

mod bbox;
mod kind;
mod point;
mod poly;
mod shape;
mod shape_type;

// Re-export core types for convenient access
pub use bbox::BoundingBox;
pub use kind::{Line, PartKind, Ring};
pub use point::{Null, Point};
pub use poly::{MultiPart, PolyLine, Polygon};
pub use shape::{Geometry, Shape};
#[cfg(feature = "fuzzing")]
pub use shape::fuzz_decode_record;
pub use shape_type::ShapeType;
