//! Axis-aligned bounding boxes in XYXY order.

use serde::{Deserialize, Serialize};

use super::point::Point;

/// An axis-aligned bounding box (xmin, ymin, xmax, ymax).
///
/// This is the `Box` of the Shapefile record layout: four little-endian
/// doubles in exactly this order.
///
/// Note: This type does NOT enforce that min <= max. A box decoded from a
/// record holds whatever the file says, and [`is_ordered`](Self::is_ordered)
/// reports whether it makes sense.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl BoundingBox {
    /// Creates a new bounding box from explicit coordinates.
    #[inline]
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Computes the smallest box covering `points`.
    ///
    /// The first point seeds all four bounds and every later point relaxes
    /// them. An empty slice yields the zero box `{0, 0, 0, 0}`, the same box
    /// a [`Null`](super::Null) shape reports.
    pub fn from_points(points: &[Point]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };

        let mut bbox = Self::new(first.x, first.y, first.x, first.y);
        for p in rest {
            if p.x < bbox.xmin {
                bbox.xmin = p.x;
            }
            if p.y < bbox.ymin {
                bbox.ymin = p.y;
            }
            if p.x > bbox.xmax {
                bbox.xmax = p.x;
            }
            if p.y > bbox.ymax {
                bbox.ymax = p.y;
            }
        }
        bbox
    }

    /// Widens this box so it also covers `other`. Never narrows.
    pub fn extend(&mut self, other: BoundingBox) {
        if other.xmin < self.xmin {
            self.xmin = other.xmin;
        }
        if other.ymin < self.ymin {
            self.ymin = other.ymin;
        }
        if other.xmax > self.xmax {
            self.xmax = other.xmax;
        }
        if other.ymax > self.ymax {
            self.ymax = other.ymax;
        }
    }

    /// Returns the width of the bounding box.
    ///
    /// May be negative if the box is malformed (xmax < xmin).
    #[inline]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Returns the height of the bounding box.
    ///
    /// May be negative if the box is malformed (ymax < ymin).
    #[inline]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Returns true if the box is properly ordered (min <= max for both axes).
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.xmin <= self.xmax && self.ymin <= self.ymax
    }

    /// Returns true if `other` lies entirely inside this box (edges included).
    #[inline]
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.xmin <= other.xmin
            && self.ymin <= other.ymin
            && self.xmax >= other.xmax
            && self.ymax >= other.ymax
    }
}
