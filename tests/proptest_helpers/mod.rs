#![allow(dead_code)]

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use shpcodec::dbf::{Field, FieldType};
use shpcodec::geom::{BoundingBox, Geometry, MultiPart, PartKind, Point};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Any finite coordinate, including negatives and zero.
pub fn arb_coord() -> BoxedStrategy<f64> {
    prop_oneof![
        Just(0.0),
        Just(-0.0),
        -1.0e7..1.0e7f64,
        prop::num::f64::NORMAL,
    ]
    .boxed()
}

pub fn arb_point() -> BoxedStrategy<Point> {
    (arb_coord(), arb_coord())
        .prop_map(|(x, y)| Point::new(x, y))
        .boxed()
}

pub fn arb_bbox() -> BoxedStrategy<BoundingBox> {
    (arb_point(), arb_point())
        .prop_map(|(a, b)| BoundingBox::from_points(&[a, b]))
        .boxed()
}

/// A well-formed multi-part shape: ascending part offsets starting at 0.
pub fn arb_multipart<K: PartKind + 'static>(max_parts: usize, max_points: usize) -> BoxedStrategy<MultiPart<K>> {
    prop::collection::vec(arb_point(), 1..=max_points)
        .prop_flat_map(move |points| {
            let len = points.len();
            let offsets = prop::collection::vec(1..len.max(2), 0..max_parts);
            (Just(points), offsets)
        })
        .prop_map(|(points, mut offsets)| {
            offsets.sort_unstable();
            offsets.dedup();
            let mut parts = vec![0i32];
            parts.extend(
                offsets
                    .into_iter()
                    .filter(|&o| o < points.len())
                    .map(|o| o as i32),
            );
            MultiPart::new(parts, points).expect("generated arrays fit in a record")
        })
        .boxed()
}

/// Raw record fields with no consistency between header and arrays.
pub fn arb_raw_multipart<K: PartKind + 'static>() -> BoxedStrategy<MultiPart<K>> {
    (
        arb_bbox(),
        any::<i32>(),
        any::<i32>(),
        prop::collection::vec(any::<i32>(), 0..8),
        prop::collection::vec(arb_point(), 0..8),
    )
        .prop_map(|(bbox, num_parts, num_points, parts, points)| {
            MultiPart::from_raw(bbox, num_parts, num_points, parts, points)
        })
        .boxed()
}

pub fn arb_geometry() -> BoxedStrategy<Geometry> {
    prop_oneof![
        Just(Geometry::Null),
        arb_point().prop_map(Geometry::Point),
        arb_multipart(4, 32).prop_map(Geometry::PolyLine),
        arb_multipart(4, 32).prop_map(Geometry::Polygon),
    ]
    .boxed()
}

pub fn arb_field_type() -> BoxedStrategy<FieldType> {
    prop_oneof![
        Just(FieldType::Character),
        Just(FieldType::Number),
        Just(FieldType::Float),
        Just(FieldType::Date),
    ]
    .boxed()
}

pub fn arb_field() -> BoxedStrategy<Field> {
    (
        arb_field_type(),
        "[A-Za-z_][A-Za-z0-9_]{0,15}",
        any::<u8>(),
        any::<u8>(),
    )
        .prop_map(|(field_type, name, size, precision)| match field_type {
            FieldType::Character => Field::string(&name, size),
            FieldType::Number => Field::number(&name, size),
            FieldType::Float => Field::float(&name, size, precision),
            FieldType::Date => Field::date(&name),
        })
        .boxed()
}
