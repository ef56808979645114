#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Box and count header of a PolyLine/Polygon body.
pub fn multipart_header(bbox: [f64; 4], num_parts: i32, num_points: i32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(40);
    for v in bbox {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    bytes.extend_from_slice(&num_parts.to_le_bytes());
    bytes.extend_from_slice(&num_points.to_le_bytes());
    bytes
}

/// A complete PolyLine/Polygon body, built field by field.
pub fn multipart_body(bbox: [f64; 4], parts: &[i32], points: &[(f64, f64)]) -> Vec<u8> {
    let mut bytes = multipart_header(bbox, parts.len() as i32, points.len() as i32);
    for part in parts {
        bytes.extend_from_slice(&part.to_le_bytes());
    }
    for (x, y) in points {
        bytes.extend_from_slice(&x.to_le_bytes());
        bytes.extend_from_slice(&y.to_le_bytes());
    }
    bytes
}

pub fn point_body(x: f64, y: f64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(16);
    bytes.extend_from_slice(&x.to_le_bytes());
    bytes.extend_from_slice(&y.to_le_bytes());
    bytes
}

pub fn write_bytes(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(path, bytes).expect("write fixture");
}
