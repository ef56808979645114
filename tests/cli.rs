use assert_cmd::Command;
use predicates::prelude::*;

mod common;

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.arg("-V");
    cmd.assert()
        .success()
        .stdout(format!("shpcodec {}\n", env!("CARGO_PKG_VERSION")));
}

// Decode subcommand tests

#[test]
fn decode_point_json() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let input = temp.path().join("point.bin");
    common::write_bytes(&input, &common::point_body(1.5, -2.0));

    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.arg("decode").arg(&input).args(["--type", "point"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"shape_type\": \"point\""))
        .stdout(predicate::str::contains("\"x\": 1.5"))
        .stdout(predicate::str::contains("\"encoded_len\": 16"));
}

#[test]
fn decode_polygon_text_reports_stale_box() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let input = temp.path().join("polygon.bin");
    let body = common::multipart_body(
        [-100.0, -100.0, 100.0, 100.0],
        &[0],
        &[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (0.0, 0.0)],
    );
    common::write_bytes(&input, &body);

    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.arg("decode")
        .arg(&input)
        .args(["--type", "polygon", "--output", "text"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Shape type: polygon"))
        .stdout(predicate::str::contains("Parts: 1"))
        .stdout(predicate::str::contains("Points: 4"))
        .stdout(predicate::str::contains("Bounding box: [0, 0, 2, 2]"))
        .stdout(predicate::str::contains("does not match points"));
}

#[test]
fn decode_truncated_body_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let input = temp.path().join("short.bin");
    common::write_bytes(&input, &common::multipart_header([0.0; 4], 1, 5));

    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.arg("decode").arg(&input).args(["--type", "polyline"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Truncated input"));
}

#[test]
fn decode_unsupported_type_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let input = temp.path().join("empty.bin");
    common::write_bytes(&input, &[]);

    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.arg("decode").arg(&input).args(["--type", "multipatch"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shape type"));
}

#[test]
fn decode_nonexistent_file_fails() {
    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.args(["decode", "nonexistent_file.bin", "--type", "point"]);
    cmd.assert().failure();
}

// Encode subcommand tests

#[test]
fn encode_then_decode_polyline() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let json = temp.path().join("line.json");
    let body = temp.path().join("line.bin");
    std::fs::write(
        &json,
        r#"{"type":"polyline","parts":[0],"points":[{"x":0.0,"y":0.0},{"x":3.0,"y":4.0}]}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.arg("encode").arg(&json).arg("--out").arg(&body);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote 76 byte(s) (polyline)"));

    let bytes = std::fs::read(&body).unwrap();
    assert_eq!(
        bytes,
        common::multipart_body([0.0, 0.0, 3.0, 4.0], &[0], &[(0.0, 0.0), (3.0, 4.0)])
    );

    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.arg("decode")
        .arg(&body)
        .args(["--type", "polyline", "--output", "text"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Bounding box: [0, 0, 3, 4]"));
}

#[test]
fn encode_invalid_json_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let json = temp.path().join("bad.json");
    std::fs::write(&json, r#"{"type":"circle","r":1}"#).unwrap();

    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.arg("encode")
        .arg(&json)
        .arg("--out")
        .arg(temp.path().join("out.bin"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse geometry JSON"));
}

// Field subcommand tests

#[test]
fn field_prints_descriptor_bytes() {
    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.args(["field", "City", "--type", "C", "--size", "50"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Name: City"))
        .stdout(predicate::str::contains("Type: C"))
        .stdout(predicate::str::contains(
            "Bytes: 43 69 74 79 00 00 00 00 00 00 00 43 00 00 00 00 32 00",
        ));
}

#[test]
fn field_truncates_long_names() {
    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.args(["field", "ExceedsElevenChars", "--type", "N", "--size", "10"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Name: ExceedsElev\n"));
}

#[test]
fn field_strict_rejects_long_names() {
    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.args(["field", "ExceedsElevenChars", "--strict"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("maximum is 11"));
}

#[test]
fn field_date_is_eight_wide() {
    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.args(["field", "UPDATED", "--type", "date", "--size", "30"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Type: D"))
        .stdout(predicate::str::contains("Size: 8"));
}

#[test]
fn field_unknown_type_names_the_input() {
    let mut cmd = Command::cargo_bin("shpcodec").unwrap();
    cmd.args(["field", "ACTIVE", "--type", "xyz"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown DBF field type 'xyz'"));
}
