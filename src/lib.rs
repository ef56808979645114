//! Shpcodec: binary codec for Shapefile geometry records and DBF field
//! descriptors.
//!
//! The container layers (the `.shp` file header, the record index, the
//! `.dbf` table reader) are not part of this crate. They hand us a stream
//! positioned at a record body, or ask us to write one, and this crate does
//! the little-endian field work in between.
//!
//! # Modules
//!
//! - [`geom`]: Shape types, bounding boxes and record body codecs
//! - [`dbf`]: DBF column descriptors
//! - [`wire`]: Little-endian record readers and writers
//! - [`error`]: Error types for shpcodec operations

pub mod dbf;
pub mod error;
pub mod geom;
pub mod wire;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{info, warn};
use serde::Serialize;

pub use error::ShpError;

use dbf::{Field, FieldType};
use geom::{BoundingBox, Geometry, ShapeType};
use wire::{RecordReader, RecordWriter};

/// The shpcodec CLI application.
#[derive(Parser)]
#[command(name = "shpcodec")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Decode a raw record body and print it.
    Decode(DecodeArgs),
    /// Encode a JSON geometry into a raw record body.
    Encode(EncodeArgs),
    /// Build a DBF field descriptor and print its bytes.
    Field(FieldArgs),
}

/// Arguments for the decode subcommand.
#[derive(clap::Args)]
struct DecodeArgs {
    /// File holding exactly one record body (no record header).
    input: PathBuf,

    /// Shape type of the record ('null', 'point', 'polyline', 'polygon').
    #[arg(long = "type", value_name = "SHAPE")]
    shape_type: String,

    /// Output format ('json' or 'text').
    #[arg(long, default_value = "json")]
    output: String,
}

/// Arguments for the encode subcommand.
#[derive(clap::Args)]
struct EncodeArgs {
    /// JSON geometry, e.g. {"type":"point","x":1.0,"y":2.0}.
    input: PathBuf,

    /// Where to write the record body.
    #[arg(long)]
    out: PathBuf,
}

/// Arguments for the field subcommand.
#[derive(clap::Args)]
struct FieldArgs {
    /// Column name (at most 11 bytes are stored).
    name: String,

    /// Column type ('C', 'N', 'F' or 'D').
    #[arg(long = "type", value_name = "TYPE", default_value = "C")]
    field_type: String,

    /// Column width. Ignored for date columns.
    #[arg(long, default_value_t = 10)]
    size: u8,

    /// Decimal places for float columns.
    #[arg(long, default_value_t = 0)]
    precision: u8,

    /// Fail on names longer than 11 bytes instead of truncating.
    #[arg(long)]
    strict: bool,
}

/// Run the shpcodec CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ShpError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Decode(args)) => run_decode(args),
        Some(Commands::Encode(args)) => run_encode(args),
        Some(Commands::Field(args)) => run_field(args),
        None => {
            println!("shpcodec {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Shapefile record and DBF field descriptor codec.");
            println!();
            println!("Run 'shpcodec --help' for usage information.");
            Ok(())
        }
    }
}

/// What `decode` prints in JSON mode.
#[derive(Serialize)]
struct DecodeReport<'a> {
    shape_type: ShapeType,
    geometry: &'a Geometry,
    #[serde(skip_serializing_if = "Option::is_none")]
    stored_bbox: Option<BoundingBox>,
    computed_bbox: BoundingBox,
    encoded_len: usize,
}

/// Execute the decode subcommand.
fn run_decode(args: DecodeArgs) -> Result<(), ShpError> {
    let shape_type: ShapeType = args.shape_type.parse()?;

    let file = File::open(&args.input)?;
    let len = file.metadata()?.len();
    let mut reader = RecordReader::with_limit(BufReader::new(file), len);
    let geometry = Geometry::decode(shape_type, &mut reader)?;

    if let Some(left) = reader.remaining().filter(|&n| n > 0) {
        warn!(
            "{} byte(s) after the {} body were not read",
            left,
            shape_type
        );
    }

    let computed_bbox = geometry.bbox();
    let stored_bbox = geometry.stored_bbox();

    match args.output.as_str() {
        "text" => {
            println!("Shape type: {}", shape_type);
            println!("Body size: {} bytes", geometry.encoded_len());
            match &geometry {
                Geometry::PolyLine(p) => print_parts(p.num_parts, p.num_points),
                Geometry::Polygon(p) => print_parts(p.num_parts, p.num_points),
                Geometry::Point(p) => println!("Point: ({}, {})", p.x, p.y),
                Geometry::Null => {}
            }
            println!("Bounding box: {}", format_bbox(&computed_bbox));
            if let Some(stored) = stored_bbox {
                let note = if stored == computed_bbox {
                    ""
                } else {
                    " (does not match points)"
                };
                println!("Stored box: {}{}", format_bbox(&stored), note);
            }
        }
        _ => {
            let report = DecodeReport {
                shape_type,
                geometry: &geometry,
                stored_bbox,
                computed_bbox,
                encoded_len: geometry.encoded_len(),
            };
            let json = serde_json::to_string_pretty(&report).map_err(ShpError::JsonWrite)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn print_parts(num_parts: i32, num_points: i32) {
    println!("Parts: {}", num_parts);
    println!("Points: {}", num_points);
}

fn format_bbox(bbox: &BoundingBox) -> String {
    format!(
        "[{}, {}, {}, {}]",
        bbox.xmin, bbox.ymin, bbox.xmax, bbox.ymax
    )
}

/// Execute the encode subcommand.
fn run_encode(args: EncodeArgs) -> Result<(), ShpError> {
    let file = File::open(&args.input)?;
    let geometry: Geometry = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        ShpError::JsonParse {
            path: args.input.clone(),
            source,
        }
    })?;

    let out = File::create(&args.out)?;
    let mut writer = RecordWriter::new(BufWriter::new(out));
    geometry.encode(&mut writer)?;
    writer.flush()?;

    info!("encoded {} body to {}", geometry.shape_type(), args.out.display());
    println!(
        "Wrote {} byte(s) ({}) to {}",
        writer.bytes_written(),
        geometry.shape_type(),
        args.out.display()
    );
    Ok(())
}

/// Execute the field subcommand.
fn run_field(args: FieldArgs) -> Result<(), ShpError> {
    let field_type: FieldType = args.field_type.parse()?;

    let field = if args.strict {
        let size = match field_type {
            FieldType::Date => 8,
            _ => args.size,
        };
        let precision = match field_type {
            FieldType::Float => args.precision,
            _ => 0,
        };
        Field::try_new(field_type, &args.name, size, precision)?
    } else {
        match field_type {
            FieldType::Character => Field::string(&args.name, args.size),
            FieldType::Number => Field::number(&args.name, args.size),
            FieldType::Float => Field::float(&args.name, args.size, args.precision),
            FieldType::Date => Field::date(&args.name),
        }
    };

    let hex: Vec<String> = field.to_bytes().iter().map(|b| format!("{:02x}", b)).collect();
    println!("Name: {}", field);
    println!("Type: {}", field.field_type as char);
    println!("Size: {}", field.size);
    println!("Precision: {}", field.precision);
    println!("Bytes: {}", hex.join(" "));
    Ok(())
}
