//! DBF attribute table pieces.
//!
//! Only the column descriptor lives here; the table header and row
//! reader/writer that use it belong to the table layer.

mod field;

pub use field::{Field, FieldType, FIELD_DESCRIPTOR_LEN, FIELD_NAME_LEN};
