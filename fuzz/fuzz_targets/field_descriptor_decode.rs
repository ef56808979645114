//! Fuzz target for DBF field descriptor decoding.
//!
//! Any descriptor that parses must encode back to the same 32 bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shpcodec::dbf::{Field, FIELD_DESCRIPTOR_LEN};

fuzz_target!(|data: &[u8]| {
    if let Ok(field) = Field::from_bytes(data) {
        assert_eq!(field.to_bytes()[..], data[..FIELD_DESCRIPTOR_LEN]);
        let _ = field.name_str();
    }
});
