//! Fuzz target for shape record decoding.
//!
//! This fuzzer feeds arbitrary bytes, read as a shape type code followed by
//! a record body, checking for panics, unbounded allocation, or bodies that
//! do not re-encode to the input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shpcodec::geom::fuzz_decode_record;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = fuzz_decode_record(data);
});
