//! Fuzz harness for `Version::parse`.
//!
//! Arbitrary bytes must never panic the parser, whether or not they
//! happen to land inside the grammar, under either the strict or the
//! loose option set.

#![no_main]

use libfuzzer_sys::fuzz_target;
use semverix::{Options, Version};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let _ = Version::parse(input, Options::new(false, false));
    let _ = Version::parse(input, Options::new(true, false));
    let _ = Version::parse(input, Options::new(true, true));
});
