//! Fuzz harness for `Range::parse` and the derived operations that walk
//! its comparator lists (`test`, `min_version`, `outside`). A malformed
//! or adversarial range expression must be rejected with a parse error,
//! never a panic, and any range that does parse must answer every
//! derived query without panicking either.

#![no_main]

use libfuzzer_sys::fuzz_target;
use semverix::{Options, Range, Version};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(range) = Range::parse(input, Options::new(true, false)) else {
        return;
    };

    let probe = Version::new(0, 0, 0);
    let _ = range.test(&probe);
    let _ = range.min_version();
    let _ = range.gtr(&probe);
    let _ = range.ltr(&probe);
    let _ = range.to_string();
});
