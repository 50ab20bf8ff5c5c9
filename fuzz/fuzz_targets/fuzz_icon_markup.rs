#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(markup) = std::str::from_utf8(data) {
        // Icon parsing is total: it must never panic
        let _ = portal_nav::parse_icon(markup);
    }
});
