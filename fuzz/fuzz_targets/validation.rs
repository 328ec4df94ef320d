#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let first = jsontypes::is_valid(text);
        assert_eq!(first, jsontypes::is_valid(text));
    }
});
