#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let compared = jsontypes::semantic_equals(text, text);
        assert_eq!(
            compared.is_ok(),
            jsontypes::is_valid(text),
            "validation and comparison disagree: {text}"
        );
        if let Ok(matches) = compared {
            assert!(matches, "not reflexive: {text}");
        }
    }
});
