#![no_main]

use libfuzzer_sys::fuzz_target;

use icopack::HexColor;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Some(color) = HexColor::parse(input) {
            assert_eq!(color.as_str().len(), 7);
            assert!(color.as_str().starts_with('#'));
            // Normalized output parses to itself
            assert_eq!(HexColor::parse(color.as_str()), Some(color.clone()));
        }
    }
});
