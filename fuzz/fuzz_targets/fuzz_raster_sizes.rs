#![no_main]

use libfuzzer_sys::fuzz_target;

use icopack::RasterSizes;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Some(sizes) = RasterSizes::parse(input) {
            let values = sizes.as_slice();
            assert!(!values.is_empty());
            assert!(values.windows(2).all(|w| w[0] < w[1]));
            assert!(values.iter().all(|s| (1..=256).contains(s)));
        }
    }
});
