#![no_main]

use libfuzzer_sys::fuzz_target;

use icopack::domain::entities::IconMetadata;

fuzz_target!(|data: &[u8]| {
    // Metadata parsing should never panic
    if let Ok(metadata) = serde_json::from_slice::<IconMetadata>(data) {
        for alias in &metadata.aliases {
            let _ = alias.name();
        }
    }
});
